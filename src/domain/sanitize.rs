//! Fenced-code extraction for backend responses.

const FENCE: &str = "```";

/// Extract raw code from a generated text block.
///
/// Returns the trimmed content of the first complete fenced code block; any
/// language tag on the opening fence line is discarded. Text without a
/// complete fence pair, including a dangling opening fence, passes through
/// trimmed. Never fails.
pub fn extract_code(raw: &str) -> String {
    match first_fenced_block(raw) {
        Some(code) => code.trim().to_string(),
        None => raw.trim().to_string(),
    }
}

fn first_fenced_block(raw: &str) -> Option<&str> {
    let open = raw.find(FENCE)?;
    let after_open = &raw[open + FENCE.len()..];

    // The opening fence line may carry a language hint; the block body
    // starts on the next line.
    let body_start = after_open.find('\n').map(|i| i + 1)?;
    let body = &after_open[body_start..];

    let close = body.find(FENCE)?;
    Some(&body[..close])
}
