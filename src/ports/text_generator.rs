//! Generative text backend port definition.

use serde::Serialize;

use crate::domain::AppError;

/// One prompt-in/text-out request to the generative backend.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// User prompt for this call.
    pub prompt: String,
    /// Optional system instruction.
    pub system: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Maximum output length in tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Token counts for a single backend call, in call order across a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageRecord {
    pub input: u64,
    pub output: u64,
}

/// Successful backend reply: the first candidate's text plus usage counts.
#[derive(Debug, Clone)]
pub struct GeneratedText {
    pub text: String,
    pub usage: Option<UsageRecord>,
}

/// Port for single-shot text generation.
///
/// Implementations perform exactly one upstream call per invocation; pacing
/// and failure policy belong to the caller.
pub trait TextGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedText, AppError>;
}
