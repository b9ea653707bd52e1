//! Single-endpoint HTTP surface for the generation pipeline.
//!
//! `dispatch` is the whole request contract (method check, body parsing,
//! envelope shaping) without any socket, so the contract is unit-testable;
//! `serve` binds it to a blocking `tiny_http` server.

use std::io::Read;

use serde_json::json;

use crate::app::{AppContext, flow};
use crate::domain::AppError;
use crate::ports::{Pacer, TextGenerator};

/// Status code plus serialized JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Handle one request against the generation endpoint.
///
/// Only POST reaches the pipeline; every other method is rejected up front
/// with 405 and no backend call is made.
pub fn dispatch<G: TextGenerator, P: Pacer>(
    ctx: &AppContext<G, P>,
    method: &str,
    body: &str,
) -> ApiResponse {
    if !method.eq_ignore_ascii_case("POST") {
        return failure(405, "Method not allowed", method);
    }

    let trimmed = body.trim();
    let payload = if trimmed.is_empty() { "{}" } else { trimmed };
    let request: flow::PipelineRequest = match serde_json::from_str(payload) {
        Ok(request) => request,
        Err(err) => return failure(400, "Invalid request body", &err.to_string()),
    };

    match flow::execute(ctx, request) {
        Ok(output) => success(&output),
        Err(AppError::InvalidRequest(details)) => failure(400, "Invalid request body", &details),
        Err(err) => failure(500, "Failed to generate portfolio code", &err.to_string()),
    }
}

fn success(output: &flow::FlowOutput) -> ApiResponse {
    let body = json!({
        "success": true,
        "portfolioCode": output.portfolio_code,
        "completeCode": output.complete_code,
        "tokenTrack": output.token_track,
    });
    ApiResponse { status: 200, body: body.to_string() }
}

fn failure(status: u16, error: &str, details: &str) -> ApiResponse {
    let body = json!({
        "success": false,
        "error": error,
        "details": details,
    });
    ApiResponse { status, body: body.to_string() }
}

/// Serve the endpoint on the given address until the process exits.
pub fn serve<G: TextGenerator, P: Pacer>(
    addr: &str,
    ctx: &AppContext<G, P>,
) -> Result<(), AppError> {
    let server = tiny_http::Server::http(addr)
        .map_err(|e| AppError::InvalidConfig(format!("Failed to bind {}: {}", addr, e)))?;
    println!("Listening on http://{}", addr);

    for mut request in server.incoming_requests() {
        let method = request.method().to_string();

        let mut body = String::new();
        let api_response = match request.as_reader().read_to_string(&mut body) {
            Ok(_) => dispatch(ctx, &method, &body),
            Err(err) => failure(400, "Invalid request body", &err.to_string()),
        };

        let response = tiny_http::Response::from_string(api_response.body)
            .with_status_code(api_response.status)
            .with_header(json_content_type());

        if let Err(err) = request.respond(response) {
            eprintln!("Failed to send response: {}", err);
        }
    }

    Ok(())
}

fn json_content_type() -> tiny_http::Header {
    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .expect("static header must parse")
}
