//! Sequence generation — one upstream completion call plus response
//! normalization.
//!
//! Flow: rendered prompt → CompletionBackend::complete → payload checks →
//!       strict parse (sequence variants) or verbatim trim (single email).
//!
//! Exactly one outbound call per request; a failed call surfaces immediately
//! with its distinct error kind and is never retried.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{CompletionBackend, LlmError};
use crate::sequence::models::{DelayFormat, SequenceStep};
use crate::sequence::parser::parse_sequence;

/// Generates and validates an ordered email sequence.
///
/// A successfully parsed sequence is returned exactly as the upstream text
/// ordered it.
pub async fn generate_sequence(
    llm: &dyn CompletionBackend,
    prompt: &str,
    format: DelayFormat,
) -> Result<Vec<SequenceStep>, AppError> {
    let payload = fetch_payload(llm, prompt).await?;
    let sequence = parse_sequence(&payload, format)?;
    info!("Generated sequence with {} steps", sequence.len());
    Ok(sequence)
}

/// Generates a single free-text email. No structural parsing; the trimmed
/// payload is returned verbatim.
pub async fn generate_email(
    llm: &dyn CompletionBackend,
    prompt: &str,
) -> Result<String, AppError> {
    let payload = fetch_payload(llm, prompt).await?;
    info!("Generated single email ({} chars)", payload.len());
    Ok(payload)
}

/// Issues the one outbound completion call and extracts the text payload.
/// A missing or blank payload is an upstream failure, distinct from a
/// malformed one.
async fn fetch_payload(llm: &dyn CompletionBackend, prompt: &str) -> Result<String, AppError> {
    let payload = llm.complete(prompt).await.map_err(|e| match e {
        LlmError::Transport(msg) => AppError::UpstreamUnavailable(msg),
        LlmError::Api { status, message } => {
            AppError::UpstreamUnavailable(format!("status {status}: {message}"))
        }
        LlmError::EmptyCompletion => AppError::EmptyUpstreamPayload,
    })?;

    let payload = payload.trim();
    if payload.is_empty() {
        return Err(AppError::EmptyUpstreamPayload);
    }

    Ok(payload.to_string())
}
