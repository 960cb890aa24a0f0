//! Axum route handlers for the sequence API.
//!
//! The four endpoint variants share one code path: an `EndpointConfig` names
//! the required fields, the prompt template, and the response shape, and
//! `run_endpoint` does the rest. Adding a variant means adding a const and a
//! route, not another handler body.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::sequence::generator::{generate_email, generate_sequence};
use crate::sequence::models::{DelayFormat, EmailResponse, SequenceResponse};
use crate::sequence::prompts;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Endpoint configuration
// ────────────────────────────────────────────────────────────────────────────

/// What the endpoint promises back to the caller.
#[derive(Debug, Clone, Copy)]
pub enum ResponseShape {
    /// `{"sequence": [...]}` with the given delay representation.
    Sequence(DelayFormat),
    /// `{"email": "..."}`, free text with no schema obligation.
    SingleEmail,
}

/// Static description of one endpoint variant.
pub struct EndpointConfig {
    pub name: &'static str,
    pub required_fields: &'static [&'static str],
    pub template: &'static str,
    pub shape: ResponseShape,
}

pub const BASIC_SEQUENCE: EndpointConfig = EndpointConfig {
    name: "sequence",
    required_fields: &["company", "website", "icp"],
    template: prompts::SEQUENCE_PROMPT_TEMPLATE,
    shape: ResponseShape::Sequence(DelayFormat::Text),
};

pub const TAILORED_SEQUENCE: EndpointConfig = EndpointConfig {
    name: "sequence/tailored",
    required_fields: &["company", "website", "icp", "offer", "tone"],
    template: prompts::TAILORED_SEQUENCE_PROMPT_TEMPLATE,
    shape: ResponseShape::Sequence(DelayFormat::Text),
};

pub const SCHEDULED_SEQUENCE: EndpointConfig = EndpointConfig {
    name: "sequence/scheduled",
    required_fields: &["companyName", "companyWebsite", "idealCustomerProfile"],
    template: prompts::SCHEDULED_SEQUENCE_PROMPT_TEMPLATE,
    shape: ResponseShape::Sequence(DelayFormat::Days),
};

pub const SINGLE_EMAIL: EndpointConfig = EndpointConfig {
    name: "email",
    required_fields: &["industry", "title", "offer", "tone"],
    template: prompts::SINGLE_EMAIL_PROMPT_TEMPLATE,
    shape: ResponseShape::SingleEmail,
};

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sequence
pub async fn handle_sequence(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    run_endpoint(&state, &BASIC_SEQUENCE, &body).await
}

/// POST /api/v1/sequence/tailored
pub async fn handle_tailored_sequence(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    run_endpoint(&state, &TAILORED_SEQUENCE, &body).await
}

/// POST /api/v1/sequence/scheduled
pub async fn handle_scheduled_sequence(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    run_endpoint(&state, &SCHEDULED_SEQUENCE, &body).await
}

/// POST /api/v1/email
pub async fn handle_single_email(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    run_endpoint(&state, &SINGLE_EMAIL, &body).await
}

/// Shared endpoint pipeline: validate fields → render prompt → generate →
/// shape the response.
async fn run_endpoint(
    state: &AppState,
    endpoint: &EndpointConfig,
    body: &Value,
) -> Result<Response, AppError> {
    let fields = collect_fields(body, endpoint.required_fields)?;

    let llm = state.llm.as_ref().ok_or(AppError::MissingConfiguration)?;

    let prompt = prompts::render_prompt(endpoint.template, &fields);
    tracing::debug!("Dispatching {} request upstream", endpoint.name);

    match endpoint.shape {
        ResponseShape::Sequence(format) => {
            let sequence = generate_sequence(llm.as_ref(), &prompt, format).await?;
            Ok(Json(SequenceResponse { sequence }).into_response())
        }
        ResponseShape::SingleEmail => {
            let email = generate_email(llm.as_ref(), &prompt).await?;
            Ok(Json(EmailResponse { email }).into_response())
        }
    }
}

/// Pulls every required field out of the request body as non-blank text.
/// Absent, non-string, and blank values are all reported together in one
/// `MissingFields` error naming the offending set.
fn collect_fields(
    body: &Value,
    required: &'static [&'static str],
) -> Result<Vec<(&'static str, String)>, AppError> {
    let mut fields = Vec::with_capacity(required.len());
    let mut missing = Vec::new();

    for &name in required {
        match body.get(name).and_then(Value::as_str).map(str::trim) {
            Some(value) if !value.is_empty() => fields.push((name, value.to_string())),
            _ => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(AppError::MissingFields(missing));
    }

    Ok(fields)
}
