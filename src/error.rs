use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single backend call. Mirrors the status families the API
/// actually answers with; anything else lands in `Server`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unauthorized")]
    Unauthorized(Option<String>),
    #[error("forbidden")]
    Forbidden(Option<String>),
    #[error("resource not found")]
    NotFound(Option<String>),
    #[error("conflict")]
    Conflict(Option<String>),
    #[error("invalid input")]
    Validation(Option<String>),
    #[error("server error ({status})")]
    Server { status: u16, message: Option<String> },
}

pub const GENERIC_RETRY_MESSAGE: &str = "An error occurred. Please try again.";

impl ApiError {
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::CONFLICT => ApiError::Conflict(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(message)
            }
            _ => ApiError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Message suitable for inline display: whatever the backend said,
    /// falling back to a generic retry invitation.
    pub fn surface_message(&self) -> String {
        let backend_message = match self {
            ApiError::Unauthorized(m)
            | ApiError::Forbidden(m)
            | ApiError::NotFound(m)
            | ApiError::Conflict(m)
            | ApiError::Validation(m) => m.as_deref(),
            ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Transport(_) => None,
        };
        backend_message.unwrap_or(GENERIC_RETRY_MESSAGE).to_string()
    }
}

/// Best-effort extraction of the human-readable message from an error body.
/// The API answers with `{"message": "..."}`; validation failures may carry
/// an array of messages, and some routes use `{"error": "..."}` instead.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value.get("message") {
        Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
        Some(Value::Array(items)) => {
            if let Some(Value::String(first)) = items.first() {
                return Some(first.clone());
            }
        }
        _ => {}
    }

    match value.get("error") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
