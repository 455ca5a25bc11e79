use thiserror::Error;

use crate::requests::ErrorResponse;

/// Failure of a request issued by the uploader.
///
/// The `Display` text is what ends up in the error banner, so `Rejected`
/// shows the backend's own message and nothing else.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds a `Rejected` error from a non-2xx response body.
    pub fn rejected(status: u16, body: &str) -> Self {
        ApiError::Rejected {
            status,
            message: rejection_message(status, body),
        }
    }
}

/// Extracts the `message` field of a failed response.
/// Falls back to a status line when the body is not the expected JSON or the
/// message is blank.
pub fn rejection_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { message }) if !message.trim().is_empty() => message,
        _ => format!("Request failed with status {}", status),
    }
}
