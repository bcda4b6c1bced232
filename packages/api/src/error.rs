//! Request failure taxonomy for calls to the Taskify API.

use serde::Deserialize;
use thiserror::Error;

/// Why a call to the remote API did not produce the expected payload.
///
/// Values are `Clone + PartialEq` so they can sit inside UI state and be
/// compared in tests; transport errors are kept as their display text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The API rejected the bearer credential (HTTP 401).
    #[error("session rejected by the server")]
    Unauthorized { message: Option<String> },
    /// Any other non-2xx response.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl ApiError {
    /// Text suitable for an inline error line.
    ///
    /// Prefers the server's own `message` field when one came back.
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized { message: Some(m) } | ApiError::Status { message: Some(m), .. } => {
                m.clone()
            }
            ApiError::Unauthorized { message: None } => {
                "Your session has expired, please log in again".to_string()
            }
            ApiError::Status { message: None, .. } | ApiError::Decode(_) => {
                "Something went wrong Please try again".to_string()
            }
            ApiError::Network(_) => "Could not reach the server".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// Extract the `message` field from a JSON body, if there is one.
pub(crate) fn message_from(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

/// Map a status code and raw body to the error it represents, or `None`
/// for success codes.
pub(crate) fn error_for(status: u16, body: &str) -> Option<ApiError> {
    match status {
        200..=299 => None,
        401 => Some(ApiError::Unauthorized {
            message: message_from(body),
        }),
        _ => Some(ApiError::Status {
            status,
            message: message_from(body),
        }),
    }
}
