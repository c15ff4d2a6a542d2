//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// Raw error text sent by the server, if the failure carried any.
    ///
    /// JSON bodies shaped like `{"error": "..."}` are unwrapped to the inner message.
    pub fn server_message(&self) -> Option<String> {
        match self {
            SdkError::Http(e) => e.server_message(),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest [`Transport`](crate::http::Transport).
    #[error("Request failed: {0}")]
    Io(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    pub fn server_message(&self) -> Option<String> {
        let body = match self {
            HttpError::ServerError { body, .. } => body,
            HttpError::NotFound(body) | HttpError::BadRequest(body) => body,
            _ => return None,
        };
        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(body) {
            if let Some(msg) = map.get("error").and_then(|v| v.as_str()) {
                return Some(msg.to_string());
            }
        }
        Some(body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_plain_text() {
        let err = HttpError::BadRequest("Invalid start time\n".to_string());
        assert_eq!(err.server_message().as_deref(), Some("Invalid start time"));
    }

    #[test]
    fn test_server_message_json_error_field() {
        let err = HttpError::ServerError {
            status: 500,
            body: r#"{"error":"AI query generation failed"}"#.to_string(),
        };
        assert_eq!(
            err.server_message().as_deref(),
            Some("AI query generation failed")
        );
    }

    #[test]
    fn test_server_message_absent() {
        assert!(HttpError::Timeout.server_message().is_none());
        assert!(HttpError::NotFound("  ".to_string()).server_message().is_none());
        let sdk = SdkError::Validation("bad".to_string());
        assert!(sdk.server_message().is_none());
    }

    #[test]
    fn test_display_is_non_empty() {
        let errors: Vec<SdkError> = vec![
            HttpError::Unauthorized.into(),
            HttpError::NotFound(String::new()).into(),
            HttpError::ServerError {
                status: 503,
                body: String::new(),
            }
            .into(),
            HttpError::Timeout.into(),
        ];
        for e in errors {
            assert!(!e.to_string().is_empty());
        }
    }
}
