//! Error types and error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = DirectiveError> = std::result::Result<T, E>;

/// Errors raised while turning directives into HTTP headers
#[derive(Debug, Error)]
pub enum DirectiveError {
    /// A trigger detail or location context could not be encoded as JSON
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A directive value cannot be carried in an HTTP header
    #[error("invalid value for header {header}: {source}")]
    InvalidHeaderValue {
        /// Name of the offending header
        header: String,
        /// Underlying `http` error
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    /// Status code outside the 100-999 range
    #[error("invalid status code: {0}")]
    InvalidStatus(u16),

    /// Template rendering failed
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for DirectiveError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to build htmx response");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Errors raised while parsing an `hx-swap` expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapParseError {
    /// Leading word is neither a swap style nor a modifier
    #[error("unknown swap style `{0}`")]
    UnknownStyle(String),

    /// Modifier key is not part of the `hx-swap` grammar
    #[error("unknown swap modifier `{0}`")]
    UnknownModifier(String),

    /// Modifier key is known but its value is not
    #[error("invalid value in swap modifier `{0}`")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_is_500() {
        let response = DirectiveError::InvalidStatus(42).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_swap_parse_error_messages() {
        assert_eq!(
            SwapParseError::UnknownModifier("delay".into()).to_string(),
            "unknown swap modifier `delay`"
        );
        assert_eq!(
            SwapParseError::UnknownStyle("sideways".into()).to_string(),
            "unknown swap style `sideways`"
        );
    }
}
