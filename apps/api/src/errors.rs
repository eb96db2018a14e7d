use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure of a single outbound call to the talent API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Application-level error type.
///
/// The browser client reads `success` rather than the status line, so every
/// variant renders as HTTP 200 with `{"success": false, "message": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No matching names found")]
    NoMatches,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Search failed with status code: {0}")]
    SearchStatus(u16),

    #[error("Error processing search results")]
    SearchParse,

    #[error("An error occurred while searching. Please try again.")]
    SearchFailed,

    #[error("Not enough data available")]
    ProfileUnavailable,

    /// Raw upstream error text, surfaced as-is by the profile lookup.
    #[error("{0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (StatusCode::OK, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_status_message_embeds_code() {
        assert_eq!(
            AppError::SearchStatus(403).to_string(),
            "Search failed with status code: 403"
        );
    }

    #[test]
    fn test_rate_limit_message_is_exact() {
        assert_eq!(
            AppError::RateLimited.to_string(),
            "Rate limit exceeded. Please try again later."
        );
    }

    #[test]
    fn test_failure_renders_as_ok_status() {
        let response = AppError::ProfileUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
