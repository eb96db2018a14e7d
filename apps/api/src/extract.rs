use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use percent_encoding::percent_decode_str;

/// Single trailing path parameter that never rejects.
///
/// Percent-decoded bytes that are not valid UTF-8 become U+FFFD instead of
/// failing with axum's plain-text 400, so handlers always answer with JSON.
#[derive(Debug)]
pub struct LossyPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for LossyPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(Path(value)) = Path::<String>::from_request_parts(parts, state).await {
            return Ok(Self(value));
        }

        let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
        Ok(Self(percent_decode_str(raw).decode_utf8_lossy().into_owned()))
    }
}
