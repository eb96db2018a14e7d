use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

/// Origins always allowed to call `/api/*`.
pub const ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:3000",
    "https://torre-search-app.netlify.app",
];

/// Builds the `/api/*` CORS policy once at startup. `FRONTEND_URL` extends the
/// allow-list when set; an empty value adds nothing.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let extra = Some(config.frontend_url.as_str()).filter(|origin| !origin.is_empty());

    let origins = ALLOWED_ORIGINS
        .into_iter()
        .chain(extra)
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any))
}
