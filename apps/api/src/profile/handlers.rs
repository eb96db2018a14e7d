use axum::{extract::State, Json};
use tracing::warn;

use crate::errors::{AppError, UpstreamError};
use crate::extract::LossyPath;
use crate::models::person::PersonProfile;
use crate::models::response::Success;
use crate::profile::normalize_profile;
use crate::state::AppState;

/// GET /api/user/:username
///
/// Unlike search, transport and parse failures surface their raw error text.
pub async fn handle_get_user(
    State(state): State<AppState>,
    LossyPath(username): LossyPath,
) -> Result<Json<Success<PersonProfile>>, AppError> {
    let body = state.directory.bio(&username).await.map_err(|e| match e {
        UpstreamError::Status(_) => AppError::ProfileUnavailable,
        other => {
            warn!("Bio lookup for {:?} failed: {other}", username);
            AppError::Upstream(other.to_string())
        }
    })?;

    Ok(Json(Success::new(normalize_profile(&body))))
}
