use axum::{extract::State, Json};
use tracing::{error, warn};

use crate::errors::{AppError, UpstreamError};
use crate::extract::LossyPath;
use crate::models::response::{Pagination, SearchData, Success};
use crate::search::normalize_results;
use crate::state::AppState;

/// GET /api/search/:name
pub async fn handle_search(
    State(state): State<AppState>,
    LossyPath(name): LossyPath,
) -> Result<Json<Success<SearchData>>, AppError> {
    let body = state.directory.search(&name).await.map_err(|e| match e {
        UpstreamError::Status(429) => AppError::RateLimited,
        UpstreamError::Status(code) => AppError::SearchStatus(code),
        UpstreamError::Parse(e) => {
            warn!("Search response was not valid JSON: {e}");
            AppError::SearchParse
        }
        UpstreamError::Http(e) => {
            error!("Search request failed: {e}");
            AppError::SearchFailed
        }
    })?;

    let results = normalize_results(&body);
    if results.is_empty() {
        return Err(AppError::NoMatches);
    }

    Ok(Json(Success::new(SearchData {
        pagination: Pagination::for_total(results.len()),
        results,
    })))
}
