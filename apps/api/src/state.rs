use std::sync::Arc;

use crate::talent_client::TalentDirectory;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream talent API. Production uses `TorreClient`; tests inject fakes.
    pub directory: Arc<dyn TalentDirectory>,
}
