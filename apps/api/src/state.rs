use std::sync::Arc;

use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless scorer; shared across requests.
    pub scorer: Arc<MatchScorer>,
}
