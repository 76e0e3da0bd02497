use std::sync::Arc;

use crate::generation::generator::ContentGenerator;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable generator. Default: LlmContentGenerator.
    pub generator: Arc<dyn ContentGenerator>,
}
