use std::sync::Arc;

use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend, `None` when the upstream credential is absent.
    /// Handlers never read ambient process state; a request needing the
    /// backend fails with `MISSING_CONFIGURATION` when this is unset.
    pub llm: Option<Arc<dyn CompletionBackend>>,
}
