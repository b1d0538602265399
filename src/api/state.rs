use std::sync::Arc;

use crate::services::providers::CompletionProvider;

/// Shared application state
///
/// Holds the injected completion provider. No per-request state is shared
/// across requests; concurrent searches are fully independent.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// Creates application state around the given provider
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}
