//! Application state management.

use domain_items::InMemoryItemRepository;

use crate::config::Config;

/// Process-scoped state built once in `main` and handed to the routers.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: Config,
    /// The item store; clones share the same map
    pub items: InMemoryItemRepository,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            items: InMemoryItemRepository::new(),
        }
    }
}
