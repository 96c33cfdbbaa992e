//! Application state management

use domain_products::InMemoryProductRepository;

use crate::config::Config;

/// Shared application state
///
/// The product store lives for the whole process and is shared by every
/// request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: InMemoryProductRepository,
}

impl AppState {
    /// State with the sample catalogue loaded
    pub fn new(config: Config) -> Self {
        Self {
            config,
            products: InMemoryProductRepository::with_sample_data(),
        }
    }
}
