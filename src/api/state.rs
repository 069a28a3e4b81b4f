//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::DemoKeyService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub demo_keys: Arc<DemoKeyService>,
}

impl AppState {
    pub fn new(demo_keys: Arc<DemoKeyService>) -> Self {
        Self { demo_keys }
    }
}
