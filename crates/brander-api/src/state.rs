//! Application state shared by all handlers.

use brander_core::Config;
use brander_services::{BrandService, Storage};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub brand_service: BrandService,
}
