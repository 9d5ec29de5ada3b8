//! Service wiring

use crate::state::AppState;
use brander_core::Config;
use brander_services::{email_sender_from_config, BrandService, EmailSender, Storage};
use std::sync::Arc;

/// Build the application state with the email sender chosen by configuration
pub fn initialize_services(config: &Config, storage: Arc<dyn Storage>) -> Arc<AppState> {
    let email = email_sender_from_config(config);
    build_state(config, storage, email)
}

/// Build the application state from explicit collaborators
pub fn build_state(
    config: &Config,
    storage: Arc<dyn Storage>,
    email: Arc<dyn EmailSender>,
) -> Arc<AppState> {
    let brand_service = BrandService::from_config(storage.clone(), config, email);

    Arc::new(AppState {
        config: config.clone(),
        storage,
        brand_service,
    })
}
