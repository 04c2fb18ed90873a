use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{GenerationService, XaiClient},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = Arc::new(XaiClient::new(&config)?);
        let generation_service = Arc::new(GenerationService::new(client));

        Ok(Self {
            generation_service,
            config: Arc::new(config),
        })
    }
}
