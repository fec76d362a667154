use std::sync::Arc;

use crate::config::Config;
use crate::observability::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            metrics: Arc::new(Metrics::new()),
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.config.server.api.max_upload_bytes.as_usize()
    }
}
