use std::sync::Arc;

use vashantor_config::Config;
use vashantor_source::DatasetSource;

/// Shared by every task, fixed once the app has started
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn DatasetSource>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn DatasetSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }
}
