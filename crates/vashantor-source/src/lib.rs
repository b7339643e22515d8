use vashantor_config::source::SourceConfig;

mod error;
mod fs;
mod http;

pub use error::SourceError;
pub use fs::FsSource;
pub use http::HttpSource;

/// Provider of raw dialect files
#[async_trait::async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch the full text of the file for `dialect`
    async fn fetch(&self, dialect: &str) -> Result<String, SourceError>;

    /// Where the file for `dialect` lives, for logging
    fn location(&self, dialect: &str) -> String;
}

/// Pick the HTTP or filesystem source based on `config.base`
pub fn from_config(config: &SourceConfig) -> Result<Box<dyn DatasetSource>, SourceError> {
    if config.is_remote() {
        tracing::info!("Fetching dialect files from {}", config.base);
        Ok(Box::new(HttpSource::new(config)?))
    } else {
        tracing::info!("Reading dialect files from {}", config.base);
        Ok(Box::new(FsSource::new(config)))
    }
}
