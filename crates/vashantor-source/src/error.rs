use vashantor_core::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<SourceError> for LoadError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Status(status) => LoadError::FetchStatus(status),
            other => LoadError::Fetch(other.to_string()),
        }
    }
}
