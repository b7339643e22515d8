use std::path::PathBuf;

use vashantor_config::source::SourceConfig;

use crate::{DatasetSource, SourceError};

/// Reads dialect files from a local directory
pub struct FsSource {
    base: PathBuf,
    file_suffix: String,
}

impl FsSource {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            base: PathBuf::from(&config.base),
            file_suffix: config.file_suffix.clone(),
        }
    }

    pub fn path(&self, dialect: &str) -> PathBuf {
        self.base.join(format!("{dialect}{}", self.file_suffix))
    }
}

#[async_trait::async_trait]
impl DatasetSource for FsSource {
    async fn fetch(&self, dialect: &str) -> Result<String, SourceError> {
        let path = self.path(dialect);
        let bytes = tokio::fs::read(&path).await.map_err(|source| SourceError::Io {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn location(&self, dialect: &str) -> String {
        self.path(dialect).display().to_string()
    }
}
