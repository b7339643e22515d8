use std::env;

use serde::{Deserialize, Serialize};

fn default_base() -> String {
    "Vashantor_Simplified/Test".to_string()
}

fn default_file_suffix() -> String {
    " Test Translation.csv".to_string()
}

/// Where dialect files are fetched from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Local directory, or an `http(s)://` base URL
    #[serde(default = "default_base")]
    pub base: String,
    /// Appended to the dialect name to form the file name
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,
    /// HTTP only, no timeout when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl SourceConfig {
    pub fn new() -> Self {
        let base = env::var("VASHANTOR_BASE").unwrap_or_else(|_| default_base());

        let request_timeout_secs = env::var("VASHANTOR_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            base,
            file_suffix: default_file_suffix(),
            request_timeout_secs,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.base.starts_with("http://") || self.base.starts_with("https://")
    }

    /// `<Dialect> Test Translation.csv`
    pub fn file_name(&self, dialect: &str) -> String {
        format!("{dialect}{}", self.file_suffix)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            file_suffix: default_file_suffix(),
            request_timeout_secs: None,
        }
    }
}
