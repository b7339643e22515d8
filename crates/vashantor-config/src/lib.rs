use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::source::SourceConfig;
use self::ui::UiConfig;

pub mod log;
pub mod source;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults overridden by `VASHANTOR_*` environment variables
    pub fn new() -> Self {
        Config {
            source: SourceConfig::new(),
            ui: UiConfig::new(),
            log: LogConfig::new(),
        }
    }

    /// Load a JSON config file, missing fields fall back to defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
