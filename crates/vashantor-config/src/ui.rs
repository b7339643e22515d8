use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dialects() -> Vec<String> {
    ["Chittagong", "Noakhali", "Sylhet", "Barishal", "Mymensingh"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_split() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Dialects offered by the `dialects` command
    #[serde(default = "default_dialects")]
    pub dialects: Vec<String>,
    #[serde(default = "default_split")]
    pub default_split: usize,
    /// Write every rendered page to this HTML file
    #[serde(default)]
    pub html_out: Option<PathBuf>,
}

impl UiConfig {
    pub fn new() -> Self {
        Self {
            html_out: env::var_os("VASHANTOR_HTML_OUT").map(PathBuf::from),
            ..Self::default()
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dialects: default_dialects(),
            default_split: default_split(),
            html_out: None,
        }
    }
}
