//! Application configuration
//!
//! Values come from an optional JSON file; command-line flags override them.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_PATH: &str = "models/pegasos_model.json";

/// Example reviews offered in the gallery
pub const DEFAULT_EXAMPLES: [&str; 5] = [
    "This cereal is amazing! My kids love it every morning.",
    "Terrible quality. Cookies arrived stale and broken.",
    "Perfect chocolate chip cookies! Will definitely buy again!",
    "The product was okay, nothing special but gets the job done.",
    "Worst granola bars I've ever tasted. Dry and flavorless.",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Model bundle exported by the training run
    pub model_path: PathBuf,
    /// Refuse to start with a degraded model
    pub strict: bool,
    pub examples: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            strict: false,
            examples: DEFAULT_EXAMPLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        tracing::debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, model_path: Option<PathBuf>, strict: bool) -> Self {
        if let Some(path) = model_path {
            self.model_path = path;
        }
        self.strict |= strict;
        if self.examples.is_empty() {
            self.examples = AppConfig::default().examples;
        }
        self
    }
}
