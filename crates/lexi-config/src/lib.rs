use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::history::HistoryConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod history;
pub mod ui;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub ui: UiConfig,

    /// Capacity of the app -> ui channel
    #[serde(default = "default_ui_channel_capacity")]
    pub ui_channel_capacity: usize,
    /// Capacity of the ui -> app channel
    #[serde(default = "default_app_channel_capacity")]
    pub app_channel_capacity: usize,
}

fn default_ui_channel_capacity() -> usize {
    128
}

fn default_app_channel_capacity() -> usize {
    64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            history: HistoryConfig::default(),
            ui: UiConfig::default(),
            ui_channel_capacity: default_ui_channel_capacity(),
            app_channel_capacity: default_app_channel_capacity(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    pub fn new() -> Self {
        let ui_channel_capacity = env::var("LEXI_UI_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_ui_channel_capacity);

        let app_channel_capacity = env::var("LEXI_APP_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_app_channel_capacity);

        Config {
            dictionary: DictionaryConfig::from_env(),
            history: HistoryConfig::from_env(),
            ui: UiConfig::default(),

            ui_channel_capacity,
            app_channel_capacity,
        }
    }

    /// Load a JSON config file, missing fields fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// A recent list must hold at least one word
    pub fn normalized(mut self) -> Self {
        if self.history.recent_capacity == 0 {
            self.history.recent_capacity = HistoryConfig::default().recent_capacity;
        }
        self
    }
}
