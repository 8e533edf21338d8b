//! Application configuration
//!
//! Configuration loaded from `.counter-lander.toml`.

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Amount added/subtracted by the small step keys (+1 / -1)
    #[serde(default = "default_small_step")]
    pub small_step: i64,

    /// Amount added/subtracted by the large step keys (+5 / -5)
    #[serde(default = "default_large_step")]
    pub large_step: i64,

    /// Show the raw state panel next to the counter
    #[serde(default = "default_show_state_panel")]
    pub show_state_panel: bool,
}

fn default_small_step() -> i64 {
    1
}

fn default_large_step() -> i64 {
    5
}

fn default_show_state_panel() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            small_step: default_small_step(),
            large_step: default_large_step(),
            show_state_panel: default_show_state_panel(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse config content, falling back to defaults on error
    pub fn parse(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}
