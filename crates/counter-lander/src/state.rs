//! Application State

use counter_config::AppConfig;
use counter_history::{CounterState, HistoryAction};
use counter_theme::Theme;

use crate::keybindings::Keymap;
use crate::keymap::default_keymap;

/// Application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub running: bool,
    /// Counter value and its undo/redo history
    pub counter: CounterState,
    /// Application configuration
    pub config: AppConfig,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            // Bootstrap: the empty action against no prior state yields the initial state
            counter: counter_history::transition(None, &HistoryAction::default()),
            config: AppConfig::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
        }
    }
}
