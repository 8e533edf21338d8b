//! Actions module
//!
//! Actions are tagged by domain:
//! - `Global`: application-wide actions (raw key presses, quit, panel toggles)
//! - `Counter`: history actions handed straight to the counter reducer

use counter_history::HistoryAction;
use ratatui::crossterm::event::KeyEvent;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Counter actions (increment, decrement, undo, redo)
    Counter(HistoryAction),
}

/// Global actions that affect the entire application
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
    /// Show or hide the raw state panel
    ToggleStatePanel,
}
