//! Command identifiers
//!
//! Every command a user can trigger from the keyboard, as a type-safe enum
//! that keybindings refer to.

use counter_history::{decrement, increment, redo, undo};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::actions::{Action, GlobalAction};
use crate::state::AppState;

/// Unique identifier for each command in the application.
///
/// The enum is serialized as snake_case (e.g., `CounterUndo` -> `"counter_undo"`).
/// Declaration order is the order commands are listed in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Counter ===
    /// Add the small step
    CounterIncrementSmall,
    /// Add the large step
    CounterIncrementLarge,
    /// Subtract the small step
    CounterDecrementSmall,
    /// Subtract the large step
    CounterDecrementLarge,
    /// Restore the previous value
    CounterUndo,
    /// Restore the most recently undone value
    CounterRedo,

    // === Panels ===
    /// Show or hide the raw state panel
    ToggleStatePanel,

    // === General ===
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Human readable title for hints
    pub fn title(&self) -> &'static str {
        match self {
            Self::CounterIncrementSmall => "Increment",
            Self::CounterIncrementLarge => "Increment more",
            Self::CounterDecrementSmall => "Decrement",
            Self::CounterDecrementLarge => "Decrement more",
            Self::CounterUndo => "Undo",
            Self::CounterRedo => "Redo",
            Self::ToggleStatePanel => "State",
            Self::GlobalQuit => "Quit",
        }
    }

    /// Whether the command can run against the current state.
    ///
    /// Undo and redo are disabled while their history stack is empty.
    pub fn is_enabled(&self, state: &AppState) -> bool {
        match self {
            Self::CounterUndo => state.counter.can_undo(),
            Self::CounterRedo => state.counter.can_redo(),
            _ => true,
        }
    }

    /// Convert to the action this command dispatches
    pub fn to_action(self, state: &AppState) -> Action {
        let config = &state.config;

        match self {
            Self::CounterIncrementSmall => Action::Counter(increment(config.small_step)),
            Self::CounterIncrementLarge => Action::Counter(increment(config.large_step)),
            Self::CounterDecrementSmall => Action::Counter(decrement(config.small_step)),
            Self::CounterDecrementLarge => Action::Counter(decrement(config.large_step)),
            Self::CounterUndo => Action::Counter(undo()),
            Self::CounterRedo => Action::Counter(redo()),
            Self::ToggleStatePanel => Action::Global(GlobalAction::ToggleStatePanel),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }
}
