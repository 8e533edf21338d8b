//! Counter State
//!
//! The value the counter currently shows plus the two history stacks.

use serde::{Deserialize, Serialize};

/// Counter state with linear undo/redo history.
///
/// Both stacks are ordered most-recent-first: index 0 is the value the next
/// undo (or redo) will restore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterState {
    /// The active counter value
    pub current_value: i64,
    /// Undo stack
    #[serde(default)]
    pub previous_values: Vec<i64>,
    /// Redo stack
    #[serde(default)]
    pub future_values: Vec<i64>,
}

impl CounterState {
    pub fn new(current_value: i64, previous_values: Vec<i64>, future_values: Vec<i64>) -> Self {
        Self {
            current_value,
            previous_values,
            future_values,
        }
    }

    /// Whether there is anything to undo
    pub fn can_undo(&self) -> bool {
        !self.previous_values.is_empty()
    }

    /// Whether there is anything to redo
    pub fn can_redo(&self) -> bool {
        !self.future_values.is_empty()
    }
}
