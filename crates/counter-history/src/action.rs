//! History Actions
//!
//! Tagged actions the counter reducer understands. The serialized form
//! carries a `type` tag (`INCREMENT`, `DECREMENT`, `UNDO`, `REDO`) so actions
//! can be logged or exchanged as plain JSON objects.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Actions that can be applied to a [`CounterState`](crate::CounterState).
///
/// A missing `type` or any tag the reducer does not know deserializes to
/// [`HistoryAction::Unrecognized`], which leaves the state untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    /// Add `amount` to the current value
    Increment { amount: i64 },
    /// Subtract `amount` from the current value
    Decrement { amount: i64 },
    /// Step back to the most recent previous value
    Undo,
    /// Step forward to the most recently undone value
    Redo,
    /// Anything else; a no-op
    #[default]
    Unrecognized,
}

/// Loose wire shape: every field is optional so `{}` still parses
#[derive(Deserialize)]
struct WireAction {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    amount: Option<i64>,
}

impl<'de> Deserialize<'de> for HistoryAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireAction::deserialize(deserializer)?;
        let amount = || {
            wire.amount
                .ok_or_else(|| <D::Error as de::Error>::missing_field("amount"))
        };
        let action = match wire.kind.as_deref() {
            Some("INCREMENT") => HistoryAction::Increment { amount: amount()? },
            Some("DECREMENT") => HistoryAction::Decrement { amount: amount()? },
            Some("UNDO") => HistoryAction::Undo,
            Some("REDO") => HistoryAction::Redo,
            _ => HistoryAction::Unrecognized,
        };
        Ok(action)
    }
}

pub fn increment(amount: i64) -> HistoryAction {
    HistoryAction::Increment { amount }
}

pub fn decrement(amount: i64) -> HistoryAction {
    HistoryAction::Decrement { amount }
}

pub fn undo() -> HistoryAction {
    HistoryAction::Undo
}

pub fn redo() -> HistoryAction {
    HistoryAction::Redo
}
