//! Counter View Model
//!
//! The narrow projection the counter panel renders from: the value, whether
//! each button is enabled, and the key hints. The view never sees the raw
//! history stacks.

use ratatui::style::Style;
use strum::IntoEnumIterator;

use crate::command_id::CommandId;
use crate::state::AppState;

/// A single counter button
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonViewModel {
    /// Button caption, e.g. "+5" or "Undo"
    pub label: String,
    /// Key hint, e.g. "]" or "u"
    pub hint: String,
    pub enabled: bool,
    pub style: Style,
}

/// Footer entry, e.g. "s State"
#[derive(Debug, Clone, PartialEq)]
pub struct KeyHintViewModel {
    pub hint: String,
    pub title: &'static str,
}

/// View model for the counter panel
#[derive(Debug, Clone)]
pub struct CounterViewModel {
    pub current_value: String,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Step buttons (+small, +large, -small, -large)
    pub step_buttons: Vec<ButtonViewModel>,
    /// History buttons (Undo, Redo)
    pub history_buttons: Vec<ButtonViewModel>,
    pub footer_hints: Vec<KeyHintViewModel>,
    pub value_style: Style,
}

impl CounterViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let config = &state.config;
        let counter = &state.counter;

        let button = |label: String, command: CommandId| {
            let enabled = command.is_enabled(state);
            let style = if !enabled {
                theme.button_disabled()
            } else {
                match command {
                    CommandId::CounterIncrementSmall | CommandId::CounterIncrementLarge => {
                        theme.button(theme.button_increment)
                    }
                    CommandId::CounterDecrementSmall | CommandId::CounterDecrementLarge => {
                        theme.button(theme.button_decrement)
                    }
                    _ => theme.button(theme.button_history),
                }
            };

            ButtonViewModel {
                label,
                hint: state
                    .keymap
                    .compact_hint_for_command(command)
                    .unwrap_or_default(),
                enabled,
                style,
            }
        };

        let step_buttons = vec![
            button(
                step_label(i128::from(config.small_step)),
                CommandId::CounterIncrementSmall,
            ),
            button(
                step_label(i128::from(config.large_step)),
                CommandId::CounterIncrementLarge,
            ),
            button(
                step_label(-i128::from(config.small_step)),
                CommandId::CounterDecrementSmall,
            ),
            button(
                step_label(-i128::from(config.large_step)),
                CommandId::CounterDecrementLarge,
            ),
        ];

        let history_buttons = vec![
            button("Undo".to_string(), CommandId::CounterUndo),
            button("Redo".to_string(), CommandId::CounterRedo),
        ];

        let footer_hints = CommandId::iter()
            .filter_map(|command| {
                let hint = state.keymap.compact_hint_for_command(command)?;
                Some(KeyHintViewModel {
                    hint,
                    title: command.title(),
                })
            })
            .collect();

        Self {
            current_value: counter.current_value.to_string(),
            can_undo: counter.can_undo(),
            can_redo: counter.can_redo(),
            step_buttons,
            history_buttons,
            footer_hints,
            value_style: theme.counter_value(),
        }
    }
}

/// Signed caption for the change a step button applies, e.g. "+5" or "-1"
fn step_label(delta: i128) -> String {
    format!("{delta:+}")
}
