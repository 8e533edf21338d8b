pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Counter
        KeyBinding::new("+", "+", CounterIncrementSmall),
        KeyBinding::new("=", "+", CounterIncrementSmall),
        KeyBinding::new("]", "]", CounterIncrementLarge),
        KeyBinding::new("-", "-", CounterDecrementSmall),
        KeyBinding::new("[", "[", CounterDecrementLarge),
        // History
        KeyBinding::new("u", "u", CounterUndo),
        KeyBinding::new("r", "r", CounterRedo),
        KeyBinding::new("ctrl+r", "Ctrl+R", CounterRedo),
        // Panels
        KeyBinding::new("s", "s", ToggleStatePanel),
        // General
        KeyBinding::new("q", "q", GlobalQuit),
        KeyBinding::new("esc", "Esc", GlobalQuit),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_command_is_bound() {
        let keymap = default_keymap();
        for command in CommandId::iter() {
            assert!(
                keymap.compact_hint_for_command(command).is_some(),
                "{:?} has no keybinding",
                command
            );
        }
    }

    #[test]
    fn test_all_default_patterns_parse() {
        assert_eq!(default_keymap().bindings().count(), 12);
    }
}
