//! KeyboardMiddleware - translates keyboard events into counter actions
//!
//! Key presses are looked up in the keymap. The first bound command that is
//! enabled for the current state is dispatched; undo and redo stay silent
//! while their history stack is empty, the same way a disabled button would.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::KeyEvent;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let command_ids = state.keymap.match_key(&key);
        if command_ids.is_empty() {
            log::debug!("KeyboardMiddleware: no binding for {:?}", key.code);
            return;
        }

        for cmd_id in command_ids {
            if cmd_id.is_enabled(state) {
                log::debug!("KeyboardMiddleware: dispatching {:?}", cmd_id);
                dispatcher.dispatch(cmd_id.to_action(state));
                return;
            }
            log::debug!("KeyboardMiddleware: {:?} is disabled", cmd_id);
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            // Raw key events are always consumed
            return false;
        }

        // All other actions pass through
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counter_history::{CounterState, HistoryAction};
    use pretty_assertions::assert_eq;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::mpsc;

    fn press(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        let mut middleware = KeyboardMiddleware::new();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let key = Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers)));
        assert!(!middleware.handle(&key, state, &dispatcher));

        rx.try_iter().collect()
    }

    #[test]
    fn test_step_keys() {
        let state = AppState::default();

        assert_eq!(
            press(&state, KeyCode::Char('+'), KeyModifiers::SHIFT),
            vec![Action::Counter(HistoryAction::Increment { amount: 1 })]
        );
        assert_eq!(
            press(&state, KeyCode::Char(']'), KeyModifiers::NONE),
            vec![Action::Counter(HistoryAction::Increment { amount: 5 })]
        );
        assert_eq!(
            press(&state, KeyCode::Char('-'), KeyModifiers::NONE),
            vec![Action::Counter(HistoryAction::Decrement { amount: 1 })]
        );
        assert_eq!(
            press(&state, KeyCode::Char('['), KeyModifiers::NONE),
            vec![Action::Counter(HistoryAction::Decrement { amount: 5 })]
        );
    }

    #[test]
    fn test_undo_redo_disabled_without_history() {
        let state = AppState::default();

        assert!(press(&state, KeyCode::Char('u'), KeyModifiers::NONE).is_empty());
        assert!(press(&state, KeyCode::Char('r'), KeyModifiers::NONE).is_empty());
    }

    #[test]
    fn test_undo_redo_enabled_with_history() {
        let state = AppState {
            counter: CounterState::new(9, vec![10, 11], vec![11]),
            ..AppState::default()
        };

        assert_eq!(
            press(&state, KeyCode::Char('u'), KeyModifiers::NONE),
            vec![Action::Counter(HistoryAction::Undo)]
        );
        assert_eq!(
            press(&state, KeyCode::Char('r'), KeyModifiers::CONTROL),
            vec![Action::Counter(HistoryAction::Redo)]
        );
    }

    #[test]
    fn test_quit_keys() {
        let state = AppState::default();

        for (code, modifiers) in [
            (KeyCode::Char('q'), KeyModifiers::NONE),
            (KeyCode::Esc, KeyModifiers::NONE),
            (KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(
                press(&state, code, modifiers),
                vec![Action::Global(GlobalAction::Quit)]
            );
        }
    }

    #[test]
    fn test_unbound_key_is_consumed_silently() {
        let state = AppState::default();
        assert!(press(&state, KeyCode::Char('x'), KeyModifiers::NONE).is_empty());
    }

    #[test]
    fn test_other_actions_pass_through() {
        let mut middleware = KeyboardMiddleware::new();
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        assert!(middleware.handle(
            &Action::Global(GlobalAction::Quit),
            &AppState::default(),
            &dispatcher
        ));
    }
}
