use crate::actions::{Action, GlobalAction};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer; counter actions are delegated to the history reducer.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::ToggleStatePanel) => {
            state.config.show_state_panel = !state.config.show_state_panel;
            log::debug!("State panel visible: {}", state.config.show_state_panel);
        }
        Action::Global(GlobalAction::KeyPressed(_)) => {
            // Translated by the keyboard middleware, never reduced directly
        }
        Action::Counter(history_action) => {
            state.counter = counter_history::reduce(&state.counter, history_action);
        }
    }

    state
}
