//! History Reducer
//!
//! Pure functions that produce the next [`CounterState`] from the current one
//! and a [`HistoryAction`]. The input state is only borrowed; every call
//! builds a new value.

use crate::action::HistoryAction;
use crate::state::CounterState;

/// Compute the next state, starting from the initial state when `state` is `None`.
///
/// `transition(None, &HistoryAction::default())` yields the initial state.
pub fn transition(state: Option<&CounterState>, action: &HistoryAction) -> CounterState {
    match state {
        Some(state) => reduce(state, action),
        None => reduce(&CounterState::default(), action),
    }
}

/// Reducer for counter state.
///
/// Increment and decrement push the current value onto the undo stack and
/// clear the redo stack. Undo and redo move the current value between the
/// two stacks. Undo with an empty undo stack (and redo with an empty redo
/// stack) returns the state unchanged.
pub fn reduce(state: &CounterState, action: &HistoryAction) -> CounterState {
    match action {
        HistoryAction::Increment { amount } => CounterState {
            current_value: state.current_value.saturating_add(*amount),
            previous_values: push_front(state.current_value, &state.previous_values),
            future_values: Vec::new(),
        },
        HistoryAction::Decrement { amount } => CounterState {
            current_value: state.current_value.saturating_sub(*amount),
            previous_values: push_front(state.current_value, &state.previous_values),
            future_values: Vec::new(),
        },
        HistoryAction::Undo => match state.previous_values.split_first() {
            Some((restored, rest)) => CounterState {
                current_value: *restored,
                previous_values: rest.to_vec(),
                future_values: push_front(state.current_value, &state.future_values),
            },
            None => {
                log::debug!("Nothing to undo, keeping {}", state.current_value);
                state.clone()
            }
        },
        HistoryAction::Redo => match state.future_values.split_first() {
            Some((restored, rest)) => CounterState {
                current_value: *restored,
                previous_values: push_front(state.current_value, &state.previous_values),
                future_values: rest.to_vec(),
            },
            None => {
                log::debug!("Nothing to redo, keeping {}", state.current_value);
                state.clone()
            }
        },
        HistoryAction::Unrecognized => state.clone(),
    }
}

fn push_front(value: i64, stack: &[i64]) -> Vec<i64> {
    let mut values = Vec::with_capacity(stack.len() + 1);
    values.push(value);
    values.extend_from_slice(stack);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{decrement, increment, redo, undo};
    use pretty_assertions::assert_eq;

    fn mid_history() -> CounterState {
        CounterState::new(9, vec![10, 11], vec![11])
    }

    #[test]
    fn test_initial_state_for_missing_state() {
        let state = transition(None, &HistoryAction::default());
        assert_eq!(state, CounterState::new(0, vec![], vec![]));
    }

    #[test]
    fn test_increment_adds_amount() {
        let state = transition(None, &increment(5));
        assert_eq!(state.current_value, 5);
        assert_eq!(reduce(&state, &increment(1)).current_value, 6);
    }

    #[test]
    fn test_decrement_subtracts_amount() {
        let state = transition(None, &decrement(5));
        assert_eq!(state.current_value, -5);
        assert_eq!(reduce(&state, &decrement(1)).current_value, -6);
    }

    #[test]
    fn test_increment_resets_future_and_records_previous() {
        assert_eq!(
            reduce(&mid_history(), &increment(5)),
            CounterState::new(14, vec![9, 10, 11], vec![])
        );
    }

    #[test]
    fn test_decrement_resets_future_and_records_previous() {
        assert_eq!(
            reduce(&mid_history(), &decrement(5)),
            CounterState::new(4, vec![9, 10, 11], vec![])
        );
    }

    #[test]
    fn test_undo_moves_current_into_future() {
        assert_eq!(
            reduce(&mid_history(), &undo()),
            CounterState::new(10, vec![11], vec![9, 11])
        );
    }

    #[test]
    fn test_redo_moves_current_into_previous() {
        assert_eq!(
            reduce(&mid_history(), &redo()),
            CounterState::new(11, vec![9, 10, 11], vec![])
        );
    }

    #[test]
    fn test_does_not_mutate_input() {
        let state = CounterState::new(10, vec![1], vec![1]);
        let before = state.clone();

        for action in [increment(1), decrement(1), undo(), redo()] {
            let _ = reduce(&state, &action);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_unrecognized_is_identity() {
        let state = mid_history();
        assert_eq!(reduce(&state, &HistoryAction::Unrecognized), state);
    }

    #[test]
    fn test_undo_then_redo_round_trip() {
        let states = [
            mid_history(),
            CounterState::new(3, vec![2], vec![]),
            CounterState::new(-7, vec![0, 4, 4], vec![8, 1]),
        ];

        for state in states {
            let undone = reduce(&state, &undo());
            assert_eq!(reduce(&undone, &redo()), state);
        }
    }

    #[test]
    fn test_forward_moves_always_clear_redo() {
        let state = CounterState::new(2, vec![1], vec![3, 4, 5]);
        for amount in [-5, 0, 1, 42] {
            assert!(reduce(&state, &increment(amount)).future_values.is_empty());
            assert!(reduce(&state, &decrement(amount)).future_values.is_empty());
        }
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let state = CounterState::new(4, vec![], vec![5]);
        assert_eq!(reduce(&state, &undo()), state);
    }

    #[test]
    fn test_redo_on_empty_future_is_noop() {
        let state = CounterState::new(4, vec![3], vec![]);
        assert_eq!(reduce(&state, &redo()), state);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let state = CounterState::new(i64::MAX - 1, vec![], vec![]);
        assert_eq!(reduce(&state, &increment(5)).current_value, i64::MAX);

        let state = CounterState::new(i64::MIN + 1, vec![], vec![]);
        assert_eq!(reduce(&state, &decrement(5)).current_value, i64::MIN);
    }

    #[test]
    fn test_full_session() {
        let mut state = transition(None, &HistoryAction::default());
        for action in [increment(1), increment(5), decrement(1)] {
            state = reduce(&state, &action);
        }
        assert_eq!(state, CounterState::new(5, vec![6, 1, 0], vec![]));

        state = reduce(&state, &undo());
        state = reduce(&state, &undo());
        assert_eq!(state, CounterState::new(1, vec![0], vec![6, 5]));

        // New edit discards the undone branch
        state = reduce(&state, &decrement(5));
        assert_eq!(state, CounterState::new(-4, vec![1, 0], vec![]));
    }
}
