//! Counter History
//!
//! A counter whose every change can be undone and redone. The crate is the
//! pure core of the counter application: it owns the state shape, the
//! actions that can change it and the reducer that applies them.
//!
//! The orchestrating application holds the current [`CounterState`], turns
//! user input into [`HistoryAction`]s and replaces its state with whatever
//! [`transition`] returns.
//!
//! ```
//! use counter_history::{increment, reduce, undo, CounterState};
//!
//! let state = CounterState::default();
//! let state = reduce(&state, &increment(5));
//! assert_eq!(state.current_value, 5);
//!
//! let state = reduce(&state, &undo());
//! assert_eq!(state.current_value, 0);
//! assert!(state.can_redo());
//! ```

pub mod action;
pub mod reducer;
pub mod state;

pub use action::{decrement, increment, redo, undo, HistoryAction};
pub use reducer::{reduce, transition};
pub use state::CounterState;
