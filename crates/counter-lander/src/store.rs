use std::sync::mpsc::{self, Receiver};

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;

/// Callback invoked synchronously after each dispatch whose reduction changed
/// the state. Actions that reduce to an equal state do not notify.
pub type Listener = Box<dyn FnMut(&AppState)>;

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    listeners: Vec<Listener>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            listeners: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store (they execute in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Register a listener that is called after each dispatch that changes the state
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            let next = reduce(self.state.clone(), &action);
            if next != self.state {
                self.state = next;
                for listener in &mut self.listeners {
                    listener(&self.state);
                }
            }
        }

        // Process any actions dispatched by middleware
        let pending_actions: Vec<Action> = self.action_rx.try_iter().collect();
        for action in pending_actions {
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;
    use counter_history::{increment, undo, CounterState, HistoryAction};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Consumes every action and re-dispatches a fixed follow-up once
    struct Translate {
        follow_up: Option<Action>,
    }

    impl Middleware for Translate {
        fn handle(&mut self, _action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            match self.follow_up.take() {
                Some(action) => {
                    dispatcher.dispatch(action);
                    false
                }
                None => true,
            }
        }
    }

    struct Swallow;

    impl Middleware for Swallow {
        fn handle(&mut self, _action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
            false
        }
    }

    fn recorded_values(store: &mut Store) -> Rc<RefCell<Vec<i64>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(Box::new(move |state: &AppState| {
            sink.borrow_mut().push(state.counter.current_value)
        }));
        seen
    }

    #[test]
    fn test_dispatch_reduces_and_notifies() {
        let mut store = Store::new(AppState::default());
        let seen = recorded_values(&mut store);

        store.dispatch(Action::Counter(increment(1)));
        store.dispatch(Action::Counter(increment(5)));
        store.dispatch(Action::Counter(undo()));

        assert_eq!(store.state().counter, CounterState::new(1, vec![0], vec![6]));
        assert_eq!(*seen.borrow(), vec![1, 6, 1]);
    }

    #[test]
    fn test_listeners_skip_unchanged_state() {
        let mut store = Store::new(AppState::default());
        let seen = recorded_values(&mut store);

        store.dispatch(Action::Counter(HistoryAction::Unrecognized));
        store.dispatch(Action::Counter(undo()));

        assert!(seen.borrow().is_empty());
        assert_eq!(store.state().counter, CounterState::default());
    }

    #[test]
    fn test_consumed_action_is_not_reduced() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(Swallow));

        store.dispatch(Action::Global(GlobalAction::Quit));

        assert!(store.state().running);
    }

    #[test]
    fn test_middleware_dispatch_reenters_chain() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(Translate {
            follow_up: Some(Action::Counter(increment(5))),
        }));
        let seen = recorded_values(&mut store);

        store.dispatch(Action::Global(GlobalAction::ToggleStatePanel));

        // The toggle was consumed, only the follow-up was reduced
        assert!(store.state().config.show_state_panel);
        assert_eq!(store.state().counter.current_value, 5);
        assert_eq!(*seen.borrow(), vec![5]);
    }
}
