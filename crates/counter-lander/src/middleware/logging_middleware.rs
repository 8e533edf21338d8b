use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Counter(history_action) => log::debug!(
                "Action: {:?} (current value {})",
                history_action,
                state.counter.current_value
            ),
            other => log::debug!("Action: {:?}", other),
        }

        true // Always pass action through
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;
    use std::sync::mpsc;

    #[test]
    fn test_logging_middleware_passes_through() {
        let mut middleware = LoggingMiddleware::new();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::default();

        assert!(middleware.handle(&Action::Global(GlobalAction::Quit), &state, &dispatcher));
        assert!(middleware.handle(
            &Action::Counter(counter_history::undo()),
            &state,
            &dispatcher
        ));
        assert!(rx.try_recv().is_err());
    }
}
