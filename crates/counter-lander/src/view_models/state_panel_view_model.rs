//! State Panel View Model
//!
//! Pretty-printed JSON of the counter state, shown next to the counter.

use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct StatePanelViewModel {
    pub visible: bool,
    pub lines: Vec<String>,
}

impl StatePanelViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let json = match serde_json::to_string_pretty(&state.counter) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize counter state: {}", e);
                format!("{:#?}", state.counter)
            }
        };

        Self {
            visible: state.config.show_state_panel,
            lines: json.lines().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counter_history::CounterState;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renders_state_as_pretty_json() {
        let state = AppState {
            counter: CounterState::new(4, vec![9], vec![]),
            ..AppState::default()
        };
        let vm = StatePanelViewModel::from_state(&state);

        assert!(vm.visible);
        assert_eq!(
            vm.lines,
            vec![
                "{",
                "  \"currentValue\": 4,",
                "  \"previousValues\": [",
                "    9",
                "  ],",
                "  \"futureValues\": []",
                "}",
            ]
        );
    }

    #[test]
    fn test_hidden_when_disabled_in_config() {
        let mut state = AppState::default();
        state.config.show_state_panel = false;

        assert!(!StatePanelViewModel::from_state(&state).visible);
    }
}
