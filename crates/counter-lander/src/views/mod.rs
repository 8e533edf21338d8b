use crate::state::AppState;
use crate::view_models::{CounterViewModel, StatePanelViewModel};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

pub mod counter_view;
pub mod state_panel_view;

/// Render the entire application UI
///
/// The counter panel takes the left side; the state panel, when visible,
/// takes the right.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let counter = CounterViewModel::from_state(state);
    let state_panel = StatePanelViewModel::from_state(state);

    if state_panel.visible {
        let [counter_area, state_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);
        counter_view::render(&counter, &state.theme, counter_area, f);
        state_panel_view::render(&state_panel, &state.theme, state_area, f);
    } else {
        counter_view::render(&counter, &state.theme, area, f);
    }
}
