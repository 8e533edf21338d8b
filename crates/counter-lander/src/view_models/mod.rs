pub mod counter_view_model;
pub mod state_panel_view_model;

pub use counter_view_model::{ButtonViewModel, CounterViewModel};
pub use state_panel_view_model::StatePanelViewModel;
