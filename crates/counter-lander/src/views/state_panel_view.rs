use crate::view_models::StatePanelViewModel;
use counter_theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the raw state as JSON
pub fn render(vm: &StatePanelViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(" State ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
        .style(theme.panel_background());

    let lines: Vec<Line> = vm
        .lines
        .iter()
        .map(|line| Line::from(Span::styled(line.as_str(), theme.text())))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
