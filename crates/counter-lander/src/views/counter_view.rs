use crate::view_models::{ButtonViewModel, CounterViewModel};
use counter_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the counter panel: value, button rows and key hint footer
pub fn render(vm: &CounterViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(" Counter ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
        .style(theme.panel_background());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let [_, value_area, _, steps_area, _, history_area, _, footer_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let history_marker = |label: &'static str, available: bool| {
        let style = if available {
            theme.key_hint()
        } else {
            theme.muted()
        };
        Span::styled(label, style)
    };
    let value = Paragraph::new(Line::from(vec![
        history_marker("◀  ", vm.can_undo),
        Span::styled(vm.current_value.clone(), vm.value_style),
        history_marker("  ▶", vm.can_redo),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(value, value_area);

    f.render_widget(button_row(&vm.step_buttons, theme), steps_area);
    f.render_widget(button_row(&vm.history_buttons, theme), history_area);

    let mut footer = Vec::new();
    for hint in &vm.footer_hints {
        footer.push(Span::styled(hint.hint.clone(), theme.key_hint()));
        footer.push(Span::styled(format!(" {}  ", hint.title), theme.key_description()));
    }
    f.render_widget(
        Paragraph::new(Line::from(footer)).alignment(Alignment::Center),
        footer_area,
    );
}

fn button_row<'a>(buttons: &'a [ButtonViewModel], theme: &Theme) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (i, button) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!(" {} ", button.label), button.style));
        if button.enabled {
            spans.push(Span::styled(format!(" {}", button.hint), theme.muted()));
        }
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
