use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::state::mode::Mode;
use super::layout::{ACCENT_BLUE, BORDER_INACTIVE};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (mode_label, mode_color) = match state.mode {
        Mode::Command => ("COMMAND", ACCENT_BLUE),
        Mode::Editing => ("EDITING", Color::Rgb(158, 206, 106)),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", mode_label),
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" Active section: {}", state.section.as_str())),
        Span::raw(format!("  Editing?: {}", state.is_editing())),
    ];

    if state.is_sending() {
        spans.push(Span::styled("  sending…", Style::default().fg(Color::Yellow)));
    }

    let hints = match state.mode {
        Mode::Command => "  · 1-4:section · i:edit · ↵:send · j/k · [ ]:tab · q:quit",
        Mode::Editing => "  · esc:done",
    };
    spans.push(Span::styled(hints, Style::default().fg(BORDER_INACTIVE)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
