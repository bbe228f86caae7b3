use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::ACCENT_BLUE;

/// Environments are not implemented; the section only shows a notice.
pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Environment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_BLUE));

    let text = vec![
        Line::from(""),
        Line::from("Environment management is not implemented yet."),
        Line::from(""),
        Line::from("Press 1 to return to the request.")
            .style(Style::default().add_modifier(Modifier::DIM)),
    ];
    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(p, area);
}
