use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::focus::Section;
use crate::ui::layout::{TEXT_MUTED, border_color};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.section == Section::Response;
    let block = Block::default()
        .title(" Response ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)));
    let inner = block.inner(area);

    let para = if state.response.raw_text().is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "Press ↵ to send the request",
            Style::default().fg(TEXT_MUTED),
        )))
    } else {
        // Rows are wrapped here rather than by ratatui so the scroll offset
        // counts the same rows the key handler clamps against.
        let rows = state.response.rows(inner.width as usize);
        let last = rows.len().saturating_sub(1).min(u16::MAX as usize) as u16;
        let lines: Vec<Line> = rows.into_iter().map(Line::raw).collect();
        Paragraph::new(lines).scroll((state.response.scroll.min(last), 0))
    };
    frame.render_widget(para.block(block), area);
}
