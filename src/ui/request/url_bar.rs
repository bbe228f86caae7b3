use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::focus::Section;
use crate::state::request_state::HttpMethod;
use crate::ui::layout::border_color;

fn method_color(method: &HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Rgb(115, 218, 202),
        HttpMethod::Post => Color::Rgb(158, 206, 106),
        HttpMethod::Put => Color::Rgb(224, 175, 104),
        HttpMethod::Delete => Color::Rgb(247, 118, 142),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.section == Section::Url;
    let border_style = Style::default().fg(border_color(focused));

    // [method 10] [url flex]
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(10), Constraint::Min(0)])
        .split(area);

    let method = state.request.method;
    let method_para = Paragraph::new(Line::from(Span::styled(
        method.as_str(),
        Style::default().fg(method_color(&method)).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(method_para, chunks[0]);

    let block = Block::default()
        .title(" URL ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let url = &state.request.url;
    let (_, col) = url.cursor_position();
    // Keep the cursor inside the field by scrolling the text left.
    let offset = (col as u16).saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(Paragraph::new(url.value()).scroll((0, offset)), inner);

    if focused && state.is_editing() && inner.width > 0 {
        frame.set_cursor_position(Position {
            x: inner.x + col as u16 - offset,
            y: inner.y,
        });
    }
}
