use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::focus::Section;
use crate::ui::layout::{TEXT_MUTED, border_color};
use super::tab_bar;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.section == Section::Body;
    let block = Block::default()
        .title(tab_bar::title(state.request.body_tab))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let body = &state.request.body;
    let editing = focused && state.is_editing();

    if body.is_empty() && !editing {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            body.placeholder(),
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        )));
        frame.render_widget(placeholder, inner);
        return;
    }

    let (row, col) = body.cursor_position();
    let v_offset = (row as u16).saturating_sub(inner.height - 1);
    let h_offset = (col as u16).saturating_sub(inner.width - 1);
    frame.render_widget(Paragraph::new(body.value()).scroll((v_offset, h_offset)), inner);

    if editing {
        frame.set_cursor_position(Position {
            x: inner.x + col as u16 - h_offset,
            y: inner.y + row as u16 - v_offset,
        });
    }
}
