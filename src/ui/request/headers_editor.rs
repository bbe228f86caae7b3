use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::focus::Section;
use crate::ui::layout::{BORDER_INACTIVE, TEXT_MUTED, border_color};
use super::tab_bar;

const ROW_SELECTED_BG: Color = Color::Rgb(41, 45, 62);

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.section == Section::Body;
    let block = Block::default()
        .title(tab_bar::title(state.request.body_tab))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height == 0 {
        return;
    }

    let headers = state.request.headers();
    if headers.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No headers",
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    // [key = half] [│] [value = rest]
    let key_w = (inner.width / 2) as usize;
    let selected = state.selected_header();
    // Scroll so the selected row stays visible.
    let skip = (selected + 1).saturating_sub(inner.height as usize);

    let lines: Vec<Line> = headers
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, pair)| {
            let is_selected = i == selected;
            let bg = if is_selected { ROW_SELECTED_BG } else { Color::Reset };
            let fg = if focused && is_selected { Color::White } else { Color::Rgb(169, 177, 214) };
            Line::from(vec![
                Span::styled(format!("{:<key_w$}", pair.key), Style::default().fg(fg).bg(bg)),
                Span::styled("│ ", Style::default().fg(BORDER_INACTIVE).bg(bg)),
                Span::styled(pair.value.clone(), Style::default().fg(fg).bg(bg)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
