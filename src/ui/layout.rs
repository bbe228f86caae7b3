use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Color,
};

use crate::state::app_state::{AppState, Viewport};
use crate::state::focus::Section;
use crate::state::request_state::BodyTab;
use super::{
    env_placeholder,
    status_bar,
    request::{body_editor, headers_editor, url_bar},
    response::body_viewer,
};

// TokyoNight palette
pub const ACCENT_BLUE: Color = Color::Rgb(122, 162, 247);  // #7aa2f7
pub const BORDER_INACTIVE: Color = Color::Rgb(65, 72, 104); // #414868
pub const TEXT_MUTED: Color = Color::Rgb(86, 95, 137);      // #565f89

pub fn border_color(focused: bool) -> Color {
    if focused { ACCENT_BLUE } else { BORDER_INACTIVE }
}

/// Narrowest inner width the response pane can get at `viewport`. The viewer
/// re-clamps the scroll at its real width, so erring narrow never hides rows.
pub fn response_width(viewport: Viewport) -> usize {
    (viewport.width / 2).saturating_sub(3).max(1) as usize
}

/// Draw the whole screen from `state`. Reads only.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = vertical[0];
    let status_area = vertical[1];

    status_bar::render(frame, status_area, state);

    if state.section == Section::Environment {
        env_placeholder::render(frame, main_area);
        return;
    }

    // rows[0] = method + url (Length 3)
    // rows[1] = body/headers | response (flexible)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(main_area);

    url_bar::render(frame, rows[0], state);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    match state.request.body_tab {
        BodyTab::Body => body_editor::render(frame, panes[0], state),
        BodyTab::Headers => headers_editor::render(frame, panes[0], state),
    }
    body_viewer::render(frame, panes[1], state);
}
