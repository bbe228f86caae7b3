use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::state::request_state::BodyTab;
use crate::ui::layout::BORDER_INACTIVE;

/// Tab strip used as the title of the lower-left pane.
pub fn title(active: BodyTab) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for (i, tab) in BodyTab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(BORDER_INACTIVE)));
        }
        let style = if *tab == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(BORDER_INACTIVE)
        };
        spans.push(Span::styled(tab.as_str(), style));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}
