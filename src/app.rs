use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::event::Event;
use crate::http::client::{HttpTransport, Transport};
use crate::http::executor::dispatch;
use crate::state::app_state::{AppState, RequestStatus, Viewport};
use crate::state::focus::Section;
use crate::state::mode::Mode;
use crate::state::request_state::{BodyTab, Direction};
use crate::ui::layout::response_width;

/// Side effect a keystroke asks the event loop to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Send,
    Quit,
}

pub struct App<T: Transport = HttpTransport> {
    pub state: AppState,
    transport: Arc<T>,
    tx: UnboundedSender<Event>,
    cancel: Option<CancellationToken>,
    next_request_id: u64,
}

impl<T: Transport> App<T> {
    pub fn new(transport: T, tx: UnboundedSender<Event>) -> Self {
        Self {
            state: AppState::default(),
            transport: Arc::new(transport),
            tx,
            cancel: None,
            next_request_id: 0,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                match handle_key(&mut self.state, key) {
                    Action::None => {}
                    Action::Send => self.send_request(),
                    Action::Quit => self.quit(),
                }
            }
            Event::Key(_) => {}
            Event::Resize(width, height) => resize(&mut self.state, width, height),
            Event::Response { id, text } => self.handle_response(id, text),
        }
    }

    fn send_request(&mut self) {
        // A new send supersedes whatever is still in flight.
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        self.next_request_id += 1;
        let id = self.next_request_id;
        let token = CancellationToken::new();
        self.cancel = Some(token.clone());
        self.state.request_status = RequestStatus::Sending { id };

        let doc = self.state.request.clone();
        tracing::debug!(id, "dispatching request");
        tokio::spawn(dispatch(Arc::clone(&self.transport), doc, id, self.tx.clone(), token));
    }

    fn handle_response(&mut self, id: u64, text: String) {
        match self.state.request_status {
            RequestStatus::Sending { id: current } if current == id => {
                self.cancel = None;
                self.state.request_status = RequestStatus::Idle;
                self.state.response.set(text);
            }
            _ => tracing::debug!(id, "dropping stale response"),
        }
    }

    fn quit(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        self.state.should_quit = true;
    }
}

/// Apply one key press to `state`. Total over every reachable state: keys
/// with no meaning in the current state are ignored.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Action {
    match state.mode {
        Mode::Command => handle_command_key(state, key),
        Mode::Editing => {
            handle_editing_key(state, key);
            Action::None
        }
    }
}

fn handle_command_key(state: &mut AppState, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(section) = Section::from_digit(c) {
                tracing::debug!(section = section.as_str(), "section changed");
                state.section = section;
            }
        }
        KeyCode::Char('i') => enter_editing(state),
        KeyCode::Enter => return Action::Send,
        KeyCode::Char('j') => match state.section {
            Section::Url => state.request.cycle_method(Direction::Forward),
            Section::Body if state.request.body_tab == BodyTab::Headers => {
                state.header_table().cursor_down();
            }
            Section::Response => {
                let width = response_width(state.viewport);
                state.response.scroll_down(width);
            }
            _ => {}
        },
        KeyCode::Char('k') => match state.section {
            Section::Url => state.request.cycle_method(Direction::Backward),
            Section::Body if state.request.body_tab == BodyTab::Headers => {
                state.header_table().cursor_up();
            }
            Section::Response => state.response.scroll_up(),
            _ => {}
        },
        KeyCode::Char(']') if state.section == Section::Body => {
            state.request.cycle_body_tab(Direction::Forward);
        }
        KeyCode::Char('[') if state.section == Section::Body => {
            state.request.cycle_body_tab(Direction::Backward);
        }
        _ => {}
    }
    Action::None
}

fn enter_editing(state: &mut AppState) {
    // Body with the Headers tab showing has no text field to focus, so `i` is ignored there.
    if state.section.is_editable(state.request.body_tab) {
        tracing::debug!(section = state.section.as_str(), "editing");
        state.mode = Mode::Editing;
    }
}

fn handle_editing_key(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        tracing::debug!(section = state.section.as_str(), "editing finished");
        state.mode = Mode::Command;
        return;
    }
    match state.section {
        Section::Url => state.request.url.handle_key(key),
        Section::Body => state.request.body.handle_key(key),
        Section::Response | Section::Environment => {}
    }
}

pub fn resize(state: &mut AppState, width: u16, height: u16) {
    tracing::debug!(width, height, "resize");
    state.viewport = Viewport { width, height };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::builder::OutboundRequest;
    use crate::state::request_state::HttpMethod;
    use crossterm::event::KeyEventState;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(state: &mut AppState, c: char) -> Action {
        handle_key(state, key(KeyCode::Char(c)))
    }

    #[test]
    fn test_initial_state_is_command_on_url() {
        let state = AppState::default();
        assert_eq!(state.mode, Mode::Command);
        assert_eq!(state.section, Section::Url);
        assert!(!state.is_editing());
        assert_eq!(state.response.raw_text(), "");
    }

    #[test]
    fn test_number_keys_select_sections() {
        let mut state = AppState::default();
        press(&mut state, '2');
        assert_eq!(state.section, Section::Body);
        press(&mut state, '3');
        assert_eq!(state.section, Section::Response);
        press(&mut state, '4');
        assert_eq!(state.section, Section::Environment);
        press(&mut state, '1');
        assert_eq!(state.section, Section::Url);
    }

    #[test]
    fn test_i_in_response_does_not_enter_editing() {
        let mut state = AppState::default();
        press(&mut state, '3');
        press(&mut state, 'i');
        assert!(!state.is_editing());
    }

    #[test]
    fn test_i_in_environment_does_not_enter_editing() {
        let mut state = AppState::default();
        assert_eq!(state.mode, Mode::Command);
        press(&mut state, '4');
        assert_eq!(state.section, Section::Environment);
        press(&mut state, 'i');
        assert!(!state.is_editing());
    }

    #[test]
    fn test_i_on_headers_tab_does_not_enter_editing() {
        let mut state = AppState::default();
        press(&mut state, '2');
        press(&mut state, ']');
        press(&mut state, 'i');
        assert!(!state.is_editing());
    }

    #[test]
    fn test_editing_url_forwards_keys_and_esc_returns() {
        let mut state = AppState::default();
        press(&mut state, 'i');
        assert!(state.is_editing());
        for c in "/_cat".chars() {
            press(&mut state, c);
        }
        // Command keys are plain text while editing.
        assert_eq!(press(&mut state, 'q'), Action::None);
        press(&mut state, '2');
        assert_eq!(state.request.url.value(), "http://localhost:9200/_catq2");
        assert_eq!(state.section, Section::Url);

        handle_key(&mut state, key(KeyCode::Esc));
        assert!(!state.is_editing());
        assert_eq!(state.section, Section::Url);
        assert!(state.request.body.is_empty());
    }

    #[test]
    fn test_editing_body_leaves_url_untouched() {
        let mut state = AppState::default();
        press(&mut state, '2');
        press(&mut state, 'i');
        press(&mut state, '{');
        handle_key(&mut state, key(KeyCode::Enter));
        press(&mut state, '}');
        handle_key(&mut state, key(KeyCode::Esc));

        assert_eq!(state.request.body.value(), "{\n}");
        assert_eq!(state.request.url.value(), "http://localhost:9200");
        assert_eq!(state.section, Section::Body);
        assert_eq!(state.mode, Mode::Command);
    }

    #[test]
    fn test_esc_in_command_mode_is_a_no_op() {
        let mut state = AppState::default();
        press(&mut state, '3');
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), Action::None);
        assert_eq!(state.section, Section::Response);
        assert!(!state.is_editing());
    }

    #[test]
    fn test_j_k_cycle_method_in_url_section() {
        let mut state = AppState::default();
        press(&mut state, 'j');
        assert_eq!(state.request.method, HttpMethod::Post);
        press(&mut state, 'k');
        press(&mut state, 'k');
        assert_eq!(state.request.method, HttpMethod::Delete);
    }

    #[test]
    fn test_j_k_move_header_cursor_on_headers_tab() {
        let mut state = AppState::default();
        press(&mut state, '2');
        // Body tab: j/k do nothing.
        press(&mut state, 'j');
        assert_eq!(state.selected_header(), 0);

        press(&mut state, '[');
        assert_eq!(state.request.body_tab, BodyTab::Headers);
        press(&mut state, 'j');
        press(&mut state, 'j');
        press(&mut state, 'j');
        assert_eq!(state.selected_header(), 1);
        press(&mut state, 'k');
        press(&mut state, 'k');
        assert_eq!(state.selected_header(), 0);
        assert_eq!(state.request.method, HttpMethod::Get);
    }

    #[test]
    fn test_brackets_only_cycle_tab_in_body_section() {
        let mut state = AppState::default();
        press(&mut state, ']');
        assert_eq!(state.request.body_tab, BodyTab::Body);
        press(&mut state, '2');
        press(&mut state, ']');
        assert_eq!(state.request.body_tab, BodyTab::Headers);
        press(&mut state, ']');
        assert_eq!(state.request.body_tab, BodyTab::Body);
    }

    #[test]
    fn test_j_k_scroll_response() {
        let mut state = AppState::default();
        state.response.set("a\nb\nc".to_string());
        press(&mut state, '3');
        press(&mut state, 'j');
        press(&mut state, 'j');
        assert_eq!(state.response.scroll, 2);
        press(&mut state, 'k');
        assert_eq!(state.response.scroll, 1);
    }

    #[test]
    fn test_enter_and_quit_keys_return_actions() {
        let mut state = AppState::default();
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), Action::Send);
        assert_eq!(press(&mut state, 'q'), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, ctrl_c), Action::Quit);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut state = AppState::default();
        let before = format!("{state:?}");
        for code in [KeyCode::Char('z'), KeyCode::F(5), KeyCode::Tab, KeyCode::Char('5')] {
            assert_eq!(handle_key(&mut state, key(code)), Action::None);
        }
        assert_eq!(format!("{state:?}"), before);
    }

    #[test]
    fn test_resize_only_touches_viewport() {
        let mut state = AppState::default();
        press(&mut state, '2');
        press(&mut state, 'i');
        let request_before = format!("{:?}", state.request);

        resize(&mut state, 120, 40);

        assert_eq!(state.viewport, Viewport { width: 120, height: 40 });
        assert_eq!(format!("{:?}", state.request), request_before);
        assert_eq!(state.section, Section::Body);
        assert!(state.is_editing());
        assert_eq!(state.selected_header, 0);
    }

    /// Echoes method, URL and headers so tests can see what was sent.
    struct Echo;

    impl Transport for Echo {
        async fn send(
            &self,
            request: OutboundRequest,
            _limit: usize,
        ) -> Result<Vec<u8>, crate::error::AppError> {
            let headers: Vec<String> =
                request.headers.iter().map(|(k, v)| format!("{k}={v}")).collect();
            Ok(format!("{} {} {}", request.method.as_str(), request.url, headers.join(";"))
                .into_bytes())
        }
    }

    #[tokio::test]
    async fn test_enter_sends_and_response_event_fills_view() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(Echo, tx);

        app.handle_event(Event::Key(key(KeyCode::Enter)));
        assert!(app.state.is_sending());

        let event = rx.recv().await.expect("response event");
        app.handle_event(event);

        assert!(!app.state.is_sending());
        assert_eq!(
            app.state.response.raw_text(),
            "GET http://localhost:9200 Content-Type=application/json;Authorization=apikey test thing!"
        );
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(Echo, tx);
        app.handle_event(Event::Key(key(KeyCode::Enter)));
        app.handle_event(Event::Key(key(KeyCode::Enter)));

        app.handle_event(Event::Response { id: 1, text: "old".to_string() });
        assert_eq!(app.state.response.raw_text(), "");
        assert!(app.state.is_sending());

        app.handle_event(Event::Response { id: 2, text: "new".to_string() });
        assert_eq!(app.state.response.raw_text(), "new");
        assert!(!app.state.is_sending());
    }

    #[tokio::test]
    async fn test_quit_sets_flag_and_release_events_are_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(Echo, tx);

        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        app.handle_event(Event::Key(release));
        assert!(!app.state.should_quit);

        app.handle_event(Event::Key(key(KeyCode::Char('q'))));
        assert!(app.state.should_quit);
    }
}
