use super::{
    focus::Section,
    header_table::{HeaderTable, clamp_index},
    mode::Mode,
    request_state::RequestState,
    response_state::ResponseState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    /// A request task is running; `id` tags the completion event it will post.
    Sending { id: u64 },
}

/// Last known terminal size. Only resize events write it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub mode: Mode,
    pub section: Section,
    pub request: RequestState,
    pub selected_header: usize,
    pub response: ResponseState,
    pub request_status: RequestStatus,
    pub viewport: Viewport,
    pub should_quit: bool,
}

impl AppState {
    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    pub fn header_table(&mut self) -> HeaderTable<'_> {
        HeaderTable::new(&self.request.headers, &mut self.selected_header)
    }

    /// Selected header row as the renderer should show it.
    pub fn selected_header(&self) -> usize {
        clamp_index(self.selected_header, self.request.headers.len())
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.request_status, RequestStatus::Sending { .. })
    }
}
