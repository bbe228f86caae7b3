use super::request_state::KeyValuePair;

/// Navigable view over the request's headers. Borrows the document's rows
/// and the interaction cursor; it never owns a copy of either.
pub struct HeaderTable<'a> {
    rows: &'a [KeyValuePair],
    selected: &'a mut usize,
}

impl<'a> HeaderTable<'a> {
    pub fn new(rows: &'a [KeyValuePair], selected: &'a mut usize) -> Self {
        Self { rows, selected }
    }

    /// Selected row, clamped to the current row count.
    pub fn selected(&self) -> usize {
        clamp_index(*self.selected, self.rows.len())
    }

    pub fn cursor_down(&mut self) {
        let len = self.rows.len();
        if len > 0 {
            *self.selected = (self.selected() + 1).min(len - 1);
        }
    }

    pub fn cursor_up(&mut self) {
        if !self.rows.is_empty() {
            *self.selected = self.selected().saturating_sub(1);
        }
    }
}

pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
