/// Text of the last completed request, shown verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseState {
    raw_text: String,
    pub scroll: u16,
}

impl ResponseState {
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Replace the previous response wholesale.
    pub fn set(&mut self, text: String) {
        self.raw_text = text;
        self.scroll = 0;
    }

    /// Screen rows the text occupies when hard-wrapped at `width` columns.
    pub fn rows(&self, width: usize) -> Vec<&str> {
        wrap_rows(&self.raw_text, width)
    }

    /// Scroll one row down, stopping at the last row at `width` columns.
    pub fn scroll_down(&mut self, width: usize) {
        let max = self.rows(width).len().saturating_sub(1).min(u16::MAX as usize) as u16;
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

/// Split `text` into rows of at most `width` chars. Empty lines keep a row.
pub fn wrap_rows(text: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            rows.push(line);
            continue;
        }
        let mut start = 0;
        for (count, (i, _)) in line.char_indices().enumerate() {
            if count > 0 && count % width == 0 {
                rows.push(&line[start..i]);
                start = i;
            }
        }
        rows.push(&line[start..]);
    }
    rows
}
