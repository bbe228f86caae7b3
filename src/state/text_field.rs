use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable text buffer with a byte cursor that always sits on a char boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
    multiline: bool,
    placeholder: &'static str,
}

impl TextField {
    pub fn single_line(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor, multiline: false, placeholder: "" }
    }

    pub fn multi_line(placeholder: &'static str) -> Self {
        Self { value: String::new(), cursor: 0, multiline: true, placeholder }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the whole buffer; the cursor moves to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.value = if self.multiline { value } else { value.replace(['\n', '\r'], "") };
        self.cursor = self.value.len();
    }

    /// Zero-based (row, column) of the cursor, counted in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.value[..self.cursor];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (row, before[line_start..].chars().count())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(c);
            }
            KeyCode::Enter if self.multiline => self.insert('\n'),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.value, self.cursor);
                    self.value.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    let next = next_char_boundary(&self.value, self.cursor);
                    self.value.drain(self.cursor..next);
                }
            }
            KeyCode::Left => self.cursor = prev_char_boundary(&self.value, self.cursor),
            KeyCode::Right => self.cursor = next_char_boundary(&self.value, self.cursor),
            KeyCode::Up if self.multiline => self.cursor = move_up(&self.value, self.cursor),
            KeyCode::Down if self.multiline => self.cursor = move_down(&self.value, self.cursor),
            KeyCode::Home => {
                self.cursor = if self.multiline {
                    self.value[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0)
                } else {
                    0
                };
            }
            KeyCode::End => {
                self.cursor = if self.multiline {
                    self.value[self.cursor..]
                        .find('\n')
                        .map(|i| self.cursor + i)
                        .unwrap_or(self.value.len())
                } else {
                    self.value.len()
                };
            }
            _ => {}
        }
    }

    fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let mut p = pos - 1;
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos + 1;
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}

/// Byte offset of column `col` (in chars) on line `row`, clamped to the line end.
fn offset_of(text: &str, row: usize, col: usize) -> usize {
    let rows: Vec<&str> = text.split('\n').collect();
    let line = rows.get(row).copied().unwrap_or("");
    let row_start: usize = rows[..row.min(rows.len())].iter().map(|l| l.len() + 1).sum();
    let col_bytes = line.char_indices().nth(col).map(|(i, _)| i).unwrap_or(line.len());
    row_start + col_bytes
}

fn row_col(text: &str, cursor: usize) -> (usize, usize) {
    let before = &text[..cursor.min(text.len())];
    let row = before.matches('\n').count();
    let col = before.rsplit('\n').next().map(|l| l.chars().count()).unwrap_or(0);
    (row, col)
}

fn move_up(text: &str, cursor: usize) -> usize {
    let (row, col) = row_col(text, cursor);
    if row == 0 {
        return 0;
    }
    offset_of(text, row - 1, col)
}

fn move_down(text: &str, cursor: usize) -> usize {
    let (row, col) = row_col(text, cursor);
    if row + 1 > text.matches('\n').count() {
        return text.len();
    }
    offset_of(text, row + 1, col)
}
