#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys are navigation commands.
    #[default]
    Command,
    /// Keys are text input for the focused field.
    Editing,
}

impl Mode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing)
    }
}
