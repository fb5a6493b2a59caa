/// State for the message input line
///
/// `cursor` counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
    /// Sent messages, oldest first
    history: Vec<String>,
    /// Current position in history (None = new message)
    history_index: Option<usize>,
    /// Draft kept aside while navigating history
    draft: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input preloaded with `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_text(text);
        input
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer.char_indices().nth(char_index).map(|(i, _)| i).unwrap_or(self.buffer.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
        self.reset_history_navigation();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Add a sent message to history, skipping an immediate repeat
    pub fn add_to_history(&mut self, message: String) {
        if self.history.last() != Some(&message) {
            self.history.push(message);
        }
        self.reset_history_navigation();
    }

    /// Navigate up in history (older messages)
    pub fn navigate_up(&mut self) {
        if self.history.is_empty() {
            return;
        }

        if self.history_index.is_none() && !self.buffer.is_empty() {
            self.draft = Some(self.buffer.clone());
        }

        let new_index = match self.history_index {
            None => self.history.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };

        if let Some(message) = self.history.get(new_index).cloned() {
            self.set_text(message);
            self.history_index = Some(new_index);
        }
    }

    /// Navigate down in history (newer messages), restoring the draft past the end
    pub fn navigate_down(&mut self) {
        let Some(idx) = self.history_index else {
            return;
        };

        if idx + 1 >= self.history.len() {
            let draft = self.draft.take().unwrap_or_default();
            self.set_text(draft);
            self.history_index = None;
        } else if let Some(message) = self.history.get(idx + 1).cloned() {
            self.set_text(message);
            self.history_index = Some(idx + 1);
        }
    }

    pub fn reset_history_navigation(&mut self) {
        self.history_index = None;
        self.draft = None;
    }

    /// History position for display, e.g. `2/5`
    pub fn history_position(&self) -> Option<String> {
        self.history_index.map(|idx| format!("{}/{}", idx + 1, self.history.len()))
    }
}
