mod scroll;

use notetaker_core::{ChatMessage, Role};

/// Append-only conversation log
///
/// Messages keep insertion order and are never edited, reordered or removed.
/// Scrolling is a view concern and only moves `scroll_offset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    /// Lines scrolled up from the bottom; 0 keeps the newest message visible
    scroll_offset: usize,
    /// Wrapped lines above the viewport at the last render; None before the first one
    max_scroll: Option<usize>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message and scroll to the newest line
    pub fn add_message(&mut self, role: Role, text: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, text));
        self.scroll_to_bottom();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Messages as `(role, text)` pairs, in order
    pub fn pairs(&self) -> Vec<(Role, &str)> {
        self.messages.iter().map(|m| (m.role(), m.text())).collect()
    }
}
