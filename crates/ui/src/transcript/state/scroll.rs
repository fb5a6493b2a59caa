use super::Transcript;

impl Transcript {
    /// Scroll to bottom (most recent)
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll up, bounded by the last rendered viewport
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Scroll down
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Get scroll offset
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Check if scrolled to bottom
    pub fn is_at_bottom(&self) -> bool {
        self.scroll_offset == 0
    }

    /// Record the wrapped line count and viewport height of a render
    ///
    /// Clamps the current offset so a resize never leaves the view past the top.
    pub fn set_viewport(&mut self, total_lines: usize, height: usize) {
        let max = total_lines.saturating_sub(height);
        self.max_scroll = Some(max);
        self.scroll_offset = self.scroll_offset.min(max);
    }

    fn max_scroll(&self) -> usize {
        self.max_scroll.unwrap_or_else(|| self.line_count_hint().saturating_sub(1))
    }

    /// Line count before wrapping: a label line, the text lines, a separator
    fn line_count_hint(&self) -> usize {
        self.messages.iter().map(|m| m.text().lines().count().max(1) + 2).sum()
    }
}
