use crate::theme::Theme;
use crate::transcript::{Transcript as TranscriptState, TranscriptRenderer};

use ratatui::{
    Frame,
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// Transcript component: bordered, pre-wrapped message log
///
/// Sticks to the newest line unless the transcript is scrolled up. Rendering
/// records the wrapped line count so scrolling can reach the first line.
pub struct Transcript<'a> {
    transcript: &'a mut TranscriptState,
}

impl<'a> Transcript<'a> {
    pub fn new(transcript: &'a mut TranscriptState) -> Self {
        Self { transcript }
    }

    /// Render transcript to the given frame
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(Span::styled(" Transcript ", Theme::title()));
        let inner = block.inner(area);

        let lines = TranscriptRenderer::new(&*self.transcript).lines(inner.width as usize);
        self.transcript.set_viewport(lines.len(), inner.height as usize);
        let top = Self::scroll_top(lines.len(), inner.height as usize, self.transcript.scroll_offset());

        let paragraph = Paragraph::new(lines).block(block).scroll((top as u16, 0));
        frame.render_widget(paragraph, area);
    }

    /// First visible line for `total` lines in `height` rows, `offset` lines up from the bottom
    fn scroll_top(total: usize, height: usize, offset: usize) -> usize {
        let max_top = total.saturating_sub(height);
        max_top.saturating_sub(offset)
    }
}
