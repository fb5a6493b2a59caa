use crate::layout::TuiLayout;
use crate::state::{SentimentLabel, SoapPanels, SummaryPanel as SummaryState};
use crate::theme::Theme;
use crate::transcript::wrap_text;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(format!(" {} ", title), Theme::title()))
}

/// Plain text in a titled box; the text is never parsed for markup
///
/// Rows that do not fit are counted in the title instead of dropped silently.
fn render_text(frame: &mut Frame<'_>, area: Rect, title: &str, text: &str) {
    let inner = titled_block(title).inner(area);
    let lines = wrap_text(text, Theme::base(), inner.width as usize);

    let hidden = lines.len().saturating_sub(inner.height as usize);
    let block = if hidden > 0 {
        titled_block(&format!("{} (+{} more)", title, hidden))
    } else {
        titled_block(title)
    };

    let paragraph = Paragraph::new(lines).style(Theme::base()).block(block);
    frame.render_widget(paragraph, area);
}

/// Rows `text` needs in a box `width` columns wide, borders included
fn box_height(text: &str, width: u16) -> u16 {
    let rows = wrap_text(text, Theme::base(), width.saturating_sub(2) as usize).len().max(1);
    u16::try_from(rows + 2).unwrap_or(u16::MAX)
}

pub struct SummaryPanel<'a> {
    panel: &'a SummaryState,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(panel: &'a SummaryState) -> Self {
        Self { panel }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        render_text(frame, area, "Summary", &self.panel.text);
    }
}

pub struct SentimentPanel<'a> {
    label: &'a SentimentLabel,
}

impl<'a> SentimentPanel<'a> {
    pub fn new(label: &'a SentimentLabel) -> Self {
        Self { label }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let line = Line::from(Theme::sentiment_span(&self.label.text, self.label.style));
        frame.render_widget(Paragraph::new(line).block(titled_block("Sentiment")), area);
    }
}

/// The four SOAP regions, each in its own box sized to its text
pub struct SoapPanel<'a> {
    panels: &'a SoapPanels,
}

impl<'a> SoapPanel<'a> {
    pub fn new(panels: &'a SoapPanels) -> Self {
        Self { panels }
    }

    pub fn render(&self, frame: &mut Frame<'_>, layout: &TuiLayout) {
        let heights = self.panels.regions().map(|(_, text)| box_height(text, layout.soap.width));
        let sections = layout.soap_sections(heights);
        let areas = [sections.subjective, sections.objective, sections.assessment, sections.plan];

        for (area, (title, text)) in areas.into_iter().zip(self.panels.regions()) {
            render_text(frame, area, title, text);
        }
    }
}
