mod input;
mod panels;

pub use input::InputState;
pub use panels::{SentimentLabel, SoapPanels, SummaryPanel};

use crate::transcript::Transcript;

/// Rendering context: every region the controller and renderers write to
///
/// Owned by the caller and passed in explicitly; nothing else mutates it.
#[derive(Debug, Clone, Default)]
pub struct ChatView {
    pub input: InputState,
    pub transcript: Transcript,
    pub summary: SummaryPanel,
    pub sentiment: SentimentLabel,
    pub soap: SoapPanels,
}

impl ChatView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text dump of the panels, in display order
    pub fn panels_text(&self) -> String {
        let mut out = format!("Summary:\n{}\n\nSentiment: {}", self.summary.text, self.sentiment.text);
        for (title, text) in self.soap.regions() {
            out.push_str(&format!("\n\n{}:\n{}", title, text));
        }
        out
    }
}
