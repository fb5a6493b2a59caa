use notetaker_core::SentimentStyle;
use notetaker_core::format::{NO_SUMMARY, NOT_DOCUMENTED};

/// Summary panel text, shown verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPanel {
    pub text: String,
}

impl Default for SummaryPanel {
    fn default() -> Self {
        Self { text: NO_SUMMARY.to_string() }
    }
}

/// Sentiment label: raw text plus exactly one style
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentLabel {
    pub text: String,
    pub style: SentimentStyle,
}

/// The four fixed SOAP regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapPanels {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
}

impl SoapPanels {
    /// `(title, text)` per region in display order
    pub fn regions(&self) -> [(&'static str, &str); 4] {
        [
            ("Subjective", &self.subjective),
            ("Objective", &self.objective),
            ("Assessment", &self.assessment),
            ("Plan", &self.plan),
        ]
    }
}

impl Default for SoapPanels {
    fn default() -> Self {
        Self {
            subjective: NOT_DOCUMENTED.to_string(),
            objective: NOT_DOCUMENTED.to_string(),
            assessment: NOT_DOCUMENTED.to_string(),
            plan: NOT_DOCUMENTED.to_string(),
        }
    }
}
