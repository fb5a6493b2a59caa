//! Pure text formatting for the summary, sentiment and SOAP panels.
//!
//! Every function here is total: any [`Field`] shape produces text.

use crate::payload::{Field, SectionRecord, SummaryRecord};

pub const NO_SUMMARY: &str = "No summary available.";
pub const NOT_DOCUMENTED: &str = "Not documented.";
pub const UNKNOWN: &str = "Unknown";
pub const NOT_MENTIONED: &str = "Not mentioned";
pub const NOT_SPECIFIED: &str = "Not specified";

/// Presentation class of the sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentStyle {
    Anxious,
    Reassured,
    #[default]
    Neutral,
}

impl SentimentStyle {
    /// Classify a raw sentiment value; anything unrecognized is neutral.
    pub fn classify(sentiment: &Field<String>) -> Self {
        match sentiment.valid().map(String::as_str) {
            Some("Anxious") => SentimentStyle::Anxious,
            Some("Reassured") => SentimentStyle::Reassured,
            _ => SentimentStyle::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentStyle::Anxious => "anxious",
            SentimentStyle::Reassured => "reassured",
            SentimentStyle::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn bullets(items: &Field<Vec<String>>) -> String {
    match items.non_empty() {
        Some(items) => format!("- {}", items.join("\n- ")),
        None => format!("- {}", NOT_MENTIONED),
    }
}

/// Six labeled blocks in fixed order, or [`NO_SUMMARY`] when there is no record.
pub fn format_summary(summary: &Field<SummaryRecord>) -> String {
    let Field::Valid(record) = summary else {
        return NO_SUMMARY.to_string();
    };

    let blocks = [
        ("Patient Name", record.patient_name.non_empty().unwrap_or(UNKNOWN).to_string()),
        ("Symptoms", bullets(&record.symptoms)),
        ("Diagnosis", record.diagnosis.non_empty().unwrap_or(NOT_MENTIONED).to_string()),
        ("Treatment", bullets(&record.treatment)),
        ("Current Status", record.current_status.non_empty().unwrap_or(NOT_SPECIFIED).to_string()),
        ("Prognosis", record.prognosis.non_empty().unwrap_or(NOT_SPECIFIED).to_string()),
    ];

    blocks
        .iter()
        .map(|(label, value)| format!("{}:\n{}", label, value))
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

/// One `Label: value` line per entry, underscores in labels shown as spaces.
pub fn format_section(section: &Field<SectionRecord>) -> String {
    let Field::Valid(record) = section else {
        return NOT_DOCUMENTED.to_string();
    };

    record
        .entries()
        .iter()
        .map(|(key, value)| format!("{}: {}", key.replace('_', " "), value))
        .collect::<Vec<_>>()
        .join("\n")
}
