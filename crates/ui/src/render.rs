//! Section renderers: write formatted reply fields into the rendering context.

use notetaker_core::{Field, SentimentStyle, SoapRecord, SummaryRecord, format_section, format_summary};

use crate::state::{SentimentLabel, SoapPanels, SummaryPanel};

/// Replace the summary panel with the formatted summary
pub fn render_summary(panel: &mut SummaryPanel, summary: &Field<SummaryRecord>) {
    panel.text = format_summary(summary);
}

/// Replace the sentiment label; the text is the raw value, only the style is classified
pub fn render_sentiment(label: &mut SentimentLabel, sentiment: &Field<String>) {
    label.style = SentimentStyle::classify(sentiment);
    label.text = sentiment.raw_text();
}

/// Write each SOAP section to its region. An absent note leaves the panels untouched.
pub fn render_soap(panels: &mut SoapPanels, soap: &Field<SoapRecord>) {
    let record = match soap {
        Field::Absent => return,
        Field::Malformed(_) => SoapRecord::default(),
        Field::Valid(record) => record.clone(),
    };

    panels.subjective = format_section(&record.subjective);
    panels.objective = format_section(&record.objective);
    panels.assessment = format_section(&record.assessment);
    panels.plan = format_section(&record.plan);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn field<T: notetaker_core::payload::FromPayload>(value: Value) -> Field<T> {
        Field::resolve(Some(&value))
    }

    #[test]
    fn test_render_summary_replaces_text() {
        let mut panel = SummaryPanel { text: "stale".to_string() };
        render_summary(&mut panel, &Field::Absent);
        assert_eq!(panel.text, "No summary available.");

        render_summary(&mut panel, &field(json!({"Patient_Name": "Jane Doe"})));
        assert!(panel.text.starts_with("Patient Name:\nJane Doe\n\nSymptoms:\n- Not mentioned"));
    }

    #[test]
    fn test_render_summary_keeps_markup_literal() {
        let mut panel = SummaryPanel::default();
        render_summary(&mut panel, &field(json!({"Patient_Name": "<img src=x onerror=alert(1)>"})));
        assert!(panel.text.contains("<img src=x onerror=alert(1)>"));
    }

    #[test]
    fn test_render_sentiment_classes() {
        let cases = [
            ("Anxious", SentimentStyle::Anxious),
            ("Reassured", SentimentStyle::Reassured),
            ("Calm", SentimentStyle::Neutral),
        ];

        for (raw, expected) in cases {
            let mut label = SentimentLabel::default();
            render_sentiment(&mut label, &field(json!(raw)));
            assert_eq!(label.style, expected);
            assert_eq!(label.text, raw);
        }
    }

    #[test]
    fn test_render_sentiment_resets_style() {
        let mut label = SentimentLabel::default();
        render_sentiment(&mut label, &field(json!("Anxious")));
        assert_eq!(label.style, SentimentStyle::Anxious);

        render_sentiment(&mut label, &Field::Absent);
        assert_eq!(label.style, SentimentStyle::Neutral);
        assert_eq!(label.text, "");
    }

    #[test]
    fn test_render_sentiment_malformed_shows_raw() {
        let mut label = SentimentLabel::default();
        render_sentiment(&mut label, &field(json!(3)));
        assert_eq!(label.style, SentimentStyle::Neutral);
        assert_eq!(label.text, "3");
    }

    #[test]
    fn test_render_soap_absent_is_noop() {
        let mut panels = SoapPanels {
            subjective: "S".to_string(),
            objective: "O".to_string(),
            assessment: "A".to_string(),
            plan: "P".to_string(),
        };
        let before = panels.clone();

        render_soap(&mut panels, &Field::Absent);
        assert_eq!(panels, before);

        render_soap(&mut panels, &field(Value::Null));
        assert_eq!(panels, before);
    }

    #[test]
    fn test_render_soap_missing_section() {
        let mut panels = SoapPanels::default();
        render_soap(
            &mut panels,
            &field(json!({
                "Subjective": {"Chief_Complaint": "Headache", "History_of_Present_Illness": "Two days"},
                "Objective": {"Physical_Exam": ""},
                "Plan": {"Treatment": "Rest", "Follow_Up": "One week"}
            })),
        );

        assert_eq!(panels.subjective, "Chief Complaint: Headache\nHistory of Present Illness: Two days");
        assert_eq!(panels.objective, "Physical Exam: ");
        assert_eq!(panels.assessment, "Not documented.");
        assert_eq!(panels.plan, "Treatment: Rest\nFollow Up: One week");
    }

    #[test]
    fn test_render_soap_malformed_note() {
        let mut panels = SoapPanels {
            subjective: "S".to_string(),
            objective: "O".to_string(),
            assessment: "A".to_string(),
            plan: "P".to_string(),
        };
        render_soap(&mut panels, &field(json!("not an object")));
        assert_eq!(panels, SoapPanels::default());
    }
}
