use std::sync::Arc;

use notetaker_core::{Field, Role, SentimentStyle, SummaryRecord};
use notetaker_providers::MockBackend;
use notetaker_ui::app::render_frame;
use notetaker_ui::{App, KeyAction, SentimentLabel, Theme, render_summary};
use serde_json::json;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn test_app() -> App {
    App::new(Arc::new(MockBackend::new(vec![])), "http://127.0.0.1:5000/chat", true)
}

fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| render_frame(app, f)).unwrap();
    terminal
}

fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let mut s = String::new();
    for y in 0..buffer.area().height {
        for x in 0..buffer.area().width {
            s.push(buffer[(x, y)].symbol().chars().next().unwrap_or(' '));
        }
        s.push('\n');
    }
    s
}

#[test]
fn test_render_initial_screen() {
    let mut app = test_app();
    let terminal = draw(&mut app, 120, 40);
    let content = buffer_to_string(terminal.backend().buffer());

    assert!(content.contains("Physician Notetaker"));
    assert!(content.contains("Idle"));
    assert!(content.contains("Transcript"));
    assert!(content.contains("No summary available."));
    assert!(content.contains("Sentiment"));
    for title in ["Subjective", "Objective", "Assessment", "Plan"] {
        assert!(content.contains(title), "missing {}", title);
    }
    assert_eq!(content.matches("Not documented.").count(), 4);
    assert!(content.contains("[Enter] send"));
}

#[test]
fn test_render_messages_and_markup_literal() {
    let mut app = test_app();
    app.view_mut().transcript.add_message(Role::Patient, "I have a headache");
    app.view_mut().transcript.add_message(Role::Physician, "<b>Noted.</b>");

    let terminal = draw(&mut app, 120, 40);
    let content = buffer_to_string(terminal.backend().buffer());

    assert!(content.contains("[Patient]"));
    assert!(content.contains("I have a headache"));
    assert!(content.contains("[Physician]"));
    assert!(content.contains("<b>Noted.</b>"));
}

#[test]
fn test_render_sentiment_color() {
    let mut app = test_app();
    app.view_mut().sentiment = SentimentLabel { text: "Anxious".to_string(), style: SentimentStyle::Anxious };

    let terminal = draw(&mut app, 120, 40);
    let buffer = terminal.backend().buffer();
    let content = buffer_to_string(buffer);

    let (row, line) = content.lines().enumerate().find(|(_, l)| l.contains("Anxious")).unwrap();
    let col = line[..line.find("Anxious").unwrap()].chars().count();
    assert_eq!(buffer[(col as u16, row as u16)].fg, Theme::YELLOW);
}

#[test]
fn test_render_narrow_terminal_stacks_panels() {
    let mut app = test_app();
    app.view_mut().transcript.add_message(Role::Patient, "hello");

    let terminal = draw(&mut app, 80, 60);
    let content = buffer_to_string(terminal.backend().buffer());
    let row_of = |needle: &str| content.lines().position(|l| l.contains(needle)).unwrap();

    assert!(row_of("Transcript") < row_of("Summary"));
    assert!(row_of("Transcript") < row_of("Subjective"));
    assert_eq!(row_of("Summary"), row_of("Subjective"));
}

#[test]
fn test_render_input_line() {
    let mut app = test_app();
    app.view_mut().input.set_text("my throat hurts");

    let terminal = draw(&mut app, 120, 40);
    let content = buffer_to_string(terminal.backend().buffer());
    assert!(content.contains("my throat hurts"));
    assert!(!content.contains("Describe how you are feeling"));
}

#[test]
fn test_render_full_summary_fits() {
    let mut app = test_app();
    let summary: Field<SummaryRecord> = Field::resolve(Some(&json!({
        "Patient_Name": "Jane Doe",
        "Symptoms": ["fever", "cough"],
        "Diagnosis": "Flu",
        "Treatment": ["rest"],
        "Current_Status": "Stable",
        "Prognosis": "Good"
    })));
    render_summary(&mut app.view_mut().summary, &summary);

    let terminal = draw(&mut app, 120, 40);
    let content = buffer_to_string(terminal.backend().buffer());
    let lines: Vec<&str> = content.lines().collect();

    let row = lines.iter().position(|l| l.contains("Prognosis:")).unwrap();
    let col = lines[row][..lines[row].find("Prognosis:").unwrap()].chars().count();
    let below: String = lines[row + 1].chars().skip(col).collect();
    assert!(below.starts_with("Good"));
    assert!(!content.contains("more)"));
}

#[test]
fn test_render_multiline_soap_sections_fit() {
    let mut app = test_app();
    app.view_mut().soap.subjective = (1..=8).map(|i| format!("Note {}: detail", i)).collect::<Vec<_>>().join("\n");

    let terminal = draw(&mut app, 120, 40);
    let content = buffer_to_string(terminal.backend().buffer());

    for i in 1..=8 {
        assert!(content.contains(&format!("Note {}: detail", i)), "missing note {}", i);
    }
    assert_eq!(content.matches("Not documented.").count(), 3);
}

#[test]
fn test_render_overflowing_panel_is_marked() {
    let mut app = test_app();
    app.view_mut().soap.plan = (1..=60).map(|i| format!("Step {}", i)).collect::<Vec<_>>().join("\n");

    let terminal = draw(&mut app, 120, 40);
    let content = buffer_to_string(terminal.backend().buffer());
    assert!(content.contains("Plan (+"));
}

#[test]
fn test_page_up_reaches_start_of_long_message() {
    let mut app = test_app();
    let words = vec!["word"; 1200].join(" ");
    app.view_mut().transcript.add_message(Role::Patient, format!("START {} END", words));

    let content = buffer_to_string(draw(&mut app, 120, 30).backend().buffer());
    assert!(content.contains("END"));
    assert!(!content.contains("START"));

    for _ in 0..20 {
        app.handle_action(KeyAction::PageUp);
    }
    assert!(app.view().transcript.scroll_offset() > 20);

    let content = buffer_to_string(draw(&mut app, 120, 30).backend().buffer());
    assert!(content.contains("START"));
    assert!(content.contains("[Patient]"));

    for _ in 0..20 {
        app.handle_action(KeyAction::PageDown);
    }
    let content = buffer_to_string(draw(&mut app, 120, 30).backend().buffer());
    assert!(content.contains("END"));
}
