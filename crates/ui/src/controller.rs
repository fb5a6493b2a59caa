//! Conversation controller: the send/receive state machine.
//!
//! The controller never performs I/O itself. `submit` hands back the request
//! to issue and `complete` applies its outcome, so the same transitions drive
//! the TUI event loop, the one-shot `send` command and the tests.

use notetaker_core::logging::redact_message;
use notetaker_core::{ConversationReply, Result, Role};
use notetaker_providers::{Backend, ChatRequest};

use crate::render::{render_sentiment, render_soap, render_summary};
use crate::state::ChatView;

/// Controller state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControllerState {
    #[default]
    Idle,
    /// At least one exchange has been sent and not completed
    AwaitingReply { in_flight: usize },
}

impl ControllerState {
    pub fn label(&self) -> String {
        match self {
            ControllerState::Idle => "Idle".to_string(),
            ControllerState::AwaitingReply { in_flight } => format!("Awaiting reply ({})", in_flight),
        }
    }
}

/// A request the caller must issue, tagged with its exchange id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub exchange: u64,
    pub request: ChatRequest,
}

/// Outcome of one exchange as delivered back to the controller
#[derive(Debug)]
pub struct Completion {
    pub exchange: u64,
    pub outcome: Result<ConversationReply>,
}

#[derive(Debug)]
pub struct Controller {
    state: ControllerState,
    next_exchange: u64,
    mask_patient_text: bool,
}

impl Controller {
    pub fn new(mask_patient_text: bool) -> Self {
        Self { state: ControllerState::Idle, next_exchange: 1, mask_patient_text }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn in_flight(&self) -> usize {
        match self.state {
            ControllerState::Idle => 0,
            ControllerState::AwaitingReply { in_flight } => in_flight,
        }
    }

    /// Send action. Whitespace-only input is a complete no-op.
    ///
    /// Otherwise appends the patient message, clears the input and returns
    /// the one request to issue. A send while awaiting is allowed.
    pub fn submit(&mut self, view: &mut ChatView) -> Option<OutboundRequest> {
        let message = view.input.buffer().trim().to_string();
        if message.is_empty() {
            return None;
        }

        view.transcript.add_message(Role::Patient, message.clone());
        view.input.add_to_history(message.clone());
        view.input.clear();

        let exchange = self.next_exchange;
        self.next_exchange += 1;
        self.state = ControllerState::AwaitingReply { in_flight: self.in_flight() + 1 };

        tracing::info!(
            exchange,
            message = %redact_message(&message, self.mask_patient_text),
            in_flight = self.in_flight(),
            "sending message"
        );

        Some(OutboundRequest { exchange, request: ChatRequest::new(message) })
    }

    /// Apply one exchange outcome in arrival order; the last completion wins the panels.
    pub fn complete(&mut self, view: &mut ChatView, completion: Completion) {
        let Completion { exchange, outcome } = completion;

        match outcome {
            Ok(reply) => match reply.error.as_deref() {
                Some(error) => tracing::error!(exchange, error = %error, "backend reported an error"),
                None => self.apply_reply(view, exchange, &reply),
            },
            Err(e) => tracing::error!(exchange, error = %e, "exchange failed"),
        }

        self.state = match self.in_flight().saturating_sub(1) {
            0 => ControllerState::Idle,
            in_flight => ControllerState::AwaitingReply { in_flight },
        };
    }

    fn apply_reply(&self, view: &mut ChatView, exchange: u64, reply: &ConversationReply) {
        tracing::info!(
            exchange,
            reply = %redact_message(&reply.physician_reply, self.mask_patient_text),
            "reply received"
        );

        if let Some(record) = reply.summary.valid() {
            let missing = record.missing_fields();
            if !missing.is_empty() {
                tracing::debug!(exchange, missing = ?missing, "summary is missing fields");
            }
        }
        if let Some(intent) = reply.intent.valid() {
            tracing::debug!(exchange, intent = %intent, "reply intent");
        }

        view.transcript.add_message(Role::Physician, reply.physician_reply.clone());
        render_summary(&mut view.summary, &reply.summary);
        render_sentiment(&mut view.sentiment, &reply.sentiment);
        render_soap(&mut view.soap, &reply.soap_note);
    }

    /// Submit and await one exchange inline. Returns `false` when the input was empty.
    pub async fn exchange(&mut self, view: &mut ChatView, backend: &dyn Backend) -> bool {
        let Some(outbound) = self.submit(view) else {
            return false;
        };

        let outcome = backend.chat(&outbound.request).await;
        self.complete(view, Completion { exchange: outbound.exchange, outcome });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InputState;
    use notetaker_core::{Error, SentimentStyle};
    use notetaker_providers::{MockBackend, MockResponse};
    use serde_json::json;

    fn view_with_input(text: &str) -> ChatView {
        ChatView { input: InputState::with_text(text), ..ChatView::default() }
    }

    fn reply(value: serde_json::Value) -> Result<ConversationReply> {
        ConversationReply::from_value(&value)
    }

    #[test]
    fn test_submit_whitespace_is_noop() {
        let mut controller = Controller::new(true);

        for input in ["", " ", "\t\n", "   \r\n  "] {
            let mut view = view_with_input(input);
            assert!(controller.submit(&mut view).is_none());
            assert!(view.transcript.is_empty());
            assert_eq!(view.input.buffer(), input);
            assert_eq!(controller.state(), ControllerState::Idle);
        }
    }

    #[test]
    fn test_submit_echoes_trimmed_message_and_clears_input() {
        let mut controller = Controller::new(true);
        let mut view = view_with_input("  I have a headache \n");

        let outbound = controller.submit(&mut view).unwrap();

        assert_eq!(outbound.request, ChatRequest::new("I have a headache"));
        assert_eq!(view.transcript.pairs(), vec![(Role::Patient, "I have a headache")]);
        assert_eq!(view.input.buffer(), "");
        assert_eq!(controller.state(), ControllerState::AwaitingReply { in_flight: 1 });
    }

    #[test]
    fn test_submit_while_awaiting_is_allowed() {
        let mut controller = Controller::new(true);
        let mut view = view_with_input("first");
        let first = controller.submit(&mut view).unwrap();

        view.input.set_text("second");
        let second = controller.submit(&mut view).unwrap();

        assert_ne!(first.exchange, second.exchange);
        assert_eq!(controller.in_flight(), 2);
        assert_eq!(controller.state().label(), "Awaiting reply (2)");
    }

    #[test]
    fn test_complete_success_renders_everything() {
        let mut controller = Controller::new(true);
        let mut view = view_with_input("I have a headache");
        let outbound = controller.submit(&mut view).unwrap();

        controller.complete(
            &mut view,
            Completion {
                exchange: outbound.exchange,
                outcome: reply(json!({
                    "physician_reply": "Noted.",
                    "sentiment": "Reassured",
                    "summary": {"Patient_Name": "Jane Doe", "Symptoms": ["headache"]},
                    "soap_note": {"Subjective": {"Chief_Complaint": "Headache"}}
                })),
            },
        );

        assert_eq!(view.transcript.pairs(), vec![(Role::Patient, "I have a headache"), (Role::Physician, "Noted.")]);
        assert!(view.summary.text.starts_with("Patient Name:\nJane Doe"));
        assert_eq!(view.sentiment.text, "Reassured");
        assert_eq!(view.sentiment.style, SentimentStyle::Reassured);
        assert_eq!(view.soap.subjective, "Chief Complaint: Headache");
        assert_eq!(view.soap.plan, "Not documented.");
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_complete_full_reply_panels() {
        let mut controller = Controller::new(true);
        let mut view = view_with_input("I have had a fever since Monday");
        let outbound = controller.submit(&mut view).unwrap();

        controller.complete(
            &mut view,
            Completion {
                exchange: outbound.exchange,
                outcome: reply(json!({
                    "physician_reply": "Rest and fluids.",
                    "sentiment": "Reassured",
                    "summary": {
                        "Patient_Name": "Jane Doe",
                        "Symptoms": ["fever", "cough"],
                        "Diagnosis": "Flu",
                        "Treatment": ["rest"],
                        "Current_Status": "Stable",
                        "Prognosis": "Good"
                    },
                    "soap_note": {
                        "Subjective": {"Chief_Complaint": "Fever"},
                        "Objective": {"Temperature": "38.5C"},
                        "Assessment": {"Diagnosis": "Flu"},
                        "Plan": {"Treatment": "Rest", "Follow_Up": "One week"}
                    }
                })),
            },
        );

        insta::assert_snapshot!(view.panels_text(), @r"
        Summary:
        Patient Name:
        Jane Doe

        Symptoms:
        - fever
        - cough

        Diagnosis:
        Flu

        Treatment:
        - rest

        Current Status:
        Stable

        Prognosis:
        Good

        Sentiment: Reassured

        Subjective:
        Chief Complaint: Fever

        Objective:
        Temperature: 38.5C

        Assessment:
        Diagnosis: Flu

        Plan:
        Treatment: Rest
        Follow Up: One week
        ");
    }

    #[test]
    fn test_complete_backend_error_changes_nothing() {
        let mut controller = Controller::new(true);
        let mut view = view_with_input("hello");
        let outbound = controller.submit(&mut view).unwrap();
        let panels_before = view.panels_text();

        controller.complete(
            &mut view,
            Completion {
                exchange: outbound.exchange,
                outcome: reply(json!({"error": "backend unavailable", "physician_reply": "ignored"})),
            },
        );

        assert_eq!(view.transcript.pairs(), vec![(Role::Patient, "hello")]);
        assert_eq!(view.panels_text(), panels_before);
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_complete_transport_error_changes_nothing() {
        let mut controller = Controller::new(true);
        let mut view = view_with_input("hello");
        let outbound = controller.submit(&mut view).unwrap();

        controller.complete(
            &mut view,
            Completion { exchange: outbound.exchange, outcome: Err(Error::Backend("connection refused".into())) },
        );

        assert_eq!(view.transcript.len(), 1);
        assert_eq!(view.summary.text, "No summary available.");
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_complete_out_of_order_last_write_wins() {
        let mut controller = Controller::new(true);
        let mut view = view_with_input("first");
        let first = controller.submit(&mut view).unwrap();
        view.input.set_text("second");
        let second = controller.submit(&mut view).unwrap();

        controller.complete(
            &mut view,
            Completion { exchange: second.exchange, outcome: reply(json!({"physician_reply": "B", "sentiment": "Reassured"})) },
        );
        assert_eq!(controller.state(), ControllerState::AwaitingReply { in_flight: 1 });

        controller.complete(
            &mut view,
            Completion { exchange: first.exchange, outcome: reply(json!({"physician_reply": "A", "sentiment": "Anxious"})) },
        );

        let texts: Vec<&str> = view.transcript.messages().iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["first", "second", "B", "A"]);
        assert_eq!(view.sentiment.text, "Anxious");
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[tokio::test]
    async fn test_exchange_end_to_end_with_null_fields() {
        let backend = MockBackend::new(vec![MockResponse::reply(json!({
            "physician_reply": "Noted.",
            "sentiment": "Anxious",
            "summary": null,
            "soap_note": null
        }))]);
        let mut controller = Controller::new(true);
        let mut view = view_with_input("I have a headache");

        assert!(controller.exchange(&mut view, &backend).await);

        assert_eq!(view.transcript.pairs(), vec![(Role::Patient, "I have a headache"), (Role::Physician, "Noted.")]);
        assert_eq!(view.summary.text, "No summary available.");
        assert_eq!(view.sentiment.text, "Anxious");
        assert_eq!(view.sentiment.style, SentimentStyle::Anxious);
        assert!(view.soap.regions().iter().all(|(_, text)| *text == "Not documented."));
        assert_eq!(backend.requests(), vec![ChatRequest::new("I have a headache")]);
    }

    #[tokio::test]
    async fn test_exchange_backend_error_end_to_end() {
        let backend = MockBackend::new(vec![MockResponse::reply(json!({"error": "backend unavailable"}))]);
        let mut controller = Controller::new(false);
        let mut view = view_with_input("hello");

        assert!(controller.exchange(&mut view, &backend).await);
        assert_eq!(view.transcript.pairs(), vec![(Role::Patient, "hello")]);
        assert_eq!(view.sentiment.text, "");
    }

    #[tokio::test]
    async fn test_exchange_empty_input_sends_nothing() {
        let backend = MockBackend::new(vec![]);
        let mut controller = Controller::new(true);
        let mut view = view_with_input("   ");

        assert!(!controller.exchange(&mut view, &backend).await);
        assert!(backend.requests().is_empty());
    }
}
