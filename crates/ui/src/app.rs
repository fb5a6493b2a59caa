mod event_loop;
mod rendering;

pub use event_loop::run;
pub use rendering::render_frame;

use std::sync::Arc;

use crossterm::event::Event;
use notetaker_providers::Backend;
use tokio::sync::mpsc;

use crate::controller::{Completion, Controller};
use crate::event_handler::{EventHandler, KeyAction};
use crate::state::ChatView;

/// Transcript lines moved per PageUp/PageDown
const PAGE_LINES: usize = 10;

/// Main TUI application
///
/// Owns the rendering context and the controller. Exchanges run as spawned
/// tasks and report back through `completion_rx`; completions are applied
/// in the order they arrive.
pub struct App {
    view: ChatView,
    controller: Controller,
    backend: Arc<dyn Backend>,
    backend_label: String,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    pub should_exit: bool,
}

impl App {
    pub fn new(backend: Arc<dyn Backend>, backend_label: impl Into<String>, mask_patient_text: bool) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            view: ChatView::new(),
            controller: Controller::new(mask_patient_text),
            backend,
            backend_label: backend_label.into(),
            completion_tx,
            completion_rx,
            should_exit: false,
        }
    }

    pub fn view(&self) -> &ChatView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ChatView {
        &mut self.view
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn backend_label(&self) -> &str {
        &self.backend_label
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        if let Some(action) = EventHandler::handle_key_event(key, &mut self.view.input) {
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Send => self.send(),
            KeyAction::PageUp => self.view.transcript.scroll_up(PAGE_LINES),
            KeyAction::PageDown => self.view.transcript.scroll_down(PAGE_LINES),
            KeyAction::Quit => self.should_exit = true,
        }
    }

    /// Submit the input and spawn its exchange
    pub fn send(&mut self) {
        let Some(outbound) = self.controller.submit(&mut self.view) else {
            return;
        };

        let backend = Arc::clone(&self.backend);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let outcome = backend.chat(&outbound.request).await;
            if tx.send(Completion { exchange: outbound.exchange, outcome }).is_err() {
                tracing::debug!(exchange = outbound.exchange, "app closed before exchange completed");
            }
        });
    }

    /// Wait for the next finished exchange
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completion_rx.recv().await
    }

    pub fn handle_completion(&mut self, completion: Completion) {
        self.controller.complete(&mut self.view, completion);
    }
}
