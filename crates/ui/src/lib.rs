pub mod app;
pub mod components;
pub mod controller;
pub mod event_handler;
pub mod layout;
pub mod render;
pub mod state;
pub mod theme;
pub mod transcript;

pub use app::App;
pub use controller::{Completion, Controller, ControllerState, OutboundRequest};
pub use event_handler::{EventHandler, KeyAction};
pub use render::{render_sentiment, render_soap, render_summary};
pub use state::{ChatView, InputState, SentimentLabel, SoapPanels, SummaryPanel};
pub use theme::Theme;
pub use transcript::{Transcript, TranscriptRenderer};
