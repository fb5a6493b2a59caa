mod renderer;
mod state;

pub use renderer::{TranscriptRenderer, wrap_text};
pub use state::Transcript;
