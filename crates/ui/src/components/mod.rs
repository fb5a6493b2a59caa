pub mod footer;
pub mod header;
pub mod panels;
pub mod transcript;

pub use footer::Footer;
pub use header::Header;
pub use panels::{SentimentPanel, SoapPanel, SummaryPanel};
pub use transcript::Transcript;
