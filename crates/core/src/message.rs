use chrono::{DateTime, Local};

/// Who wrote a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Patient,
    Physician,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Physician => "Physician",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single transcript message. Fields are read-only once created.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    role: Role,
    text: String,
    sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self { role, text: text.into(), sent_at: Local::now() }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `HH:MM` label shown next to the role
    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}
