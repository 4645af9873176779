//! Status messages attached to rendered views.
//!
//! Non-fatal conditions (skipped source rows, cells shown with their raw
//! fallback, bare tag segments) never interrupt a render; they surface here
//! instead, as messages on the view result.

use serde::{Deserialize, Serialize};

/// Severity level for status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Informational message (neutral)
    Info,
    /// Warning message (attention needed)
    Warning,
    /// Error message (something went wrong)
    Error,
}

impl MessageLevel {
    /// The terminal style used for this level.
    pub fn style(&self) -> console::Style {
        match self {
            MessageLevel::Info => console::Style::new().dim(),
            MessageLevel::Warning => console::Style::new().yellow(),
            MessageLevel::Error => console::Style::new().red(),
        }
    }
}

impl std::fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageLevel::Info => write!(f, "info"),
            MessageLevel::Warning => write!(f, "warning"),
            MessageLevel::Error => write!(f, "error"),
        }
    }
}

/// A status message with severity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The severity level
    pub level: MessageLevel,
    /// The message text
    pub text: String,
}

impl Message {
    /// Create a new message.
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Create an info message.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, text)
    }

    /// Create a warning message.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, text)
    }

    /// Create an error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, text)
    }
}
