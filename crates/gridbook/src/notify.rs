//! Notification boundary
//!
//! Every user-facing outcome, success or validation failure, is a
//! `{title, description, severity}` triple handed to whatever toast or
//! status surface the host application provides. Engine errors stop
//! here: nothing in this crate aborts the process.

use std::fmt;

use gridbook_core::Error;

/// How prominently the host should surface a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine outcome
    Info,
    /// Validation or load failure
    Error,
}

/// A user-facing outcome, ready for a toast or status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    /// A routine success notification
    pub fn success<T: Into<String>, D: Into<String>>(title: T, description: D) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    /// A failure notification
    pub fn error<T: Into<String>, D: Into<String>>(title: T, description: D) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }

    /// Translate an engine error into its user-facing triple
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::EmptySelection(_) => Notification::error(
                "Invalid selection",
                "Please specify a valid column and row range",
            ),
            Error::EmptyQuery => {
                Notification::error("Find text is empty", "Please enter text to find")
            }
            Error::StructuralLimit(reason) => {
                Notification::error("Operation not allowed", *reason)
            }
            Error::CellOutOfBounds { .. } => {
                Notification::error("Invalid cell", err.to_string())
            }
            Error::InvalidFormat(_) => Notification::error(
                "Error loading spreadsheet",
                "The selected file is not a valid spreadsheet",
            ),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// The external collaborator that delivers notifications
///
/// The engine never renders; hosts implement this once and receive
/// every outcome through it.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// A notifier that collects everything it receives; handy in tests
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    pub notifications: Vec<Notification>,
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
