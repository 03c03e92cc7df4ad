//! View-state controllers for the three pages and the drag interaction
//! engine behind them. Controllers own a local copy of their collection,
//! mutate it optimistically where a gesture demands immediate feedback, and
//! fall back to a full refetch when a commit fails.

use std::sync::{Arc, Mutex};

pub mod assessments;
pub mod candidates;
pub mod jobs;
pub mod reorder;

pub use assessments::AssessmentsController;
pub use candidates::CandidatesController;
pub use jobs::{JobsController, StatusFilter};

/// Lifecycle of a page controller: blocking-loading until the first fetch
/// resolves, then ready for interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient user-facing message, the toast seam of a frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Trait describing the outbound notification hook controllers report through.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Blocking yes/no prompt gating destructive actions.
pub trait ConfirmGate: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Collects notifications so tests can assert integration boundaries.
#[derive(Default, Clone)]
pub struct MemoryNotifier {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.events()
            .into_iter()
            .filter(|notification| notification.severity == Severity::Error)
            .collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
    }
}

/// Confirms every prompt. Used by tests and the scripted demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmGate for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Declines every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineAll;

impl ConfirmGate for DeclineAll {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

/// Case-insensitive substring match over the designated text fields.
pub(crate) fn matches_query(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
