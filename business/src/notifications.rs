//! Toast notification state.
//!
//! The notification sink of the system: commands and poll steps push
//! toasts here and the UI renders (and dismisses) them. Every operation
//! outcome, success or failure, produces exactly one toast. Toasts are
//! stamped from the virtual [`Time`] clock so tests can pin them.
//!
//! [`Time`]: fincontrol_states::Time

use std::any::Any;

use chrono::{DateTime, Utc};
use fincontrol_states::State;

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    /// Cautionary outcome (e.g. a user was deactivated).
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub severity: Severity,
    pub dismissible: bool,
    /// When the toast was raised.
    pub at: DateTime<Utc>,
}

/// Queue of toasts awaiting display/dismissal.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, title: impl Into<String>, severity: Severity, at: DateTime<Utc>) {
        self.items.push(Toast {
            title: title.into(),
            severity,
            dismissible: true,
            at,
        });
    }

    pub fn push_success(&mut self, title: impl Into<String>, at: DateTime<Utc>) {
        self.push(title, Severity::Success, at);
    }

    pub fn push_error(&mut self, title: impl Into<String>, at: DateTime<Utc>) {
        self.push(title, Severity::Error, at);
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl State for Toasts {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Box<dyn Any + Send> {
        Box::new(self.clone())
    }
}
