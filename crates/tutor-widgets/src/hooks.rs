//! Contact and booking hooks supplied by the host

use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::WidgetError;

/// User intent surfaced by a card's action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Contact,
    Book,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Contact => "contact",
            Intent::Book => "book",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Contact => "Contact",
            Intent::Book => "Book",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contact" => Ok(Intent::Contact),
            "book" => Ok(Intent::Book),
            other => Err(WidgetError::UnknownIntent(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HookError(pub String);

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type HookResult = Result<(), HookError>;

type Hook = Arc<dyn Fn(&str) -> HookResult + Send + Sync>;

/// Outcome of a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The hook ran and succeeded
    Invoked,
    /// No hook registered for the intent
    Unhandled,
    /// The hook returned an error or panicked
    Failed(String),
    /// The card has no rendered view to click on
    NotMounted,
}

impl Dispatch {
    pub fn is_invoked(&self) -> bool {
        matches!(self, Dispatch::Invoked)
    }
}

/// Callbacks invoked with a tutor id. Both default to absent, in which
/// case clicks are no-ops.
#[derive(Clone, Default)]
pub struct TutorHooks {
    contact: Option<Hook>,
    book: Option<Hook>,
}

impl TutorHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_contact<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> HookResult + Send + Sync + 'static,
    {
        self.contact = Some(Arc::new(hook));
        self
    }

    pub fn on_book<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> HookResult + Send + Sync + 'static,
    {
        self.book = Some(Arc::new(hook));
        self
    }

    pub fn handles(&self, intent: Intent) -> bool {
        self.hook(intent).is_some()
    }

    fn hook(&self, intent: Intent) -> Option<&Hook> {
        match intent {
            Intent::Contact => self.contact.as_ref(),
            Intent::Book => self.book.as_ref(),
        }
    }

    /// Invoke the hook for `intent`. Failures are logged and absorbed.
    pub fn dispatch(&self, intent: Intent, id: &str) -> Dispatch {
        let Some(hook) = self.hook(intent) else {
            tracing::debug!(%intent, id, "No hook registered");
            return Dispatch::Unhandled;
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| hook(id)));
        match outcome {
            Ok(Ok(())) => Dispatch::Invoked,
            Ok(Err(err)) => {
                tracing::warn!(%intent, id, error = %err, "Hook failed");
                Dispatch::Failed(err.to_string())
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(%intent, id, panic = %message, "Hook panicked");
                Dispatch::Failed(message)
            }
        }
    }
}

impl fmt::Debug for TutorHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TutorHooks")
            .field("contact", &self.contact.is_some())
            .field("book", &self.book.is_some())
            .finish()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "hook panicked".to_string()
    }
}
