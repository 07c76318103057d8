//! Warning sinks for soft failures during resolution.
//!
//! Misses and unrecognised modifiers never fail a call; they are reported
//! through a [`Diagnostics`] implementation injected at construction.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// A non-fatal condition raised while resolving a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// No non-empty replacement exists for the word.
    WordNotFound(String),
    /// A modifier code with an unknown letter.
    UnrecognisedOption(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordNotFound(word) => write!(
                f,
                "Warning: The word to be exchanged '{word}' could not be found in the lookup JSON. \
                 The original word will be used as a fallback."
            ),
            Self::UnrecognisedOption(key) => {
                write!(f, "Warning: An unrecognised option has been supplied '{key}'.")
            }
        }
    }
}

/// Destination for resolver warnings.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, warning: &Warning);
}

/// Default sink: one `tracing` warning per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, warning: &Warning) {
        tracing::warn!("{warning}");
    }
}

/// Discards every warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn warn(&self, _warning: &Warning) {}
}

/// Records warning messages in memory.
#[derive(Debug, Default)]
pub struct CapturedDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl CapturedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A panic mid-push cannot leave the Vec inconsistent.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Diagnostics for CapturedDiagnostics {
    fn warn(&self, warning: &Warning) {
        self.lock().push(warning.to_string());
    }
}
