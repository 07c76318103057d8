//! Resolver factory and resolver.
//!
//! [`build`] validates a lookup table against an optional target locale and
//! returns a [`Resolver`] bound to the selected word map. A resolver looks a
//! word up and folds modifier codes over the replacement, left to right.


use std::fmt;
use std::sync::Arc;

use crate::diagnostics::{Diagnostics, TracingDiagnostics, Warning};
use crate::error::ExchangeError;
use crate::lookup::{LookupTable, WordMap};
use crate::modifier::Modifier;

/// Build a resolver that reports warnings through `tracing`.
pub fn build(lookup: &LookupTable, target: Option<&str>) -> Result<Resolver, ExchangeError> {
    Resolver::with_diagnostics(lookup, target, Arc::new(TracingDiagnostics))
}

/// Immutable word resolver. Safe to share across threads.
pub struct Resolver {
    words: WordMap,
    locale: Option<String>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Resolver {
    /// Build a resolver with an injected warning sink.
    ///
    /// Fails with [`ExchangeError::EmptyLookup`] when the table has no keys, and
    /// with [`ExchangeError::MissingLocale`] when `target` names no locale.
    pub fn with_diagnostics(
        lookup: &LookupTable,
        target: Option<&str>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Result<Self, ExchangeError> {
        let words = lookup.select(target)?;
        let locale = target.filter(|t| !t.is_empty()).map(str::to_string);
        tracing::debug!(
            "resolver ready: {} words, locale {}",
            words.len(),
            locale.as_deref().unwrap_or("<none>")
        );
        Ok(Self {
            words,
            locale,
            diagnostics,
        })
    }

    /// Resolve `word`, then apply `modifiers` in order.
    ///
    /// A missing or empty replacement warns and returns `word` as-is, without
    /// applying any modifier. Unrecognised modifier codes warn and are skipped.
    pub fn resolve<I>(&self, word: &str, modifiers: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let Some(replacement) = self.replacement(word) else {
            self.diagnostics.warn(&Warning::WordNotFound(word.to_string()));
            return word.to_string();
        };

        modifiers
            .into_iter()
            .map(|code| Modifier::parse(code.as_ref()))
            .fold(replacement.to_string(), |text, modifier| {
                if !modifier.is_known() {
                    let key = modifier.code().to_string();
                    self.diagnostics.warn(&Warning::UnrecognisedOption(key));
                    return text;
                }
                modifier.apply(text)
            })
    }

    /// Whether `word` has a non-empty replacement.
    pub fn contains(&self, word: &str) -> bool {
        self.replacement(word).is_some()
    }

    /// Number of entries in the active word map.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The selected locale, if any.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    // Empty replacements count as misses.
    fn replacement(&self, word: &str) -> Option<&str> {
        self.words
            .get(word)
            .map(String::as_str)
            .filter(|r| !r.is_empty())
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("words", &self.words.len())
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
