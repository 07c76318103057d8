//! Lookup tables: flat word maps, or word maps partitioned by locale.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::error::ExchangeError;

/// Word to replacement mapping.
pub type WordMap = HashMap<String, String>;

/// A parsed lookup table.
///
/// A JSON object whose values are all strings is `Flat`; one whose values are
/// all objects of strings is `Localized`. `{}` parses as an empty `Flat` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LookupTable {
    Flat(WordMap),
    Localized(HashMap<String, WordMap>),
}

impl LookupTable {
    /// Parse a lookup table from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ExchangeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Interpret an already-parsed JSON value as a lookup table.
    pub fn from_json_value(value: Value) -> Result<Self, ExchangeError> {
        if !value.is_object() {
            return Err(ExchangeError::InvalidLookup(
                "top level must be a JSON object".into(),
            ));
        }
        serde_json::from_value(value).map_err(|_| {
            ExchangeError::InvalidLookup(
                "values must be all strings, or all objects of strings".into(),
            )
        })
    }

    /// Read and parse a lookup JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExchangeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&content)?;
        tracing::debug!("loaded lookup from {} ({} keys)", path.display(), table.len());
        Ok(table)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(words) => words.len(),
            Self::Localized(locales) => locales.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted locale names. Empty for a flat table.
    pub fn locales(&self) -> Vec<&str> {
        let mut names: Vec<&str> = match self {
            Self::Flat(_) => Vec::new(),
            Self::Localized(locales) => locales.keys().map(String::as_str).collect(),
        };
        names.sort_unstable();
        names
    }

    /// Resolve the active word map for an optional target locale.
    ///
    /// The empty-table check runs before the target check. An empty target
    /// counts as no target. A target on a flat table is always
    /// `MissingLocale`, even when it matches a word key, since a flat table
    /// holds no locale maps.
    pub fn select(&self, target: Option<&str>) -> Result<WordMap, ExchangeError> {
        if self.is_empty() {
            return Err(ExchangeError::EmptyLookup);
        }
        match (self, target.filter(|t| !t.is_empty())) {
            (Self::Flat(words), None) => Ok(words.clone()),
            // Top-level values are maps, so no word resolves to a string.
            (Self::Localized(_), None) => Ok(WordMap::new()),
            (Self::Localized(locales), Some(target)) => locales
                .get(target)
                .cloned()
                .ok_or_else(|| ExchangeError::MissingLocale(target.to_string())),
            (Self::Flat(_), Some(target)) => Err(ExchangeError::MissingLocale(target.to_string())),
        }
    }
}
