//! Flat message catalog for the active language.
//!
//! The catalog is populated once by the caller (the form layer loads the
//! per-language JSON files) and consulted read-only while building and
//! rendering a document.

use serde::Deserialize;
use std::collections::HashMap;

/// A flat mapping from message key to localized string.
///
/// A missing key is a recoverable condition: `get` returns the key itself,
/// which renders visibly broken but never blocks document generation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a message, falling back to the key itself when the
    /// translation is missing.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        match self.messages.get(key) {
            Some(value) => value.as_str(),
            None => key,
        }
    }

    /// Returns the translation only if it actually exists.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<HashMap<String, String>> for MessageCatalog {
    fn from(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }
}

impl FromIterator<(String, String)> for MessageCatalog {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}
