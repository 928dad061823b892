//! Locale tables
//!
//! A locale table maps a dotted message key (`"length.min"`) to a template
//! containing `:placeholder` tokens.

use crate::{I18nError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Messages for a single locale, keyed by dotted message key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTable {
    messages: HashMap<String, String>,
}

impl LocaleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(key, template)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Parse a JSON document.
    ///
    /// Nested objects become dotted keys, so
    /// `{"length": {"min": "..."}}` defines `length.min`.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Build a table from an already parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(root) = value else {
            return Err(I18nError::ParseError(
                "top level of a locale table must be an object".to_string(),
            ));
        };

        let mut table = Self::new();
        for (key, entry) in root {
            table.flatten(key.clone(), entry)?;
        }
        Ok(table)
    }

    /// Load a JSON locale file from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(I18nError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Locale file not found: {:?}", path),
            )));
        }

        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn flatten(&mut self, key: String, entry: &Value) -> Result<()> {
        match entry {
            Value::String(template) => {
                self.messages.insert(key, template.clone());
                Ok(())
            }
            Value::Object(group) => {
                for (sub_key, sub_entry) in group {
                    self.flatten(format!("{}.{}", key, sub_key), sub_entry)?;
                }
                Ok(())
            }
            _ => Err(I18nError::InvalidMessage { key }),
        }
    }

    /// Add or replace a message.
    pub fn add(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }

    /// Builder form of [`LocaleTable::add`].
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.add(key, template);
        self
    }

    /// Get a message template.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LocaleTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
