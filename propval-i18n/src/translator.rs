//! Message translation
//!
//! Resolves a message key against a locale table, falling back per key to
//! the built-in English table and finally to the key itself, then fills in
//! `:placeholder` tokens.

use crate::{LocaleTable, current_locale, default_table};
use std::sync::Arc;

/// Resolves message keys into rendered messages.
///
/// Cheap to clone: both tables are shared. A translator captures its tables
/// when created, so replacing the process-wide locale later does not change
/// what an existing translator produces.
#[derive(Debug, Clone)]
pub struct Translator {
    active: Arc<LocaleTable>,
    fallback: Arc<LocaleTable>,
}

impl Translator {
    /// Translate with `table`, falling back to the built-in English table.
    pub fn new(table: impl Into<Arc<LocaleTable>>) -> Self {
        Self {
            active: table.into(),
            fallback: default_table(),
        }
    }

    /// Translate with the built-in English table only.
    pub fn english() -> Self {
        Self::new(default_table())
    }

    /// Snapshot of the process-wide active locale.
    pub fn current() -> Self {
        Self::new(current_locale())
    }

    /// Replace the fallback table.
    pub fn with_fallback(mut self, table: impl Into<Arc<LocaleTable>>) -> Self {
        self.fallback = table.into();
        self
    }

    pub fn active(&self) -> &LocaleTable {
        &self.active
    }

    /// The template for `key`, or `key` itself when no table defines it.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.active
            .get(key)
            .or_else(|| self.fallback.get(key))
            .unwrap_or(key)
    }

    /// Resolve `key` and interpolate `params` into it.
    pub fn translate<K, V>(&self, key: &str, params: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        interpolate(self.resolve(key), params)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::english()
    }
}

/// Translate `key` with an explicit table, or with the active locale when
/// `locale` is `None`.
pub fn translate<K, V>(key: &str, params: &[(K, V)], locale: Option<&LocaleTable>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let fallback = default_table();
    let active;
    let table = match locale {
        Some(table) => table,
        None => {
            active = current_locale();
            &*active
        }
    };

    let template = table
        .get(key)
        .or_else(|| fallback.get(key))
        .unwrap_or(key);
    interpolate(template, params)
}

/// Replace every `:name` token in `template` with its value.
///
/// Names are matched literally, longest first, in a single left-to-right
/// pass. Substituted values are never rescanned, so a value that itself
/// looks like a token is inserted verbatim. Unknown tokens are left alone.
pub fn interpolate<K, V>(template: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if params.is_empty() || !template.contains(':') {
        return template.to_string();
    }

    let mut names: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_ref()))
        .filter(|(k, _)| !k.is_empty())
        .collect();
    // stable: the first occurrence of a duplicated name wins
    names.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find(':') {
        rendered.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        match names.iter().find(|(name, _)| after.starts_with(name)) {
            Some((name, value)) => {
                rendered.push_str(value);
                rest = &after[name.len()..];
            }
            None => {
                rendered.push(':');
                rest = after;
            }
        }
    }
    rendered.push_str(rest);
    rendered
}
