//! Process-wide active locale
//!
//! Exactly one table is active at a time. Rule construction reads it through
//! [`Translator::current`](crate::Translator::current); configure it once at
//! startup; concurrent replacement while rules are being built has no defined
//! ordering.

use crate::{LocaleTable, default_table};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use propval_log::{debug, info, targets};
use std::sync::Arc;

static ACTIVE: Lazy<RwLock<Arc<LocaleTable>>> = Lazy::new(|| RwLock::new(default_table()));

/// Replace the active locale table wholesale.
///
/// The new table is not merged with the defaults; missing keys fall back to
/// the built-in English table one key at a time when messages are resolved.
pub fn set_locale(table: impl Into<Arc<LocaleTable>>) {
    let table = table.into();
    info!(
        target: targets::LOCALE,
        "Active locale replaced ({} messages)",
        table.len()
    );
    *ACTIVE.write() = table;
}

/// Make the built-in English table active again.
pub fn restore_default_locale() {
    debug!(target: targets::LOCALE, "Restoring default locale");
    *ACTIVE.write() = default_table();
}

/// Snapshot of the active locale table.
pub fn current_locale() -> Arc<LocaleTable> {
    ACTIVE.read().clone()
}

/// Serializes tests that touch the process-wide locale.
#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Translator, translate};

    #[test]
    fn test_default_is_english() {
        let _guard = TEST_LOCK.lock();
        restore_default_locale();
        assert!(Arc::ptr_eq(&current_locale(), &default_table()));
    }

    #[test]
    fn test_set_and_restore() {
        let _guard = TEST_LOCK.lock();
        set_locale(LocaleTable::from_pairs([("required", "X")]));
        assert_eq!(current_locale().get("required"), Some("X"));
        assert_eq!(translate("required", &[("paramName", "a")], None), "X");

        restore_default_locale();
        assert_eq!(
            translate("required", &[("paramName", "a")], None),
            "The \"a\" is required"
        );
    }

    #[test]
    fn test_translator_snapshot_survives_locale_change() {
        let _guard = TEST_LOCK.lock();
        set_locale(LocaleTable::from_pairs([("required", "before")]));
        let translator = Translator::current();

        set_locale(LocaleTable::from_pairs([("required", "after")]));
        assert_eq!(translator.translate("required", &[("paramName", "a")]), "before");
        assert_eq!(
            Translator::current().translate("required", &[("paramName", "a")]),
            "after"
        );

        restore_default_locale();
    }
}
