//! Message localization for propval
//!
//! - **Locale tables**: dotted message keys mapped to `:placeholder` templates,
//!   built in code or loaded from JSON
//! - **Translation**: per-key fallback to the built-in English table, then to
//!   the key itself
//! - **Active locale**: one process-wide table, replaceable at startup
//!
//! # Quick Start
//!
//! ```rust
//! use propval_i18n::{LocaleTable, Translator};
//!
//! let table = LocaleTable::from_pairs([("required", "\":paramName\" fehlt")]);
//! let translator = Translator::new(table);
//!
//! assert_eq!(
//!     translator.translate("required", &[("paramName", "login")]),
//!     "\"login\" fehlt"
//! );
//! // Keys missing from the table fall back to English
//! assert_eq!(
//!     translator.translate("array", &[("paramName", "tags")]),
//!     "The \"tags\" must be an array"
//! );
//! ```
//!
//! # Loading a locale at startup
//!
//! ```rust,no_run
//! use propval_i18n::{LocaleTable, set_locale};
//!
//! let table = LocaleTable::load_from_file("locales/pt.json")?;
//! set_locale(table);
//! # Ok::<(), propval_i18n::I18nError>(())
//! ```

mod defaults;
mod error;
mod global;
mod table;
mod translator;

pub use defaults::default_table;
pub use error::I18nError;
pub use global::{current_locale, restore_default_locale, set_locale};
pub use table::LocaleTable;
pub use translator::{Translator, interpolate, translate};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        I18nError, LocaleTable, Result, Translator, current_locale, restore_default_locale,
        set_locale, translate,
    };
}
