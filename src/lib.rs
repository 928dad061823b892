// Propval - declarative, localized field validation for request-like data
//
// This library bundles the rule engine, the message catalogue and the
// logging layer behind feature flags.

#[cfg(feature = "validation")]
pub use propval_validation::*;

// Re-export member crates
#[cfg(feature = "log")]
pub use propval_log;

#[cfg(feature = "i18n")]
pub use propval_i18n;

#[cfg(feature = "validation")]
pub use propval_validation;

#[cfg(feature = "i18n")]
pub use propval_i18n::{I18nError, LocaleTable, Translator, restore_default_locale, set_locale};

// Prelude for common imports
pub mod prelude {
    #[cfg(feature = "i18n")]
    pub use propval_i18n::prelude::{LocaleTable, restore_default_locale, set_locale};

    #[cfg(feature = "validation")]
    pub use propval_validation::prelude::*;
}
