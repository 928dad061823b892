//! Declarative field validation for request-like data
//!
//! Compose a list of rules against the fields of a JSON data bag, run them
//! all, and get back every failure in declaration order.
//!
//! # Examples
//!
//! ## Validating a bag
//!
//! ```
//! use propval_validation::{RuleFactory, optional, validate};
//! use serde_json::json;
//!
//! let rules = RuleFactory::english();
//! let result = validate(
//!     &json!({ "login": "netto", "email": "not-an-email" }),
//!     &[
//!         rules.presence("login"),
//!         rules.email("email"),
//!         optional(rules.is_url("homepage")),
//!     ],
//! );
//!
//! assert!(!result.valid);
//! assert_eq!(result.messages, ["The \"email\" must be a valid email address"]);
//! ```
//!
//! ## Failing fast
//!
//! ```
//! use propval_validation::{Request, assert_all, presence, is_int};
//! use serde_json::json;
//!
//! let request = Request::new()
//!     .with_body(json!({ "name": "netto" }))
//!     .with_query(json!({ "page": "x" }));
//!
//! let error = assert_all(&request, &[presence("name"), is_int("page")]).unwrap_err();
//! assert_eq!(error.to_string(), "The \"page\" must be an integer number");
//! ```
//!
//! ## Options or a custom message
//!
//! ```
//! use propval_validation::{RuleFactory, UuidVersion};
//!
//! let rules = RuleFactory::english();
//! let v4 = rules.uuid_with("id", UuidVersion::V4);
//! let custom = rules.uuid_with("id", "that is not an id");
//!
//! assert_eq!(v4.error_message(), "The \"id\" must be a UUID version \"4\"");
//! assert_eq!(custom.error_message(), "that is not an id");
//! ```

pub mod bag;
pub mod checkers;
pub mod response;

mod assertions;
mod engine;
mod errors;
mod factory;
mod request;
mod rules;

pub use assertions::*;
pub use checkers::{
    CurrencyOptions, CurrencyPattern, FloatOptions, FqdnOptions, IntOptions, IpVersion, IsbnVersion, LengthOptions,
    UrlOptions, UuidVersion,
};
pub use engine::*;
pub use errors::*;
pub use factory::*;
pub use request::*;
pub use response::{ErrorResponse, ResponseFormat};
pub use rules::*;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ErrorResponse, HasBody, HasHeaders, HasParams, HasQuery, LengthOptions, Request, Rule,
        RuleFactory, ValidationError, ValidationResult, assert, assert_all, assert_body,
        assert_headers, assert_params, assert_query, optional, validate, validate_all,
        validate_body, validate_headers, validate_params, validate_query,
    };
}
