// Validation errors

use crate::ValidationResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const ERROR_NAME: &str = "ValidationError";

/// A failed rule: the field it checked and the message it reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field path the rule was bound to
    pub field: String,

    /// Resolved error message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Raised by the assertion layer when a validation run has failures.
///
/// Always carries at least one error; `messages[i]` is `errors[i].message`.
/// Serializes as
/// `{"name": "ValidationError", "message": "...", "messages": [...], "errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ValidationErrorRepr", into = "ValidationErrorRepr")]
pub struct ValidationError {
    messages: Vec<String>,
    errors: Vec<FieldError>,
}

impl ValidationError {
    fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        let messages = errors.iter().map(|e| e.message.clone()).collect();
        Some(Self { messages, errors })
    }

    /// Always `"ValidationError"`.
    pub fn name(&self) -> &'static str {
        ERROR_NAME
    }

    /// All messages joined with `", "`.
    pub fn message(&self) -> String {
        self.messages.join(", ")
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Number of failed rules
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors reported for a specific field
    pub fn errors_for(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": ERROR_NAME,
            "message": self.message(),
            "messages": self.messages,
            "errors": self.errors,
        })
    }

    /// Consume into the ordered field errors.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl TryFrom<ValidationResult> for ValidationError {
    type Error = ValidationResult;

    /// Fails, handing the result back, when the result has no errors.
    ///
    /// Messages are rebuilt from `errors`; the result's own `messages` and
    /// `valid` are not trusted.
    fn try_from(result: ValidationResult) -> Result<Self, Self::Error> {
        if result.errors.is_empty() {
            return Err(result);
        }
        let messages = result.errors.iter().map(|e| e.message.clone()).collect();
        Ok(Self {
            messages,
            errors: result.errors,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages.join(", "))
    }
}

impl std::error::Error for ValidationError {}

#[derive(Serialize, Deserialize)]
struct ValidationErrorRepr {
    name: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    messages: Vec<String>,
    errors: Vec<FieldError>,
}

impl From<ValidationError> for ValidationErrorRepr {
    fn from(error: ValidationError) -> Self {
        Self {
            name: ERROR_NAME.to_string(),
            message: error.message(),
            messages: error.messages,
            errors: error.errors,
        }
    }
}

impl TryFrom<ValidationErrorRepr> for ValidationError {
    type Error = String;

    fn try_from(repr: ValidationErrorRepr) -> Result<Self, Self::Error> {
        if repr.name != ERROR_NAME {
            return Err(format!("expected name `{}`, found `{}`", ERROR_NAME, repr.name));
        }
        let error = Self::from_errors(repr.errors)
            .ok_or_else(|| "a validation error needs at least one error".to_string())?;
        if !repr.messages.is_empty() && repr.messages != error.messages {
            return Err("messages do not match errors".to_string());
        }
        Ok(error)
    }
}

/// A rule could not be built from the arguments it was given.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern for field `{field}`: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("divisor for field `{field}` must not be zero")]
    ZeroDivisor { field: String },

    #[error("unknown mobile phone locale `{locale}`")]
    UnknownMobileLocale { locale: String },

    #[error("cannot parse comparison date `{date}` for field `{field}`")]
    InvalidDate { field: String, date: String },

    #[error("currency options for field `{field}` do not compile: {source}")]
    InvalidCurrency {
        field: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors raised while assembling a [`Request`](crate::Request).
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn failed() -> ValidationResult {
        ValidationResult::from_errors(vec![
            FieldError::new("login", "The \"login\" is required"),
            FieldError::new("email", "The \"email\" must be a valid email address"),
        ])
    }

    #[test]
    fn test_try_from_invalid_result() {
        let error = ValidationError::try_from(failed()).unwrap();
        assert_eq!(error.name(), "ValidationError");
        assert_eq!(error.len(), 2);
        assert_eq!(error.messages()[0], "The \"login\" is required");
        assert_eq!(error.errors_for("email").len(), 1);
    }

    #[test]
    fn test_try_from_valid_result_hands_it_back() {
        let result = ValidationResult::from_errors(Vec::new());
        let back = ValidationError::try_from(result.clone()).unwrap_err();
        assert_eq!(back, result);
    }

    #[test]
    fn test_try_from_rebuilds_messages_from_errors() {
        let inconsistent = ValidationResult {
            valid: true,
            errors: vec![FieldError::new("a", "m")],
            messages: vec![],
        };
        let error = ValidationError::try_from(inconsistent).unwrap();
        assert_eq!(error.messages(), ["m"]);
        assert_eq!(error.to_string(), "m");

        let stale = ValidationResult {
            valid: false,
            errors: vec![FieldError::new("a", "first"), FieldError::new("b", "second")],
            messages: vec!["other".into()],
        };
        let error = ValidationError::try_from(stale).unwrap();
        assert_eq!(error.messages(), ["first", "second"]);
    }

    #[test]
    fn test_display_joins_messages() {
        let error = ValidationError::try_from(failed()).unwrap();
        assert_eq!(
            error.to_string(),
            "The \"login\" is required, The \"email\" must be a valid email address"
        );
        assert_eq!(error.message(), error.to_string());
    }

    #[test]
    fn test_serialized_shape() {
        let error = ValidationError::try_from(failed()).unwrap();
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["name"], "ValidationError");
        assert_eq!(value["messages"].as_array().unwrap().len(), 2);
        assert_eq!(value["errors"][0], json!({ "field": "login", "message": "The \"login\" is required" }));
        assert_eq!(value, error.to_json());

        let back: ValidationError = serde_json::from_value(value).unwrap();
        assert_eq!(back, error);
    }

    #[test]
    fn test_deserialize_rejects_empty_or_foreign() {
        let empty = json!({ "name": "ValidationError", "message": "", "messages": [], "errors": [] });
        assert!(serde_json::from_value::<ValidationError>(empty).is_err());

        let foreign = json!({
            "name": "TypeError",
            "errors": [{ "field": "a", "message": "b" }]
        });
        assert!(serde_json::from_value::<ValidationError>(foreign).is_err());
    }

    #[test]
    fn test_rule_error_display() {
        let error = RuleError::ZeroDivisor {
            field: "count".into(),
        };
        assert_eq!(error.to_string(), "divisor for field `count` must not be zero");
    }
}
