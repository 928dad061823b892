//! Integration tests for common propval workflows.
//!
//! These tests go through the facade crate the way an application would.

use propval::prelude::*;
use propval::propval_log::{Format, Level, LogConfig};
use propval::{FieldError, ResponseFormat, Translator, email, is_int, is_url, presence};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::io::Write;

// =============================================================================
// Request handling
// =============================================================================

#[test]
fn test_signup_request_rejected_with_422() {
    let headers = HashMap::from([("Accept".to_string(), "application/json".to_string())]);
    let params = HashMap::new();
    let query = HashMap::from([("ref".to_string(), "newsletter".to_string())]);
    let body = br#"{"email": "ann@example"}"#;

    let request = Request::from_parts(&headers, &params, &query, body).unwrap();
    let rules = [presence("login"), email("email"), optional(is_url("homepage"))];

    let error = assert_all(&request, &rules).unwrap_err();
    let accept = request
        .headers()
        .and_then(|headers| headers.get("accept"))
        .and_then(|value| value.as_str());
    let response = ErrorResponse::from_error(&error, accept).unwrap();

    assert_eq!(response.status, 422);
    assert_eq!(response.content_type, "application/json");
    let body: ErrorBody = serde_json::from_str(&response.body).unwrap();
    assert_eq!(
        body.errors,
        [
            "The \"login\" is required",
            "The \"email\" must be a valid email address"
        ]
    );
}

/// What an API client reads out of a 422 JSON body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<String>,
}

#[test]
fn test_valid_request_passes_every_part() {
    let request = Request::new()
        .with_headers(json!({ "x-request-id": "abc" }))
        .with_params(json!({ "id": "42" }))
        .with_query(json!({ "page": "3" }))
        .with_body(json!({ "email": "ann@example.com" }));

    assert!(assert_headers(&request, &[presence("x-request-id")]).is_ok());
    assert!(assert_params(&request, &[is_int("id")]).is_ok());
    assert!(assert_query(&request, &[is_int("page")]).is_ok());
    assert!(assert_body(&request, &[email("email")]).is_ok());
    assert!(assert_all(&request, &[presence("id"), presence("page"), email("email")]).is_ok());
}

#[test]
fn test_plain_text_fallback_for_browsers() {
    let error = assert(&json!({}), &[presence("username")]).unwrap_err();
    let response = ErrorResponse::from_error(&error, Some("text/html,application/xhtml+xml")).unwrap();

    assert_eq!(response.content_type, "text/plain; charset=utf-8");
    assert_eq!(response.body, "Invalid Request: The \"username\" is required");
}

#[test]
fn test_error_inspection_by_field() {
    let error = assert(
        &json!({ "age": "old", "email": "x" }),
        &[is_int("age"), email("email"), presence("name")],
    )
    .unwrap_err();

    assert_eq!(error.len(), 3);
    assert_eq!(error.errors_for("email").len(), 1);
    assert_eq!(
        error.errors()[0],
        FieldError::new("age", "The \"age\" must be an integer number")
    );

    let serialized = serde_json::to_value(&error).unwrap();
    assert_eq!(serialized["name"], "ValidationError");
    assert_eq!(serialized["messages"].as_array().map(Vec::len), Some(3));
}

// =============================================================================
// Localization
// =============================================================================

#[test]
fn test_locale_file_loaded_for_a_factory() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "required": "Le champ \":paramName\" est obligatoire",
            "email": "Le champ \":paramName\" doit être une adresse e-mail"
        }}"#
    )
    .unwrap();

    let table = LocaleTable::load_from_file(file.path()).unwrap();
    let rules = RuleFactory::new(Translator::new(table));

    let result = validate(
        &json!({ "courriel": "nope" }),
        &[rules.presence("nom"), rules.email("courriel"), rules.is_int("age")],
    );
    assert_eq!(
        result.messages,
        [
            "Le champ \"nom\" est obligatoire",
            "Le champ \"courriel\" doit être une adresse e-mail",
            "The \"age\" must be an integer number",
        ]
    );
}

#[test]
fn test_missing_locale_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = LocaleTable::load_from_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(propval::I18nError::IoError(_))));
}

// =============================================================================
// Logging configuration
// =============================================================================

#[test]
fn test_log_config_from_lookup() {
    let vars = HashMap::from([
        ("PROPVAL_DEBUG", "1"),
        ("PROPVAL_LOG_FORMAT", "json"),
        ("PROPVAL_LOG_TIMESTAMPS", "0"),
    ]);
    let config = LogConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

    assert!(config.debug);
    assert_eq!(config.level, Level::Debug);
    assert_eq!(config.format, Format::Json);
    assert!(!config.timestamps);

    let quiet = LogConfig::from_lookup(|_| None);
    assert_eq!(quiet, LogConfig::default());
}

// =============================================================================
// Content negotiation
// =============================================================================

#[test]
fn test_response_format_negotiation() {
    assert_eq!(ResponseFormat::negotiate(None), ResponseFormat::Text);
    assert_eq!(
        ResponseFormat::negotiate(Some("application/json, text/plain;q=0.9")),
        ResponseFormat::Json
    );
    assert_eq!(
        ResponseFormat::negotiate(Some("text/plain, application/json")),
        ResponseFormat::Text
    );
}
