//! Validation engine
//!
//! Runs every rule against a bag, in order, and aggregates the failures.
//! There is no short-circuiting: one failing rule never hides another.

use crate::bag::merge;
use crate::request::{HasBody, HasHeaders, HasParams, HasQuery};
use crate::{FieldError, Rule, RuleOutcome};
use propval_log::{debug, targets};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregated outcome of running a rule list against a bag.
///
/// `errors` and `messages` follow rule declaration order and only list the
/// rules that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<FieldError>,
    pub messages: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        let messages = errors.iter().map(|e| e.message.clone()).collect();
        Self {
            valid: errors.is_empty(),
            errors,
            messages,
        }
    }

    /// Keep the failed outcomes, in order.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = RuleOutcome>,
    {
        Self::from_errors(
            outcomes
                .into_iter()
                .filter(|outcome| !outcome.passed)
                .map(|outcome| FieldError::new(outcome.field, outcome.message))
                .collect(),
        )
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Run every rule against `bag`.
pub fn validate(bag: &Value, rules: &[Rule]) -> ValidationResult {
    let result = ValidationResult::from_outcomes(rules.iter().map(|rule| rule.run(bag)));
    debug!(
        target: targets::ENGINE,
        "Validated {} rules, {} failed",
        rules.len(),
        result.errors.len()
    );
    result
}

fn validate_part(part: Option<&Value>, rules: &[Rule]) -> ValidationResult {
    match part {
        Some(bag) => validate(bag, rules),
        None => validate(&Value::Object(Map::new()), rules),
    }
}

/// Validate the request body. A missing body is an empty bag.
pub fn validate_body<R: HasBody + ?Sized>(request: &R, rules: &[Rule]) -> ValidationResult {
    validate_part(request.body(), rules)
}

/// Validate the query parameters. Missing parameters are an empty bag.
pub fn validate_query<R: HasQuery + ?Sized>(request: &R, rules: &[Rule]) -> ValidationResult {
    validate_part(request.query(), rules)
}

/// Validate the path parameters. Missing parameters are an empty bag.
pub fn validate_params<R: HasParams + ?Sized>(request: &R, rules: &[Rule]) -> ValidationResult {
    validate_part(request.params(), rules)
}

/// Validate the headers. Missing headers are an empty bag.
pub fn validate_headers<R: HasHeaders + ?Sized>(request: &R, rules: &[Rule]) -> ValidationResult {
    validate_part(request.headers(), rules)
}

/// Merge body, params and query, in that order, into one bag.
///
/// Later parts overwrite earlier ones, so a key present in both the body and
/// the query resolves to the query's value.
pub fn merged_bag<R>(request: &R) -> Value
where
    R: HasBody + HasParams + HasQuery + ?Sized,
{
    let mut bag = Map::new();
    for part in [request.body(), request.params(), request.query()]
        .into_iter()
        .flatten()
    {
        merge(&mut bag, part);
    }
    Value::Object(bag)
}

/// Validate body, params and query merged with [`merged_bag`].
pub fn validate_all<R>(request: &R, rules: &[Rule]) -> ValidationResult
where
    R: HasBody + HasParams + HasQuery + ?Sized,
{
    validate(&merged_bag(request), rules)
}
