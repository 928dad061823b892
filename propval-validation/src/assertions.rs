// Assertions: validate, then fail with a ValidationError when invalid

use crate::engine::{
    validate, validate_all, validate_body, validate_headers, validate_params, validate_query,
};
use crate::request::{HasBody, HasHeaders, HasParams, HasQuery};
use crate::{Rule, ValidationError, ValidationResult};
use serde_json::Value;

fn ensure(result: ValidationResult) -> Result<ValidationResult, ValidationError> {
    match ValidationError::try_from(result) {
        Ok(error) => Err(error),
        Err(valid) => Ok(valid),
    }
}

/// [`validate`], failing with a [`ValidationError`] when any rule fails.
pub fn assert(bag: &Value, rules: &[Rule]) -> Result<ValidationResult, ValidationError> {
    ensure(validate(bag, rules))
}

pub fn assert_body<R: HasBody + ?Sized>(
    request: &R,
    rules: &[Rule],
) -> Result<ValidationResult, ValidationError> {
    ensure(validate_body(request, rules))
}

pub fn assert_query<R: HasQuery + ?Sized>(
    request: &R,
    rules: &[Rule],
) -> Result<ValidationResult, ValidationError> {
    ensure(validate_query(request, rules))
}

pub fn assert_params<R: HasParams + ?Sized>(
    request: &R,
    rules: &[Rule],
) -> Result<ValidationResult, ValidationError> {
    ensure(validate_params(request, rules))
}

pub fn assert_headers<R: HasHeaders + ?Sized>(
    request: &R,
    rules: &[Rule],
) -> Result<ValidationResult, ValidationError> {
    ensure(validate_headers(request, rules))
}

/// [`validate_all`], failing with a [`ValidationError`] when any rule fails.
pub fn assert_all<R>(request: &R, rules: &[Rule]) -> Result<ValidationResult, ValidationError>
where
    R: HasBody + HasParams + HasQuery + ?Sized,
{
    ensure(validate_all(request, rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleFactory;
    use serde_json::json;

    #[test]
    fn test_assert_passes_through_valid_result() {
        let f = RuleFactory::english();
        let result = assert(
            &json!({ "login": "a", "email": "a@b.com" }),
            &[f.presence("login"), f.email("email")],
        )
        .unwrap();
        assert!(result.valid);
    }

    #[test]
    fn test_assert_fails_when_invalid() {
        let f = RuleFactory::english();
        let error = assert(&json!({}), &[f.presence("login")]).unwrap_err();
        assert_eq!(error.messages(), ["The \"login\" is required"]);
        assert_eq!(error.errors()[0].field, "login");
    }

    #[test]
    fn test_assert_request_parts() {
        let f = RuleFactory::english();
        let request = json!({
            "headers": { "authorization": "token" },
            "params": { "id": "7" },
            "query": {},
            "body": { "name": "n" }
        });
        assert!(assert_headers(&request, &[f.presence("authorization")]).is_ok());
        assert!(assert_params(&request, &[f.is_int("id")]).is_ok());
        assert!(assert_body(&request, &[f.presence("name")]).is_ok());
        assert!(assert_query(&request, &[f.presence("page")]).is_err());
        assert!(assert_all(&request, &[f.presence("id"), f.presence("name")]).is_ok());
    }
}
