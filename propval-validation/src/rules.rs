// Rules and their evaluation

use crate::bag::{coerce, is_present, lookup};
use crate::checkers::{
    self, CurrencyOptions, CurrencyPattern, FloatOptions, FqdnOptions, IntOptions, IpVersion, IsbnVersion,
    LengthOptions, UrlOptions, UuidVersion,
};
use chrono::NaiveDateTime;
use propval_i18n::{Translator, interpolate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The atomic check a checker-backed rule delegates to, with its bound
/// arguments.
#[derive(Debug, Clone)]
pub enum Checker {
    Email,
    Contains(String),
    Alpha,
    Equals(String),
    Alphanumeric,
    CreditCard,
    Currency(CurrencyPattern),
    Matches(Regex),
    Uuid(Option<UuidVersion>),
    In(Vec<String>),
    Date,
    Decimal,
    Int(IntOptions),
    Json,
    Null,
    Numeric,
    Url(UrlOptions),
    Length(LengthOptions),
    Boolean,
    Ascii,
    Base64,
    FullWidth,
    HalfWidth,
    HexColor,
    Hexadecimal,
    Isin,
    Iso8601,
    Lowercase,
    MacAddress,
    MongoId,
    Multibyte,
    SurrogatePair,
    Uppercase,
    VariableWidth,
    DivisibleBy(i64),
    Before(Option<NaiveDateTime>),
    After(Option<NaiveDateTime>),
    MobilePhone(String),
    Whitelisted(String),
    ByteLength(LengthOptions),
    Fqdn(FqdnOptions),
    Float(FloatOptions),
    Ip(Option<IpVersion>),
    Isbn(Option<IsbnVersion>),
}

impl Checker {
    /// Run the checker against an already coerced value.
    pub fn check(&self, value: &str) -> bool {
        match self {
            Checker::Email => checkers::is_email(value),
            Checker::Contains(needle) => checkers::contains(value, needle),
            Checker::Alpha => checkers::is_alpha(value),
            Checker::Equals(comparison) => checkers::equals(value, comparison),
            Checker::Alphanumeric => checkers::is_alphanumeric(value),
            Checker::CreditCard => checkers::is_credit_card(value),
            Checker::Currency(pattern) => pattern.is_match(value),
            Checker::Matches(pattern) => checkers::matches(value, pattern),
            Checker::Uuid(version) => checkers::is_uuid(value, *version),
            Checker::In(values) => checkers::is_in(value, values),
            Checker::Date => checkers::is_date(value),
            Checker::Decimal => checkers::is_decimal(value),
            Checker::Int(options) => checkers::is_int(value, options),
            Checker::Json => checkers::is_json(value),
            Checker::Null => checkers::is_null(value),
            Checker::Numeric => checkers::is_numeric(value),
            Checker::Url(options) => checkers::is_url(value, options),
            Checker::Length(options) => checkers::is_length(value, options),
            Checker::Boolean => checkers::is_boolean(value),
            Checker::Ascii => checkers::is_ascii(value),
            Checker::Base64 => checkers::is_base64(value),
            Checker::FullWidth => checkers::is_full_width(value),
            Checker::HalfWidth => checkers::is_half_width(value),
            Checker::HexColor => checkers::is_hex_color(value),
            Checker::Hexadecimal => checkers::is_hexadecimal(value),
            Checker::Isin => checkers::is_isin(value),
            Checker::Iso8601 => checkers::is_iso8601(value),
            Checker::Lowercase => checkers::is_lowercase(value),
            Checker::MacAddress => checkers::is_mac_address(value),
            Checker::MongoId => checkers::is_mongo_id(value),
            Checker::Multibyte => checkers::is_multibyte(value),
            Checker::SurrogatePair => checkers::is_surrogate_pair(value),
            Checker::Uppercase => checkers::is_uppercase(value),
            Checker::VariableWidth => checkers::is_variable_width(value),
            Checker::DivisibleBy(divisor) => checkers::is_divisible_by(value, *divisor),
            Checker::Before(reference) => checkers::is_before(value, *reference),
            Checker::After(reference) => checkers::is_after(value, *reference),
            Checker::MobilePhone(locale) => checkers::is_mobile_phone(value, locale),
            Checker::Whitelisted(chars) => checkers::is_whitelisted(value, chars),
            Checker::ByteLength(options) => checkers::is_byte_length(value, options),
            Checker::Fqdn(options) => checkers::is_fqdn(value, options),
            Checker::Float(options) => checkers::is_float(value, options),
            Checker::Ip(version) => checkers::is_ip(value, *version),
            Checker::Isbn(version) => checkers::is_isbn(value, *version),
        }
    }
}

/// What a rule evaluates.
#[derive(Debug, Clone)]
pub enum Check {
    /// The field is present (not absent, not `null`)
    Presence,
    /// The field is a JSON array
    IsArray,
    /// The field is a JSON object
    IsPlainObject,
    /// The field is present and its coerced value satisfies the checker
    Checker(Checker),
    /// The wrapped rule, skipped when its field is absent
    Optional(Box<Rule>),
}

/// Outcome of running one rule once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub field: String,
    pub message: String,
    pub passed: bool,
}

/// A validation predicate bound to a field path, with its message already
/// resolved.
///
/// Rules are immutable once built and never touch the bag they inspect, so
/// one rule list may be shared across threads and reused for any number of
/// runs.
#[derive(Debug, Clone)]
pub struct Rule {
    field: String,
    message: String,
    check: Check,
    params: Vec<(&'static str, String)>,
}

impl Rule {
    pub(crate) fn new(
        translator: &Translator,
        field: &str,
        key: &str,
        params: Vec<(&'static str, String)>,
        check: Check,
    ) -> Self {
        let message = translator.translate(key, &params);
        Self {
            field: field.to_string(),
            message,
            check,
            params,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// The message reported when this rule fails.
    pub fn error_message(&self) -> &str {
        &self.message
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    /// Replace the failure message.
    ///
    /// The text is not looked up in any locale. Only the rule's own
    /// placeholders (`:paramName`, `:min`, ...) are filled in.
    pub fn message(mut self, text: impl AsRef<str>) -> Self {
        self.message = interpolate(text.as_ref(), &self.params);
        self
    }

    pub(crate) fn message_opt(self, text: Option<String>) -> Self {
        match text {
            Some(text) => self.message(text),
            None => self,
        }
    }

    /// Evaluate the rule against `bag`.
    pub fn run(&self, bag: &Value) -> RuleOutcome {
        let passed = match &self.check {
            Check::Presence => is_present(bag, &self.field),
            Check::IsArray => lookup(bag, &self.field).is_some_and(Value::is_array),
            Check::IsPlainObject => lookup(bag, &self.field).is_some_and(Value::is_object),
            Check::Checker(checker) => match lookup(bag, &self.field) {
                Some(value) if !value.is_null() => checker.check(&coerce(value)),
                _ => false,
            },
            Check::Optional(inner) => !is_present(bag, &self.field) || inner.run(bag).passed,
        };

        RuleOutcome {
            field: self.field.clone(),
            message: self.message.clone(),
            passed,
        }
    }
}

/// Wrap `rule` so that it only runs when its field is present.
///
/// An absent field passes without consulting the wrapped check. A present
/// field yields exactly the wrapped rule's outcome. Calling
/// [`Rule::message`] on the wrapper overrides the message reported when the
/// wrapped rule fails.
pub fn optional(rule: Rule) -> Rule {
    Rule {
        field: rule.field.clone(),
        message: rule.message.clone(),
        params: rule.params.clone(),
        check: Check::Optional(Box::new(rule)),
    }
}

/// Either rule options or a custom message, for rules whose options are
/// optional.
///
/// A string converts into [`RuleArg::Message`] and leaves the options at
/// their defaults; an options value converts into [`RuleArg::Options`].
#[derive(Debug, Clone, PartialEq)]
pub enum RuleArg<T> {
    Default,
    Options(T),
    Message(String),
}

impl<T> Default for RuleArg<T> {
    fn default() -> Self {
        RuleArg::Default
    }
}

impl<T> RuleArg<T> {
    pub(crate) fn split(self) -> (Option<T>, Option<String>) {
        match self {
            RuleArg::Default => (None, None),
            RuleArg::Options(options) => (Some(options), None),
            RuleArg::Message(message) => (None, Some(message)),
        }
    }
}

impl<T> From<&str> for RuleArg<T> {
    fn from(message: &str) -> Self {
        RuleArg::Message(message.to_string())
    }
}

impl<T> From<String> for RuleArg<T> {
    fn from(message: String) -> Self {
        RuleArg::Message(message)
    }
}

macro_rules! rule_arg_options {
    ($($options:ty),* $(,)?) => {
        $(
            impl From<$options> for RuleArg<$options> {
                fn from(options: $options) -> Self {
                    RuleArg::Options(options)
                }
            }
        )*
    };
}

rule_arg_options!(
    CurrencyOptions,
    IntOptions,
    FloatOptions,
    UrlOptions,
    FqdnOptions,
    UuidVersion,
    IpVersion,
    IsbnVersion,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule(field: &str, key: &str, check: Check) -> Rule {
        Rule::new(
            &Translator::english(),
            field,
            key,
            vec![("paramName", field.to_string())],
            check,
        )
    }

    #[test]
    fn test_message_resolved_at_construction() {
        let presence = rule("login", "required", Check::Presence);
        assert_eq!(presence.field(), "login");
        assert_eq!(presence.error_message(), "The \"login\" is required");
    }

    #[test]
    fn test_presence() {
        let presence = rule("login", "required", Check::Presence);
        assert!(presence.run(&json!({ "login": "" })).passed);
        assert!(presence.run(&json!({ "login": 0 })).passed);
        assert!(!presence.run(&json!({ "login": null })).passed);
        assert!(!presence.run(&json!({})).passed);
    }

    #[test]
    fn test_checker_fails_on_absent_value() {
        // is_null would accept an empty string, but absence never reaches it
        let null = rule("note", "null", Check::Checker(Checker::Null));
        assert!(!null.run(&json!({})).passed);
        assert!(!null.run(&json!({ "note": null })).passed);
        assert!(null.run(&json!({ "note": "" })).passed);
    }

    #[test]
    fn test_checker_coerces_values() {
        let int = rule("age", "integer", Check::Checker(Checker::Int(IntOptions::default())));
        assert!(int.run(&json!({ "age": 42 })).passed);
        assert!(int.run(&json!({ "age": "42" })).passed);
        assert!(!int.run(&json!({ "age": 4.5 })).passed);
    }

    #[test]
    fn test_structural_checks() {
        let array = rule("tags", "array", Check::IsArray);
        let object = rule("meta", "plainobject", Check::IsPlainObject);
        let bag = json!({ "tags": [], "meta": {} });
        assert!(array.run(&bag).passed);
        assert!(object.run(&bag).passed);
        assert!(!array.run(&json!({ "tags": "a,b" })).passed);
        assert!(!object.run(&json!({})).passed);
    }

    #[test]
    fn test_outcome_carries_field_and_message() {
        let email = rule("email", "email", Check::Checker(Checker::Email));
        let outcome = email.run(&json!({ "email": "nope" }));
        assert_eq!(
            outcome,
            RuleOutcome {
                field: "email".into(),
                message: "The \"email\" must be a valid email address".into(),
                passed: false,
            }
        );
    }

    #[test]
    fn test_custom_message_is_exact() {
        let presence = rule("name", "required", Check::Presence).message("custom text");
        assert_eq!(presence.run(&json!({})).message, "custom text");
    }

    #[test]
    fn test_custom_message_fills_own_params() {
        let presence = rule("name", "required", Check::Presence).message("need :paramName");
        assert_eq!(presence.error_message(), "need name");
        let literal = rule("name", "required", Check::Presence).message("email");
        assert_eq!(literal.error_message(), "email");
    }

    #[test]
    fn test_optional_short_circuit() {
        let wrapped = optional(rule("e", "email", Check::Checker(Checker::Email)));
        let unwrapped = rule("e", "email", Check::Checker(Checker::Email));

        assert!(wrapped.run(&json!({})).passed);
        assert!(wrapped.run(&json!({ "e": null })).passed);
        assert!(wrapped.run(&json!({ "e": "a@b.com" })).passed);

        let bad = json!({ "e": "bad" });
        assert_eq!(wrapped.run(&bad), unwrapped.run(&bad));
    }

    #[test]
    fn test_optional_message_override() {
        let wrapped = optional(rule("e", "email", Check::Checker(Checker::Email)))
            .message("check :paramName");
        let outcome = wrapped.run(&json!({ "e": "bad" }));
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "check e");
    }

    #[test]
    fn test_rule_arg_conversions() {
        let message: RuleArg<IntOptions> = "too big".into();
        assert_eq!(message.split(), (None, Some("too big".to_string())));

        let options: RuleArg<IntOptions> = IntOptions::range(1, 2).into();
        assert_eq!(options.split(), (Some(IntOptions::range(1, 2)), None));

        assert_eq!(RuleArg::<UuidVersion>::default().split(), (None, None));
    }

    #[test]
    fn test_rules_are_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Rule>();
    }
}
