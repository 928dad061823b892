//! Rule construction
//!
//! [`RuleFactory`] builds every rule kind against an injected
//! [`Translator`], resolving each rule's message immediately. The free
//! functions at the bottom of this module are shorthands that bind the
//! process-wide locale at call time.

use crate::checkers::{
    self, CurrencyOptions, CurrencyPattern, FloatOptions, FqdnOptions, IntOptions, IpVersion, IsbnVersion,
    LengthOptions, UrlOptions, UuidVersion,
};
use crate::rules::{Check, Checker, Rule, RuleArg};
use crate::RuleError;
use propval_i18n::Translator;
use propval_log::{targets, warn};
use regex::Regex;

type Params = Vec<(&'static str, String)>;

/// Builds rules whose messages come from one translator.
#[derive(Debug, Clone, Default)]
pub struct RuleFactory {
    translator: Translator,
}

impl RuleFactory {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Factory bound to a snapshot of the process-wide locale.
    pub fn current() -> Self {
        Self::new(Translator::current())
    }

    /// Factory bound to the built-in English messages.
    pub fn english() -> Self {
        Self::new(Translator::english())
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    fn build(&self, field: &str, key: &str, extra: Params, check: Check) -> Rule {
        let mut params = Vec::with_capacity(extra.len() + 1);
        params.push(("paramName", field.to_string()));
        params.extend(extra);
        Rule::new(&self.translator, field, key, params, check)
    }

    fn checked(&self, field: &str, key: &str, extra: Params, checker: Checker) -> Rule {
        self.build(field, key, extra, Check::Checker(checker))
    }

    fn simple(&self, field: &str, key: &str, checker: Checker) -> Rule {
        self.checked(field, key, Vec::new(), checker)
    }

    // ========================================================================
    // Structural
    // ========================================================================

    /// Passes when the field is present: resolvable and not `null`.
    pub fn presence(&self, field: &str) -> Rule {
        self.build(field, "required", Vec::new(), Check::Presence)
    }

    pub fn is_array(&self, field: &str) -> Rule {
        self.build(field, "array", Vec::new(), Check::IsArray)
    }

    pub fn is_plain_object(&self, field: &str) -> Rule {
        self.build(field, "plainobject", Vec::new(), Check::IsPlainObject)
    }

    // ========================================================================
    // Strings
    // ========================================================================

    pub fn email(&self, field: &str) -> Rule {
        self.simple(field, "email", Checker::Email)
    }

    pub fn is_email(&self, field: &str) -> Rule {
        self.email(field)
    }

    pub fn contains(&self, field: &str, needle: &str) -> Rule {
        self.checked(
            field,
            "contains",
            vec![("str", needle.to_string())],
            Checker::Contains(needle.to_string()),
        )
    }

    pub fn is_alpha(&self, field: &str) -> Rule {
        self.simple(field, "isAlpha", Checker::Alpha)
    }

    pub fn equals(&self, field: &str, comparison: &str) -> Rule {
        self.checked(
            field,
            "equals",
            vec![("comparison", comparison.to_string())],
            Checker::Equals(comparison.to_string()),
        )
    }

    pub fn is_equal(&self, field: &str, comparison: &str) -> Rule {
        self.equals(field, comparison)
    }

    pub fn is_alphanumeric(&self, field: &str) -> Rule {
        self.simple(field, "alphanumeric", Checker::Alphanumeric)
    }

    /// Match against a pattern compiled here.
    pub fn matches(&self, field: &str, pattern: &str) -> Result<Rule, RuleError> {
        let pattern = Regex::new(pattern).map_err(|source| {
            warn!(target: targets::RULES, "Invalid pattern for `{}`: {}", field, source);
            RuleError::InvalidPattern {
                field: field.to_string(),
                source,
            }
        })?;
        Ok(self.matches_regex(field, pattern))
    }

    pub fn format(&self, field: &str, pattern: &str) -> Result<Rule, RuleError> {
        self.matches(field, pattern)
    }

    /// Match against an already compiled pattern.
    pub fn matches_regex(&self, field: &str, pattern: Regex) -> Rule {
        self.checked(
            field,
            "matches",
            vec![("pattern", pattern.as_str().to_string())],
            Checker::Matches(pattern),
        )
    }

    pub fn is_in<I, S>(&self, field: &str, values: I) -> Rule
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.checked(
            field,
            "in",
            vec![("values", values.join(", "))],
            Checker::In(values),
        )
    }

    pub fn one_of<I, S>(&self, field: &str, values: I) -> Rule
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.is_in(field, values)
    }

    pub fn is_json(&self, field: &str) -> Rule {
        self.simple(field, "json", Checker::Json)
    }

    /// Passes on an empty string. An absent field still fails.
    pub fn is_null(&self, field: &str) -> Rule {
        self.simple(field, "null", Checker::Null)
    }

    pub fn is_boolean(&self, field: &str) -> Rule {
        self.simple(field, "boolean", Checker::Boolean)
    }

    pub fn is_ascii(&self, field: &str) -> Rule {
        self.simple(field, "ascii", Checker::Ascii)
    }

    pub fn is_base64(&self, field: &str) -> Rule {
        self.simple(field, "base64", Checker::Base64)
    }

    pub fn is_full_width(&self, field: &str) -> Rule {
        self.simple(field, "fullwidth", Checker::FullWidth)
    }

    pub fn is_half_width(&self, field: &str) -> Rule {
        self.simple(field, "halfwidth", Checker::HalfWidth)
    }

    pub fn is_variable_width(&self, field: &str) -> Rule {
        self.simple(field, "variablewidth", Checker::VariableWidth)
    }

    pub fn is_hex_color(&self, field: &str) -> Rule {
        self.simple(field, "hexcolor", Checker::HexColor)
    }

    pub fn is_hexadecimal(&self, field: &str) -> Rule {
        self.simple(field, "hexadecimal", Checker::Hexadecimal)
    }

    pub fn is_lowercase(&self, field: &str) -> Rule {
        self.simple(field, "lowercase", Checker::Lowercase)
    }

    pub fn is_uppercase(&self, field: &str) -> Rule {
        self.simple(field, "uppercase", Checker::Uppercase)
    }

    pub fn is_multibyte(&self, field: &str) -> Rule {
        self.simple(field, "multibyte", Checker::Multibyte)
    }

    pub fn is_surrogate_pair(&self, field: &str) -> Rule {
        self.simple(field, "surrogatepair", Checker::SurrogatePair)
    }

    pub fn is_whitelisted(&self, field: &str, chars: &str) -> Rule {
        self.checked(
            field,
            "whitelisted",
            vec![("chars", chars.to_string())],
            Checker::Whitelisted(chars.to_string()),
        )
    }

    /// Character length within `options`. The message names whichever
    /// bounds were given.
    pub fn is_length(&self, field: &str, options: LengthOptions) -> Rule {
        let (key, params) = length_family("length", &options);
        self.checked(field, &key, params, Checker::Length(options))
    }

    pub fn length(&self, field: &str, options: LengthOptions) -> Rule {
        self.is_length(field, options)
    }

    /// UTF-8 byte length within `options`.
    pub fn is_byte_length(&self, field: &str, options: LengthOptions) -> Rule {
        let (key, params) = length_family("bytelength", &options);
        self.checked(field, &key, params, Checker::ByteLength(options))
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    pub fn is_numeric(&self, field: &str) -> Rule {
        self.simple(field, "numeric", Checker::Numeric)
    }

    pub fn is_decimal(&self, field: &str) -> Rule {
        self.simple(field, "decimal", Checker::Decimal)
    }

    pub fn is_int(&self, field: &str) -> Rule {
        self.is_int_with(field, RuleArg::Default)
    }

    pub fn is_int_with(&self, field: &str, arg: impl Into<RuleArg<IntOptions>>) -> Rule {
        let (options, message) = arg.into().split();
        let options = options.unwrap_or_default();
        let mut params = Params::new();
        push_bound(&mut params, "min", options.min);
        push_bound(&mut params, "max", options.max);
        self.checked(field, "integer", params, Checker::Int(options))
            .message_opt(message)
    }

    pub fn is_float(&self, field: &str) -> Rule {
        self.is_float_with(field, RuleArg::Default)
    }

    pub fn is_float_with(&self, field: &str, arg: impl Into<RuleArg<FloatOptions>>) -> Rule {
        let (options, message) = arg.into().split();
        let options = options.unwrap_or_default();
        let mut params = Params::new();
        push_bound(&mut params, "min", options.min);
        push_bound(&mut params, "max", options.max);
        self.checked(field, "float", params, Checker::Float(options))
            .message_opt(message)
    }

    /// Fails construction on a zero divisor.
    pub fn is_divisible_by(&self, field: &str, divisor: i64) -> Result<Rule, RuleError> {
        if divisor == 0 {
            warn!(target: targets::RULES, "Zero divisor for `{}`", field);
            return Err(RuleError::ZeroDivisor {
                field: field.to_string(),
            });
        }
        Ok(self.checked(
            field,
            "divisibleby",
            vec![("number", divisor.to_string())],
            Checker::DivisibleBy(divisor),
        ))
    }

    pub fn is_credit_card(&self, field: &str) -> Rule {
        self.simple(field, "creditcard", Checker::CreditCard)
    }

    pub fn is_currency(&self, field: &str) -> Rule {
        self.currency(field, CurrencyPattern::default())
    }

    /// Fails construction when the options do not compile.
    pub fn is_currency_with(
        &self,
        field: &str,
        arg: impl Into<RuleArg<CurrencyOptions>>,
    ) -> Result<Rule, RuleError> {
        let (options, message) = arg.into().split();
        let pattern = CurrencyPattern::new(options.unwrap_or_default()).map_err(|source| {
            warn!(target: targets::RULES, "Invalid currency options for `{}`: {}", field, source);
            RuleError::InvalidCurrency {
                field: field.to_string(),
                source,
            }
        })?;
        Ok(self.currency(field, pattern).message_opt(message))
    }

    fn currency(&self, field: &str, pattern: CurrencyPattern) -> Rule {
        let symbol = pattern.options().symbol.clone();
        self.checked(
            field,
            "currency",
            vec![("symbol", symbol)],
            Checker::Currency(pattern),
        )
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    pub fn is_uuid(&self, field: &str) -> Rule {
        self.is_uuid_with(field, RuleArg::Default)
    }

    /// A specific UUID version, or any version with a custom message.
    pub fn is_uuid_with(&self, field: &str, arg: impl Into<RuleArg<UuidVersion>>) -> Rule {
        let (version, message) = arg.into().split();
        let (key, params) = versioned(("uuid.all", "uuid.version"), version);
        self.checked(field, key, params, Checker::Uuid(version))
            .message_opt(message)
    }

    pub fn uuid(&self, field: &str) -> Rule {
        self.is_uuid(field)
    }

    pub fn uuid_with(&self, field: &str, arg: impl Into<RuleArg<UuidVersion>>) -> Rule {
        self.is_uuid_with(field, arg)
    }

    pub fn is_isin(&self, field: &str) -> Rule {
        self.simple(field, "isin", Checker::Isin)
    }

    pub fn is_isbn(&self, field: &str) -> Rule {
        self.is_isbn_with(field, RuleArg::Default)
    }

    pub fn is_isbn_with(&self, field: &str, arg: impl Into<RuleArg<IsbnVersion>>) -> Rule {
        let (version, message) = arg.into().split();
        let (key, params) = versioned(("isbn.all", "isbn.version"), version);
        self.checked(field, key, params, Checker::Isbn(version))
            .message_opt(message)
    }

    pub fn is_mongo_id(&self, field: &str) -> Rule {
        self.simple(field, "mongoid", Checker::MongoId)
    }

    // ========================================================================
    // Network
    // ========================================================================

    pub fn is_url(&self, field: &str) -> Rule {
        self.is_url_with(field, RuleArg::Default)
    }

    pub fn is_url_with(&self, field: &str, arg: impl Into<RuleArg<UrlOptions>>) -> Rule {
        let (options, message) = arg.into().split();
        self.simple(field, "url", Checker::Url(options.unwrap_or_default()))
            .message_opt(message)
    }

    pub fn is_fqdn(&self, field: &str) -> Rule {
        self.is_fqdn_with(field, RuleArg::Default)
    }

    pub fn is_fqdn_with(&self, field: &str, arg: impl Into<RuleArg<FqdnOptions>>) -> Rule {
        let (options, message) = arg.into().split();
        self.simple(field, "fqdn", Checker::Fqdn(options.unwrap_or_default()))
            .message_opt(message)
    }

    pub fn is_ip(&self, field: &str) -> Rule {
        self.is_ip_with(field, RuleArg::Default)
    }

    pub fn is_ip_with(&self, field: &str, arg: impl Into<RuleArg<IpVersion>>) -> Rule {
        let (version, message) = arg.into().split();
        let (key, params) = versioned(("ip.all", "ip.version"), version);
        self.checked(field, key, params, Checker::Ip(version))
            .message_opt(message)
    }

    pub fn is_mac_address(&self, field: &str) -> Rule {
        self.simple(field, "macaddress", Checker::MacAddress)
    }

    /// Fails construction when `locale` is not a known mobile phone locale.
    pub fn is_mobile_phone(&self, field: &str, locale: &str) -> Result<Rule, RuleError> {
        if !checkers::is_mobile_phone_locale(locale) {
            warn!(target: targets::RULES, "Unknown mobile phone locale `{}` for `{}`", locale, field);
            return Err(RuleError::UnknownMobileLocale {
                locale: locale.to_string(),
            });
        }
        Ok(self.checked(
            field,
            "mobilephone",
            vec![("locale", locale.to_string())],
            Checker::MobilePhone(locale.to_string()),
        ))
    }

    // ========================================================================
    // Dates
    // ========================================================================

    pub fn is_date(&self, field: &str) -> Rule {
        self.simple(field, "date", Checker::Date)
    }

    pub fn is_iso8601(&self, field: &str) -> Rule {
        self.simple(field, "iso8601", Checker::Iso8601)
    }

    /// A date before the moment the rule runs.
    pub fn is_before(&self, field: &str) -> Rule {
        self.simple(field, "before.now", Checker::Before(None))
    }

    /// A date before `date`. Fails construction when `date` does not parse.
    pub fn is_before_date(&self, field: &str, date: &str) -> Result<Rule, RuleError> {
        let reference = comparison_date(field, date)?;
        Ok(self.checked(
            field,
            "before.date",
            vec![("date", date.to_string())],
            Checker::Before(Some(reference)),
        ))
    }

    /// A date after the moment the rule runs.
    pub fn is_after(&self, field: &str) -> Rule {
        self.simple(field, "after.now", Checker::After(None))
    }

    /// A date after `date`. Fails construction when `date` does not parse.
    pub fn is_after_date(&self, field: &str, date: &str) -> Result<Rule, RuleError> {
        let reference = comparison_date(field, date)?;
        Ok(self.checked(
            field,
            "after.date",
            vec![("date", date.to_string())],
            Checker::After(Some(reference)),
        ))
    }
}

fn comparison_date(field: &str, date: &str) -> Result<chrono::NaiveDateTime, RuleError> {
    checkers::parse_date(date).ok_or_else(|| {
        warn!(target: targets::RULES, "Unparsable comparison date `{}` for `{}`", date, field);
        RuleError::InvalidDate {
            field: field.to_string(),
            date: date.to_string(),
        }
    })
}

fn length_family(prefix: &str, options: &LengthOptions) -> (String, Params) {
    let min = ("min", options.min.unwrap_or(0).to_string());
    match options.max {
        Some(max) if options.min.is_some() => (
            format!("{}.between", prefix),
            vec![min, ("max", max.to_string())],
        ),
        Some(max) => (format!("{}.max", prefix), vec![("max", max.to_string())]),
        None => (format!("{}.min", prefix), vec![min]),
    }
}

fn versioned<V: ToString>(
    (all, specific): (&'static str, &'static str),
    version: Option<V>,
) -> (&'static str, Params) {
    match version {
        Some(version) => (specific, vec![("version", version.to_string())]),
        None => (all, Vec::new()),
    }
}

fn push_bound<T: ToString>(params: &mut Params, name: &'static str, bound: Option<T>) {
    if let Some(bound) = bound {
        params.push((name, bound.to_string()));
    }
}

macro_rules! shorthands {
    ($( $(#[$meta:meta])* $name:ident ( $($arg:ident : $ty:ty),* ) -> $ret:ty; )*) => {
        $(
            $(#[$meta])*
            pub fn $name($($arg: $ty),*) -> $ret {
                RuleFactory::current().$name($($arg),*)
            }
        )*
    };
}

shorthands! {
    /// [`RuleFactory::presence`] with the active locale.
    presence(field: &str) -> Rule;
    is_array(field: &str) -> Rule;
    is_plain_object(field: &str) -> Rule;
    email(field: &str) -> Rule;
    is_email(field: &str) -> Rule;
    contains(field: &str, needle: &str) -> Rule;
    is_alpha(field: &str) -> Rule;
    equals(field: &str, comparison: &str) -> Rule;
    is_equal(field: &str, comparison: &str) -> Rule;
    is_alphanumeric(field: &str) -> Rule;
    matches(field: &str, pattern: &str) -> Result<Rule, RuleError>;
    format(field: &str, pattern: &str) -> Result<Rule, RuleError>;
    matches_regex(field: &str, pattern: Regex) -> Rule;
    is_json(field: &str) -> Rule;
    is_null(field: &str) -> Rule;
    is_boolean(field: &str) -> Rule;
    is_ascii(field: &str) -> Rule;
    is_base64(field: &str) -> Rule;
    is_full_width(field: &str) -> Rule;
    is_half_width(field: &str) -> Rule;
    is_variable_width(field: &str) -> Rule;
    is_hex_color(field: &str) -> Rule;
    is_hexadecimal(field: &str) -> Rule;
    is_lowercase(field: &str) -> Rule;
    is_uppercase(field: &str) -> Rule;
    is_multibyte(field: &str) -> Rule;
    is_surrogate_pair(field: &str) -> Rule;
    is_whitelisted(field: &str, chars: &str) -> Rule;
    is_length(field: &str, options: LengthOptions) -> Rule;
    length(field: &str, options: LengthOptions) -> Rule;
    is_byte_length(field: &str, options: LengthOptions) -> Rule;
    is_numeric(field: &str) -> Rule;
    is_decimal(field: &str) -> Rule;
    is_int(field: &str) -> Rule;
    is_int_with(field: &str, arg: impl Into<RuleArg<IntOptions>>) -> Rule;
    is_float(field: &str) -> Rule;
    is_float_with(field: &str, arg: impl Into<RuleArg<FloatOptions>>) -> Rule;
    is_divisible_by(field: &str, divisor: i64) -> Result<Rule, RuleError>;
    is_credit_card(field: &str) -> Rule;
    is_currency(field: &str) -> Rule;
    is_currency_with(field: &str, arg: impl Into<RuleArg<CurrencyOptions>>) -> Result<Rule, RuleError>;
    is_uuid(field: &str) -> Rule;
    is_uuid_with(field: &str, arg: impl Into<RuleArg<UuidVersion>>) -> Rule;
    uuid(field: &str) -> Rule;
    uuid_with(field: &str, arg: impl Into<RuleArg<UuidVersion>>) -> Rule;
    is_isin(field: &str) -> Rule;
    is_isbn(field: &str) -> Rule;
    is_isbn_with(field: &str, arg: impl Into<RuleArg<IsbnVersion>>) -> Rule;
    is_mongo_id(field: &str) -> Rule;
    is_url(field: &str) -> Rule;
    is_url_with(field: &str, arg: impl Into<RuleArg<UrlOptions>>) -> Rule;
    is_fqdn(field: &str) -> Rule;
    is_fqdn_with(field: &str, arg: impl Into<RuleArg<FqdnOptions>>) -> Rule;
    is_ip(field: &str) -> Rule;
    is_ip_with(field: &str, arg: impl Into<RuleArg<IpVersion>>) -> Rule;
    is_mac_address(field: &str) -> Rule;
    is_mobile_phone(field: &str, locale: &str) -> Result<Rule, RuleError>;
    is_date(field: &str) -> Rule;
    is_iso8601(field: &str) -> Rule;
    is_before(field: &str) -> Rule;
    is_before_date(field: &str, date: &str) -> Result<Rule, RuleError>;
    is_after(field: &str) -> Rule;
    is_after_date(field: &str, date: &str) -> Result<Rule, RuleError>;
}

/// [`RuleFactory::is_in`] with the active locale.
pub fn is_in<I, S>(field: &str, values: I) -> Rule
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    RuleFactory::current().is_in(field, values)
}

/// [`RuleFactory::one_of`] with the active locale.
pub fn one_of<I, S>(field: &str, values: I) -> Rule
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    RuleFactory::current().one_of(field, values)
}
