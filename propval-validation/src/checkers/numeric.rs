// Numeric checkers

use super::luhn;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]*\.)?[0-9]+$").unwrap());

static INT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?(?:[1-9][0-9]*|0)$").unwrap());

static INT_LEADING_ZEROES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());

static FLOAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(?:[0-9]+)?(?:\.[0-9]*)?(?:[eE][-+]?[0-9]+)?$").unwrap()
});

static DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?(?:[0-9]+)?(?:\.[0-9]+)?$").unwrap());

static CREDIT_CARD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}",
        r"|(?:222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}",
        r"|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}",
        r"|(?:2131|1800|35[0-9]{3})[0-9]{11}|6[27][0-9]{14})$",
    ))
    .unwrap()
});

static DEFAULT_CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(&currency_pattern(&CurrencyOptions::default())).unwrap());

/// Optional sign, digits, optional fraction.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

/// Decimal number such as `-1.5`, `.5` or `10`.
pub fn is_decimal(value: &str) -> bool {
    !matches!(value, "" | "-" | "+") && DECIMAL_REGEX.is_match(value)
}

/// Bounds and format switches for [`is_int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntOptions {
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Exclusive upper bound
    pub lt: Option<i64>,
    /// Exclusive lower bound
    pub gt: Option<i64>,
    pub allow_leading_zeroes: bool,
}

impl Default for IntOptions {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            lt: None,
            gt: None,
            allow_leading_zeroes: true,
        }
    }
}

impl IntOptions {
    pub fn range(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }
}

pub fn is_int(value: &str, options: &IntOptions) -> bool {
    let shape = if options.allow_leading_zeroes {
        &*INT_LEADING_ZEROES_REGEX
    } else {
        &*INT_REGEX
    };
    if !shape.is_match(value) {
        return false;
    }
    let Ok(n) = value.parse::<f64>() else {
        return false;
    };

    options.min.is_none_or(|min| n >= min as f64)
        && options.max.is_none_or(|max| n <= max as f64)
        && options.lt.is_none_or(|lt| n < lt as f64)
        && options.gt.is_none_or(|gt| n > gt as f64)
}

/// Bounds for [`is_float`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Exclusive upper bound
    pub lt: Option<f64>,
    /// Exclusive lower bound
    pub gt: Option<f64>,
}

impl FloatOptions {
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }
}

pub fn is_float(value: &str, options: &FloatOptions) -> bool {
    if matches!(value, "" | "." | "-" | "+") || !FLOAT_REGEX.is_match(value) {
        return false;
    }
    let Some(n) = parse_float(value) else {
        return false;
    };

    options.min.is_none_or(|min| n >= min)
        && options.max.is_none_or(|max| n <= max)
        && options.lt.is_none_or(|lt| n < lt)
        && options.gt.is_none_or(|gt| n > gt)
}

// Rust rejects "5." and ".e1"-style forms that the float shape accepts.
fn parse_float(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().or_else(|| {
        let (mantissa, exponent) = match value.find(['e', 'E']) {
            Some(at) => (&value[..at], &value[at..]),
            None => (value, ""),
        };
        let mantissa = mantissa.strip_suffix('.').unwrap_or(mantissa);
        let mantissa = match mantissa {
            "" | "+" | "-" => return None,
            m => m,
        };
        format!("{}{}", mantissa, exponent).parse().ok()
    })
}

/// A float that is an exact multiple of `divisor`.
pub fn is_divisible_by(value: &str, divisor: i64) -> bool {
    if divisor == 0 || !is_float(value, &FloatOptions::default()) {
        return false;
    }
    parse_float(value).is_some_and(|n| n % divisor as f64 == 0.0)
}

/// Card number from a known issuer with a valid Luhn checksum. Spaces and
/// hyphens are ignored.
pub fn is_credit_card(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
    CREDIT_CARD_REGEX.is_match(&digits) && luhn(&digits)
}

/// Shape of an accepted currency amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyOptions {
    pub symbol: String,
    pub require_symbol: bool,
    pub allow_space_after_symbol: bool,
    pub symbol_after_digits: bool,
    pub allow_negatives: bool,
    pub parens_for_negatives: bool,
    pub negative_sign_before_digits: bool,
    pub negative_sign_after_digits: bool,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub allow_decimal: bool,
    pub require_decimal: bool,
    /// Accepted counts of digits after the decimal separator
    pub digits_after_decimal: Vec<usize>,
    pub allow_space_after_digits: bool,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            require_symbol: false,
            allow_space_after_symbol: false,
            symbol_after_digits: false,
            allow_negatives: true,
            parens_for_negatives: false,
            negative_sign_before_digits: false,
            negative_sign_after_digits: false,
            thousands_separator: ',',
            decimal_separator: '.',
            allow_decimal: true,
            require_decimal: false,
            digits_after_decimal: vec![2],
            allow_space_after_digits: false,
        }
    }
}

impl CurrencyOptions {
    /// Default options with a different, mandatory symbol.
    pub fn with_required_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            require_symbol: true,
            ..Self::default()
        }
    }
}

fn currency_pattern(options: &CurrencyOptions) -> String {
    let digits = if options.digits_after_decimal.is_empty() {
        vec![2]
    } else {
        options.digits_after_decimal.clone()
    };
    let decimal_digits = digits
        .iter()
        .map(|n| format!(r"\d{{{}}}", n))
        .collect::<Vec<_>>()
        .join("|");

    let symbol = format!(
        "(?:{}){}",
        regex::escape(&options.symbol),
        if options.require_symbol { "" } else { "?" }
    );
    let negative = "-?";
    let thousands = regex::escape(&options.thousands_separator.to_string());
    let whole_amount = format!(r"(?:0|[1-9]\d*|[1-9]\d{{0,2}}(?:{}\d{{3}})*)?", thousands);
    let decimal_amount = format!(
        "(?:{}(?:{})){}",
        regex::escape(&options.decimal_separator.to_string()),
        decimal_digits,
        if options.require_decimal { "" } else { "?" }
    );

    let mut pattern = whole_amount;
    if options.allow_decimal || options.require_decimal {
        pattern.push_str(&decimal_amount);
    }

    if options.allow_negatives && !options.parens_for_negatives {
        if options.negative_sign_after_digits {
            pattern.push_str(negative);
        } else if options.negative_sign_before_digits {
            pattern = format!("{}{}", negative, pattern);
        }
    }

    if options.allow_space_after_symbol {
        pattern = format!(" ?{}", pattern);
    } else if options.allow_space_after_digits {
        pattern.push_str(" ?");
    }

    if options.symbol_after_digits {
        pattern.push_str(&symbol);
    } else {
        pattern = format!("{}{}", symbol, pattern);
    }

    if options.allow_negatives {
        if options.parens_for_negatives {
            pattern = format!(r"(?:\({}\)|{})", pattern, pattern);
        } else if !(options.negative_sign_before_digits || options.negative_sign_after_digits) {
            pattern = format!("{}{}", negative, pattern);
        }
    }

    format!("^{}$", pattern)
}

/// A currency shape compiled once and reusable across checks.
#[derive(Debug, Clone)]
pub struct CurrencyPattern {
    options: CurrencyOptions,
    regex: Regex,
}

impl CurrencyPattern {
    /// Compile `options`. Fails when the resulting pattern is too large,
    /// for instance with an absurd `digits_after_decimal` count.
    pub fn new(options: CurrencyOptions) -> Result<Self, regex::Error> {
        let regex = if options == CurrencyOptions::default() {
            DEFAULT_CURRENCY.clone()
        } else {
            Regex::new(&currency_pattern(&options))?
        };
        Ok(Self { options, regex })
    }

    pub fn options(&self) -> &CurrencyOptions {
        &self.options
    }

    pub fn is_match(&self, value: &str) -> bool {
        // the amount needs a digit and may not open with a detached sign
        if !value.chars().any(|c| c.is_ascii_digit())
            || value.starts_with(' ')
            || value.starts_with("- ")
        {
            return false;
        }
        self.regex.is_match(value)
    }
}

impl Default for CurrencyPattern {
    fn default() -> Self {
        Self {
            options: CurrencyOptions::default(),
            regex: DEFAULT_CURRENCY.clone(),
        }
    }
}

/// Currency amount shaped by `options`.
///
/// Compiles the shape on every call unless `options` are the defaults; use
/// a [`CurrencyPattern`] to check many values. Options that do not compile
/// match nothing.
pub fn is_currency(value: &str, options: &CurrencyOptions) -> bool {
    if *options == CurrencyOptions::default() {
        return CurrencyPattern::default().is_match(value);
    }
    CurrencyPattern::new(options.clone()).is_ok_and(|pattern| pattern.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("12345"));
        assert!(is_numeric("-1.5"));
        assert!(is_numeric(".5"));
        assert!(!is_numeric("1."));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("10"));
        assert!(is_decimal("-0.25"));
        assert!(is_decimal(".5"));
        assert!(!is_decimal("-"));
        assert!(!is_decimal("1.2.3"));
    }

    #[test]
    fn test_is_int() {
        let defaults = IntOptions::default();
        assert!(is_int("42", &defaults));
        assert!(is_int("-7", &defaults));
        assert!(is_int("007", &defaults));
        assert!(!is_int("4.2", &defaults));

        let strict = IntOptions {
            allow_leading_zeroes: false,
            ..IntOptions::default()
        };
        assert!(!is_int("007", &strict));
        assert!(is_int("0", &strict));
    }

    #[test]
    fn test_is_int_bounds() {
        let range = IntOptions::range(1, 10);
        assert!(is_int("1", &range));
        assert!(is_int("10", &range));
        assert!(!is_int("11", &range));

        let exclusive = IntOptions {
            gt: Some(0),
            lt: Some(5),
            ..IntOptions::default()
        };
        assert!(!is_int("0", &exclusive));
        assert!(is_int("4", &exclusive));
        assert!(!is_int("5", &exclusive));
    }

    #[test]
    fn test_is_float() {
        let defaults = FloatOptions::default();
        assert!(is_float("3.14", &defaults));
        assert!(is_float("5.", &defaults));
        assert!(is_float("-1e10", &defaults));
        assert!(is_float("42", &defaults));
        assert!(!is_float(".", &defaults));
        assert!(!is_float("1,5", &defaults));
        assert!(!is_float("3.14", &FloatOptions::range(0.0, 3.0)));
    }

    #[test]
    fn test_is_divisible_by() {
        assert!(is_divisible_by("10", 5));
        assert!(is_divisible_by("-9", 3));
        assert!(!is_divisible_by("10", 3));
        assert!(!is_divisible_by("ten", 5));
        assert!(!is_divisible_by("10", 0));
    }

    #[test]
    fn test_is_credit_card() {
        assert!(is_credit_card("4111111111111111"));
        assert!(is_credit_card("4111-1111-1111-1111"));
        assert!(is_credit_card("5500 0055 5555 5559"));
        assert!(is_credit_card("378282246310005"));
        assert!(!is_credit_card("4111111111111112"));
        assert!(!is_credit_card("1234567890123456"));
        assert!(!is_credit_card("foo"));
    }

    #[test]
    fn test_is_currency_defaults() {
        let defaults = CurrencyOptions::default();
        assert!(is_currency("$10,123.45", &defaults));
        assert!(is_currency("10.00", &defaults));
        assert!(is_currency("-$1.99", &defaults));
        assert!(is_currency("1000", &defaults));
        assert!(!is_currency("$$1.99", &defaults));
        assert!(!is_currency("bla", &defaults));
        assert!(!is_currency("$1.999", &defaults));
        assert!(!is_currency("1,00.00", &defaults));
    }

    #[test]
    fn test_is_currency_required_symbol() {
        let reais = CurrencyOptions::with_required_symbol("R$");
        assert!(is_currency("R$10.00", &reais));
        assert!(!is_currency("10.00", &reais));

        let yen = CurrencyOptions::with_required_symbol("¥");
        assert!(is_currency("¥1000.00", &yen));
        assert!(!is_currency("1000.00", &yen));
    }

    #[test]
    fn test_is_currency_european_layout() {
        let euro = CurrencyOptions {
            symbol: "€".to_string(),
            symbol_after_digits: true,
            allow_space_after_digits: true,
            thousands_separator: '.',
            decimal_separator: ',',
            ..CurrencyOptions::default()
        };
        assert!(is_currency("1.234,56 €", &euro));
        assert!(is_currency("-10,00€", &euro));
        assert!(!is_currency("1,234.56 €", &euro));
    }

    #[test]
    fn test_currency_pattern_reuse() {
        let reais = CurrencyPattern::new(CurrencyOptions::with_required_symbol("R$")).unwrap();
        assert_eq!(reais.options().symbol, "R$");
        assert!(reais.is_match("R$10.00"));
        assert!(reais.is_match("R$1,000.00"));
        assert!(!reais.is_match("10.00"));
        assert!(!reais.is_match(" R$10.00"));

        assert!(CurrencyPattern::default().is_match("$1.99"));
    }

    #[test]
    fn test_currency_pattern_too_large() {
        let absurd = CurrencyOptions {
            digits_after_decimal: vec![usize::MAX],
            ..CurrencyOptions::default()
        };
        assert!(CurrencyPattern::new(absurd.clone()).is_err());
        assert!(!is_currency("1.00", &absurd));
    }

    #[test]
    fn test_is_currency_parens() {
        let parens = CurrencyOptions {
            parens_for_negatives: true,
            ..CurrencyOptions::default()
        };
        assert!(is_currency("($1.00)", &parens));
        assert!(!is_currency("-$1.00", &parens));
    }
}
