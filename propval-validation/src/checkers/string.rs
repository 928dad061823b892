// String checkers

use super::network::{FqdnOptions, is_fqdn};
use once_cell::sync::Lazy;
use regex::Regex;

// Common regex patterns
static EMAIL_LOCAL_PART_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+\-/=?^_`{|}~\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+$",
    )
    .unwrap()
});

static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static ASCII_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\x00-\x7F]+$").unwrap());

static BASE64_INVALID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9+/=]").unwrap());

static HEX_COLOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

static HEXADECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:0[xXhH])?[0-9a-fA-F]+$").unwrap());

static FULL_WIDTH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\x{0020}-\x{007E}\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]")
        .unwrap()
});

static HALF_WIDTH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{0020}-\x{007E}\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]")
        .unwrap()
});

const EMAIL_MAX_LOCAL: usize = 64;
const EMAIL_MAX_TOTAL: usize = 254;

/// Email address: a dot-separated local part, which may hold non-ASCII
/// letters, at a fully qualified domain.
pub fn is_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_TOTAL {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    !local.is_empty()
        && local.len() <= EMAIL_MAX_LOCAL
        && local
            .split('.')
            .all(|part| EMAIL_LOCAL_PART_REGEX.is_match(part))
        && is_fqdn(domain, &FqdnOptions::default())
}

pub fn contains(value: &str, needle: &str) -> bool {
    value.contains(needle)
}

pub fn equals(value: &str, comparison: &str) -> bool {
    value == comparison
}

/// ASCII letters only.
pub fn is_alpha(value: &str) -> bool {
    ALPHA_REGEX.is_match(value)
}

/// ASCII letters and digits only.
pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(value)
}

pub fn is_ascii(value: &str) -> bool {
    ASCII_REGEX.is_match(value)
}

/// Standard base64 with optional trailing padding.
pub fn is_base64(value: &str) -> bool {
    let len = value.len();
    if len % 4 != 0 || BASE64_INVALID_REGEX.is_match(value) {
        return false;
    }
    match value.find('=') {
        None => true,
        Some(first) => first == len - 1 || (first == len - 2 && value.ends_with('=')),
    }
}

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}

/// Hex digits with an optional `0x`/`0h` prefix.
pub fn is_hexadecimal(value: &str) -> bool {
    HEXADECIMAL_REGEX.is_match(value)
}

pub fn is_lowercase(value: &str) -> bool {
    value == value.to_lowercase()
}

pub fn is_uppercase(value: &str) -> bool {
    value == value.to_uppercase()
}

/// Contains at least one full-width character.
pub fn is_full_width(value: &str) -> bool {
    FULL_WIDTH_REGEX.is_match(value)
}

/// Contains at least one half-width character.
pub fn is_half_width(value: &str) -> bool {
    HALF_WIDTH_REGEX.is_match(value)
}

/// Mixes full-width and half-width characters.
pub fn is_variable_width(value: &str) -> bool {
    is_full_width(value) && is_half_width(value)
}

/// Contains at least one non-ASCII character.
pub fn is_multibyte(value: &str) -> bool {
    !value.is_ascii()
}

/// Contains a character outside the Basic Multilingual Plane, which UTF-16
/// encodes as a surrogate pair.
pub fn is_surrogate_pair(value: &str) -> bool {
    value.chars().any(|c| u32::from(c) > 0xFFFF)
}

/// Every character appears in `allowed`.
pub fn is_whitelisted(value: &str, allowed: &str) -> bool {
    value.chars().all(|c| allowed.contains(c))
}

/// Empty string.
pub fn is_null(value: &str) -> bool {
    value.is_empty()
}

/// Parses as a JSON object or array.
pub fn is_json(value: &str) -> bool {
    matches!(
        serde_json::from_str::<serde_json::Value>(value),
        Ok(serde_json::Value::Object(_) | serde_json::Value::Array(_))
    )
}

pub fn is_boolean(value: &str) -> bool {
    matches!(value, "true" | "false" | "1" | "0")
}

pub fn is_in(value: &str, options: &[String]) -> bool {
    options.iter().any(|option| option == value)
}

pub fn matches(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

/// Bounds for length-like checks. A missing `min` means zero, a missing
/// `max` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthOptions {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthOptions {
    pub fn min(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn max(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    fn contains(&self, len: usize) -> bool {
        len >= self.min.unwrap_or(0) && self.max.is_none_or(|max| len <= max)
    }
}

/// Length in characters.
pub fn is_length(value: &str, options: &LengthOptions) -> bool {
    options.contains(value.chars().count())
}

/// Length in UTF-8 bytes.
pub fn is_byte_length(value: &str, options: &LengthOptions) -> bool {
    options.contains(value.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email() {
        assert!(is_email("test@example.com"));
        assert!(is_email("user+tag@example.com"));
        assert!(is_email("user.name@example.co.uk"));
        assert!(!is_email("nettofarahatgmail.com"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@localhost"));
        assert!(!is_email("invalid email"));
        assert!(!is_email(".user@example.com"));
        assert!(!is_email("us..er@example.com"));
        assert!(!is_email("user.@example.com"));
        assert!(!is_email("a@b@example.com"));
    }

    #[test]
    fn test_is_email_international() {
        assert!(is_email("user@example.xn--p1ai"));
        assert!(is_email("josé@example.com"));
        assert!(is_email("用户@example.com"));
        assert!(!is_email("user@example.123"));
        assert!(!is_email("user@-example.com"));
    }

    #[test]
    fn test_contains_and_equals() {
        assert!(contains("nettofarah", "netto"));
        assert!(!contains("martaleal", "netto"));
        assert!(equals("a", "a"));
        assert!(!equals("a", "A"));
    }

    #[test]
    fn test_is_alpha() {
        assert!(is_alpha("abcXYZ"));
        assert!(!is_alpha("abc123"));
        assert!(!is_alpha("abc xyz"));
        assert!(!is_alpha(""));
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(!is_alphanumeric("abc@123"));
        assert!(!is_alphanumeric(""));
    }

    #[test]
    fn test_is_base64() {
        assert!(is_base64("Zm9vYmFy"));
        assert!(is_base64("Zm9vYg=="));
        assert!(is_base64("Zm9vYmE="));
        assert!(!is_base64("Zm9vYmF"));
        assert!(!is_base64("Zm9=vYmE"));
        assert!(!is_base64("Zm9v!mFy"));
    }

    #[test]
    fn test_hex() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("ff00ff"));
        assert!(!is_hex_color("#ff"));
        assert!(is_hexadecimal("0xdeadBEEF"));
        assert!(!is_hexadecimal("xyz"));
    }

    #[test]
    fn test_case() {
        assert!(is_lowercase("abc 123"));
        assert!(!is_lowercase("aBc"));
        assert!(is_uppercase("ABC 123"));
        assert!(!is_uppercase("AbC"));
    }

    #[test]
    fn test_widths() {
        assert!(is_full_width("ひらがな"));
        assert!(!is_full_width("abc"));
        assert!(is_half_width("abc"));
        assert!(!is_half_width("ひらがな"));
        assert!(is_variable_width("ひらがなabc"));
        assert!(!is_variable_width("abc"));
    }

    #[test]
    fn test_multibyte_and_surrogates() {
        assert!(is_multibyte("ünicode"));
        assert!(!is_multibyte("plain"));
        assert!(is_surrogate_pair("emoji 😀"));
        assert!(!is_surrogate_pair("ünicode"));
    }

    #[test]
    fn test_is_whitelisted() {
        assert!(is_whitelisted("abba", "ab"));
        assert!(!is_whitelisted("abc", "ab"));
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(r#"{"a": 1}"#));
        assert!(is_json("[1, 2]"));
        assert!(!is_json("1"));
        assert!(!is_json("null"));
        assert!(!is_json("{a: 1}"));
    }

    #[test]
    fn test_is_boolean_and_null() {
        assert!(is_boolean("true"));
        assert!(is_boolean("0"));
        assert!(!is_boolean("yes"));
        assert!(is_null(""));
        assert!(!is_null(" "));
    }

    #[test]
    fn test_lengths() {
        assert!(is_length("héllo", &LengthOptions::between(5, 5)));
        assert!(!is_byte_length("héllo", &LengthOptions::max(5)));
        assert!(is_length("", &LengthOptions::default()));
        assert!(!is_length("hi", &LengthOptions::min(3)));
        assert!(is_length("a very long value", &LengthOptions::min(3)));
    }

    #[test]
    fn test_is_in() {
        let options = vec!["banana".to_string(), "apple".to_string()];
        assert!(is_in("apple", &options));
        assert!(!is_in("grape", &options));
    }
}
