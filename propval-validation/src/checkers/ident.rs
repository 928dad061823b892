// Identifier checkers

use super::luhn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static UUID_ALL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

static UUID_V3_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

static UUID_V4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

static UUID_V5_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

static ISIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}[0-9A-Z]{9}[0-9]$").unwrap());

static ISBN10_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[0-9]{9}X|[0-9]{10})$").unwrap());

static ISBN13_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{13}$").unwrap());

const MONGO_ID_LENGTH: usize = 24;

/// UUID version accepted by [`is_uuid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UuidVersion {
    V3,
    V4,
    V5,
}

impl UuidVersion {
    pub fn number(&self) -> u8 {
        match self {
            UuidVersion::V3 => 3,
            UuidVersion::V4 => 4,
            UuidVersion::V5 => 5,
        }
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Hyphenated UUID, any version unless one is given.
pub fn is_uuid(value: &str, version: Option<UuidVersion>) -> bool {
    let pattern = match version {
        None => &*UUID_ALL_REGEX,
        Some(UuidVersion::V3) => &*UUID_V3_REGEX,
        Some(UuidVersion::V4) => &*UUID_V4_REGEX,
        Some(UuidVersion::V5) => &*UUID_V5_REGEX,
    };
    pattern.is_match(value)
}

/// International Securities Identification Number with a valid check digit.
pub fn is_isin(value: &str) -> bool {
    if !ISIN_REGEX.is_match(value) {
        return false;
    }
    // letters expand to two digits: A=10 .. Z=35
    let digits: String = value
        .chars()
        .filter_map(|c| c.to_digit(36))
        .map(|d| d.to_string())
        .collect();
    luhn(&digits)
}

/// ISBN flavour accepted by [`is_isbn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsbnVersion {
    Isbn10,
    Isbn13,
}

impl IsbnVersion {
    pub fn number(&self) -> u8 {
        match self {
            IsbnVersion::Isbn10 => 10,
            IsbnVersion::Isbn13 => 13,
        }
    }
}

impl fmt::Display for IsbnVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// ISBN-10 or ISBN-13 with a valid check digit. Hyphens and spaces are
/// ignored.
pub fn is_isbn(value: &str, version: Option<IsbnVersion>) -> bool {
    let compact: String = value.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
    match version {
        Some(IsbnVersion::Isbn10) => is_isbn10(&compact),
        Some(IsbnVersion::Isbn13) => is_isbn13(&compact),
        None => is_isbn10(&compact) || is_isbn13(&compact),
    }
}

fn is_isbn10(compact: &str) -> bool {
    if !ISBN10_REGEX.is_match(compact) {
        return false;
    }
    let checksum: u32 = compact
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let digit = if c == 'X' { 10 } else { c.to_digit(10).unwrap_or(0) };
            (i as u32 + 1) * digit
        })
        .sum();
    checksum % 11 == 0
}

fn is_isbn13(compact: &str) -> bool {
    if !ISBN13_REGEX.is_match(compact) {
        return false;
    }
    let digits: Vec<u32> = compact.chars().filter_map(|c| c.to_digit(10)).collect();
    let weighted: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - weighted % 10) % 10 == digits[12]
}

/// 24-character hexadecimal MongoDB ObjectId.
pub fn is_mongo_id(value: &str) -> bool {
    value.len() == MONGO_ID_LENGTH && value.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_uuid() {
        assert!(is_uuid("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11", None));
        assert!(is_uuid("A0EEBC99-9C0B-4EF8-BB6D-6BB9BD380A11", None));
        assert!(!is_uuid("a0eebc999c0b4ef8bb6d6bb9bd380a11", None));
        assert!(!is_uuid("not-a-uuid", None));
    }

    #[test]
    fn test_is_uuid_versions() {
        let v3 = "a987fbc9-4bed-3078-af07-9141ba07c9f3";
        let v4 = "713ae7e3-cb32-45f9-adcb-7c4fa86b90c1";
        let v5 = "987fbc97-4bed-5078-af07-9141ba07c9f3";
        assert!(is_uuid(v3, Some(UuidVersion::V3)));
        assert!(!is_uuid(v3, Some(UuidVersion::V4)));
        assert!(is_uuid(v4, Some(UuidVersion::V4)));
        assert!(!is_uuid(v4, Some(UuidVersion::V5)));
        assert!(is_uuid(v5, Some(UuidVersion::V5)));
        assert_eq!(UuidVersion::V4.to_string(), "4");
    }

    #[test]
    fn test_is_isin() {
        assert!(is_isin("US0378331005"));
        assert!(is_isin("AU0000XVGZA3"));
        assert!(!is_isin("US0378331004"));
        assert!(!is_isin("us0378331005"));
        assert!(!is_isin("US03783310"));
    }

    #[test]
    fn test_is_isbn() {
        assert!(is_isbn("3836221195", None));
        assert!(is_isbn("3-8362-2119-5", Some(IsbnVersion::Isbn10)));
        assert!(is_isbn("0-8044-2957-X", Some(IsbnVersion::Isbn10)));
        assert!(is_isbn("9783836221191", None));
        assert!(is_isbn("978 3 8362 2119 1", Some(IsbnVersion::Isbn13)));
        assert!(!is_isbn("3836221190", None));
        assert!(!is_isbn("9783836221190", None));
        assert!(!is_isbn("3836221195", Some(IsbnVersion::Isbn13)));
    }

    #[test]
    fn test_is_mongo_id() {
        assert!(is_mongo_id("507f1f77bcf86cd799439011"));
        assert!(!is_mongo_id("507f1f77bcf86cd79943901"));
        assert!(!is_mongo_id("507f1f77bcf86cd79943901z"));
    }
}
