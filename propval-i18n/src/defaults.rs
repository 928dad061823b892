//! Built-in English messages

use crate::LocaleTable;
use once_cell::sync::Lazy;
use std::sync::Arc;

const ENGLISH: &[(&str, &str)] = &[
    ("required", "The \":paramName\" is required"),
    ("email", "The \":paramName\" must be a valid email address"),
    ("contains", "The \":paramName\" must contain \":str\""),
    ("isAlpha", "The \":paramName\" must only contain letters"),
    ("equals", "The \":paramName\" and \":comparison\" must match"),
    ("alphanumeric", "The \":paramName\" may only contain letters and numbers"),
    ("array", "The \":paramName\" must be an array"),
    ("creditcard", "The \":paramName\" must be a valid credit card number"),
    ("currency", "The \":paramName\" must be a valid currency"),
    ("matches", "The \":paramName\" must match the given pattern"),
    ("uuid.all", "The \":paramName\" must be a UUID"),
    ("uuid.version", "The \":paramName\" must be a UUID version \":version\""),
    ("in", "The \":paramName\" must be either of \":values\""),
    ("date", "The \":paramName\" is not a valid date"),
    ("decimal", "The \":paramName\" must be a decimal number"),
    ("integer", "The \":paramName\" must be an integer number"),
    ("json", "The \":paramName\" must be a valid JSON string"),
    ("null", "The \":paramName\" must be null"),
    ("numeric", "The \":paramName\" must be a numeric value"),
    ("url", "The \":paramName\" is not a valid URL"),
    ("plainobject", "The \":paramName\" must be a plain object"),
    (
        "length.between",
        "The \":paramName\" length must be equal or greater than \":min\" and equal or less than \":max\"",
    ),
    ("length.max", "The \":paramName\" length must be equal or less than \":max\""),
    ("length.min", "The \":paramName\" length must be equal or greater than \":min\""),
    ("boolean", "The \":paramName\" must be a boolean"),
    ("ascii", "The \":paramName\" must only contain ASCII characters"),
    ("base64", "The \":paramName\" must be base64 encoded"),
    ("fullwidth", "The \":paramName\" must contain full-width characters"),
    ("halfwidth", "The \":paramName\" must contain half-width characters"),
    ("hexcolor", "The \":paramName\" must be a hexadecimal color"),
    ("hexadecimal", "The \":paramName\" must be a hexadecimal number"),
    ("isin", "The \":paramName\" must be a valid ISIN"),
    ("iso8601", "The \":paramName\" must be a valid ISO 8601 date"),
    ("lowercase", "The \":paramName\" must be lowercase"),
    ("macaddress", "The \":paramName\" must be a valid MAC address"),
    ("mongoid", "The \":paramName\" must be a valid MongoDB ObjectId"),
    ("multibyte", "The \":paramName\" must contain multibyte characters"),
    ("surrogatepair", "The \":paramName\" must contain surrogate pair characters"),
    ("uppercase", "The \":paramName\" must be uppercase"),
    (
        "variablewidth",
        "The \":paramName\" must contain both full-width and half-width characters",
    ),
    ("divisibleby", "The \":paramName\" must be divisible by \":number\""),
    ("before.now", "The \":paramName\" must be a date before now"),
    ("before.date", "The \":paramName\" must be a date before \":date\""),
    ("after.now", "The \":paramName\" must be a date after now"),
    ("after.date", "The \":paramName\" must be a date after \":date\""),
    ("mobilephone", "The \":paramName\" must be a valid \":locale\" mobile phone number"),
    ("whitelisted", "The \":paramName\" may only contain the characters \":chars\""),
    (
        "bytelength.between",
        "The \":paramName\" byte length must be equal or greater than \":min\" and equal or less than \":max\"",
    ),
    ("bytelength.max", "The \":paramName\" byte length must be equal or less than \":max\""),
    ("bytelength.min", "The \":paramName\" byte length must be equal or greater than \":min\""),
    ("fqdn", "The \":paramName\" must be a fully qualified domain name"),
    ("float", "The \":paramName\" must be a floating point number"),
    ("ip.all", "The \":paramName\" must be a valid IP address"),
    ("ip.version", "The \":paramName\" must be a valid IPv\":version\" address"),
    ("isbn.all", "The \":paramName\" must be a valid ISBN"),
    ("isbn.version", "The \":paramName\" must be a valid ISBN-\":version\""),
];

static DEFAULT_TABLE: Lazy<Arc<LocaleTable>> =
    Lazy::new(|| Arc::new(LocaleTable::from_pairs(ENGLISH.iter().copied())));

/// The built-in English table every lookup falls back to.
pub fn default_table() -> Arc<LocaleTable> {
    Arc::clone(&DEFAULT_TABLE)
}
