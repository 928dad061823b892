//! HTTP error bridge
//!
//! Framework-agnostic rendering of a [`ValidationError`] as a 422 response.
//! Error hooks hand over whatever error they caught; anything that is not a
//! validation failure comes back as `None` and should be propagated as is.

use crate::ValidationError;
use std::error::Error;

/// Status code for a failed validation.
pub const UNPROCESSABLE_ENTITY: u16 = 422;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Body format picked from an `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Text,
    Json,
}

impl ResponseFormat {
    /// Pick a format from an `Accept` header.
    ///
    /// The highest quality wins. Text wins ties, a missing header, and
    /// headers that accept neither format.
    pub fn negotiate(accept: Option<&str>) -> Self {
        let Some(accept) = accept else {
            return ResponseFormat::Text;
        };

        let ranges: Vec<(&str, f32)> = accept
            .split(',')
            .filter_map(|part| {
                let mut split = part.split(';');
                let range = split.next()?.trim();
                if range.is_empty() {
                    return None;
                }
                let quality = split
                    .find_map(|param| param.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse().ok())
                    .unwrap_or(1.0);
                Some((range, quality))
            })
            .collect();

        let text = quality_for(&ranges, "text", "plain");
        let json = quality_for(&ranges, "application", "json");
        if json > text && json > 0.0 {
            ResponseFormat::Json
        } else {
            ResponseFormat::Text
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ResponseFormat::Text => TEXT_CONTENT_TYPE,
            ResponseFormat::Json => JSON_CONTENT_TYPE,
        }
    }
}

// Quality of the most specific range matching `kind/subtype`.
fn quality_for(ranges: &[(&str, f32)], kind: &str, subtype: &str) -> f32 {
    let mut best: Option<(u8, f32)> = None;
    for (range, quality) in ranges {
        let Some((range_kind, range_subtype)) = range.split_once('/') else {
            continue;
        };
        let specificity = match (range_kind.trim(), range_subtype.trim()) {
            (k, s) if k.eq_ignore_ascii_case(kind) && s.eq_ignore_ascii_case(subtype) => 2,
            (k, "*") if k.eq_ignore_ascii_case(kind) => 1,
            ("*", "*") => 0,
            _ => continue,
        };
        if best.is_none_or(|(current, _)| specificity > current) {
            best = Some((specificity, *quality));
        }
    }
    best.map_or(0.0, |(_, quality)| quality)
}

/// A rendered error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl ErrorResponse {
    /// Render a validation failure as a 422 response in `format`.
    pub fn from_validation_error(error: &ValidationError, format: ResponseFormat) -> Self {
        let body = match format {
            ResponseFormat::Text => format!("Invalid Request: {}", error.messages().join(", ")),
            ResponseFormat::Json => serde_json::json!({ "errors": error.messages() }).to_string(),
        };
        Self {
            status: UNPROCESSABLE_ENTITY,
            content_type: format.content_type(),
            body,
        }
    }

    /// Render `error` if it is a [`ValidationError`], negotiating the body
    /// format from `accept`. Any other error yields `None`.
    pub fn from_error(error: &(dyn Error + 'static), accept: Option<&str>) -> Option<Self> {
        error
            .downcast_ref::<ValidationError>()
            .map(|error| Self::from_validation_error(error, ResponseFormat::negotiate(accept)))
    }
}
