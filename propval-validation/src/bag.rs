//! Data bag access
//!
//! A data bag is any `serde_json::Value`, normally an object. Fields are
//! addressed with dot paths (`"person.email"`); a numeric segment indexes
//! into arrays (`"items.0"`).

use serde_json::{Map, Value};

/// Resolve `path` inside `bag`.
///
/// A key containing dots that exists verbatim at the top level wins over
/// the nested interpretation. Anything missing along the way yields `None`.
pub fn lookup<'a>(bag: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(value) = bag.as_object().and_then(|map| map.get(path)) {
        return Some(value);
    }

    path.split('.').try_fold(bag, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// The path resolves to something other than `null`.
///
/// `0`, `false` and `""` are present.
pub fn is_present(bag: &Value, path: &str) -> bool {
    lookup(bag, path).is_some_and(|value| !value.is_null())
}

// Magnitude from which floats render in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// `1e21` -> `1e+21`, `-2.5e300` -> `-2.5e+300`
fn exponent_form(f: f64) -> String {
    let rendered = format!("{:e}", f);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => rendered,
    }
}

/// Render a value the way checkers expect to receive it.
pub fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                if f == 0.0 {
                    "0".to_string()
                } else if f.abs() >= EXPONENT_THRESHOLD {
                    exponent_form(f)
                } else if f.fract() == 0.0 {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Deep-merge `source` into `target`, last writer wins.
///
/// Nested objects merge key by key; every other value, arrays included,
/// replaces what was there. A non-object `source` is ignored.
pub fn merge(target: &mut Map<String, Value>, source: &Value) {
    let Value::Object(source) = source else {
        return;
    };

    for (key, incoming) in source {
        match (target.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(_)) => merge(existing, incoming),
            _ => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}
