// Request adapters

use crate::RequestError;
use serde_json::map::Entry;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Something with a request body.
pub trait HasBody {
    fn body(&self) -> Option<&Value>;
}

/// Something with query-string parameters.
pub trait HasQuery {
    fn query(&self) -> Option<&Value>;
}

/// Something with path parameters.
pub trait HasParams {
    fn params(&self) -> Option<&Value>;
}

/// Something with request headers.
pub trait HasHeaders {
    fn headers(&self) -> Option<&Value>;
}

macro_rules! forward_ref {
    ($($trait:ident::$method:ident),*) => {
        $(
            impl<T: $trait + ?Sized> $trait for &T {
                fn $method(&self) -> Option<&Value> {
                    (**self).$method()
                }
            }
        )*
    };
}

forward_ref!(HasBody::body, HasQuery::query, HasParams::params, HasHeaders::headers);

// A JSON value shaped like `{ "body": .., "query": .., "params": .., "headers": .. }`.
impl HasBody for Value {
    fn body(&self) -> Option<&Value> {
        self.get("body")
    }
}

impl HasQuery for Value {
    fn query(&self) -> Option<&Value> {
        self.get("query")
    }
}

impl HasParams for Value {
    fn params(&self) -> Option<&Value> {
        self.get("params")
    }
}

impl HasHeaders for Value {
    fn headers(&self) -> Option<&Value> {
        self.get("headers")
    }
}

/// An owned request with each part already decoded to JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    headers: Option<Value>,
    params: Option<Value>,
    query: Option<Value>,
    body: Option<Value>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a request from raw parts.
    ///
    /// Header names are lowercased. Names that differ only in case are
    /// combined into one `", "`-separated value, ordered by the original
    /// names. A non-empty body must be JSON.
    pub fn from_parts(
        headers: &HashMap<String, String>,
        path_params: &HashMap<String, String>,
        query_params: &HashMap<String, String>,
        body: &[u8],
    ) -> Result<Self, RequestError> {
        let body = if body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            Some(serde_json::from_slice(body)?)
        };

        Ok(Self {
            headers: Some(header_map(headers)),
            params: Some(string_map(path_params)),
            query: Some(string_map(query_params)),
            body,
        })
    }

    pub fn with_headers(mut self, headers: Value) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

fn header_map(headers: &HashMap<String, String>) -> Value {
    let mut sorted: Vec<(&String, &String)> = headers.iter().collect();
    sorted.sort();

    let mut combined = Map::new();
    for (name, value) in sorted {
        match combined.entry(name.to_ascii_lowercase()) {
            Entry::Vacant(entry) => {
                entry.insert(Value::String(value.clone()));
            }
            Entry::Occupied(mut entry) => {
                if let Value::String(existing) = entry.get_mut() {
                    existing.push_str(", ");
                    existing.push_str(value);
                }
            }
        }
    }
    Value::Object(combined)
}

fn string_map(map: &HashMap<String, String>) -> Value {
    Value::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

impl HasBody for Request {
    fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

impl HasQuery for Request {
    fn query(&self) -> Option<&Value> {
        self.query.as_ref()
    }
}

impl HasParams for Request {
    fn params(&self) -> Option<&Value> {
        self.params.as_ref()
    }
}

impl HasHeaders for Request {
    fn headers(&self) -> Option<&Value> {
        self.headers.as_ref()
    }
}
