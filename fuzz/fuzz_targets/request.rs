//! Fuzz target for request assembly and merged validation.
//!
//! Builds a request from arbitrary maps and body bytes, runs a fixed rule
//! list over every part, and renders any failure as an error response.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use propval_validation::*;
use std::collections::HashMap;

#[derive(Debug, Arbitrary)]
struct FuzzRequest {
    headers: Vec<(String, String)>,
    params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Vec<u8>,
    accept: Option<String>,
}

fuzz_target!(|data: FuzzRequest| {
    let headers: HashMap<String, String> = data.headers.into_iter().collect();
    let params: HashMap<String, String> = data.params.into_iter().collect();
    let query: HashMap<String, String> = data.query.into_iter().collect();

    let Ok(request) = Request::from_parts(&headers, &params, &query, &data.body) else {
        return;
    };

    let rules = RuleFactory::english();
    let rules = [
        rules.presence("id"),
        rules.email("user.email"),
        rules.is_int_with("page", IntOptions::range(1, 1000)),
        optional(rules.is_url("homepage")),
        rules.is_length("name", LengthOptions::between(1, 64)),
        rules.is_mobile_phone("phone", "any").unwrap(),
        rules.is_date("since"),
        rules.is_currency("price"),
    ];

    let merged = validate_all(&request, &rules);
    assert_eq!(merged.valid, merged.errors.is_empty());
    assert_eq!(merged.errors.len(), merged.messages.len());

    let _ = validate_headers(&request, &rules);
    let _ = validate_body(&request, &rules);

    if let Err(error) = assert_all(&request, &rules) {
        let response = ErrorResponse::from_error(&error, data.accept.as_deref())
            .expect("validation errors always render");
        assert_eq!(response.status, 422);
    }
});
