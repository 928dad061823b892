//! Fuzz target for the primitive checkers.
//!
//! Every checker must accept any string without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use propval_validation::checkers::*;

fuzz_target!(|data: &str| {
    let _ = is_email(data);
    let _ = is_url(data, &UrlOptions::default());
    let _ = is_fqdn(data, &FqdnOptions::default());
    let _ = is_ip(data, None);
    let _ = is_uuid(data, None);
    let _ = is_isbn(data, None);
    let _ = is_isin(data);
    let _ = is_credit_card(data);
    let _ = is_currency(data, &CurrencyOptions::default());
    let _ = is_int(data, &IntOptions::default());
    let _ = is_float(data, &FloatOptions::default());
    let _ = is_divisible_by(data, 7);
    let _ = is_date(data);
    let _ = is_iso8601(data);
    let _ = is_base64(data);
    let _ = is_mac_address(data);
    let _ = is_mobile_phone(data, "any");
    let _ = is_json(data);
    let _ = is_length(data, &LengthOptions::between(1, 8));
    let _ = is_byte_length(data, &LengthOptions::max(16));
});
