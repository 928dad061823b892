//! Fuzz target for locale loading and message interpolation.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use propval_i18n::{LocaleTable, Translator, interpolate};

#[derive(Debug, Arbitrary)]
struct FuzzMessage {
    locale_json: String,
    key: String,
    template: String,
    params: Vec<(String, String)>,
}

fuzz_target!(|data: FuzzMessage| {
    // Interpolation never fails and leaves templates without placeholders alone
    let rendered = interpolate(&data.template, &data.params);
    if !data.template.contains(':') {
        assert_eq!(rendered, data.template);
    }

    if let Ok(table) = LocaleTable::from_json(&data.locale_json) {
        let translator = Translator::new(table);
        let _ = translator.translate(&data.key, &data.params);
    }

    // Unknown keys fall back to the key itself
    let english = Translator::english();
    let _ = english.translate(&data.key, &data.params);
});
