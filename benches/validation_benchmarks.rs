use criterion::{Criterion, criterion_group, criterion_main};
use propval::checkers;
use propval::propval_i18n::Translator;
use propval::*;
use serde_json::json;
use std::hint::black_box;

fn bench_email_checker(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_checker");

    let valid_emails = vec![
        "user@example.com",
        "test.user+tag@domain.co.uk",
        "admin@subdomain.example.com",
    ];

    let invalid_emails = vec!["invalid-email", "@example.com", "user@"];

    group.bench_function("valid_emails", |b| {
        b.iter(|| {
            for email in &valid_emails {
                assert!(checkers::is_email(black_box(email)));
            }
        })
    });

    group.bench_function("invalid_emails", |b| {
        b.iter(|| {
            for email in &invalid_emails {
                black_box(checkers::is_email(black_box(email)));
            }
        })
    });

    group.finish();
}

fn bench_network_checkers(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_checkers");

    let urls = vec![
        "https://example.com",
        "http://localhost.localdomain:8080/path",
        "https://subdomain.example.com/path?query=value",
    ];
    let options = UrlOptions::default();

    group.bench_function("url", |b| {
        b.iter(|| {
            for url in &urls {
                black_box(checkers::is_url(black_box(url), &options));
            }
        })
    });

    group.bench_function("ip", |b| {
        b.iter(|| {
            black_box(checkers::is_ip(black_box("192.168.0.1"), None));
            black_box(checkers::is_ip(black_box("fe80::1%eth0"), Some(IpVersion::V6)));
        })
    });

    group.bench_function("mobile_phone_any", |b| {
        b.iter(|| black_box(checkers::is_mobile_phone(black_box("+15552345678"), "any")))
    });

    group.finish();
}

fn bench_rule_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_construction");
    let rules = RuleFactory::english();

    group.bench_function("presence", |b| {
        b.iter(|| black_box(rules.presence(black_box("login"))))
    });

    group.bench_function("length_between", |b| {
        b.iter(|| black_box(rules.length(black_box("password"), LengthOptions::between(8, 64))))
    });

    group.bench_function("custom_message", |b| {
        b.iter(|| black_box(rules.email("email").message(":paramName looks wrong")))
    });

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let rules = vec![
        presence("login"),
        email("email"),
        is_int_with("age", IntOptions::range(18, 120)),
        optional(is_url("homepage")),
        length("password", LengthOptions::min(8)),
    ];

    let valid = json!({
        "login": "netto",
        "email": "netto@example.com",
        "age": 33,
        "password": "correct horse battery staple"
    });
    let invalid = json!({ "email": "nope", "age": "old", "homepage": "not a url" });

    group.bench_function("all_passing", |b| {
        b.iter(|| black_box(validate(black_box(&valid), &rules)))
    });

    group.bench_function("all_failing", |b| {
        b.iter(|| black_box(validate(black_box(&invalid), &rules)))
    });

    let request = Request::new()
        .with_body(json!({ "login": "netto", "profile": { "email": "netto@example.com" } }))
        .with_params(json!({ "id": "42" }))
        .with_query(json!({ "page": "2" }));
    let merged_rules = vec![presence("login"), email("profile.email"), is_int("id"), is_int("page")];

    group.bench_function("validate_all_merged", |b| {
        b.iter(|| black_box(validate_all(black_box(&request), &merged_rules)))
    });

    group.finish();
}

fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");
    let translator = Translator::english();

    group.bench_function("translate_with_params", |b| {
        b.iter(|| {
            black_box(translator.translate(
                black_box("length.between"),
                &[("paramName", "password"), ("min", "8"), ("max", "64")],
            ))
        })
    });

    group.bench_function("translate_missing_key", |b| {
        b.iter(|| black_box(translator.translate::<&str, &str>(black_box("no.such.key"), &[])))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_email_checker,
    bench_network_checkers,
    bench_rule_construction,
    bench_validate,
    bench_translation,
);
criterion_main!(benches);
