// Tests for dead-link classification

use linkwatch_core::classify;
use linkwatch_core::model::DeadLink;
use std::path::PathBuf;

fn record(file: &str, link: &str, whitelisted: bool) -> DeadLink {
    DeadLink::new(PathBuf::from(file), link.to_string(), whitelisted)
}

#[test]
fn test_partition_completeness() {
    let records = vec![
        record("a.md", "http://one.example/", false),
        record("a.md", "http://two.example/", true),
        record("b.md", "http://three.example/", false),
        record("c.md", "http://four.example/", true),
    ];
    let total = records.len();

    let outcome = classify(records);

    assert_eq!(outcome.whitelisted.len() + outcome.flagged.len(), total);
    assert!(outcome.whitelisted.iter().all(|r| r.whitelisted));
    assert!(outcome.flagged.iter().all(|r| !r.whitelisted));
}

#[test]
fn test_partition_is_stable() {
    let records = vec![
        record("z.md", "http://one.example/", false),
        record("a.md", "http://two.example/", false),
        record("m.md", "http://three.example/", true),
        record("b.md", "http://four.example/", true),
        record("q.md", "http://five.example/", false),
    ];

    let outcome = classify(records);

    let flagged_links: Vec<&str> = outcome.flagged.iter().map(|r| r.link.as_str()).collect();
    let whitelisted_links: Vec<&str> = outcome
        .whitelisted
        .iter()
        .map(|r| r.link.as_str())
        .collect();

    assert_eq!(
        flagged_links,
        vec![
            "http://one.example/",
            "http://two.example/",
            "http://five.example/"
        ]
    );
    assert_eq!(
        whitelisted_links,
        vec!["http://three.example/", "http://four.example/"]
    );
}

#[test]
fn test_empty_input_is_clean() {
    let outcome = classify(Vec::new());

    assert!(outcome.whitelisted.is_empty());
    assert!(outcome.flagged.is_empty());
    assert!(outcome.is_clean());
    assert_eq!(outcome.total(), 0);
}

#[test]
fn test_all_whitelisted_is_clean() {
    let records = vec![
        record("a.md", "http://one.example/", true),
        record("b.md", "http://two.example/", true),
    ];

    let outcome = classify(records);

    assert!(outcome.is_clean());
    assert_eq!(outcome.total(), 2);
    assert!(outcome.flagged.is_empty());
}

#[test]
fn test_any_flagged_record_fails_the_run() {
    let records = vec![
        record("a.md", "http://one.example/", true),
        record("b.md", "http://two.example/", false),
    ];

    let outcome = classify(records);

    assert!(!outcome.is_clean());
}
