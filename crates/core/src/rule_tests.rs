// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    simple = { "squid:AvoidCycle", "squid", "AvoidCycle" },
    nested_separator = { "common-java:Insufficient:Coverage", "common-java", "Insufficient:Coverage" },
    dotted = { "pmd:java.lang.Null", "pmd", "java.lang.Null" },
)]
fn rule_key_parse_valid(input: &str, repository: &str, rule: &str) {
    let key = RuleKey::parse(input).unwrap();
    assert_eq!(key.repository, repository);
    assert_eq!(key.rule, rule);
}

#[parameterized(
    empty = { "" },
    no_separator = { "squid" },
    missing_repository = { ":AvoidCycle" },
    missing_rule = { "squid:" },
)]
fn rule_key_parse_invalid(input: &str) {
    let err = RuleKey::parse(input).unwrap_err();
    assert!(matches!(err, Error::InvalidRuleKey(_)));
}

#[test]
fn rule_key_display_matches_parse_input() {
    let key = RuleKey::of("squid", "NullRef");
    assert_eq!(key.to_string(), "squid:NullRef");
    assert_eq!(key.to_string().parse::<RuleKey>().unwrap(), key);
}

#[test]
fn rule_key_equality_uses_both_parts() {
    assert_ne!(RuleKey::of("squid", "NullRef"), RuleKey::of("pmd", "NullRef"));
    assert_ne!(RuleKey::of("squid", "NullRef"), RuleKey::of("squid", "AvoidCycle"));
}
