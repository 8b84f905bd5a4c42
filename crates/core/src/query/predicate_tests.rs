// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::component::Component;
use chrono::TimeZone;
use yare::parameterized;

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2013, 4, day, 0, 0, 0).unwrap()
}

fn issue_on(component_id: i64) -> Issue {
    Issue::new(
        1,
        "ABCDE",
        component_id,
        399,
        RuleKey::of("squid", "AvoidCycle"),
        at(16),
    )
}

fn struts() -> ComponentTree {
    ComponentTree::new(vec![
        Component::root(399, "struts", "Struts"),
        Component::child(400, "struts-core", "Struts Core", 399),
        Component::child(401, "Action.java", "Action", 400),
        Component::child(402, "Filter.java", "Filter", 400),
    ])
}

fn set<T: Ord>(items: impl IntoIterator<Item = T>) -> BTreeSet<T> {
    items.into_iter().collect()
}

#[test]
fn rules_empty_set_matches() {
    assert!(matches_rules(&issue_on(401), &BTreeSet::new()));
}

#[test]
fn rules_membership() {
    let issue = issue_on(401);
    assert!(matches_rules(
        &issue,
        &set([RuleKey::of("squid", "AvoidCycle")])
    ));
    assert!(matches_rules(
        &issue,
        &set([
            RuleKey::of("squid", "NullRef"),
            RuleKey::of("squid", "AvoidCycle")
        ])
    ));
    assert!(!matches_rules(&issue, &set([RuleKey::of("squid", "Other")])));
    // Same rule key under another repository is a different rule
    assert!(!matches_rules(
        &issue,
        &set([RuleKey::of("pmd", "AvoidCycle")])
    ));
}

// Issue created on day 16; window is [after, before)
#[parameterized(
    unbounded = { None, None, true },
    lower_equal_is_inclusive = { Some(16), None, true },
    lower_before = { Some(15), None, true },
    lower_after = { Some(17), None, false },
    upper_equal_is_exclusive = { None, Some(16), false },
    upper_after = { None, Some(17), true },
    upper_before = { None, Some(15), false },
    both_containing = { Some(15), Some(17), true },
    both_exact_day = { Some(16), Some(17), true },
    empty_window = { Some(16), Some(16), false },
)]
fn date_window(after: Option<u32>, before: Option<u32>, expected: bool) {
    let issue = issue_on(401);
    assert_eq!(
        matches_date_window(&issue, after.map(at), before.map(at)),
        expected
    );
}

#[parameterized(
    project_root = { 401, "struts", true },
    module = { 401, "struts-core", true },
    itself = { 401, "Action.java", true },
    sibling = { 401, "Filter.java", false },
    sibling_itself = { 402, "Filter.java", true },
    unknown_root = { 401, "not-found", false },
    unknown_component = { 999, "struts", false },
)]
fn component_root(component_id: i64, root: &str, expected: bool) {
    let tree = struts();
    let roots = set([root.to_string()]);
    assert_eq!(
        matches_component_root(&issue_on(component_id), &roots, &tree),
        expected
    );
}

#[test]
fn component_root_empty_set_matches_unknown_component() {
    let tree = ComponentTree::default();
    assert!(matches_component_root(
        &issue_on(999),
        &BTreeSet::new(),
        &tree
    ));
}

#[parameterized(
    absent_assigned = { None, true, true },
    absent_unassigned = { None, false, true },
    wants_assigned_has = { Some(true), true, true },
    wants_assigned_missing = { Some(true), false, false },
    wants_unassigned_has = { Some(false), true, false },
    wants_unassigned_missing = { Some(false), false, true },
)]
fn tri_state_presence(wanted: Option<bool>, present: bool, expected: bool) {
    let value = present.then_some("perceval");
    let assigned = issue_on(401).with_assignee(value);
    let planned = issue_on(401).with_action_plan(value);
    let resolved = issue_on(401).with_resolution(present.then_some(Resolution::Fixed));

    assert_eq!(matches_assigned(&assigned, wanted), expected);
    assert_eq!(matches_planned(&planned, wanted), expected);
    assert_eq!(matches_resolved(&resolved, wanted), expected);
}

#[test]
fn action_plans_membership() {
    let planned = issue_on(401).with_action_plan(Some("ABC"));
    let unplanned = issue_on(401);

    assert!(matches_action_plans(&planned, &BTreeSet::new()));
    assert!(matches_action_plans(&unplanned, &BTreeSet::new()));
    assert!(matches_action_plans(&planned, &set(["ABC".to_string()])));
    assert!(matches_action_plans(
        &planned,
        &set(["ABC".to_string(), "DEF".to_string()])
    ));
    assert!(!matches_action_plans(&planned, &set(["DEF".to_string()])));
    assert!(!matches_action_plans(&unplanned, &set(["ABC".to_string()])));
}

#[test]
fn scalar_sets() {
    let issue = issue_on(401)
        .with_severity(Severity::Blocker)
        .with_status(Status::Confirmed);

    assert!(matches_keys(&issue, &set(["ABCDE".to_string()])));
    assert!(!matches_keys(&issue, &set(["OTHER".to_string()])));
    assert!(matches_severities(&issue, &set([Severity::Blocker, Severity::Info])));
    assert!(!matches_severities(&issue, &set([Severity::Info])));
    assert!(matches_statuses(&issue, &set([Status::Confirmed])));
    assert!(!matches_statuses(&issue, &set([Status::Closed])));
}

#[test]
fn optional_sets_miss_when_field_absent() {
    let issue = issue_on(401);
    assert!(matches_resolutions(&issue, &BTreeSet::new()));
    assert!(!matches_resolutions(&issue, &set([Resolution::Fixed])));
    assert!(matches_assignees(&issue, &BTreeSet::new()));
    assert!(!matches_assignees(&issue, &set(["perceval".to_string()])));

    let assigned = issue.with_assignee(Some("perceval"));
    assert!(matches_assignees(&assigned, &set(["perceval".to_string()])));
}
