// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: fixtures are shared across multiple test binaries,
// and not every test file uses every fixture.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use chrono::{DateTime, TimeZone, Utc};

pub use qm_core::{
    ActionExecutor, Component, ComponentTree, Error, InMemoryIssues, Issue, IssueFinder,
    IssueQuery, IssueRepository, Result, Role, RoleGrants, RuleKey, Status, TransitionRegistry,
};

pub const PROJECT: i64 = 399;

pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2013, 4, day, 10, 0, 0).unwrap()
}

/// struts (399) -> struts-core (400) -> {Action.java (401), Filter.java (402)}
pub fn struts() -> ComponentTree {
    ComponentTree::new(vec![
        Component::root(399, "struts", "Struts"),
        Component::child(400, "struts-core", "Struts Core", 399),
        Component::child(401, "Action.java", "Action", 400),
        Component::child(402, "Filter.java", "Filter", 400),
    ])
}

pub fn avoid_cycle() -> RuleKey {
    RuleKey::of("squid", "AvoidCycle")
}

pub fn null_ref() -> RuleKey {
    RuleKey::of("squid", "NullRef")
}

pub fn issue(id: i64, key: &str, component_id: i64, rule: RuleKey) -> Issue {
    Issue::new(id, key, component_id, PROJECT, rule, at(16))
}

pub fn keys(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.key.as_str()).collect()
}
