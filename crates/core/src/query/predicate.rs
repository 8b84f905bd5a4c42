// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-dimension issue predicates.
//!
//! Every predicate is pure and total. An unset filter (empty set, `None`
//! tri-state, missing bound) always matches.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use crate::component::ComponentTree;
use crate::issue::{Issue, Resolution, Severity, Status};
use crate::rule::RuleKey;

/// Set membership, pass-through when the set is empty.
fn matches_set<T: Ord>(set: &BTreeSet<T>, value: &T) -> bool {
    set.is_empty() || set.contains(value)
}

/// Set membership for an optional field. A missing value only matches an
/// empty set.
fn matches_optional_set<T: Ord>(set: &BTreeSet<T>, value: Option<&T>) -> bool {
    set.is_empty() || value.is_some_and(|v| set.contains(v))
}

/// Tri-state presence check: `Some(true)` wants the field set,
/// `Some(false)` wants it unset.
fn matches_presence(wanted: Option<bool>, present: bool) -> bool {
    wanted.is_none_or(|wanted| wanted == present)
}

pub fn matches_rules(issue: &Issue, rules: &BTreeSet<RuleKey>) -> bool {
    matches_set(rules, &issue.rule)
}

/// Creation date inside `[after, before)`.
pub fn matches_date_window(
    issue: &Issue,
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
) -> bool {
    after.is_none_or(|after| issue.created_at >= after)
        && before.is_none_or(|before| issue.created_at < before)
}

/// The issue's component, or one of its ancestors, has one of `root_keys`.
///
/// An issue whose component is unknown to `tree` only matches when no root
/// is requested.
pub fn matches_component_root(
    issue: &Issue,
    root_keys: &BTreeSet<String>,
    tree: &ComponentTree,
) -> bool {
    root_keys.is_empty()
        || tree
            .ancestors_and_self(issue.component_id)
            .any(|component| root_keys.contains(&component.key))
}

pub fn matches_assigned(issue: &Issue, assigned: Option<bool>) -> bool {
    matches_presence(assigned, issue.is_assigned())
}

pub fn matches_planned(issue: &Issue, planned: Option<bool>) -> bool {
    matches_presence(planned, issue.is_planned())
}

pub fn matches_resolved(issue: &Issue, resolved: Option<bool>) -> bool {
    matches_presence(resolved, issue.is_resolved())
}

pub fn matches_action_plans(issue: &Issue, plan_keys: &BTreeSet<String>) -> bool {
    matches_optional_set(plan_keys, issue.action_plan_key.as_ref())
}

pub fn matches_keys(issue: &Issue, keys: &BTreeSet<String>) -> bool {
    matches_set(keys, &issue.key)
}

pub fn matches_severities(issue: &Issue, severities: &BTreeSet<Severity>) -> bool {
    matches_set(severities, &issue.severity)
}

pub fn matches_statuses(issue: &Issue, statuses: &BTreeSet<Status>) -> bool {
    matches_set(statuses, &issue.status)
}

pub fn matches_resolutions(issue: &Issue, resolutions: &BTreeSet<Resolution>) -> bool {
    matches_optional_set(resolutions, issue.resolution.as_ref())
}

pub fn matches_assignees(issue: &Issue, assignees: &BTreeSet<String>) -> bool {
    matches_optional_set(assignees, issue.assignee.as_ref())
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
