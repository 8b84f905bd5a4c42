// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue queries: filter dimensions, sort order, and the compiled predicate
//! list evaluated by the issue finder.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::component::ComponentTree;
use crate::error::{Error, Result};
use crate::issue::{Issue, Resolution, Severity, Status};
use crate::rule::RuleKey;

use super::predicate;

/// Field an issue query result can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueSort {
    Assignee,
    Severity,
    Status,
    CreationDate,
    UpdateDate,
    CloseDate,
}

impl IssueSort {
    /// Returns the string representation used in requests and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSort::Assignee => "ASSIGNEE",
            IssueSort::Severity => "SEVERITY",
            IssueSort::Status => "STATUS",
            IssueSort::CreationDate => "CREATION_DATE",
            IssueSort::UpdateDate => "UPDATE_DATE",
            IssueSort::CloseDate => "CLOSE_DATE",
        }
    }

    /// Compares two issues on this field.
    ///
    /// Severity follows its rank (INFO lowest), status follows workflow
    /// order. Missing values (no assignee, no close date) come after present
    /// ones whatever the direction. Equal fields fall back to the issue key,
    /// always ascending, so the order is total and repeatable.
    pub fn compare(self, a: &Issue, b: &Issue, asc: bool) -> Ordering {
        let primary = match self {
            IssueSort::Assignee => {
                compare_present_first(a.assignee.as_ref(), b.assignee.as_ref(), asc)
            }
            IssueSort::Severity => directed(a.severity.cmp(&b.severity), asc),
            IssueSort::Status => directed(a.status.cmp(&b.status), asc),
            IssueSort::CreationDate => directed(a.created_at.cmp(&b.created_at), asc),
            IssueSort::UpdateDate => directed(a.updated_at.cmp(&b.updated_at), asc),
            IssueSort::CloseDate => {
                compare_present_first(a.closed_at.as_ref(), b.closed_at.as_ref(), asc)
            }
        };
        primary.then_with(|| a.key.cmp(&b.key))
    }
}

fn directed(ordering: Ordering, asc: bool) -> Ordering {
    if asc {
        ordering
    } else {
        ordering.reverse()
    }
}

fn compare_present_first<T: Ord>(a: Option<&T>, b: Option<&T>, asc: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.cmp(b), asc),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for IssueSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "ASSIGNEE" => Ok(IssueSort::Assignee),
            "SEVERITY" => Ok(IssueSort::Severity),
            "STATUS" => Ok(IssueSort::Status),
            "CREATION_DATE" => Ok(IssueSort::CreationDate),
            "UPDATE_DATE" => Ok(IssueSort::UpdateDate),
            "CLOSE_DATE" => Ok(IssueSort::CloseDate),
            _ => Err(Error::InvalidSort(s.to_string())),
        }
    }
}

type MatchFn = dyn Fn(&Issue, &ComponentTree) -> bool + Send + Sync;

/// One compiled filter dimension.
#[derive(Clone)]
struct IssuePredicate {
    name: &'static str,
    test: Arc<MatchFn>,
}

impl IssuePredicate {
    fn new<F>(name: &'static str, test: F) -> Self
    where
        F: Fn(&Issue, &ComponentTree) -> bool + Send + Sync + 'static,
    {
        IssuePredicate {
            name,
            test: Arc::new(test),
        }
    }
}

/// An immutable set of issue filters plus a sort order.
///
/// Built with [`IssueQuery::builder`]. Every constrained dimension is
/// compiled into a predicate once, at build time; unconstrained dimensions
/// contribute nothing and match every issue.
#[derive(Clone, Serialize)]
pub struct IssueQuery {
    keys: BTreeSet<String>,
    severities: BTreeSet<Severity>,
    statuses: BTreeSet<Status>,
    resolutions: BTreeSet<Resolution>,
    component_roots: BTreeSet<String>,
    rules: BTreeSet<RuleKey>,
    action_plans: BTreeSet<String>,
    assignees: BTreeSet<String>,
    assigned: Option<bool>,
    planned: Option<bool>,
    resolved: Option<bool>,
    created_after: Option<DateTime<Utc>>,
    created_before: Option<DateTime<Utc>>,
    sort: Option<IssueSort>,
    asc: bool,
    #[serde(skip)]
    predicates: Vec<IssuePredicate>,
}

impl IssueQuery {
    pub fn builder() -> IssueQueryBuilder {
        IssueQueryBuilder::default()
    }

    /// A query matching every issue, in candidate order.
    pub fn all() -> Self {
        IssueQueryBuilder::default().compile()
    }

    /// True if every compiled predicate accepts the issue.
    pub fn matches(&self, issue: &Issue, components: &ComponentTree) -> bool {
        self.predicates
            .iter()
            .all(|predicate| (predicate.test)(issue, components))
    }

    /// Names of the constrained dimensions, in evaluation order.
    pub fn active_filters(&self) -> Vec<&'static str> {
        self.predicates.iter().map(|p| p.name).collect()
    }

    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    pub fn severities(&self) -> &BTreeSet<Severity> {
        &self.severities
    }

    pub fn statuses(&self) -> &BTreeSet<Status> {
        &self.statuses
    }

    pub fn resolutions(&self) -> &BTreeSet<Resolution> {
        &self.resolutions
    }

    pub fn component_roots(&self) -> &BTreeSet<String> {
        &self.component_roots
    }

    pub fn rules(&self) -> &BTreeSet<RuleKey> {
        &self.rules
    }

    pub fn action_plans(&self) -> &BTreeSet<String> {
        &self.action_plans
    }

    pub fn assignees(&self) -> &BTreeSet<String> {
        &self.assignees
    }

    pub fn assigned(&self) -> Option<bool> {
        self.assigned
    }

    pub fn planned(&self) -> Option<bool> {
        self.planned
    }

    pub fn resolved(&self) -> Option<bool> {
        self.resolved
    }

    pub fn created_after(&self) -> Option<DateTime<Utc>> {
        self.created_after
    }

    pub fn created_before(&self) -> Option<DateTime<Utc>> {
        self.created_before
    }

    pub fn sort(&self) -> Option<IssueSort> {
        self.sort
    }

    pub fn asc(&self) -> bool {
        self.asc
    }
}

impl fmt::Debug for IssueQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueQuery")
            .field("filters", &self.active_filters())
            .field("sort", &self.sort)
            .field("asc", &self.asc)
            .finish()
    }
}

/// Builder for [`IssueQuery`].
#[derive(Debug, Clone)]
pub struct IssueQueryBuilder {
    keys: BTreeSet<String>,
    severities: BTreeSet<Severity>,
    statuses: BTreeSet<Status>,
    resolutions: BTreeSet<Resolution>,
    component_roots: BTreeSet<String>,
    rules: BTreeSet<RuleKey>,
    action_plans: BTreeSet<String>,
    assignees: BTreeSet<String>,
    assigned: Option<bool>,
    planned: Option<bool>,
    resolved: Option<bool>,
    created_after: Option<DateTime<Utc>>,
    created_before: Option<DateTime<Utc>>,
    sort: Option<IssueSort>,
    asc: bool,
}

impl Default for IssueQueryBuilder {
    fn default() -> Self {
        IssueQueryBuilder {
            keys: BTreeSet::new(),
            severities: BTreeSet::new(),
            statuses: BTreeSet::new(),
            resolutions: BTreeSet::new(),
            component_roots: BTreeSet::new(),
            rules: BTreeSet::new(),
            action_plans: BTreeSet::new(),
            assignees: BTreeSet::new(),
            assigned: None,
            planned: None,
            resolved: None,
            created_after: None,
            created_before: None,
            sort: None,
            asc: true,
        }
    }
}

fn strings<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl IssueQueryBuilder {
    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = strings(keys);
        self
    }

    pub fn severities(mut self, severities: impl IntoIterator<Item = Severity>) -> Self {
        self.severities = severities.into_iter().collect();
        self
    }

    pub fn statuses(mut self, statuses: impl IntoIterator<Item = Status>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn resolutions(mut self, resolutions: impl IntoIterator<Item = Resolution>) -> Self {
        self.resolutions = resolutions.into_iter().collect();
        self
    }

    /// Keys of components whose whole subtree is searched.
    pub fn component_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.component_roots = strings(roots);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleKey>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }

    pub fn action_plans<I, S>(mut self, plans: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_plans = strings(plans);
        self
    }

    pub fn assignees<I, S>(mut self, logins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees = strings(logins);
        self
    }

    pub fn assigned(mut self, assigned: Option<bool>) -> Self {
        self.assigned = assigned;
        self
    }

    pub fn planned(mut self, planned: Option<bool>) -> Self {
        self.planned = planned;
        self
    }

    pub fn resolved(mut self, resolved: Option<bool>) -> Self {
        self.resolved = resolved;
        self
    }

    /// Inclusive lower bound on the creation date.
    pub fn created_after(mut self, after: Option<DateTime<Utc>>) -> Self {
        self.created_after = after;
        self
    }

    /// Exclusive upper bound on the creation date.
    pub fn created_before(mut self, before: Option<DateTime<Utc>>) -> Self {
        self.created_before = before;
        self
    }

    pub fn sort(mut self, sort: Option<IssueSort>) -> Self {
        self.sort = sort;
        self
    }

    pub fn asc(mut self, asc: bool) -> Self {
        self.asc = asc;
        self
    }

    /// Validates the query and compiles its predicates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if the creation-date upper bound is
    /// before the lower bound.
    pub fn build(self) -> Result<IssueQuery> {
        if let (Some(after), Some(before)) = (self.created_after, self.created_before) {
            if before < after {
                return Err(Error::InvalidQuery(format!(
                    "created_before ({before}) is before created_after ({after})"
                )));
            }
        }
        Ok(self.compile())
    }

    fn compile(self) -> IssueQuery {
        let mut predicates = Vec::new();

        if !self.keys.is_empty() {
            let keys = self.keys.clone();
            predicates.push(IssuePredicate::new("keys", move |issue, _| {
                predicate::matches_keys(issue, &keys)
            }));
        }
        if !self.severities.is_empty() {
            let severities = self.severities.clone();
            predicates.push(IssuePredicate::new("severities", move |issue, _| {
                predicate::matches_severities(issue, &severities)
            }));
        }
        if !self.statuses.is_empty() {
            let statuses = self.statuses.clone();
            predicates.push(IssuePredicate::new("statuses", move |issue, _| {
                predicate::matches_statuses(issue, &statuses)
            }));
        }
        if !self.resolutions.is_empty() {
            let resolutions = self.resolutions.clone();
            predicates.push(IssuePredicate::new("resolutions", move |issue, _| {
                predicate::matches_resolutions(issue, &resolutions)
            }));
        }
        if !self.component_roots.is_empty() {
            let roots = self.component_roots.clone();
            predicates.push(IssuePredicate::new("component_roots", move |issue, tree| {
                predicate::matches_component_root(issue, &roots, tree)
            }));
        }
        if !self.rules.is_empty() {
            let rules = self.rules.clone();
            predicates.push(IssuePredicate::new("rules", move |issue, _| {
                predicate::matches_rules(issue, &rules)
            }));
        }
        if !self.action_plans.is_empty() {
            let plans = self.action_plans.clone();
            predicates.push(IssuePredicate::new("action_plans", move |issue, _| {
                predicate::matches_action_plans(issue, &plans)
            }));
        }
        if !self.assignees.is_empty() {
            let assignees = self.assignees.clone();
            predicates.push(IssuePredicate::new("assignees", move |issue, _| {
                predicate::matches_assignees(issue, &assignees)
            }));
        }
        if let Some(assigned) = self.assigned {
            predicates.push(IssuePredicate::new("assigned", move |issue, _| {
                predicate::matches_assigned(issue, Some(assigned))
            }));
        }
        if let Some(planned) = self.planned {
            predicates.push(IssuePredicate::new("planned", move |issue, _| {
                predicate::matches_planned(issue, Some(planned))
            }));
        }
        if let Some(resolved) = self.resolved {
            predicates.push(IssuePredicate::new("resolved", move |issue, _| {
                predicate::matches_resolved(issue, Some(resolved))
            }));
        }
        if self.created_after.is_some() || self.created_before.is_some() {
            let (after, before) = (self.created_after, self.created_before);
            predicates.push(IssuePredicate::new("created", move |issue, _| {
                predicate::matches_date_window(issue, after, before)
            }));
        }

        IssueQuery {
            keys: self.keys,
            severities: self.severities,
            statuses: self.statuses,
            resolutions: self.resolutions,
            component_roots: self.component_roots,
            rules: self.rules,
            action_plans: self.action_plans,
            assignees: self.assignees,
            assigned: self.assigned,
            planned: self.planned,
            resolved: self.resolved,
            created_after: self.created_after,
            created_before: self.created_before,
            sort: self.sort,
            asc: self.asc,
            predicates,
        }
    }
}

#[cfg(test)]
#[path = "issue_query_tests.rs"]
mod tests;
