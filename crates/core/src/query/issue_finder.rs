// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue selection over a repository's candidates.

use crate::component::{ComponentId, ComponentTree};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::issue::{Issue, IssueId, ProjectId, Status};
use crate::repository::IssueRepository;

use super::issue_query::IssueQuery;

/// Keeps the candidates `query` accepts, sorts them by the query's sort key
/// (if any), and truncates to `limit`.
///
/// Without a sort key the candidate order is preserved. The sort is stable.
pub fn filter_and_sort(
    query: &IssueQuery,
    candidates: Vec<Issue>,
    components: &ComponentTree,
    limit: Option<usize>,
) -> Vec<Issue> {
    let mut issues: Vec<Issue> = candidates
        .into_iter()
        .filter(|issue| query.matches(issue, components))
        .collect();

    if let Some(sort) = query.sort() {
        let asc = query.asc();
        issues.sort_by(|a, b| sort.compare(a, b, asc));
    }

    if let Some(limit) = limit {
        issues.truncate(limit);
    }
    issues
}

/// Selects issues from a repository.
///
/// Holds no mutable state; share it freely between threads when `R` allows.
pub struct IssueFinder<R> {
    issues: R,
    components: ComponentTree,
    max_results: Option<usize>,
}

impl<R: IssueRepository> IssueFinder<R> {
    pub fn new(issues: R, components: ComponentTree) -> Self {
        IssueFinder {
            issues,
            components,
            max_results: None,
        }
    }

    /// Creates a finder capped at the configured maximum result count.
    pub fn with_config(issues: R, components: ComponentTree, config: &EngineConfig) -> Self {
        IssueFinder {
            issues,
            components,
            max_results: config.issues.max_results,
        }
    }

    pub fn components(&self) -> &ComponentTree {
        &self.components
    }

    pub fn max_results(&self) -> Option<usize> {
        self.max_results
    }

    /// The tighter of the caller's limit and the configured cap.
    fn effective_limit(&self, limit: Option<usize>) -> Option<usize> {
        match (limit, self.max_results) {
            (Some(limit), Some(max)) => Some(limit.min(max)),
            (limit, max) => limit.or(max),
        }
    }

    /// Issues of `project_ids` accepted by `query`, sorted and truncated.
    ///
    /// An empty project scope returns an empty result without asking the
    /// repository.
    pub fn select(
        &self,
        query: &IssueQuery,
        project_ids: &[ProjectId],
        limit: Option<usize>,
    ) -> Result<Vec<Issue>> {
        if project_ids.is_empty() {
            tracing::debug!(?query, "issue query with empty project scope");
            return Ok(Vec::new());
        }

        let candidates = self.issues.find_candidates(project_ids)?;
        let candidate_count = candidates.len();
        let issues = filter_and_sort(
            query,
            candidates,
            &self.components,
            self.effective_limit(limit),
        );
        tracing::debug!(
            ?query,
            projects = project_ids.len(),
            candidates = candidate_count,
            matched = issues.len(),
            "issue query"
        );
        Ok(issues)
    }

    /// Every issue not yet closed on `component_id` or beneath it.
    ///
    /// The scope is the id of the component's root, so issues whose
    /// `project_id` differs from that root are not found. An unknown
    /// component has no issues.
    pub fn select_open_for_component(&self, component_id: ComponentId) -> Result<Vec<Issue>> {
        let (Some(component), Some(project)) = (
            self.components.get(component_id),
            self.components.root_of(component_id),
        ) else {
            tracing::debug!(component_id, "open issues requested for unknown component");
            return Ok(Vec::new());
        };

        let query = IssueQuery::builder()
            .component_roots([component.key.clone()])
            .statuses(Status::non_terminal())
            .build()?;
        self.select(&query, &[project.id], None)
    }

    /// Issues with the given ids, in repository order. Unknown ids are
    /// omitted.
    pub fn select_by_ids(&self, ids: &[IssueId]) -> Result<Vec<Issue>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let issues = self.issues.find_by_ids(ids)?;
        tracing::debug!(requested = ids.len(), found = issues.len(), "issues by id");
        Ok(issues)
    }

    /// The issue with `key`, or `None` when there is none.
    pub fn select_single(&self, key: &str) -> Result<Option<Issue>> {
        self.issues.find_by_key(key)
    }
}

#[cfg(test)]
#[path = "issue_finder_tests.rs"]
mod tests;
