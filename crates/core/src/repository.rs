// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator traits for issue and component storage.
//!
//! The core never touches storage directly. Hosts implement these traits
//! over whatever backs them; [`crate::memory::InMemoryIssues`] and
//! [`ComponentTree`] are the in-process implementations.

use std::sync::Arc;

use crate::component::{Component, ComponentTree};
use crate::error::Result;
use crate::issue::{Issue, IssueId, ProjectId};

/// Source and sink of issue records.
///
/// A successful [`save`](IssueRepository::save) must be visible to later
/// reads of the same key.
pub trait IssueRepository: Send + Sync {
    /// Looks up one issue by key. A missing key is `Ok(None)`.
    fn find_by_key(&self, key: &str) -> Result<Option<Issue>>;

    /// All issues belonging to any of `project_ids`, in repository order.
    ///
    /// Matches on [`Issue::project_id`], which callers treat as the id of
    /// the issue's root component.
    fn find_candidates(&self, project_ids: &[ProjectId]) -> Result<Vec<Issue>>;

    /// Issues with the given ids; unknown ids are skipped.
    fn find_by_ids(&self, ids: &[IssueId]) -> Result<Vec<Issue>>;

    /// Inserts or replaces the issue with the same key.
    fn save(&self, issue: &Issue) -> Result<()>;
}

impl<R: IssueRepository + ?Sized> IssueRepository for &R {
    fn find_by_key(&self, key: &str) -> Result<Option<Issue>> {
        (**self).find_by_key(key)
    }

    fn find_candidates(&self, project_ids: &[ProjectId]) -> Result<Vec<Issue>> {
        (**self).find_candidates(project_ids)
    }

    fn find_by_ids(&self, ids: &[IssueId]) -> Result<Vec<Issue>> {
        (**self).find_by_ids(ids)
    }

    fn save(&self, issue: &Issue) -> Result<()> {
        (**self).save(issue)
    }
}

impl<R: IssueRepository + ?Sized> IssueRepository for Arc<R> {
    fn find_by_key(&self, key: &str) -> Result<Option<Issue>> {
        (**self).find_by_key(key)
    }

    fn find_candidates(&self, project_ids: &[ProjectId]) -> Result<Vec<Issue>> {
        (**self).find_candidates(project_ids)
    }

    fn find_by_ids(&self, ids: &[IssueId]) -> Result<Vec<Issue>> {
        (**self).find_by_ids(ids)
    }

    fn save(&self, issue: &Issue) -> Result<()> {
        (**self).save(issue)
    }
}

/// Supplies the full component collection with parent links.
pub trait ComponentRepository {
    fn find_all(&self) -> Result<Vec<Component>>;
}

impl ComponentRepository for ComponentTree {
    fn find_all(&self) -> Result<Vec<Component>> {
        Ok(self.components().to_vec())
    }
}

impl ComponentTree {
    /// Loads every component from `repository` and indexes it.
    pub fn from_repository<R: ComponentRepository + ?Sized>(repository: &R) -> Result<Self> {
        Ok(ComponentTree::new(repository.find_all()?))
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
