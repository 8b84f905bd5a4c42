// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-process issue repository.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Error, Result};
use crate::issue::{Issue, IssueId, ProjectId};
use crate::repository::IssueRepository;

/// Thread-safe [`IssueRepository`] holding issues in memory.
///
/// Reads return issues in insertion order. Saving an existing key replaces
/// the stored issue in place.
#[derive(Debug, Default)]
pub struct InMemoryIssues {
    inner: RwLock<Store>,
}

#[derive(Debug, Default)]
struct Store {
    issues: Vec<Issue>,
    by_key: HashMap<String, usize>,
}

impl InMemoryIssues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-loaded with `issues`.
    pub fn with_issues(issues: impl IntoIterator<Item = Issue>) -> Self {
        let mut store = Store::default();
        for issue in issues {
            store.upsert(issue);
        }
        InMemoryIssues {
            inner: RwLock::new(store),
        }
    }

    /// Number of stored issues.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.issues.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.issues.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>> {
        self.inner
            .read()
            .map_err(|_| Error::Repository("issue store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>> {
        self.inner
            .write()
            .map_err(|_| Error::Repository("issue store lock poisoned".to_string()))
    }
}

impl Store {
    fn upsert(&mut self, issue: Issue) {
        match self.by_key.get(&issue.key) {
            Some(&slot) => self.issues[slot] = issue,
            None => {
                self.by_key.insert(issue.key.clone(), self.issues.len());
                self.issues.push(issue);
            }
        }
    }
}

impl IssueRepository for InMemoryIssues {
    fn find_by_key(&self, key: &str) -> Result<Option<Issue>> {
        let store = self.read()?;
        Ok(store.by_key.get(key).map(|&slot| store.issues[slot].clone()))
    }

    fn find_candidates(&self, project_ids: &[ProjectId]) -> Result<Vec<Issue>> {
        let store = self.read()?;
        Ok(store
            .issues
            .iter()
            .filter(|issue| project_ids.contains(&issue.project_id))
            .cloned()
            .collect())
    }

    fn find_by_ids(&self, ids: &[IssueId]) -> Result<Vec<Issue>> {
        let store = self.read()?;
        Ok(store
            .issues
            .iter()
            .filter(|issue| ids.contains(&issue.id))
            .cloned()
            .collect())
    }

    fn save(&self, issue: &Issue) -> Result<()> {
        self.write()?.upsert(issue.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
