// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Authorization-gated issue actions.
//!
//! An action runs through a fixed sequence of gates and stops at the first
//! one that fails:
//!
//! 1. `start -> identity_checked`: an actor is required
//!    ([`Error::NotAuthenticated`]); nothing is looked up for an anonymous
//!    caller.
//! 2. `identity_checked -> subject_loaded`: the issue must exist
//!    ([`Error::IssueNotFound`]).
//! 3. `subject_loaded -> authorized`: the actor must hold the required role
//!    on the issue's component ([`Error::Forbidden`]).
//! 4. `authorized -> mutated`: the action's transition is applied
//!    ([`Error::UnknownAction`] when none is registered) and the result is
//!    saved before it is returned.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::auth::{AuthorizationProvider, Role};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::issue::{Issue, UserId};
use crate::repository::IssueRepository;

/// A state change applied to one issue.
pub type Transition = Arc<dyn Fn(Issue) -> Result<Issue> + Send + Sync>;

/// Looks up the transition registered for an action name.
pub trait TransitionProvider: Send + Sync {
    /// `None` when no transition has that name.
    fn find(&self, action: &str) -> Option<Transition>;
}

impl<T: TransitionProvider + ?Sized> TransitionProvider for &T {
    fn find(&self, action: &str) -> Option<Transition> {
        (**self).find(action)
    }
}

impl<T: TransitionProvider + ?Sized> TransitionProvider for Arc<T> {
    fn find(&self, action: &str) -> Option<Transition> {
        (**self).find(action)
    }
}

/// Transitions keyed by action name.
#[derive(Clone, Default)]
pub struct TransitionRegistry {
    transitions: HashMap<String, Transition>,
}

impl TransitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `transition` under `action`, replacing any previous one
    /// (builder pattern).
    pub fn register<F>(mut self, action: impl Into<String>, transition: F) -> Self
    where
        F: Fn(Issue) -> Result<Issue> + Send + Sync + 'static,
    {
        self.transitions.insert(action.into(), Arc::new(transition));
        self
    }

    /// Registered action names, sorted.
    pub fn actions(&self) -> Vec<&str> {
        let mut actions: Vec<&str> = self.transitions.keys().map(String::as_str).collect();
        actions.sort_unstable();
        actions
    }
}

impl fmt::Debug for TransitionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRegistry")
            .field("actions", &self.actions())
            .finish()
    }
}

impl TransitionProvider for TransitionRegistry {
    fn find(&self, action: &str) -> Option<Transition> {
        self.transitions.get(action).cloned()
    }
}

/// Progress of one action through the gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStage {
    Start,
    IdentityChecked,
    SubjectLoaded,
    Authorized,
    Mutated,
}

impl GateStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateStage::Start => "start",
            GateStage::IdentityChecked => "identity_checked",
            GateStage::SubjectLoaded => "subject_loaded",
            GateStage::Authorized => "authorized",
            GateStage::Mutated => "mutated",
        }
    }
}

impl fmt::Display for GateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Applies named actions to issues on behalf of an actor.
pub struct ActionExecutor<R, A, T> {
    issues: R,
    authorization: A,
    transitions: T,
    required_role: Role,
}

impl<R, A, T> ActionExecutor<R, A, T>
where
    R: IssueRepository,
    A: AuthorizationProvider,
    T: TransitionProvider,
{
    /// Creates an executor requiring [`Role::User`].
    pub fn new(issues: R, authorization: A, transitions: T) -> Self {
        ActionExecutor {
            issues,
            authorization,
            transitions,
            required_role: Role::default(),
        }
    }

    /// Creates an executor requiring the configured role.
    pub fn with_config(issues: R, authorization: A, transitions: T, config: &EngineConfig) -> Self {
        Self::new(issues, authorization, transitions).with_required_role(config.actions.required_role)
    }

    pub fn with_required_role(mut self, role: Role) -> Self {
        self.required_role = role;
        self
    }

    pub fn required_role(&self) -> Role {
        self.required_role
    }

    /// Applies `action` to the issue with `issue_key` and returns the saved
    /// snapshot.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAuthenticated`] when `actor` is `None`
    /// - [`Error::IssueNotFound`] when no issue has `issue_key`
    /// - [`Error::Forbidden`] when the actor lacks the required role on the
    ///   issue's component; the transition is never invoked
    /// - [`Error::UnknownAction`] when no transition is registered for
    ///   `action`
    /// - any error returned by the transition or the repository
    pub fn execute_action(
        &self,
        issue_key: &str,
        action: &str,
        actor: Option<UserId>,
    ) -> Result<Issue> {
        tracing::debug!(issue = issue_key, action, stage = %GateStage::Start, "issue action");

        let Some(user_id) = actor else {
            return Err(Error::NotAuthenticated);
        };
        tracing::debug!(issue = issue_key, user_id, stage = %GateStage::IdentityChecked, "issue action");

        let issue = self
            .issues
            .find_by_key(issue_key)?
            .ok_or_else(|| Error::IssueNotFound(issue_key.to_string()))?;
        tracing::debug!(
            issue = issue_key,
            component_id = issue.component_id,
            stage = %GateStage::SubjectLoaded,
            "issue action"
        );

        if !self
            .authorization
            .is_authorized(issue.component_id, user_id, self.required_role)
        {
            tracing::warn!(
                issue = issue_key,
                user_id,
                role = %self.required_role,
                action,
                "issue action refused"
            );
            return Err(Error::Forbidden {
                role: self.required_role.to_string(),
                issue: issue_key.to_string(),
            });
        }
        tracing::debug!(issue = issue_key, user_id, stage = %GateStage::Authorized, "issue action");

        let transition = self
            .transitions
            .find(action)
            .ok_or_else(|| Error::UnknownAction(action.to_string()))?;
        let updated = transition(issue)?;
        self.issues.save(&updated)?;
        tracing::debug!(issue = issue_key, stage = %GateStage::Mutated, "issue action");

        tracing::info!(issue = issue_key, action, user_id, "issue action applied");
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
