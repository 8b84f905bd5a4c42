// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for qm-core operations.

use thiserror::Error;

/// All possible errors that can occur in qm-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not authenticated: an actor is required to change an issue")]
    NotAuthenticated,

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("forbidden: role '{role}' is required to change issue {issue}")]
    Forbidden { role: String, issue: String },

    #[error("unknown action: '{0}'\n  hint: the action has no registered transition")]
    UnknownAction(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error(
        "invalid severity: '{0}'\n  hint: valid severities are: BLOCKER, CRITICAL, MAJOR, MINOR, INFO"
    )]
    InvalidSeverity(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: OPEN, CONFIRMED, RESOLVED, REOPENED, CLOSED")]
    InvalidStatus(String),

    #[error("invalid resolution: '{0}'\n  hint: valid resolutions are: FIXED, FALSE-POSITIVE, REMOVED")]
    InvalidResolution(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: user, admin, codeviewer")]
    InvalidRole(String),

    #[error("invalid sort: '{0}'\n  hint: valid sorts are: ASSIGNEE, SEVERITY, STATUS, CREATION_DATE, UPDATE_DATE, CLOSE_DATE")]
    InvalidSort(String),

    #[error("invalid rule key: '{0}'\n  hint: expected <repository>:<rule>, e.g. squid:AvoidCycle")]
    InvalidRuleKey(String),

    #[error("repository error: {0}")]
    Repository(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Returns true when the error is caused by the request itself
    /// (malformed query, unknown action, unparsable value) rather than by
    /// identity, permissions, or a collaborator.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidQuery(_)
                | Error::UnknownAction(_)
                | Error::InvalidSeverity(_)
                | Error::InvalidStatus(_)
                | Error::InvalidResolution(_)
                | Error::InvalidRole(_)
                | Error::InvalidSort(_)
                | Error::InvalidRuleKey(_)
        )
    }
}

/// A specialized Result type for qm-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
