// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the quality-management backend.
//!
//! This module contains the fundamental data types: Issue, Severity, Status,
//! and Resolution, plus the compact attribute encoding used when attributes
//! are stored as a single column.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::component::ComponentId;
use crate::error::{Error, Result};
use crate::rule::RuleKey;

/// Numeric identifier of an issue.
pub type IssueId = i64;

/// Numeric identifier of a project (a root component).
pub type ProjectId = i64;

/// Identifier of an authenticated user.
pub type UserId = i64;

/// How much an issue hurts. Ordered from least (`Info`) to most (`Blocker`)
/// severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Blocker,
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Info,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
            Severity::Blocker => "BLOCKER",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(Severity::Info),
            "MINOR" => Ok(Severity::Minor),
            "MAJOR" => Ok(Severity::Major),
            "CRITICAL" => Ok(Severity::Critical),
            "BLOCKER" => Ok(Severity::Blocker),
            _ => Err(Error::InvalidSeverity(s.to_string())),
        }
    }
}

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Status {
    /// Raised by analysis, nobody has looked at it yet.
    Open,
    /// Acknowledged as a real problem.
    Confirmed,
    /// Marked as resolved, waiting for the next analysis to close it.
    Resolved,
    /// Resolved once, then found again.
    Reopened,
    /// No longer present. Terminal.
    Closed,
}

impl Status {
    /// All statuses in workflow order.
    pub const ALL: [Status; 5] = [
        Status::Open,
        Status::Confirmed,
        Status::Resolved,
        Status::Reopened,
        Status::Closed,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::Confirmed => "CONFIRMED",
            Status::Resolved => "RESOLVED",
            Status::Reopened => "REOPENED",
            Status::Closed => "CLOSED",
        }
    }

    /// Returns true if this is the terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Closed)
    }

    /// Statuses of issues that are still active (everything but `Closed`).
    pub fn non_terminal() -> Vec<Status> {
        Status::ALL
            .into_iter()
            .filter(|s| !s.is_terminal())
            .collect()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "OPEN" => Ok(Status::Open),
            "CONFIRMED" => Ok(Status::Confirmed),
            "RESOLVED" => Ok(Status::Resolved),
            "REOPENED" => Ok(Status::Reopened),
            "CLOSED" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Why an issue was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Resolution {
    #[serde(rename = "FIXED")]
    Fixed,
    #[serde(rename = "FALSE-POSITIVE")]
    FalsePositive,
    #[serde(rename = "REMOVED")]
    Removed,
}

impl Resolution {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Fixed => "FIXED",
            Resolution::FalsePositive => "FALSE-POSITIVE",
            Resolution::Removed => "REMOVED",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "FIXED" => Ok(Resolution::Fixed),
            "FALSE-POSITIVE" | "FALSE_POSITIVE" => Ok(Resolution::FalsePositive),
            "REMOVED" => Ok(Resolution::Removed),
            _ => Err(Error::InvalidResolution(s.to_string())),
        }
    }
}

/// A code-quality finding raised by a rule on a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Issue {
    /// Numeric identifier assigned by the store.
    pub id: IssueId,
    /// Unique public key (e.g. `ABCDE`).
    pub key: String,
    /// Component (file, module, project) the issue is attached to.
    pub component_id: ComponentId,
    /// Project the component belongs to.
    ///
    /// Must be the id of the root of `component_id` in the component tree.
    /// Project-scoped lookups derive the scope from that root.
    pub project_id: ProjectId,
    /// Rule that raised the issue.
    pub rule: RuleKey,
    pub severity: Severity,
    /// True when a user overrode the severity set by the rule.
    #[serde(default)]
    pub manual_severity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort_to_fix: Option<f64>,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    /// Hash of the offending source lines, used to track the issue across analyses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// SCM author of the offending line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_login: Option<String>,
    /// User who reported a manual issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Key of the action plan the issue is scheduled in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_plan_key: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// When the issue was first detected.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
    /// When the issue was closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Creates an open, unassigned, unplanned `MAJOR` issue.
    pub fn new(
        id: IssueId,
        key: impl Into<String>,
        component_id: ComponentId,
        project_id: ProjectId,
        rule: RuleKey,
        created_at: DateTime<Utc>,
    ) -> Self {
        Issue {
            id,
            key: key.into(),
            component_id,
            project_id,
            rule,
            severity: Severity::Major,
            manual_severity: false,
            message: None,
            line: None,
            effort_to_fix: None,
            status: Status::Open,
            resolution: None,
            checksum: None,
            author_login: None,
            reporter: None,
            assignee: None,
            action_plan_key: None,
            attributes: BTreeMap::new(),
            created_at,
            updated_at: created_at,
            closed_at: None,
        }
    }

    /// Sets the severity (builder pattern).
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the resolution (builder pattern).
    pub fn with_resolution(mut self, resolution: Option<Resolution>) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the assignee (builder pattern).
    pub fn with_assignee(mut self, assignee: Option<&str>) -> Self {
        self.assignee = assignee.map(str::to_string);
        self
    }

    /// Sets the action plan (builder pattern).
    pub fn with_action_plan(mut self, action_plan_key: Option<&str>) -> Self {
        self.action_plan_key = action_plan_key.map(str::to_string);
        self
    }

    /// Sets the last update and close timestamps (builder pattern).
    pub fn with_dates(
        mut self,
        updated_at: DateTime<Utc>,
        closed_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.updated_at = updated_at;
        self.closed_at = closed_at;
        self
    }

    /// Returns the value of a free-form attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn is_assigned(&self) -> bool {
        self.assignee.is_some()
    }

    pub fn is_planned(&self) -> bool {
        self.action_plan_key.is_some()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }
}

/// Parses attributes from their compact column form (`JIRA=FOO-1234;k=v`).
///
/// Empty segments are skipped and a segment without `=` maps to an empty value.
pub fn parse_attributes(s: &str) -> BTreeMap<String, String> {
    s.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (part.to_string(), String::new()),
        })
        .collect()
}

/// Formats attributes into their compact column form, sorted by key.
pub fn format_attributes(attributes: &BTreeMap<String, String>) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
