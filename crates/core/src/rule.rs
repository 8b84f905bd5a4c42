// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule identity: the (repository, rule) pair an issue was raised by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Identifies a rule within a rule repository, e.g. `squid:AvoidCycle`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RuleKey {
    /// Repository (engine) the rule belongs to, e.g. `squid`.
    pub repository: String,
    /// Rule key inside the repository, e.g. `AvoidCycle`.
    pub rule: String,
}

impl RuleKey {
    /// Creates a rule key from its two parts.
    pub fn of(repository: impl Into<String>, rule: impl Into<String>) -> Self {
        RuleKey {
            repository: repository.into(),
            rule: rule.into(),
        }
    }

    /// Parses a rule key from `repository:rule` form.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.rule)
    }
}

impl FromStr for RuleKey {
    type Err = Error;

    /// Splits on the first `:`; the rule part keeps any later separators.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((repository, rule)) if !repository.is_empty() && !rule.is_empty() => {
                Ok(RuleKey::of(repository, rule))
            }
            _ => Err(Error::InvalidRuleKey(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
