// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration.
//!
//! Read from a TOML file with three optional sections:
//! - `[issues] max_results`: hard cap on issues returned by one query
//! - `[components] default_page_size`: page size of new component queries
//! - `[actions] required_role`: role an actor needs to change an issue

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::auth::Role;
use crate::error::{Error, Result};
use crate::query::{ComponentQuery, ComponentQueryBuilder, DEFAULT_PAGE_SIZE};

/// Settings shared by the finders and the action executor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub issues: IssuesConfig,
    pub components: ComponentsConfig,
    pub actions: ActionsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuesConfig {
    /// Applied after sorting, together with any per-call limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    pub default_page_size: usize,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        ComponentsConfig {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    pub required_role: Role,
}

impl EngineConfig {
    /// Reads and validates the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, [`Error::Toml`] if
    /// it is not valid TOML for this schema, and [`Error::Config`] if a
    /// value is out of range.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the config to `path` as TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.components.default_page_size == 0 {
            return Err(Error::Config(
                "components.default_page_size must be >= 1".to_string(),
            ));
        }
        if self.issues.max_results == Some(0) {
            return Err(Error::Config("issues.max_results must be >= 1".to_string()));
        }
        Ok(())
    }

    /// A component query builder using the configured page size.
    pub fn component_query(&self) -> ComponentQueryBuilder {
        ComponentQuery::builder().page_size(self.components.default_page_size)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
