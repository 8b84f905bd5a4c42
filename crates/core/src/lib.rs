// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qm-core: issue queries and authorization-gated issue actions.
//!
//! This crate provides the query engines that select, sort, and page
//! code-quality issues and components, and the executor that applies named
//! actions to a single issue once the actor is identified and authorized.
//! Storage, authorization decisions, and workflow transitions are supplied
//! by the host through the traits in [`repository`], [`auth`], and
//! [`action`].

pub mod action;
pub mod auth;
pub mod component;
pub mod config;
pub mod error;
pub mod issue;
pub mod memory;
pub mod query;
pub mod repository;
pub mod rule;

pub use action::{ActionExecutor, GateStage, Transition, TransitionProvider, TransitionRegistry};
pub use auth::{AuthorizationProvider, Role, RoleGrants};
pub use component::{Component, ComponentId, ComponentTree, Searchable};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use issue::{Issue, IssueId, ProjectId, Resolution, Severity, Status, UserId};
pub use memory::InMemoryIssues;
pub use query::{
    ComponentFinder, ComponentQuery, ComponentQueryBuilder, ComponentQueryResult, ComponentSort,
    IssueFinder, IssueQuery, IssueQueryBuilder, IssueSort, Paging,
};
pub use repository::{ComponentRepository, IssueRepository};
pub use rule::RuleKey;
