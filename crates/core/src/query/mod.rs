// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue and component queries.
//!
//! An [`IssueQuery`] is compiled once into an ordered list of predicates
//! (see [`predicate`]); the [`IssueFinder`] fetches candidates from a
//! repository and keeps the issues every predicate accepts, then sorts and
//! truncates them.
//!
//! A [`ComponentQuery`] filters components by key and name substrings
//! (case-insensitive), sorts them with a stable strategy, and pages the
//! result through [`ComponentFinder`].

mod component_finder;
mod issue_finder;
mod issue_query;
mod paging;
pub mod predicate;

pub use component_finder::{
    ComponentFinder, ComponentOrdering, ComponentQuery, ComponentQueryBuilder,
    ComponentQueryResult, ComponentSort, SortBy, DEFAULT_PAGE_SIZE,
};
pub use issue_finder::{filter_and_sort, IssueFinder};
pub use issue_query::{IssueQuery, IssueQueryBuilder, IssueSort};
pub use paging::Paging;
