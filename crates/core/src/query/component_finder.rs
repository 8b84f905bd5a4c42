// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Component search: key/name substring filtering, sorting, and paging.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::component::Searchable;
use crate::error::{Error, Result};

use super::paging::Paging;

/// Page size used when a query does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Built-in component sort fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSort {
    /// By name, then key.
    Name,
    Key,
}

impl ComponentSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentSort::Name => "name",
            ComponentSort::Key => "key",
        }
    }
}

impl fmt::Display for ComponentSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ComponentSort::Name),
            "key" => Ok(ComponentSort::Key),
            _ => Err(Error::InvalidSort(s.to_string())),
        }
    }
}

/// A sort strategy for component search results.
///
/// Implemented by [`SortBy`] and by any `Fn(&T, &T) -> Ordering`.
pub trait ComponentOrdering<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> ComponentOrdering<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Sorts on a built-in field in the given direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortBy {
    pub sort: ComponentSort,
    pub asc: bool,
}

impl<T: Searchable> ComponentOrdering<T> for SortBy {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let ordering = match self.sort {
            ComponentSort::Name => a.name().cmp(b.name()).then_with(|| a.key().cmp(b.key())),
            ComponentSort::Key => a.key().cmp(b.key()),
        };
        if self.asc {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

/// Search criteria for components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentQuery {
    keys: Vec<String>,
    names: Vec<String>,
    /// `None` is the no-pagination sentinel.
    page_size: Option<usize>,
    page_index: usize,
    sort: ComponentSort,
    asc: bool,
}

impl ComponentQuery {
    pub fn builder() -> ComponentQueryBuilder {
        ComponentQueryBuilder::default()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `None` when results are not paginated.
    pub fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// The built-in sort strategy selected by this query.
    pub fn sort_by(&self) -> SortBy {
        SortBy {
            sort: self.sort,
            asc: self.asc,
        }
    }
}

impl fmt::Display for ComponentQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "keys={:?} names={:?} sort={} asc={} ",
            self.keys, self.names, self.sort, self.asc
        )?;
        match self.page_size {
            Some(size) => write!(f, "page={}x{}", self.page_index, size),
            None => write!(f, "page=all"),
        }
    }
}

/// Builder for [`ComponentQuery`].
#[derive(Debug, Clone)]
pub struct ComponentQueryBuilder {
    keys: Vec<String>,
    names: Vec<String>,
    page_size: Option<usize>,
    page_index: usize,
    sort: ComponentSort,
    asc: bool,
}

impl Default for ComponentQueryBuilder {
    fn default() -> Self {
        ComponentQueryBuilder {
            keys: Vec::new(),
            names: Vec::new(),
            page_size: Some(DEFAULT_PAGE_SIZE),
            page_index: 1,
            sort: ComponentSort::Name,
            asc: true,
        }
    }
}

impl ComponentQueryBuilder {
    /// Key substrings; a component matches if its key contains any of them.
    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Name substrings; a component matches if its name contains any of them.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Returns every match in a single result without paging metadata.
    pub fn no_pagination(mut self) -> Self {
        self.page_size = None;
        self
    }

    /// 1-based page index.
    pub fn page_index(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    pub fn sort(mut self, sort: ComponentSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn asc(mut self, asc: bool) -> Self {
        self.asc = asc;
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] for a page size or page index of 0.
    pub fn build(self) -> Result<ComponentQuery> {
        if self.page_size == Some(0) {
            return Err(Error::InvalidQuery("page size must be >= 1".to_string()));
        }
        if self.page_index == 0 {
            return Err(Error::InvalidQuery("page index must be >= 1".to_string()));
        }
        Ok(ComponentQuery {
            keys: self.keys,
            names: self.names,
            page_size: self.page_size,
            page_index: self.page_index,
            sort: self.sort,
            asc: self.asc,
        })
    }
}

/// Components found by a query, with paging metadata when paginated.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentQueryResult<T> {
    pub components: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
    pub query: ComponentQuery,
}

/// Case-insensitive "field contains any term" test, pass-through when
/// there are no terms. `terms` must already be lower-cased.
fn contains_any<T>(component: &T, terms: &[String], field: fn(&T) -> &str) -> bool {
    if terms.is_empty() {
        return true;
    }
    let value = field(component).to_lowercase();
    terms.iter().any(|term| value.contains(term.as_str()))
}

fn lowercase(terms: &[String]) -> Vec<String> {
    terms.iter().map(|term| term.to_lowercase()).collect()
}

/// Searches component collections. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentFinder;

impl ComponentFinder {
    pub fn new() -> Self {
        ComponentFinder
    }

    /// Filters, sorts with the query's built-in sort, and pages `candidates`.
    pub fn find<T>(
        &self,
        query: &ComponentQuery,
        candidates: &[T],
    ) -> Result<ComponentQueryResult<T>>
    where
        T: Searchable + Clone,
    {
        self.find_sorted_by(query, candidates, &query.sort_by())
    }

    /// Like [`ComponentFinder::find`] with a caller-supplied sort strategy.
    ///
    /// The sort is stable: components the strategy considers equal keep
    /// their candidate order.
    pub fn find_sorted_by<T, O>(
        &self,
        query: &ComponentQuery,
        candidates: &[T],
        ordering: &O,
    ) -> Result<ComponentQueryResult<T>>
    where
        T: Searchable + Clone,
        O: ComponentOrdering<T> + ?Sized,
    {
        tracing::debug!(query = %query, candidates = candidates.len(), "component query");

        let keys = lowercase(&query.keys);
        let names = lowercase(&query.names);
        let mut found: Vec<T> = candidates
            .iter()
            .filter(|c| contains_any(*c, &keys, T::key) && contains_any(*c, &names, T::name))
            .cloned()
            .collect();
        found.sort_by(|a, b| ordering.compare(a, b));

        let Some(page_size) = query.page_size else {
            return Ok(ComponentQueryResult {
                components: found,
                paging: None,
                query: query.clone(),
            });
        };

        let paging = Paging::new(page_size, query.page_index, found.len())?;
        let components = page(found, &paging);
        tracing::debug!(
            total = paging.total(),
            returned = components.len(),
            page = paging.page_index(),
            "component query paged"
        );
        Ok(ComponentQueryResult {
            components,
            paging: Some(paging),
            query: query.clone(),
        })
    }
}

/// Skips to the page offset, then collects up to a page of components,
/// dropping any key already collected on this page.
fn page<T: Searchable>(sorted: Vec<T>, paging: &Paging) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut components = Vec::new();
    for component in sorted.into_iter().skip(paging.offset()) {
        if components.len() >= paging.page_size() {
            break;
        }
        if seen.insert(component.key().to_string()) {
            components.push(component);
        }
    }
    components
}

#[cfg(test)]
#[path = "component_finder_tests.rs"]
mod tests;
