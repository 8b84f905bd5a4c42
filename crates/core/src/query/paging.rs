// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Page arithmetic over a sorted result set.

use serde::Serialize;

use crate::error::{Error, Result};

/// Page size, 1-based page index, and the total number of results before
/// paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Paging {
    page_size: usize,
    page_index: usize,
    total: usize,
}

impl Paging {
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if `page_size` or `page_index` is 0.
    pub fn new(page_size: usize, page_index: usize, total: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidQuery("page size must be >= 1".to_string()));
        }
        if page_index == 0 {
            return Err(Error::InvalidQuery("page index must be >= 1".to_string()));
        }
        Ok(Paging {
            page_size,
            page_index,
            total,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of results skipped before this page: `page_size * (page_index - 1)`.
    ///
    /// Saturates instead of overflowing for absurd page indexes, which then
    /// simply land past the end.
    pub fn offset(&self) -> usize {
        self.page_size.saturating_mul(self.page_index - 1)
    }

    /// Number of pages needed to show every result (0 when there are none).
    pub fn pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }
}

#[cfg(test)]
#[path = "paging_tests.rs"]
mod tests;
