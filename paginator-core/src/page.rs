use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidArgumentReason};

/// A request for one page of an ordered collection.
///
/// `page` is 1-based. A `page_size` of 0 disables pagination and selects every item,
/// in which case `page` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::all()
    }
}

impl PageRequest {
    pub const fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Request every item on a single page.
    pub const fn all() -> Self {
        Self { page: 1, page_size: 0 }
    }

    pub fn is_paginated(&self) -> bool {
        self.page_size != 0
    }

    /// Validate the request and compute the skip/take pair it selects.
    ///
    /// Returns `None` when pagination is disabled.
    ///
    /// # Examples
    /// ```
    /// use paginator_core::page::{PageRequest, Slice};
    ///
    /// assert_eq!(PageRequest::new(3, 10).slice().unwrap(), Some(Slice { skip: 20, take: 10 }));
    /// assert_eq!(PageRequest::new(0, 0).slice().unwrap(), None);
    /// assert!(PageRequest::new(0, 5).slice().is_err());
    /// assert!(PageRequest::new(1, -1).slice().is_err());
    /// ```
    pub fn slice(&self) -> Result<Option<Slice>, Error> {
        let Self { page, page_size } = *self;
        if page_size < 0 {
            Err(InvalidArgumentReason::NegativePageSize { page_size })?
        }
        if page_size == 0 {
            return Ok(None);
        }
        if page < 1 {
            Err(InvalidArgumentReason::PageBelowOne { page })?
        }

        let skip = (page - 1)
            .checked_mul(page_size)
            .ok_or(InvalidArgumentReason::OffsetOverflow { page, page_size })?;
        Ok(Some(Slice {
            skip: skip as u64,
            take: page_size as u64,
        }))
    }
}

/// Offset pair selecting one page: skip `skip` items, then keep the next `take`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub skip: u64,
    pub take: u64,
}

impl Slice {
    pub fn apply<I: Iterator>(&self, iter: I) -> std::iter::Take<std::iter::Skip<I>> {
        iter.skip(saturating_usize(self.skip)).take(saturating_usize(self.take))
    }
}

pub(crate) fn saturating_usize(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

/// One page of items together with the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    /// Number of items across all pages, not only this one.
    pub total_count: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_count: u64) -> Self {
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total_count,
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    pub fn total_pages(&self) -> u64 {
        if self.total_count == 0 {
            0
        } else if self.page_size <= 0 {
            1
        } else {
            self.total_count.div_ceil(self.page_size as u64)
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.page >= 1 && (self.page as u64) < self.total_pages()
    }

    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
