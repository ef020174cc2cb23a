//! Pagination types for list operations.

use crate::{ClienteleError, ClienteleResult};
use serde::{Deserialize, Serialize};

/// A request for a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page index (0-based).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 20;
    /// The maximum allowed page size.
    pub const MAX_SIZE: usize = 100;

    /// Creates a new page request, clamping the size to [`Self::MAX_SIZE`].
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.min(Self::MAX_SIZE),
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    /// Rejects requests that cannot produce a page.
    pub fn validate(&self) -> ClienteleResult<()> {
        if self.size == 0 {
            return Err(ClienteleError::validation("page size must be greater than zero"));
        }
        Ok(())
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// The current page index (0-based).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
    /// The total number of items across all pages.
    pub total_elements: u64,
    /// The total number of pages, `ceil(total_elements / size)`.
    pub total_pages: u64,
}

impl PageInfo {
    /// Creates a new page info.
    #[must_use]
    pub fn new(page: usize, size: usize, total_elements: u64) -> Self {
        let total_pages = if size > 0 {
            total_elements.div_ceil(size as u64)
        } else {
            0
        };

        Self {
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: u64) -> Self {
        Self {
            content,
            info: PageInfo::new(page, size, total_elements),
        }
    }

    /// Maps the page content with a fallible conversion.
    pub fn try_map<U, E, F: FnMut(T) -> Result<U, E>>(self, f: F) -> Result<Page<U>, E> {
        Ok(Page {
            content: self.content.into_iter().map(f).collect::<Result<Vec<_>, _>>()?,
            info: self.info,
        })
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns the total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.info.total_elements
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.info.total_pages
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}
