//! Pagination extractor.

use clientele_core::PageRequest;
use serde::Deserialize;

/// Query parameters for pagination. Missing values fall back to page 0 and
/// the default size; sizes above the maximum are clamped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub size: Option<usize>,
}

impl From<PaginationQuery> for PageRequest {
    fn from(query: PaginationQuery) -> Self {
        PageRequest::new(
            query.page.unwrap_or(0),
            query.size.unwrap_or(PageRequest::DEFAULT_SIZE),
        )
    }
}
