//! Page/limit arithmetic and the pagination envelope
//!
//! Pages are 1-based. Asking for a page past the end is not an error: it
//! yields no items while `total` and `total_pages` still describe the whole
//! filtered set.

use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// A validated page request; `page >= 1` and `limit >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Zero page or limit is raised to 1
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// `(page - 1) * limit`, saturating
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// `ceil(total / limit)`; zero when `total` is zero
pub fn total_pages(total: u64, limit: u64) -> u64 {
    total.div_ceil(limit.max(1))
}

/// Pagination metadata as serialized in list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PageMeta {
    pub fn new(total: u64, request: &PageRequest) -> Self {
        Self {
            page: request.page(),
            limit: request.limit(),
            total,
            total_pages: total_pages(total, request.limit()),
        }
    }

    /// Whether the requested page holds no rows at all
    pub fn is_past_end(&self) -> bool {
        self.page > self.total_pages
    }
}

/// One page of items plus its metadata
///
/// Serializes as `{ "data": [...], "pagination": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult<T> {
    #[serde(rename = "data")]
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, pagination: PageMeta) -> Self {
        Self { items, pagination }
    }

    pub fn total(&self) -> u64 {
        self.pagination.total
    }

    pub fn total_pages(&self) -> u64 {
        self.pagination.total_pages
    }
}

/// Apply offset/limit to an already-filtered, already-ordered slice
pub fn paginate<T: Clone>(items: &[T], request: &PageRequest) -> PageResult<T> {
    let meta = PageMeta::new(items.len() as u64, request);
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);

    let page = items.iter().skip(offset).take(limit).cloned().collect();
    PageResult::new(page, meta)
}
