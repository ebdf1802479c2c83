//! Pagination types for the article list

use serde::{Deserialize, Serialize};

/// Default page number
const DEFAULT_PAGE: u32 = 1;

/// Default items per page
const DEFAULT_LIMIT: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl Pagination {
    /// Create pagination; zero values fall back to the defaults.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1).saturating_mul(self.limit as i64)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Raw query parameters for pagination.
///
/// Kept as strings so that junk like `?page=abc` falls back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Collect from decoded query pairs. The first occurrence of a key wins and
/// unknown keys are ignored.
impl FromIterator<(String, String)> for PaginationParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => {
                    params.page.get_or_insert(value);
                }
                "limit" => {
                    params.limit.get_or_insert(value);
                }
                _ => {}
            }
        }
        params
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            parse_leading_int(params.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            parse_leading_int(params.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
        )
    }
}

/// Parse the leading decimal digits of a value (`"12abc"` -> 12).
///
/// Signs are not accepted, so negative input yields `None`. Values past
/// `u32::MAX` saturate.
fn parse_leading_int(raw: Option<&str>) -> Option<u32> {
    let trimmed = raw?.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// One page of results plus the total row count
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Pagination that produced this page
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    /// Calculate total number of pages (`ceil(total / limit)`).
    pub fn total_pages(&self) -> i64 {
        let limit = self.pagination.limit();
        (self.total + limit - 1) / limit
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta {
            page: self.pagination.page,
            limit: self.pagination.limit,
            total: self.total,
            pages: self.total_pages(),
        }
    }
}

/// `meta` block of a list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub pages: i64,
}
