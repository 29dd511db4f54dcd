//! Ordered query primitive — filter, then sort, then cut out one page.
//!
//! Every listing operation and the normal tier of a search go through
//! [`query`]. Page numbers are 1-based; out-of-range page and page-size
//! requests are normalised by [`Pagination::resolve`] rather than rejected.

use std::cmp::Ordering;

/// Built-in page size when a request gives none (or a non-positive one).
pub const PER_PAGE_DEFAULT: usize = 20;
/// Built-in upper bound on the page size.
pub const PER_PAGE_MAX: usize = 100;

/// Page-size policy of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub per_page_default: usize,
    pub per_page_max: usize,
}

impl PageLimits {
    /// Zero values fall back to the built-in defaults.
    pub fn new(per_page_default: usize, per_page_max: usize) -> Self {
        Self {
            per_page_default: if per_page_default == 0 {
                PER_PAGE_DEFAULT
            } else {
                per_page_default
            },
            per_page_max: if per_page_max == 0 {
                PER_PAGE_MAX
            } else {
                per_page_max
            },
        }
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self::new(PER_PAGE_DEFAULT, PER_PAGE_MAX)
    }
}

/// A normalised page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Normalise a raw request:
    ///
    /// - `page` missing or below 1 becomes 1 (there is no upper bound);
    /// - `per_page` missing or below 1 becomes the default, and anything
    ///   above the maximum is clamped to it.
    pub fn resolve(page: Option<i64>, per_page: Option<i64>, limits: PageLimits) -> Self {
        let page = match page {
            Some(p) if p >= 1 => usize::try_from(p).unwrap_or(usize::MAX),
            _ => 1,
        };
        let per_page = match per_page {
            Some(n) if n >= 1 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => limits.per_page_default,
        };
        Self {
            page,
            per_page: per_page.clamp(1, limits.per_page_max.max(1)),
        }
    }

    /// Number of items that precede this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }
}

/// Filter `items`, sort the survivors with `compare` (stable), and return the
/// half-open window `[(page-1)*per_page, page*per_page)`.
pub fn query<T, F, C>(
    items: impl IntoIterator<Item = T>,
    filter: F,
    compare: C,
    page: Option<i64>,
    per_page: Option<i64>,
    limits: PageLimits,
) -> Vec<T>
where
    F: FnMut(&T) -> bool,
    C: FnMut(&T, &T) -> Ordering,
{
    query_window(
        items,
        filter,
        compare,
        Pagination::resolve(page, per_page, limits),
    )
}

/// [`query`] over an already-resolved [`Pagination`].
pub fn query_window<T, F, C>(
    items: impl IntoIterator<Item = T>,
    filter: F,
    compare: C,
    paging: Pagination,
) -> Vec<T>
where
    F: FnMut(&T) -> bool,
    C: FnMut(&T, &T) -> Ordering,
{
    let mut kept: Vec<T> = items.into_iter().filter(filter).collect();
    kept.sort_by(compare);
    kept.into_iter()
        .skip(paging.offset())
        .take(paging.per_page)
        .collect()
}
