//! Page arithmetic shared by both paging strategies.
//!
//! Pages are 1-based. An empty result set still has one (empty) page.

/// Number of entries shown per page
pub const PAGE_SIZE: usize = 20;

/// `max(1, ceil(total / page_size))`
pub fn max_page(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Bound `page` into `[1, max_page]`
pub fn clamp(page: usize, max_page: usize) -> usize {
    page.clamp(1, max_page.max(1))
}

/// Offset of the first item on `page`
pub fn offset(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// The window of `items` shown on `page`; empty when the page is out of range
pub fn slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = offset(page, page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Derived pager state for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub page: usize,
    pub max_page: usize,
}

impl PageBounds {
    pub fn new(page: usize, total: usize, page_size: usize) -> Self {
        let max_page = max_page(total, page_size);
        Self {
            page: clamp(page, max_page),
            max_page,
        }
    }

    /// Bound an arbitrary page into this range
    pub fn clamp_page(&self, page: usize) -> usize {
        clamp(page, self.max_page)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.max_page
    }

    /// Page after moving back, or `None` when already on the first page
    pub fn prev(&self) -> Option<usize> {
        self.has_prev().then(|| self.page - 1)
    }

    /// Page after moving forward, or `None` when already on the last page
    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.page + 1)
    }
}
