//! Page-window computation over a ranked result list.

/// Fixed page size used by the directory view.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// The contiguous slice of the ranked result currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based, clamped into [1, total_pages].
    pub page: usize,
    pub page_size: usize,
    /// ceil(total / page_size), minimum 1 even for an empty result.
    pub total_pages: usize,
    /// Total ranked result count before slicing.
    pub total_results: usize,
    /// Start index into the ranked list (inclusive).
    pub start: usize,
    /// End index into the ranked list (exclusive).
    pub end: usize,
}

impl PageWindow {
    /// Compute the window for a requested page over `total_results` items.
    /// Out-of-range requests clamp silently; this never fails.
    #[must_use]
    pub fn compute(requested_page: usize, page_size: usize, total_results: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_results.div_ceil(page_size).max(1);
        let page = requested_page.clamp(1, total_pages);
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total_results);
        Self {
            page,
            page_size,
            total_pages,
            total_results,
            start,
            end,
        }
    }

    /// True if this is not the last page.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// True if this is not the first page.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}
