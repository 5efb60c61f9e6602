//! Page arithmetic over the filtered view.
//!
//! The page number is 1-based and always clamped to `[1, max(1, page_count)]`,
//! both when set and when read against a list that may have shrunk since.

/// Default rows per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    requested: usize,
    items_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Pagination {
    /// Create pagination on page 1. A page size of 0 is treated as 1.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            requested: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// Rows per page.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Number of pages for a list of `len` rows: `ceil(len / items_per_page)`.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.items_per_page)
    }

    /// Current page for a list of `len` rows.
    pub fn current(&self, len: usize) -> usize {
        self.clamp(self.requested, len)
    }

    /// Request page `page`, clamped against a list of `len` rows.
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.requested = self.clamp(page, len);
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.requested = 1;
    }

    /// Index of the first row on the current page.
    pub fn start_index(&self, len: usize) -> usize {
        (self.current(len) - 1) * self.items_per_page
    }

    /// One past the last row index of the current page, before length clamping.
    pub fn end_index(&self, len: usize) -> usize {
        self.start_index(len) + self.items_per_page
    }

    /// Rows of `items` on the current page.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index(items.len()).min(items.len());
        let end = self.end_index(items.len()).min(items.len());
        &items[start..end]
    }

    /// First/Previous controls are disabled on page 1.
    pub fn is_first_page(&self, len: usize) -> bool {
        self.current(len) == 1
    }

    /// Next/Last controls are disabled once the page reaches the end of the list.
    pub fn is_last_page(&self, len: usize) -> bool {
        self.end_index(len) >= len
    }

    fn clamp(&self, page: usize, len: usize) -> usize {
        page.clamp(1, self.page_count(len).max(1))
    }
}
