//! Offset bookkeeping for paged search results.

use crate::types::PageSize;

/// Current page position within a result ordering.
///
/// `offset` is always a multiple of the page size and never past the start of
/// the last page, `floor(total_hits / page_size) * page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: PageSize,
    offset: usize,
    total_hits: usize,
}

impl Pagination {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            offset: 0,
            total_hits: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total_hits(&self) -> usize {
        self.total_hits
    }

    /// Start index of the last page.
    pub fn last_page_start(&self) -> usize {
        let page_size = self.page_size();
        (self.total_hits / page_size) * page_size
    }

    /// Moves to the page containing `requested`, clamped to the valid range.
    pub fn set_offset(&mut self, requested: usize) {
        let page_size = self.page_size();
        let aligned = (requested / page_size) * page_size;
        self.offset = aligned.min(self.last_page_start());
    }

    pub fn increment(&mut self) {
        self.offset = (self.offset + self.page_size()).min(self.last_page_start());
    }

    pub fn decrement(&mut self) {
        self.offset = self.offset.saturating_sub(self.page_size());
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Records the hit count of the latest response, pulling the offset back
    /// if the result set shrank underneath it.
    pub fn set_total_hits(&mut self, total_hits: usize) {
        self.total_hits = total_hits;
        self.offset = self.offset.min(self.last_page_start());
    }

    /// One-based page number of the current offset.
    pub fn current_page(&self) -> usize {
        self.offset / self.page_size() + 1
    }

    /// One-based page number of the last page.
    pub fn last_page(&self) -> usize {
        self.last_page_start() / self.page_size() + 1
    }

    pub fn has_next(&self) -> bool {
        self.offset < self.last_page_start()
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }
}

#[cfg(test)]
mod tests;
