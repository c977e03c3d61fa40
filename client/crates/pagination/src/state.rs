//! Page state owned by a paged table.
//!
//! ## Invariants
//! - `page_size` is always positive.
//! - Whenever `total_record_count > 0`, a valid page index satisfies
//!   `index < ceil(total_record_count / page_size)`. Callers re-derive the
//!   range with [`PageState::clamp_page_index`] after the total changes.

use crate::{PageRequest, PageSize};

/// Pagination state for one table: current page, page size and total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page_index: u32,
    page_size: PageSize,
    total_record_count: u64,
}

impl PageState {
    /// Start on page zero with no known records.
    #[must_use]
    pub const fn new(page_size: PageSize) -> Self {
        Self {
            current_page_index: 0,
            page_size,
            total_record_count: 0,
        }
    }

    /// Zero-based index of the page currently shown.
    #[must_use]
    pub const fn current_page_index(&self) -> u32 {
        self.current_page_index
    }

    /// Records per page.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Last known number of records held by the backend.
    #[must_use]
    pub const fn total_record_count(&self) -> u64 {
        self.total_record_count
    }

    /// Record which page is being shown.
    pub const fn set_current_page_index(&mut self, index: u32) {
        self.current_page_index = index;
    }

    /// Change the number of records per page.
    pub const fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
    }

    /// Store a freshly fetched record count.
    pub const fn set_total_record_count(&mut self, total: u64) {
        self.total_record_count = total;
    }

    /// Number of pages needed for the current total, `ceil(total / size)`.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_record_count
            .div_ceil(u64::from(self.page_size.get()))
    }

    /// Whether `index` addresses an existing page.
    #[must_use]
    pub fn contains_page(&self, index: u32) -> bool {
        u64::from(index) < self.total_pages()
    }

    /// Pull `index` back into the valid page range.
    ///
    /// An empty table only has page zero.
    #[must_use]
    pub fn clamp_page_index(&self, index: u32) -> u32 {
        match self.total_pages().checked_sub(1) {
            Some(last) => u32::try_from(last.min(u64::from(index))).unwrap_or(index),
            None => 0,
        }
    }

    /// Number of records preceding the current page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.request().offset()
    }

    /// One-based display number of the row at `local_index` on this page.
    #[must_use]
    pub fn row_number(&self, local_index: usize) -> u64 {
        self.request().row_number(local_index)
    }

    /// One button per page, the current page marked active.
    #[must_use]
    pub fn buttons(&self) -> Vec<PageButton> {
        (0..self.total_pages())
            .map_while(|index| u32::try_from(index).ok())
            .map(|index| PageButton {
                index,
                active: index == self.current_page_index,
            })
            .collect()
    }

    /// Wire request for the current page.
    #[must_use]
    pub const fn request(&self) -> PageRequest {
        PageRequest::new(self.current_page_index, self.page_size)
    }
}

/// A pagination control targeting one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// Zero-based page this button loads.
    pub index: u32,
    /// Whether this is the page currently shown.
    pub active: bool,
}

impl PageButton {
    /// One-based label shown on the button.
    #[must_use]
    pub fn label(&self) -> u64 {
        u64::from(self.index) + 1
    }
}
