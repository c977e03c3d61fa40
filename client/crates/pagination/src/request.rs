//! Offset page request as sent to list endpoints.

use serde::Serialize;

use crate::PageSize;

/// Query parameters naming one page of a listing.
///
/// Serialises as `pageNumber` / `pageSize`, matching the players endpoint,
/// so HTTP clients can pass it straight to a query-string encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Zero-based page index.
    pub page_number: u32,
    /// Records per page.
    pub page_size: PageSize,
}

impl PageRequest {
    /// Build a request for `page_number` with `page_size` rows.
    #[must_use]
    pub const fn new(page_number: u32, page_size: PageSize) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Number of records preceding this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size.get())
    }

    /// One-based display number of the row at `local_index` on this page.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::{PageRequest, PageSize};
    ///
    /// let request = PageRequest::new(2, PageSize::new(5).expect("positive"));
    /// assert_eq!(request.row_number(0), 11);
    /// ```
    #[must_use]
    pub fn row_number(&self, local_index: usize) -> u64 {
        let local = u64::try_from(local_index).unwrap_or(u64::MAX);
        self.offset().saturating_add(local).saturating_add(1)
    }
}
