//! Offset pagination primitives for the roster console.
//!
//! The crate owns the arithmetic behind a paged table: how many pages a
//! record count spans, which page indices are valid, how rows on a page are
//! numbered, and how page requests are encoded on the wire. It also provides
//! a small sequencer used to discard responses that arrive after a newer
//! request was issued.
//!
//! # Example
//!
//! ```
//! use pagination::{PageSize, PageState};
//!
//! let size = PageSize::new(5).expect("non-zero page size");
//! let mut state = PageState::new(size);
//! state.set_total_record_count(12);
//! state.set_current_page_index(2);
//!
//! assert_eq!(state.total_pages(), 3);
//! assert_eq!(state.row_number(0), 11);
//! assert_eq!(state.row_number(1), 12);
//! ```

mod error;
mod page_size;
mod request;
mod sequence;
mod state;

pub use error::PageSizeError;
pub use page_size::PageSize;
pub use request::PageRequest;
pub use sequence::{RequestSequencer, RequestTicket};
pub use state::{PageButton, PageState};
