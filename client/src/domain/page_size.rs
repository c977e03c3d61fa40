//! Page-size selector state.

use pagination::PageSize;
use thiserror::Error;

/// The selector was asked for a size it does not list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page size {requested} is not offered; choose one of {offered}")]
pub struct PageSizeNotOffered {
    pub requested: PageSize,
    pub offered: String,
}

/// Options of the page-size selector and the one currently chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeSelector {
    options: Vec<PageSize>,
    selected: PageSize,
}

impl PageSizeSelector {
    /// Build a selector. `selected` is added to `options` when missing; the
    /// options are kept sorted and free of duplicates.
    pub fn new(options: impl IntoIterator<Item = PageSize>, selected: PageSize) -> Self {
        let mut options: Vec<PageSize> = options.into_iter().collect();
        options.push(selected);
        options.sort_unstable();
        options.dedup();
        Self { options, selected }
    }

    /// Offered sizes, ascending.
    pub fn options(&self) -> &[PageSize] {
        &self.options
    }

    /// Currently selected size.
    pub const fn selected(&self) -> PageSize {
        self.selected
    }

    /// Choose another offered size.
    ///
    /// # Errors
    ///
    /// Returns [`PageSizeNotOffered`] when `size` is not one of the options.
    pub fn select(&mut self, size: PageSize) -> Result<(), PageSizeNotOffered> {
        if !self.options.contains(&size) {
            return Err(PageSizeNotOffered {
                requested: size,
                offered: self
                    .options
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        self.selected = size;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(value: u32) -> PageSize {
        PageSize::new(value).expect("positive")
    }

    #[test]
    fn selected_size_is_always_offered() {
        let selector = PageSizeSelector::new([size(10), size(3)], size(5));
        assert_eq!(selector.options(), &[size(3), size(5), size(10)]);
        assert_eq!(selector.selected(), size(5));
    }

    #[test]
    fn selecting_unlisted_size_keeps_current_choice() {
        let mut selector = PageSizeSelector::new([size(3), size(5)], size(5));
        let err = selector.select(size(7)).expect_err("7 is not offered");
        assert_eq!(err.to_string(), "page size 7 is not offered; choose one of 3, 5");
        assert_eq!(selector.selected(), size(5));
    }
}
