//! Positive page size newtype.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PageSizeError;

/// Number of records shown on one page. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(NonZeroU32);

impl PageSize {
    /// Validate and construct a page size.
    ///
    /// # Errors
    ///
    /// Returns [`PageSizeError::Zero`] when `value` is zero.
    pub const fn new(value: u32) -> Result<Self, PageSizeError> {
        match NonZeroU32::new(value) {
            Some(size) => Ok(Self(size)),
            None => Err(PageSizeError::Zero),
        }
    }

    /// The page size as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

impl FromStr for PageSize {
    type Err = PageSizeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = value
            .trim()
            .parse::<u32>()
            .map_err(|_| PageSizeError::Invalid {
                input: value.to_owned(),
            })?;
        Self::new(parsed)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
