//! Console configuration loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `ROSTER_*` environment variables and the
//! configuration file. Every field is optional; the accessors apply the
//! defaults and validate the raw values.

use std::time::Duration;

use ortho_config::OrthoConfig;
use pagination::{PageSize, PageSizeError};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::domain::{DateDisplay, DateFormatError, PageSizeSelector};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/rest/players";
const DEFAULT_PAGE_SIZE: u32 = 5;
const DEFAULT_PAGE_SIZE_OPTIONS: &str = "3,5,10,20";

/// A configured value that cannot be used.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid base URL '{value}': {source}")]
    BaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid page size setting: {0}")]
    PageSize(#[from] PageSizeError),
    #[error(transparent)]
    DateFormat(#[from] DateFormatError),
}

/// Settings for the `roster` console.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct RosterSettings {
    /// Players collection URL.
    pub base_url: Option<String>,
    /// Initially selected page size.
    pub page_size: Option<u32>,
    /// Comma-separated page sizes offered by the selector.
    pub page_size_options: Option<String>,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// chrono `strftime` pattern for displayed birthdays.
    pub date_format: Option<String>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl RosterSettings {
    /// Parse the configured base URL, falling back to the local backend.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BaseUrl`] when the value is not a URL.
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        let value = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Url::parse(value).map_err(|source| SettingsError::BaseUrl {
            value: value.to_owned(),
            source,
        })
    }

    /// Initially selected page size.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::PageSize`] for zero.
    pub fn page_size(&self) -> Result<PageSize, SettingsError> {
        Ok(PageSize::new(self.page_size.unwrap_or(DEFAULT_PAGE_SIZE))?)
    }

    /// Page sizes offered by the selector, in configured order.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::PageSize`] when an entry is not a positive
    /// integer.
    pub fn page_size_options(&self) -> Result<Vec<PageSize>, SettingsError> {
        self.page_size_options
            .as_deref()
            .unwrap_or(DEFAULT_PAGE_SIZE_OPTIONS)
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| entry.parse::<PageSize>().map_err(SettingsError::from))
            .collect()
    }

    /// Selector built from the options and the initial size.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::page_size`] and [`Self::page_size_options`] errors.
    pub fn page_size_selector(&self) -> Result<PageSizeSelector, SettingsError> {
        Ok(PageSizeSelector::new(
            self.page_size_options()?,
            self.page_size()?,
        ))
    }

    /// Request timeout; `None` keeps the transport default.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Birthday display format.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::DateFormat`] for a pattern chrono rejects.
    pub fn date_display(&self) -> Result<DateDisplay, SettingsError> {
        match self.date_format.as_deref() {
            Some(pattern) => Ok(DateDisplay::new(pattern)?),
            None => Ok(DateDisplay::default()),
        }
    }
}
