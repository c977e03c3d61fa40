//! Render models handed to the table view.

use std::fmt::Write as _;

use thiserror::Error;

use super::form::PlayerForm;
use super::player::{Birthday, PlayerId, PlayerRecord, Profession, Race};

/// Default display pattern for birthdays (`dd.mm.yyyy`).
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

const INVALID_DATE: &str = "Invalid Date";

/// Action icons shown in a row's trailing columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Save,
    Delete,
}

/// Formatted cells of a row in display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCells {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub level: i32,
    pub birthday: String,
    pub banned: &'static str,
}

/// What a row currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent {
    Display(DisplayCells),
    Editing(PlayerForm),
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// One-based position across all pages.
    pub number: u64,
    /// Identifier the row's actions target.
    pub id: PlayerId,
    pub content: RowContent,
}

impl RowView {
    /// Action icons available for the row. Editing rows hide delete.
    pub fn actions(&self) -> &'static [RowAction] {
        match self.content {
            RowContent::Display(_) => &[RowAction::Edit, RowAction::Delete],
            RowContent::Editing(_) => &[RowAction::Save],
        }
    }

    /// Whether the row shows edit widgets.
    pub fn is_editing(&self) -> bool {
        matches!(self.content, RowContent::Editing(_))
    }
}

/// Rejected date display pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date format pattern '{pattern}'")]
pub struct DateFormatError {
    pub pattern: String,
}

/// Localised birthday formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateDisplay {
    pattern: String,
}

impl Default for DateDisplay {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_owned(),
        }
    }
}

impl DateDisplay {
    /// Validate a chrono `strftime` pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DateFormatError`] when the pattern cannot format a date.
    pub fn new(pattern: impl Into<String>) -> Result<Self, DateFormatError> {
        let candidate = Self {
            pattern: pattern.into(),
        };
        match candidate.try_format(Birthday::from_epoch_millis(0)) {
            Some(_) => Ok(candidate),
            None => Err(DateFormatError {
                pattern: candidate.pattern,
            }),
        }
    }

    /// Display text for a birthday.
    pub fn format(&self, birthday: Birthday) -> String {
        self.try_format(birthday)
            .unwrap_or_else(|| INVALID_DATE.to_owned())
    }

    fn try_format(&self, birthday: Birthday) -> Option<String> {
        let instant = birthday.to_datetime()?;
        let mut out = String::new();
        write!(out, "{}", instant.format(&self.pattern)).ok()?;
        Some(out)
    }

    /// Display cells for a record.
    pub fn cells(&self, record: &PlayerRecord) -> DisplayCells {
        DisplayCells {
            name: record.name.clone(),
            title: record.title.clone(),
            race: record.race,
            profession: record.profession,
            level: record.level,
            birthday: self.format(record.birthday),
            banned: if record.banned { "Yes" } else { "No" },
        }
    }
}
