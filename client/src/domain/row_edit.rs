//! Edit-in-place state for table rows.
//!
//! Each row is either displayed or being edited. Entering edit mode builds a
//! typed [`PlayerForm`] from the retained record; saving turns that form into
//! a full-replace [`PlayerDraft`]. Several rows may edit at once. A page
//! reload discards every draft.

use std::collections::HashMap;

use thiserror::Error;

use super::form::{FormError, PlayerField, PlayerForm};
use super::player::{PlayerDraft, PlayerId, PlayerRecord};

/// Result of asking a row to enter edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginEdit {
    /// The row switched from display to edit.
    Started,
    /// The row was already editing; its in-progress values are kept.
    AlreadyEditing,
}

/// Errors raised while changing a row's edit widgets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowEditError {
    #[error("player {id} is not being edited")]
    NotEditing { id: PlayerId },
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Per-row edit drafts keyed by player identifier.
#[derive(Debug, Clone, Default)]
pub struct RowEditController {
    drafts: HashMap<PlayerId, PlayerForm>,
}

impl RowEditController {
    /// Create a controller with every row in display mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch `record`'s row into edit mode.
    pub fn begin(&mut self, record: &PlayerRecord) -> BeginEdit {
        if self.drafts.contains_key(&record.id) {
            return BeginEdit::AlreadyEditing;
        }
        self.drafts
            .insert(record.id, PlayerForm::from_record(record));
        BeginEdit::Started
    }

    /// Whether the row for `id` is in edit mode.
    pub fn is_editing(&self, id: PlayerId) -> bool {
        self.drafts.contains_key(&id)
    }

    /// Edit widgets of the row for `id`, if it is editing.
    pub fn form(&self, id: PlayerId) -> Option<&PlayerForm> {
        self.drafts.get(&id)
    }

    /// Change one widget of an editing row.
    ///
    /// # Errors
    ///
    /// Returns [`RowEditError::NotEditing`] when the row is displayed, or the
    /// widget's [`FormError`] when the value is not one of its options.
    pub fn update_field(
        &mut self,
        id: PlayerId,
        field: PlayerField,
        raw: &str,
    ) -> Result<(), RowEditError> {
        let form = self
            .drafts
            .get_mut(&id)
            .ok_or(RowEditError::NotEditing { id })?;
        form.set(field, raw)?;
        Ok(())
    }

    /// Coerced full-replace body for an editing row.
    pub fn draft_for_save(&self, id: PlayerId) -> Option<PlayerDraft> {
        self.drafts.get(&id).map(PlayerForm::to_update_draft)
    }

    /// Drop every draft, returning all rows to display mode.
    pub fn discard_all(&mut self) {
        self.drafts.clear();
    }

    /// Number of rows currently editing.
    pub fn editing_count(&self) -> usize {
        self.drafts.len()
    }
}
