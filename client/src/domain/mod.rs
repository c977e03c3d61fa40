//! Domain model and controllers for the players table.
//!
//! Purpose: hold the typed player model, the page and row-edit state, and the
//! controller that turns user actions into gateway calls, renders and alerts.
//! Infrastructure is reached only through the ports in [`ports`].
//!
//! Public surface:
//! - PlayerRecord / PlayerDraft (alias to `player::*`): records as fetched and
//!   bodies as sent.
//! - PlayerForm / PlayerField (alias to `form::*`): widget values of the create
//!   form and of editing rows.
//! - PlayerTableController (alias to `page_controller::*`): the page
//!   controller driving every user action.

pub mod form;
pub mod page_controller;
pub mod page_size;
pub mod player;
pub mod ports;
pub mod row_edit;
pub mod table;

pub use self::form::{FormError, PlayerField, PlayerForm};
pub use self::page_controller::{
    EditOutcome, MutationOutcome, PageLoadOutcome, PageTicket, PlayerTableController, SaveOutcome,
};
pub use self::page_size::{PageSizeNotOffered, PageSizeSelector};
pub use self::player::{
    Birthday, LEVEL_MAX, LEVEL_MIN, NAME_MAX_CHARS, ParseProfessionError, ParseRaceError, PlayerDraft,
    PlayerId, PlayerRecord, Profession, Race, TITLE_MAX_CHARS,
};
pub use self::row_edit::{RowEditController, RowEditError};
pub use self::table::{DateDisplay, DateFormatError, DisplayCells, RowAction, RowContent, RowView};
