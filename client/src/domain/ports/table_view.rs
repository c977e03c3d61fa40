//! Driven port for the rendering surface.
//!
//! The controller always hands over complete snapshots: every row of the
//! page, every pagination button. Views never read state back out of what
//! they rendered.

use pagination::PageButton;

use crate::domain::form::PlayerForm;
use crate::domain::table::RowView;

/// Port rendering the players table and its controls.
pub trait PlayerTableView {
    /// Replace the table body with `rows`.
    fn render_rows(&mut self, rows: &[RowView]);

    /// Replace the pagination control with `buttons`.
    fn render_pagination(&mut self, buttons: &[PageButton]);

    /// Show the create form with its current widget values.
    fn render_create_form(&mut self, form: &PlayerForm);
}
