//! Page controller for the players table.
//!
//! Owns the page state, the fetched records of the current page, the row
//! edit drafts and the create form. Every user action ends in exactly one
//! alert through the [`Notifier`] port; failures are never retried.
//!
//! Page loads are sequenced: a load takes a ticket when issued, and a
//! response whose ticket has been superseded is dropped without touching the
//! table. [`PlayerTableController::load_page`] holds `&mut self` across the
//! request, so loads issued through it never overlap and are never stale.
//! Callers that keep accepting input while a request is in flight drive
//! [`PlayerTableController::begin_page_load`] and
//! [`PlayerTableController::finish_page_load`] themselves.
//!
//! The page state tracks the page most recently requested, which mutations
//! reload. Rows and page buttons are drawn from the request the retained
//! records were fetched with, so a failed load leaves the table consistent.

use std::sync::Arc;

use pagination::{PageButton, PageRequest, PageSize, PageState, RequestSequencer, RequestTicket};
use tracing::{debug, info, warn};

use super::form::{FormError, PlayerField, PlayerForm};
use super::page_size::{PageSizeNotOffered, PageSizeSelector};
use super::player::{PlayerId, PlayerRecord};
use super::ports::{CountPayload, Notifier, PlayerGateway, PlayerGatewayError, PlayerTableView};
use super::row_edit::{BeginEdit, RowEditController, RowEditError};
use super::table::{DateDisplay, RowContent, RowView};

pub(crate) const COUNT_FAILED: &str =
    "Failed to fetch total player count. Please check the server.";
pub(crate) const PAGE_INVALID_FORMAT: &str = "Invalid data format received from server.";
pub(crate) const PAGE_FAILED: &str =
    "Failed to load players. Please check the players endpoint.";
/// Largest record count the table paginates; larger counts are clamped.
pub(crate) const MAX_RECORD_COUNT: u64 = 100_000;

pub(crate) const CREATE_SUCCEEDED: &str = "Player created successfully!";
pub(crate) const CREATE_FAILED: &str =
    "Failed to create player. Please check the input data and server logs.";

fn delete_succeeded(id: PlayerId) -> String {
    format!("Player with ID {id} deleted successfully.")
}

fn delete_failed(id: PlayerId) -> String {
    format!("Failed to delete player with ID {id}.")
}

fn update_succeeded(id: PlayerId) -> String {
    format!("Player with ID {id} was successfully updated.")
}

fn update_failed(id: PlayerId) -> String {
    format!("Failed to update player with ID {id}.")
}

/// A page load that has been issued but not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    ticket: RequestTicket,
    request: PageRequest,
}

impl PageTicket {
    /// Query parameters to send.
    pub const fn request(&self) -> PageRequest {
        self.request
    }
}

/// How a page load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadOutcome {
    /// Rows were rendered.
    Loaded { rows: usize },
    /// A newer load was issued first; the response was dropped.
    Stale,
    /// The body was not a sequence of records.
    InvalidFormat,
    /// The request failed.
    Failed,
}

/// How a create, update or delete ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Failed,
}

/// Result of clicking "edit" on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Started,
    AlreadyEditing,
    /// No row on the current page has this identifier.
    UnknownRow,
}

/// Result of clicking "save" on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The update failed; the row stays in edit mode.
    Failed,
    /// The row was not in edit mode; nothing was sent.
    NotEditing,
}

/// Controller tying the page state, the row edit controller and the ports.
pub struct PlayerTableController<G, N, V> {
    gateway: Arc<G>,
    notifier: Arc<N>,
    view: V,
    page: PageState,
    selector: PageSizeSelector,
    sequencer: RequestSequencer,
    records: Vec<PlayerRecord>,
    shown: PageRequest,
    edits: RowEditController,
    create_form: PlayerForm,
    dates: DateDisplay,
}

impl<G, N, V> PlayerTableController<G, N, V>
where
    G: PlayerGateway,
    N: Notifier,
    V: PlayerTableView,
{
    /// Create a controller showing page zero of an empty table.
    pub fn new(gateway: Arc<G>, notifier: Arc<N>, view: V, selector: PageSizeSelector) -> Self {
        Self {
            gateway,
            notifier,
            view,
            page: PageState::new(selector.selected()),
            shown: PageRequest::new(0, selector.selected()),
            selector,
            sequencer: RequestSequencer::new(),
            records: Vec::new(),
            edits: RowEditController::new(),
            create_form: PlayerForm::blank(),
            dates: DateDisplay::default(),
        }
    }

    /// Use `dates` to format birthdays in display rows.
    pub fn with_date_display(mut self, dates: DateDisplay) -> Self {
        self.dates = dates;
        self
    }

    /// Current page state.
    pub const fn page_state(&self) -> &PageState {
        &self.page
    }

    /// Page-size selector.
    pub const fn page_size_selector(&self) -> &PageSizeSelector {
        &self.selector
    }

    /// Records of the page currently shown.
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    /// Request the shown records were fetched with.
    pub const fn shown_page(&self) -> PageRequest {
        self.shown
    }

    /// Create form widget values.
    pub const fn create_form(&self) -> &PlayerForm {
        &self.create_form
    }

    /// Row edit drafts.
    pub const fn edits(&self) -> &RowEditController {
        &self.edits
    }

    /// Rendering surface.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Rendering surface, for adapter output outside the table.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Initial load: fetch the total, then show page zero.
    pub async fn start(&mut self) -> PageLoadOutcome {
        self.view.render_create_form(&self.create_form);
        self.refresh_total_count().await;
        self.load_page(0).await
    }

    /// Fetch the record count and store it in the page state.
    ///
    /// Unrecognised bodies log a warning and count as zero. A failed request
    /// alerts and counts as zero. Counts above `MAX_RECORD_COUNT` are
    /// clamped with a warning. Never fails.
    pub async fn refresh_total_count(&mut self) -> u64 {
        let total = match self.gateway.fetch_count().await {
            Ok(CountPayload::Count(count)) if count > MAX_RECORD_COUNT => {
                warn!(count, limit = MAX_RECORD_COUNT, "record count too large; clamping");
                MAX_RECORD_COUNT
            }
            Ok(CountPayload::Count(count)) => count,
            Ok(CountPayload::Unrecognised(body)) => {
                warn!(%body, "unexpected response format from count endpoint");
                0
            }
            Err(error) => {
                warn!(%error, "count request failed");
                self.notifier.alert(COUNT_FAILED);
                0
            }
        };
        self.page.set_total_record_count(total);
        total
    }

    /// Load and render the page at `page_index`.
    pub async fn load_page(&mut self, page_index: u32) -> PageLoadOutcome {
        let ticket = self.begin_page_load(page_index);
        let result = self.gateway.fetch_page(ticket.request()).await;
        self.finish_page_load(ticket, result)
    }

    /// Issue a page load: record the page index and the selector's size,
    /// and take a ticket that supersedes every earlier load.
    pub fn begin_page_load(&mut self, page_index: u32) -> PageTicket {
        self.page.set_current_page_index(page_index);
        self.page.set_page_size(self.selector.selected());
        PageTicket {
            ticket: self.sequencer.issue(),
            request: self.page.request(),
        }
    }

    /// Apply the response of an issued page load.
    pub fn finish_page_load(
        &mut self,
        ticket: PageTicket,
        result: Result<Vec<PlayerRecord>, PlayerGatewayError>,
    ) -> PageLoadOutcome {
        if !self.sequencer.is_current(ticket.ticket) {
            debug!(
                ticket = ticket.ticket.get(),
                page = ticket.request.page_number,
                "dropping superseded page response"
            );
            return PageLoadOutcome::Stale;
        }

        match result {
            Ok(records) => {
                let rows = records.len();
                self.records = records;
                self.shown = ticket.request;
                self.edits.discard_all();
                self.render_rows();
                self.render_pagination();
                PageLoadOutcome::Loaded { rows }
            }
            Err(error) if error.is_decode() => {
                warn!(%error, "page response is not a sequence of players");
                self.records.clear();
                self.shown = ticket.request;
                self.edits.discard_all();
                self.render_rows();
                self.notifier.alert(PAGE_INVALID_FORMAT);
                PageLoadOutcome::InvalidFormat
            }
            Err(error) => {
                warn!(%error, "page request failed");
                self.notifier.alert(PAGE_FAILED);
                PageLoadOutcome::Failed
            }
        }
    }

    /// Re-render the create form, the rows and the pagination without
    /// any request.
    pub fn redraw(&mut self) {
        self.view.render_create_form(&self.create_form);
        self.render_rows();
        self.render_pagination();
    }

    /// Render one button per page, the shown page active.
    pub fn render_pagination(&mut self) -> Vec<PageButton> {
        let mut shown = self.page;
        shown.set_current_page_index(self.shown.page_number);
        shown.set_page_size(self.shown.page_size);
        let buttons = shown.buttons();
        self.view.render_pagination(&buttons);
        buttons
    }

    /// Rows as currently shown, numbered across pages.
    pub fn row_views(&self) -> Vec<RowView> {
        self.records
            .iter()
            .enumerate()
            .map(|(local_index, record)| RowView {
                number: self.shown.row_number(local_index),
                id: record.id,
                content: match self.edits.form(record.id) {
                    Some(form) => RowContent::Editing(form.clone()),
                    None => RowContent::Display(self.dates.cells(record)),
                },
            })
            .collect()
    }

    fn render_rows(&mut self) {
        let rows = self.row_views();
        self.view.render_rows(&rows);
    }

    /// Select another page size, refresh the total and go back to page zero.
    ///
    /// # Errors
    ///
    /// Returns [`PageSizeNotOffered`] without any request when the selector
    /// does not list `size`.
    pub async fn change_page_size(
        &mut self,
        size: PageSize,
    ) -> Result<PageLoadOutcome, PageSizeNotOffered> {
        self.selector.select(size)?;
        self.refresh_total_count().await;
        Ok(self.load_page(0).await)
    }

    /// Type into one create form widget.
    ///
    /// # Errors
    ///
    /// Returns the widget's [`FormError`] for a value a choice does not offer.
    pub fn set_create_field(&mut self, field: PlayerField, raw: &str) -> Result<(), FormError> {
        self.create_form.set(field, raw)?;
        self.view.render_create_form(&self.create_form);
        Ok(())
    }

    /// Submit the create form.
    ///
    /// Success reloads page zero and clears the form; failure keeps it.
    pub async fn submit_create(&mut self) -> MutationOutcome {
        let draft = self.create_form.to_create_draft();
        match self.gateway.create(&draft).await {
            Ok(()) => {
                info!(name = %draft.name, "player created");
                self.notifier.alert(CREATE_SUCCEEDED);
                self.refresh_total_count().await;
                self.load_page(0).await;
                self.create_form = PlayerForm::blank();
                self.view.render_create_form(&self.create_form);
                MutationOutcome::Applied
            }
            Err(error) => {
                warn!(%error, "create request failed");
                self.notifier.alert(CREATE_FAILED);
                MutationOutcome::Failed
            }
        }
    }

    /// Delete a player and reload the current page.
    pub async fn delete_player(&mut self, id: PlayerId) -> MutationOutcome {
        match self.gateway.delete(id).await {
            Ok(()) => {
                info!(%id, "player deleted");
                self.notifier.alert(&delete_succeeded(id));
                self.reload_current_page().await;
                MutationOutcome::Applied
            }
            Err(error) => {
                warn!(%id, %error, "delete request failed");
                self.notifier.alert(&delete_failed(id));
                MutationOutcome::Failed
            }
        }
    }

    /// Switch a row of the current page into edit mode.
    ///
    /// Clicking edit on a row that is already editing keeps its draft.
    pub fn begin_edit(&mut self, id: PlayerId) -> EditOutcome {
        let Some(record) = self.records.iter().find(|record| record.id == id) else {
            return EditOutcome::UnknownRow;
        };
        match self.edits.begin(record) {
            BeginEdit::Started => {
                self.render_rows();
                EditOutcome::Started
            }
            BeginEdit::AlreadyEditing => EditOutcome::AlreadyEditing,
        }
    }

    /// Type into one edit widget of an editing row.
    ///
    /// # Errors
    ///
    /// Returns [`RowEditError`] when the row is not editing or the widget
    /// rejects the value.
    pub fn set_edit_field(
        &mut self,
        id: PlayerId,
        field: PlayerField,
        raw: &str,
    ) -> Result<(), RowEditError> {
        self.edits.update_field(id, field, raw)?;
        self.render_rows();
        Ok(())
    }

    /// Send an editing row's values as a full-replace update.
    ///
    /// Success reloads the current page, which returns every row to display
    /// mode. Failure leaves the row editing.
    pub async fn save_edit(&mut self, id: PlayerId) -> SaveOutcome {
        let Some(draft) = self.edits.draft_for_save(id) else {
            return SaveOutcome::NotEditing;
        };
        debug!(%id, ?draft, "sending player update");
        match self.gateway.update(id, &draft).await {
            Ok(()) => {
                info!(%id, "player updated");
                self.notifier.alert(&update_succeeded(id));
                self.reload_current_page().await;
                SaveOutcome::Saved
            }
            Err(error) => {
                warn!(%id, %error, "update request failed");
                self.notifier.alert(&update_failed(id));
                SaveOutcome::Failed
            }
        }
    }

    /// Refresh the total, re-derive the valid page range, and reload the
    /// current page within it.
    async fn reload_current_page(&mut self) -> PageLoadOutcome {
        self.refresh_total_count().await;
        let target = self.page.clamp_page_index(self.page.current_page_index());
        self.load_page(target).await
    }
}

#[cfg(test)]
#[path = "page_controller_tests.rs"]
mod tests;
