//! Plain-text rendering of the players table.

use std::io::{self, Write};

use pagination::PageButton;
use tracing::warn;

use crate::domain::ports::PlayerTableView;
use crate::domain::{
    DisplayCells, PageSizeSelector, PlayerField, PlayerForm, RowAction, RowContent, RowView,
};

const HEADER: &str = "  # | name         | title                          | race    | profession | level | birthday   | banned |";

/// Table renderer writing to any [`Write`] sink, usually stdout.
#[derive(Debug)]
pub struct TerminalTableView<W> {
    out: W,
}

impl<W: Write> TerminalTableView<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Borrow the sink.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Print the page-size selector, the chosen size in brackets.
    pub fn render_page_sizes(&mut self, selector: &PageSizeSelector) {
        let options = selector
            .options()
            .iter()
            .map(|size| {
                if *size == selector.selected() {
                    format!("[{size}]")
                } else {
                    size.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.emit(|out| writeln!(out, "page size: {options}"));
    }

    /// Print a line of console feedback that is not an alert.
    pub fn message(&mut self, text: &str) {
        self.emit(|out| writeln!(out, "{text}"));
    }

    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if let Err(error) = write(&mut self.out).and_then(|()| self.out.flush()) {
            warn!(%error, "failed to write to the terminal");
        }
    }
}

impl<W: Write> PlayerTableView for TerminalTableView<W> {
    fn render_rows(&mut self, rows: &[RowView]) {
        self.emit(|out| {
            writeln!(out, "{HEADER}")?;
            if rows.is_empty() {
                writeln!(out, "  (no players)")?;
            }
            for row in rows {
                writeln!(out, "{}", row_line(row))?;
            }
            Ok(())
        });
    }

    fn render_pagination(&mut self, buttons: &[PageButton]) {
        let labels = buttons
            .iter()
            .map(|button| {
                if button.active {
                    format!("[{}]", button.label())
                } else {
                    button.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.emit(|out| writeln!(out, "pages: {labels}"));
    }

    fn render_create_form(&mut self, form: &PlayerForm) {
        let fields = form_fields(form);
        self.emit(|out| writeln!(out, "new player: {fields}"));
    }
}

fn row_line(row: &RowView) -> String {
    let body = match &row.content {
        RowContent::Display(cells) => display_cells(cells),
        RowContent::Editing(form) => format!("editing #{}: {}", row.id, form_fields(form)),
    };
    let actions = row
        .actions()
        .iter()
        .map(|action| match action {
            RowAction::Edit => "[edit]",
            RowAction::Save => "[save]",
            RowAction::Delete => "[delete]",
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{:>3} | {body} | {actions} id={}", row.number, row.id)
}

fn display_cells(cells: &DisplayCells) -> String {
    format!(
        "{:<12} | {:<30} | {:<7} | {:<10} | {:>5} | {:<10} | {:<6}",
        cells.name,
        cells.title,
        cells.race.as_str(),
        cells.profession.as_str(),
        cells.level,
        cells.birthday,
        cells.banned,
    )
}

fn form_fields(form: &PlayerForm) -> String {
    PlayerField::ALL
        .iter()
        .map(|field| format!("{field}={:?}", form.value(*field)))
        .collect::<Vec<_>>()
        .join(" ")
}
