//! Console commands parsed with clap in multicall mode.
//!
//! Each input line is split on whitespace and the first word names the
//! command, so `help` and `help <command>` come from clap. Trailing words of
//! `set` and `form` are joined back into one widget value; an empty value
//! clears the widget.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use pagination::PageSize;
use thiserror::Error;

use crate::domain::{PlayerField, PlayerId};

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

/// One console command.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show page N, counting from 1.
    Page { number: u32 },
    /// Select a page size offered by the selector.
    Size { size: PageSize },
    /// Switch a row of the current page into edit mode.
    Edit { id: PlayerId },
    /// Type into an edit widget of an editing row.
    Set {
        id: PlayerId,
        field: PlayerField,
        #[arg(allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Send an editing row to the backend.
    Save { id: PlayerId },
    /// Delete a player shown on the current page.
    Delete { id: PlayerId },
    /// Type into a create form widget.
    Form {
        field: PlayerField,
        #[arg(allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Submit the create form.
    Submit,
    /// Redraw the form, the table and the pagination.
    Show,
    /// Leave the console.
    #[command(alias = "exit")]
    Quit,
}

/// A line that is not a command, or a request for help.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CommandParseError {
    message: String,
    help: bool,
}

impl CommandParseError {
    /// Rendered clap output.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the line asked for help rather than being malformed.
    pub const fn is_help(&self) -> bool {
        self.help
    }
}

impl From<clap::Error> for CommandParseError {
    fn from(error: clap::Error) -> Self {
        let help = matches!(
            error.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
        Self {
            message: error.render().to_string().trim_end().to_owned(),
            help,
        }
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`CommandParseError`] for unknown commands, bad arguments and
/// help requests.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    let parsed = Line::try_parse_from(words)?;
    Ok(Some(parsed.command))
}

/// Widget value typed after the field name.
pub(crate) fn widget_value(words: &[String]) -> String {
    words.join(" ")
}
