//! Command loop driving the page controller from console lines.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use super::command::{Command, parse_line, widget_value};
use super::view::TerminalTableView;
use crate::domain::ports::{Notifier, PlayerGateway};
use crate::domain::{EditOutcome, PlayerTableController, SaveOutcome};

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A console session around one controller.
pub struct TerminalSession<G, N, W> {
    controller: PlayerTableController<G, N, TerminalTableView<W>>,
}

impl<G, N, W> TerminalSession<G, N, W>
where
    G: PlayerGateway,
    N: Notifier,
    W: Write,
{
    pub const fn new(controller: PlayerTableController<G, N, TerminalTableView<W>>) -> Self {
        Self { controller }
    }

    pub const fn controller(&self) -> &PlayerTableController<G, N, TerminalTableView<W>> {
        &self.controller
    }

    /// End the session and hand back the controller.
    pub fn into_controller(self) -> PlayerTableController<G, N, TerminalTableView<W>> {
        self.controller
    }

    /// Initial load, then the selector.
    pub async fn start(&mut self) {
        self.controller.start().await;
        self.render_page_sizes();
    }

    /// Read and execute lines until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns the read error of `input`.
    pub async fn run<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            match parse_line(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    if self.execute(command).await == Flow::Quit {
                        break;
                    }
                }
                Err(error) => self.say(error.message()),
            }
        }
        Ok(())
    }

    /// Execute one command.
    pub async fn execute(&mut self, command: Command) -> Flow {
        debug!(?command, "executing console command");
        match command {
            Command::Page { number } => self.show_page(number).await,
            Command::Size { size } => {
                if let Err(error) = self.controller.change_page_size(size).await {
                    self.say(&error.to_string());
                }
                self.render_page_sizes();
            }
            Command::Edit { id } => match self.controller.begin_edit(id) {
                EditOutcome::Started => {}
                EditOutcome::AlreadyEditing => {
                    self.say(&format!("player {id} is already being edited"));
                }
                EditOutcome::UnknownRow => {
                    self.say(&format!("no player with ID {id} on this page"));
                }
            },
            Command::Set { id, field, value } => {
                if let Err(error) = self
                    .controller
                    .set_edit_field(id, field, &widget_value(&value))
                {
                    self.say(&error.to_string());
                }
            }
            Command::Save { id } => {
                if self.controller.save_edit(id).await == SaveOutcome::NotEditing {
                    self.say(&format!("player {id} is not being edited"));
                }
            }
            Command::Delete { id } => {
                if self.controller.records().iter().any(|record| record.id == id) {
                    self.controller.delete_player(id).await;
                } else {
                    self.say(&format!("no player with ID {id} on this page"));
                }
            }
            Command::Form { field, value } => {
                if let Err(error) = self
                    .controller
                    .set_create_field(field, &widget_value(&value))
                {
                    self.say(&error.to_string());
                }
            }
            Command::Submit => {
                self.controller.submit_create().await;
            }
            Command::Show => {
                self.controller.redraw();
                self.render_page_sizes();
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    async fn show_page(&mut self, number: u32) {
        let page = *self.controller.page_state();
        let Some(index) = number.checked_sub(1).filter(|index| page.contains_page(*index)) else {
            let message = match page.total_pages() {
                0 => "there are no pages to show".to_owned(),
                last => format!("page {number} does not exist; choose 1 to {last}"),
            };
            self.say(&message);
            return;
        };
        self.controller.load_page(index).await;
    }

    fn render_page_sizes(&mut self) {
        let selector = self.controller.page_size_selector().clone();
        self.controller.view_mut().render_page_sizes(&selector);
    }

    fn say(&mut self, text: &str) {
        self.controller.view_mut().message(text);
    }
}
