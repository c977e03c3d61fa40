//! Terminal adapter: command parsing, table rendering, alerts and the
//! command loop.

pub mod command;
pub mod notifier;
pub mod session;
pub mod view;

pub use command::{Command, CommandParseError, parse_line};
pub use notifier::TerminalNotifier;
pub use session::{Flow, TerminalSession};
pub use view::TerminalTableView;
