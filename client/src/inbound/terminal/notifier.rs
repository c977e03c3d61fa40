//! Alert sink printing `[alert]` lines.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::warn;

use crate::domain::ports::Notifier;

/// Writes each alert as one line and flushes before returning, so the alert
/// is on screen before the next command is read.
#[derive(Debug)]
pub struct TerminalNotifier<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalNotifier<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Notifier for TerminalNotifier<W> {
    fn alert(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = writeln!(out, "[alert] {message}").and_then(|()| out.flush()) {
            warn!(%error, %message, "failed to deliver alert");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_are_prefixed_lines() {
        let notifier = TerminalNotifier::new(Vec::new());
        notifier.alert("Player created successfully!");
        notifier.alert("Failed to delete player with ID 3.");

        let output = String::from_utf8(notifier.into_inner()).expect("utf-8 output");
        assert_eq!(
            output,
            "[alert] Player created successfully!\n[alert] Failed to delete player with ID 3.\n"
        );
    }
}
