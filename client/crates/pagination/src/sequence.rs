//! Monotonic request tickets for last-issued-wins response handling.
//!
//! Overlapping page loads may complete out of order. Each load takes a
//! ticket when it is issued; only the response carrying the most recent
//! ticket may be applied.

/// Opaque sequence number handed out by [`RequestSequencer::issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Raw sequence number, for logging.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Issues tickets and answers whether a ticket is still the newest one.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    /// Create a sequencer that has not issued anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issue a ticket newer than every previous one.
    pub const fn issue(&mut self) -> RequestTicket {
        self.latest = self.latest.wrapping_add(1);
        RequestTicket(self.latest)
    }

    /// Whether `ticket` is the most recently issued ticket.
    #[must_use]
    pub const fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}
