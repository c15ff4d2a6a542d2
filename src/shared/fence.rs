//! Request fencing — only the newest request for a slot may land.
//!
//! Every fetch takes a [`Ticket`] from the slot's fence before it is issued.
//! When the response arrives, it is applied only if its ticket is still the
//! latest one handed out; older responses are dropped.

/// Sequence number of an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Monotonic ticket issuer for one logical query.
#[derive(Debug, Clone, Default)]
pub struct RequestFence {
    latest: u64,
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, superseding every earlier ticket.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// `true` if `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Invalidate every outstanding ticket without starting a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
