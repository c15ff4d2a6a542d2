//! `Slot<T>` — one panel's data with its own loading and error state.

use super::fence::{RequestFence, Ticket};
use crate::error::SdkError;

/// Result container for a single independently-fetched panel.
///
/// The app owns instances of this type. A failed fetch keeps the previous
/// data unless the caller uses [`Slot::finish_or_clear`].
#[derive(Debug, Clone)]
pub struct Slot<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    fence: RequestFence,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            fence: RequestFence::new(),
        }
    }
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started. Clears the error, keeps the current data.
    pub fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.fence.issue()
    }

    /// Apply a result. Returns `false` if the ticket was stale and nothing changed.
    ///
    /// On failure `failure` becomes the visible error; previous data is kept.
    pub fn finish(&mut self, ticket: Ticket, result: Result<T, SdkError>, failure: &str) -> bool {
        if !self.fence.is_current(ticket) {
            tracing::debug!(seq = ticket.seq(), "Discarding stale response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "{}", failure);
                self.error = Some(failure.to_string());
            }
        }
        true
    }

    /// Like [`finish`](Self::finish), but a failure also drops the previous data.
    pub fn finish_or_clear(
        &mut self,
        ticket: Ticket,
        result: Result<T, SdkError>,
        failure: &str,
    ) -> bool {
        let failed = result.is_err();
        let applied = self.finish(ticket, result, failure);
        if applied && failed {
            self.data = None;
        }
        applied
    }

    /// Drop data and error, and retire any in-flight request.
    pub fn reset(&mut self) {
        self.data = None;
        self.error = None;
        self.loading = false;
        self.fence.invalidate();
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> SdkError {
        SdkError::Other("boom".to_string())
    }

    #[test]
    fn test_finish_success_stores_data() {
        let mut slot = Slot::new();
        let t = slot.begin();
        assert!(slot.is_loading());
        assert!(slot.finish(t, Ok(5), "failed"));
        assert_eq!(slot.data(), Some(&5));
        assert!(!slot.is_loading());
        assert!(slot.error().is_none());
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut slot = Slot::new();
        let t = slot.begin();
        slot.finish(t, Ok(1), "failed");
        let t = slot.begin();
        slot.finish(t, Err(failure()), "Failed to fetch");
        assert_eq!(slot.data(), Some(&1));
        assert_eq!(slot.error(), Some("Failed to fetch"));
    }

    #[test]
    fn test_finish_or_clear_drops_data_on_failure() {
        let mut slot = Slot::new();
        let t = slot.begin();
        slot.finish(t, Ok(1), "failed");
        let t = slot.begin();
        slot.finish_or_clear(t, Err(failure()), "failed");
        assert!(slot.data().is_none());
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let mut slot = Slot::new();
        let old = slot.begin();
        let new = slot.begin();
        assert!(slot.finish(new, Ok("fresh"), "failed"));
        assert!(!slot.finish(old, Ok("stale"), "failed"));
        assert_eq!(slot.data(), Some(&"fresh"));
    }

    #[test]
    fn test_stale_failure_does_not_clear_loading() {
        let mut slot: Slot<u8> = Slot::new();
        let old = slot.begin();
        let _new = slot.begin();
        slot.finish(old, Err(failure()), "failed");
        assert!(slot.is_loading());
        assert!(slot.error().is_none());
    }

    #[test]
    fn test_reset_retires_in_flight() {
        let mut slot = Slot::new();
        let t = slot.begin();
        slot.reset();
        assert!(!slot.finish(t, Ok(3), "failed"));
        assert!(slot.data().is_none());
    }
}
