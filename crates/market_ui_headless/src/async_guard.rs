//! Generation guard for asynchronous loads.
//!
//! A loader calls [`RequestGuard::begin`] before starting work and checks
//! [`RequestGuard::is_current`] when the result arrives. Starting a newer request or calling
//! [`RequestGuard::invalidate`] (for example when the owning view unmounts) makes older tickets
//! stale, so their results can be dropped instead of overwriting newer state.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Identifies one in-flight request.
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
/// Shared generation counter. Clones observe the same generation.
pub struct RequestGuard {
    generation: Rc<Cell<u64>>,
}

impl RequestGuard {
    /// Creates a guard with no outstanding request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request, superseding any earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        RequestTicket(next)
    }

    /// Whether `ticket` belongs to the latest request and the guard was not invalidated.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.get() == ticket.0
    }

    /// Marks every outstanding ticket stale.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn invalidate_discards_in_flight_results() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        let on_unmount = guard.clone();
        on_unmount.invalidate();
        assert!(!guard.is_current(ticket));
    }
}
