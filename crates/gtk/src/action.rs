//! Guarding asynchronous event handlers against double submission.
//!
//! Handlers are not re-entered while they run synchronously, but a handler
//! that awaits a request gives control back to the event loop and a second
//! click can start a second run. [`Busy`] rejects that second run: take a
//! guard before issuing the request and hold it across the `.await`.

use std::cell::Cell;
use std::rc::Rc;

/// Per-action busy flag. Clones share the flag.
#[derive(Clone, Default)]
pub struct Busy {
    flag: Rc<Cell<bool>>,
}

impl Busy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.flag.get()
    }

    /// Marks the action as running. `None` while a previous run is pending.
    pub fn try_start(&self) -> Option<BusyGuard> {
        if self.flag.replace(true) {
            return None;
        }
        Some(BusyGuard {
            flag: self.flag.clone(),
        })
    }
}

/// Clears its [`Busy`] flag on drop.
pub struct BusyGuard {
    flag: Rc<Cell<bool>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_start_is_rejected_while_pending() {
        let busy = Busy::new();
        let guard = busy.try_start();
        assert!(guard.is_some());
        assert!(busy.is_busy());
        assert!(busy.try_start().is_none());
    }

    #[test]
    fn dropping_the_guard_allows_a_new_run() {
        let busy = Busy::new();
        drop(busy.try_start());
        assert!(!busy.is_busy());
        assert!(busy.try_start().is_some());
    }

    #[test]
    fn clones_share_the_flag() {
        let busy = Busy::new();
        let other = busy.clone();
        let _guard = busy.try_start().unwrap();
        assert!(other.is_busy());
        assert!(other.try_start().is_none());
    }
}
