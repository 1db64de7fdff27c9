/// Capability for requesting one more tick from the host's render loop.
///
/// The camera animator never owns a clock or a frame source; it asks the host
/// for the next tick through this trait and is driven by whatever loop the
/// host runs. At most one tick request is outstanding at a time:
/// `request_tick` replaces any pending request, and `cancel_tick` guarantees
/// no previously requested tick is still scheduled afterwards.
pub trait TickScheduler {
    fn request_tick(&mut self);
    fn cancel_tick(&mut self);
}

/// Hand-driven scheduler for tests and headless loops.
///
/// Records whether a tick is pending; the owner of the loop polls
/// [`ManualTicker::take_pending`] each frame and, when it returns true,
/// advances the animator once.
#[derive(Debug, Default)]
pub struct ManualTicker {
    pending: bool,
    requested: u64,
    cancelled: u64,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request, if any.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// Total tick requests seen, for asserting scheduling behavior.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl TickScheduler for ManualTicker {
    fn request_tick(&mut self) {
        self.pending = true;
        self.requested += 1;
    }

    fn cancel_tick(&mut self) {
        if self.pending {
            self.cancelled += 1;
        }
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{ManualTicker, TickScheduler};

    #[test]
    fn take_pending_consumes_the_request() {
        let mut t = ManualTicker::new();
        t.request_tick();
        assert!(t.take_pending());
        assert!(!t.take_pending());
    }

    #[test]
    fn cancel_drops_the_pending_request() {
        let mut t = ManualTicker::new();
        t.request_tick();
        t.cancel_tick();
        assert!(!t.take_pending());
        assert_eq!(t.cancelled(), 1);
    }

    #[test]
    fn cancel_without_pending_is_a_no_op() {
        let mut t = ManualTicker::new();
        t.cancel_tick();
        assert_eq!(t.cancelled(), 0);
    }
}
