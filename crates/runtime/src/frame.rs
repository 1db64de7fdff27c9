use foundation::time::Time;

/// Deterministic frame metadata.
///
/// This is the primary timebase for the animation runtime. It is intentionally
/// small and pure so frame sequences can be recorded and replayed in tests
/// without a real render loop behind them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Fixed delta time (milliseconds).
    pub dt_ms: f64,
    /// Time at the start of the frame (milliseconds).
    pub time: Time,
}

impl Frame {
    pub fn new(index: u64, dt_ms: f64) -> Self {
        Self {
            index,
            dt_ms,
            time: Time(index as f64 * dt_ms),
        }
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_ms)
    }
}
