//! Periodic tick source
//!
//! The scheduler's fundamental time unit. The tick source calls back into
//! the scheduler at a fixed, documented rate while it is running.

/// Periodic tick source
pub trait TickSource {
    /// Number of ticks per second, rounded down to a whole number
    ///
    /// The reference timer (16 MHz, prescaler 1024, 8-bit overflow) runs at
    /// 61.03 Hz and reports 61.
    const TICKS_PER_SECOND: u8;

    /// Start delivering ticks
    fn start(&mut self);

    /// Stop delivering ticks
    fn stop(&mut self);

    /// Whether ticks are currently delivered
    fn is_running(&self) -> bool;
}
