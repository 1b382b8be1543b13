//! Blink/timeout scheduler
//!
//! The scheduler toggles the display on a periodic tick, stops after an
//! optional timeout and cancels on a touch. It is split into a pure state
//! machine that returns hardware effects and an executor that applies them.

pub mod executor;
pub mod machine;

pub use executor::BlinkScheduler;
pub use machine::{
    BlinkCounters, BlinkTiming, Blinker, Effect, Effects, Event, State, Transition,
    MAX_TIMEOUT_SECONDS, REFERENCE_TICKS_PER_SECOND, TIMEOUT_OFFSET,
};
