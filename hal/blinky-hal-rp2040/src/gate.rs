//! Gates between the core and the firmware tasks
//!
//! The periodic tick and the touch edge are produced by embassy tasks. The
//! core only decides whether they are delivered: starting the tick source
//! or arming the edge watch opens a gate, and the task checks it before
//! calling into the device.

use blinky_hal::{EdgeWatch, InputPin, TickSource};
use portable_atomic::{AtomicBool, Ordering};

/// One-bit flag shared between a task and the core
pub struct Gate(AtomicBool);

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

impl Gate {
    /// Create a closed gate (usable in a `static`)
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Whether the gate is open
    pub fn is_open(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Open or close the gate
    pub fn set(&self, open: bool) {
        self.0.store(open, Ordering::Release);
    }
}

/// Tick source backed by a fixed-rate ticker task
#[derive(Clone, Copy)]
pub struct TickGate(&'static Gate);

impl TickGate {
    /// Ticker rate the firmware must run at
    pub const RATE_HZ: u64 = 61;

    /// Bind to `gate` and close it
    pub fn new(gate: &'static Gate) -> Self {
        gate.set(false);
        Self(gate)
    }
}

impl TickSource for TickGate {
    const TICKS_PER_SECOND: u8 = Self::RATE_HZ as u8;

    fn start(&mut self) {
        self.0.set(true);
    }

    fn stop(&mut self) {
        self.0.set(false);
    }

    fn is_running(&self) -> bool {
        self.0.is_open()
    }
}

/// Edge watch backed by the touch task
#[derive(Clone, Copy)]
pub struct EdgeGate(&'static Gate);

impl EdgeGate {
    /// Bind to `gate` and close it
    pub fn new(gate: &'static Gate) -> Self {
        gate.set(false);
        Self(gate)
    }
}

impl EdgeWatch for EdgeGate {
    fn arm(&mut self) {
        self.0.set(true);
    }

    fn disarm(&mut self) {
        self.0.set(false);
    }

    fn is_armed(&self) -> bool {
        self.0.is_open()
    }
}

/// Input level mirrored by the task that owns the pin
#[derive(Clone, Copy)]
pub struct LevelInput(&'static Gate);

impl LevelInput {
    /// Read the level mirrored in `level`
    pub fn new(level: &'static Gate) -> Self {
        Self(level)
    }
}

impl InputPin for LevelInput {
    fn is_high(&self) -> bool {
        self.0.is_open()
    }
}
