//! The device instance shared by all tasks
//!
//! The host task, the tick task and the touch task each reach the device
//! through [`DEVICE`]. The gates let the core start and stop the tick and
//! touch deliveries without owning the tasks.

use blinky_core::{Device, Shared};
use blinky_drivers::TouchSensor;
use blinky_hal_rp2040::{AuxOutput, EdgeGate, Gate, LevelInput, Rp2040RgbPwm, SettingsStorage, TickGate};

/// The device with the board's concrete hardware
pub type BoardDevice = Device<
    SettingsStorage<'static>,
    TickGate,
    EdgeGate,
    TouchSensor<LevelInput>,
    Rp2040RgbPwm<'static>,
    AuxOutput<'static>,
>;

pub static DEVICE: Shared<BoardDevice> = Shared::new();

/// Open while the scheduler wants ticks
pub static TICK_GATE: Gate = Gate::new();

/// Open while the touch edge watch is armed
pub static EDGE_GATE: Gate = Gate::new();

/// Last level read from the touch line
pub static TOUCH_LEVEL: Gate = Gate::new();
