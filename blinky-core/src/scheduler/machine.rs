//! Blinker state machine
//!
//! All display, timer and touch-watch behavior is a function of the current
//! state and an event. Hardware is never touched here; every transition
//! returns the effects the executor has to apply, in order.

use blinky_protocol::TriggerOptions;
use heapless::Vec;

use crate::status::DeviceStatus;

/// Tick rate of the reference timer: 16 MHz / 1024 / 256 = 61.03 Hz
///
/// The 0.035% error is accepted, not corrected.
pub const REFERENCE_TICKS_PER_SECOND: u8 = 61;

/// Longest configurable timeout in seconds
pub const MAX_TIMEOUT_SECONDS: u16 = 300;

/// Seconds added to the stored timeout byte
///
/// The byte covers 256 values, so the configurable range is
/// `[TIMEOUT_OFFSET, TIMEOUT_OFFSET + 255]` = `[44, 299]` seconds of
/// elapsed time before the cut-off.
pub const TIMEOUT_OFFSET: u16 = MAX_TIMEOUT_SECONDS - (u8::MAX as u16 + 1);

/// Upper bound of effects produced by one transition
///
/// The longest one is a tick that toggles the display and then disables
/// with touch and aux armed: toggle, stop ticks, disarm watch, display off,
/// aux off.
pub const MAX_EFFECTS: usize = 5;

/// Effects of one transition, in application order
pub type Effects = Vec<Effect, MAX_EFFECTS>;

/// Scheduler states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Tick source stopped, display off
    Disabled,
    /// Blinking
    Enabled {
        /// A touch cancels the blinking
        touch_armed: bool,
        /// The blinking stops after the timeout
        timeout_armed: bool,
    },
}

impl State {
    /// Check if the scheduler is running
    pub fn is_enabled(&self) -> bool {
        matches!(self, State::Enabled { .. })
    }

    /// Check if touch cancellation is armed
    pub fn touch_armed(&self) -> bool {
        matches!(
            self,
            State::Enabled {
                touch_armed: true,
                ..
            }
        )
    }

    /// Check if the timeout is armed
    pub fn timeout_armed(&self) -> bool {
        matches!(
            self,
            State::Enabled {
                timeout_armed: true,
                ..
            }
        )
    }
}

/// Events that drive the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Start blinking
    Enable {
        options: TriggerOptions,
        timing: BlinkTiming,
    },
    /// One firing of the tick source; `touched` is the sensor level
    Tick { touched: bool },
    /// Edge interrupt from the touch sensor
    TouchEdge,
    /// Stop blinking
    Disable,
}

/// Hardware side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Start the tick source
    StartTicks,
    /// Stop the tick source
    StopTicks,
    /// Arm the touch edge interrupt
    ArmTouchWatch,
    /// Disarm the touch edge interrupt
    DisarmTouchWatch,
    /// Drive the display
    DisplayOn,
    /// Release the display
    DisplayOff,
    /// Assert the auxiliary output
    AuxOn,
    /// Release the auxiliary output
    AuxOff,
}

/// Result of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the event
    pub state: State,
    /// Effects to apply, in order
    pub effects: Effects,
}

/// Timing parameters, copied from the working settings on enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkTiming {
    /// Ticks between two toggles
    pub interval: u8,
    /// Encoded timeout (seconds past `TIMEOUT_OFFSET`)
    pub timeout: u8,
}

/// Run counters, reset on every enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkCounters {
    /// Ticks since the last toggle
    pub ticks: u8,
    /// Ticks since the last full second (only counted with timeout armed)
    pub overflows: u8,
    /// Elapsed whole seconds
    pub seconds: u16,
}

/// Blinker state machine
#[derive(Debug, Clone)]
pub struct Blinker {
    state: State,
    status: DeviceStatus,
    counters: BlinkCounters,
    timing: BlinkTiming,
    ticks_per_second: u8,
}

impl Blinker {
    /// Create a disabled blinker for a tick source of the given rate
    pub fn new(ticks_per_second: u8) -> Self {
        Self {
            state: State::Disabled,
            status: DeviceStatus::new(),
            counters: BlinkCounters::default(),
            timing: BlinkTiming::default(),
            ticks_per_second: ticks_per_second.max(1),
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Current status bits
    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    /// Current run counters
    pub fn counters(&self) -> BlinkCounters {
        self.counters
    }

    /// Timing captured at the last enable
    pub fn timing(&self) -> BlinkTiming {
        self.timing
    }

    /// Process an event
    ///
    /// Events that make no sense in the current state (enable while
    /// enabled, disable while disabled, stray ticks) produce no effects.
    pub fn handle(&mut self, event: Event) -> Transition {
        let mut effects = Effects::new();

        match (self.state, event) {
            (State::Disabled, Event::Enable { options, timing }) => {
                self.enable(options, timing, &mut effects);
            }
            (State::Enabled { .. }, Event::Disable) => {
                self.disable(&mut effects);
            }
            (
                State::Enabled {
                    touch_armed: true, ..
                },
                Event::TouchEdge,
            ) => {
                self.disable(&mut effects);
            }
            (
                State::Enabled {
                    touch_armed,
                    timeout_armed,
                },
                Event::Tick { touched },
            ) => {
                self.tick(touch_armed && touched, timeout_armed, &mut effects);
            }
            _ => {}
        }

        Transition {
            state: self.state,
            effects,
        }
    }

    fn enable(&mut self, options: TriggerOptions, timing: BlinkTiming, effects: &mut Effects) {
        self.counters = BlinkCounters::default();
        self.timing = timing;
        self.state = State::Enabled {
            touch_armed: options.touch_sensor(),
            timeout_armed: options.timeout(),
        };

        push(effects, Effect::StartTicks);

        self.status.set(DeviceStatus::TOUCH_ARMED, options.touch_sensor());
        if options.touch_sensor() {
            push(effects, Effect::ArmTouchWatch);
        }

        self.status.set(DeviceStatus::TIMEOUT_ARMED, options.timeout());

        if options.aux_output() {
            self.status.set(DeviceStatus::AUX_ON, true);
            push(effects, Effect::AuxOn);
        }

        // Visible feedback before the first tick
        self.display_on(effects);
    }

    fn disable(&mut self, effects: &mut Effects) {
        push(effects, Effect::StopTicks);

        if self.status.touch_armed() {
            push(effects, Effect::DisarmTouchWatch);
        }

        self.display_off(effects);

        if self.status.aux_on() {
            self.status.set(DeviceStatus::AUX_ON, false);
            push(effects, Effect::AuxOff);
        }

        self.status.set(DeviceStatus::TOUCH_ARMED, false);
        self.status.set(DeviceStatus::TIMEOUT_ARMED, false);
        self.state = State::Disabled;
    }

    fn tick(&mut self, touched: bool, timeout_armed: bool, effects: &mut Effects) {
        self.counters.ticks = self.counters.ticks.wrapping_add(1);

        if timeout_armed {
            self.counters.overflows = self.counters.overflows.wrapping_add(1);
            if self.counters.overflows >= self.ticks_per_second {
                self.counters.overflows = 0;
                self.counters.seconds = self.counters.seconds.saturating_add(1);

                if self.timed_out() {
                    self.disable(effects);
                    return;
                }
            }
        }

        if self.counters.ticks >= self.timing.interval {
            if self.status.display_on() {
                self.display_off(effects);
            } else {
                self.display_on(effects);
            }
            self.counters.ticks = 0;
        }

        if touched {
            self.disable(effects);
        }
    }

    fn timed_out(&self) -> bool {
        let seconds = self.counters.seconds;
        seconds > TIMEOUT_OFFSET && seconds - TIMEOUT_OFFSET > u16::from(self.timing.timeout)
    }

    fn display_on(&mut self, effects: &mut Effects) {
        self.status.set(DeviceStatus::DISPLAY_ON, true);
        push(effects, Effect::DisplayOn);
    }

    fn display_off(&mut self, effects: &mut Effects) {
        self.status.set(DeviceStatus::DISPLAY_ON, false);
        push(effects, Effect::DisplayOff);
    }
}

fn push(effects: &mut Effects, effect: Effect) {
    let pushed = effects.push(effect);
    debug_assert!(pushed.is_ok(), "effect list exceeds MAX_EFFECTS");
}
