//! Scheduler executor
//!
//! Feeds events into the [`Blinker`] machine and applies the resulting
//! effects to the hardware. Every public method is expected to run with the
//! device locked (see [`crate::shared::Shared`]), so a status change and the
//! matching output change happen in one step relative to the tick and touch
//! contexts.

use blinky_hal::{EdgeWatch, OutputPin, RgbPwm, TickSource};
use blinky_protocol::TriggerOptions;

use super::machine::{BlinkTiming, Blinker, Effect, Event, State};
use crate::color::Color;
use crate::display::DisplayDriver;
use crate::settings::Settings;
use crate::status::DeviceStatus;
use crate::traits::TouchInput;

/// Blink scheduler bound to its hardware
pub struct BlinkScheduler<T, W, I, P, A> {
    blinker: Blinker,
    ticks: T,
    watch: W,
    touch: I,
    display: DisplayDriver<P>,
    aux: A,
}

impl<T, W, I, P, A> BlinkScheduler<T, W, I, P, A>
where
    T: TickSource,
    W: EdgeWatch,
    I: TouchInput,
    P: RgbPwm,
    A: OutputPin,
{
    /// Create a disabled scheduler
    pub fn new(ticks: T, watch: W, touch: I, display: DisplayDriver<P>, aux: A) -> Self {
        let mut scheduler = Self {
            blinker: Blinker::new(T::TICKS_PER_SECOND),
            ticks,
            watch,
            touch,
            display,
            aux,
        };
        // Ensure aux output starts released
        scheduler.aux.set_low();
        scheduler
    }

    /// Start blinking with interval and timeout taken from `settings`
    pub fn enable(&mut self, options: TriggerOptions, settings: &Settings) -> State {
        let timing = BlinkTiming {
            interval: settings.blink_interval,
            timeout: settings.blink_timeout,
        };
        self.dispatch(Event::Enable { options, timing })
    }

    /// Stop blinking; a no-op when already disabled
    pub fn disable(&mut self) -> State {
        self.dispatch(Event::Disable)
    }

    /// Change the display color
    ///
    /// During an "on" phase a channel that becomes nonzero is driven right
    /// away, so the display-on bit keeps matching the outputs.
    pub fn set_color(&mut self, color: Color) {
        self.display.set_color(color);
        if self.blinker.status().display_on() {
            self.display.enable();
        }
    }

    /// Handle one firing of the tick source
    pub fn on_tick(&mut self) -> State {
        // Single level read per tick, only while touch cancellation is armed
        let touched = self.blinker.state().touch_armed() && self.touch.is_touched();
        self.dispatch(Event::Tick { touched })
    }

    /// Handle an activation of the touch edge interrupt
    pub fn on_touch_edge(&mut self) -> State {
        self.dispatch(Event::TouchEdge)
    }

    /// Current state
    pub fn state(&self) -> State {
        self.blinker.state()
    }

    /// Current status bits
    pub fn status(&self) -> DeviceStatus {
        self.blinker.status()
    }

    /// The state machine
    pub fn blinker(&self) -> &Blinker {
        &self.blinker
    }

    /// The display driver
    pub fn display(&self) -> &DisplayDriver<P> {
        &self.display
    }

    /// Mutable access to the display driver
    pub fn display_mut(&mut self) -> &mut DisplayDriver<P> {
        &mut self.display
    }

    /// The tick source
    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    /// The touch edge watch
    pub fn watch(&self) -> &W {
        &self.watch
    }

    /// The auxiliary output
    pub fn aux(&self) -> &A {
        &self.aux
    }

    fn dispatch(&mut self, event: Event) -> State {
        let transition = self.blinker.handle(event);
        for &effect in transition.effects.iter() {
            self.apply(effect);
        }
        transition.state
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StartTicks => self.ticks.start(),
            Effect::StopTicks => self.ticks.stop(),
            Effect::ArmTouchWatch => self.watch.arm(),
            Effect::DisarmTouchWatch => self.watch.disarm(),
            Effect::DisplayOn => self.display.enable(),
            Effect::DisplayOff => self.display.disable(),
            Effect::AuxOn => self.aux.set_high(),
            Effect::AuxOff => self.aux.set_low(),
        }
    }
}
