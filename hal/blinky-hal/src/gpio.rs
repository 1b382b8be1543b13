//! GPIO pin abstractions
//!
//! Digital input/output pins plus the edge-interrupt gate used for the
//! touch sensor line.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// A single level read; no debouncing is implied.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Edge-triggered interrupt on one input line
///
/// Arming is a side effect: once armed, the platform delivers an
/// activation to the scheduler asynchronously, even if the level changes
/// back between two ticks.
pub trait EdgeWatch {
    /// Start delivering edge events
    fn arm(&mut self);

    /// Stop delivering edge events
    fn disarm(&mut self);

    /// Whether edge events are currently delivered
    fn is_armed(&self) -> bool;
}
