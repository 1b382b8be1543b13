//! Touch sensor input
//!
//! A capacitive touch controller with a digital output line. Some
//! controllers pull the line low on touch, others drive it high.

use blinky_core::traits::TouchInput;
use blinky_hal::InputPin;

/// Touch sensor on a digital input pin
pub struct TouchSensor<P> {
    pin: P,
    /// If true, touched = pin LOW
    active_low: bool,
}

impl<P: InputPin> TouchSensor<P> {
    /// Create a new touch sensor
    ///
    /// # Arguments
    /// - `pin`: The input line of the touch controller
    /// - `active_low`: If true, a touch pulls the line low
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Create a touch sensor whose line goes high on touch
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a touch sensor whose line goes low on touch
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// The underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: InputPin> TouchInput for TouchSensor<P> {
    fn is_touched(&self) -> bool {
        self.pin.is_high() != self.active_low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockPin<'a>(&'a Cell<bool>);

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_active_high_sensor() {
        let level = Cell::new(false);
        let sensor = TouchSensor::new_active_high(MockPin(&level));

        assert!(!sensor.is_touched());
        level.set(true);
        assert!(sensor.is_touched());
    }

    #[test]
    fn test_active_low_sensor() {
        let level = Cell::new(true);
        let sensor = TouchSensor::new_active_low(MockPin(&level));

        assert!(!sensor.is_touched());
        level.set(false);
        assert!(sensor.is_touched());
    }
}
