//! PWM display driver
//!
//! Maps a color onto three PWM channels. A channel whose duty is zero has
//! its output gate closed instead of being left enabled at 0% duty.
//!
//! # Policy
//!
//! `enable`/`disable` only gate the pins. Stored duties survive a
//! `disable`, so `enable` afterwards shows the same color again.

use blinky_hal::{Channel, RgbPwm};

use crate::color::Color;

/// Three-channel PWM display driver
pub struct DisplayDriver<P> {
    pwm: P,
    color: Color,
}

impl<P: RgbPwm> DisplayDriver<P> {
    /// Create a driver with all duties at zero and all pins released
    pub fn new(pwm: P) -> Self {
        let mut driver = Self {
            pwm,
            color: Color::OFF,
        };
        driver.set_color(Color::OFF);
        driver.disable();
        driver
    }

    /// Store new duty values
    ///
    /// Channels that become zero are released immediately. Channels that
    /// become nonzero are only driven on the next `enable`.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        for channel in Channel::ALL {
            let duty = Self::duty_of(color, channel);
            self.pwm.set_duty(channel, duty);
            if duty == 0 {
                self.pwm.disable_output(channel);
            }
        }
    }

    /// Drive every channel with a nonzero duty
    pub fn enable(&mut self) {
        for channel in Channel::ALL {
            if Self::duty_of(self.color, channel) > 0 && !self.pwm.is_output_enabled(channel) {
                self.pwm.enable_output(channel);
            }
        }
    }

    /// Release every channel, regardless of duty
    pub fn disable(&mut self) {
        for channel in Channel::ALL {
            self.pwm.disable_output(channel);
        }
    }

    /// Currently stored color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether any channel is currently driven
    pub fn is_lit(&self) -> bool {
        Channel::ALL
            .iter()
            .any(|&channel| self.pwm.is_output_enabled(channel))
    }

    /// The underlying PWM unit
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    fn duty_of(color: Color, channel: Channel) -> u8 {
        match channel {
            Channel::Red => color.r,
            Channel::Green => color.g,
            Channel::Blue => color.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock PWM unit for testing
    #[derive(Default)]
    struct MockPwm {
        duty: [u8; 3],
        enabled: [bool; 3],
        enable_calls: usize,
    }

    fn index(channel: Channel) -> usize {
        match channel {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    impl RgbPwm for MockPwm {
        fn set_duty(&mut self, channel: Channel, duty: u8) {
            self.duty[index(channel)] = duty;
        }

        fn enable_output(&mut self, channel: Channel) {
            self.enabled[index(channel)] = true;
            self.enable_calls += 1;
        }

        fn disable_output(&mut self, channel: Channel) {
            self.enabled[index(channel)] = false;
        }

        fn is_output_enabled(&self, channel: Channel) -> bool {
            self.enabled[index(channel)]
        }
    }

    #[test]
    fn test_starts_dark() {
        let driver = DisplayDriver::new(MockPwm::default());
        assert!(!driver.is_lit());
        assert_eq!(driver.color(), Color::OFF);
    }

    #[test]
    fn test_enable_skips_zero_channels() {
        let mut driver = DisplayDriver::new(MockPwm::default());
        driver.set_color(Color::new(5, 0, 9));
        driver.enable();

        assert_eq!(driver.pwm().duty, [5, 0, 9]);
        assert_eq!(driver.pwm().enabled, [true, false, true]);
    }

    #[test]
    fn test_zero_channel_released_on_color_change() {
        let mut driver = DisplayDriver::new(MockPwm::default());
        driver.set_color(Color::new(5, 6, 7));
        driver.enable();
        assert_eq!(driver.pwm().enabled, [true, true, true]);

        driver.set_color(Color::new(5, 0, 7));
        assert_eq!(driver.pwm().enabled, [true, false, true]);
    }

    #[test]
    fn test_enable_is_idempotent() {
        let mut driver = DisplayDriver::new(MockPwm::default());
        driver.set_color(Color::new(1, 1, 0));
        driver.enable();
        let calls = driver.pwm().enable_calls;
        driver.enable();
        assert_eq!(driver.pwm().enable_calls, calls);
        assert_eq!(driver.pwm().enabled, [true, true, false]);
    }

    #[test]
    fn test_disable_keeps_duty() {
        let mut driver = DisplayDriver::new(MockPwm::default());
        driver.set_color(Color::new(1, 2, 3));
        driver.enable();
        driver.disable();

        assert!(!driver.is_lit());
        assert_eq!(driver.pwm().duty, [1, 2, 3]);

        driver.enable();
        assert_eq!(driver.pwm().enabled, [true, true, true]);
    }
}
