//! RGB PWM on RP2040 PWM slices
//!
//! Red and green share one slice (channels A and B), blue uses channel A
//! of a second slice. Counters wrap at 255 so a duty byte maps directly to
//! the compare value. A disabled channel keeps its pin in PWM mode with the
//! compare forced to zero, so the pin is held low rather than tri-stated;
//! the duty is kept in software and restored when the channel is enabled
//! again.

use blinky_hal::{Channel, RgbPwm};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};

/// Counter top; one step per duty value
pub const PWM_TOP: u16 = 255;

/// RGB output on two PWM slices
pub struct Rp2040RgbPwm<'d> {
    red_green: Pwm<'d>,
    blue: Pwm<'d>,
    red_green_config: PwmConfig,
    blue_config: PwmConfig,
    duty: [u8; 3],
    enabled: [bool; 3],
}

impl<'d> Rp2040RgbPwm<'d> {
    /// Take over two configured slices, all channels released
    pub fn new(red_green: Pwm<'d>, blue: Pwm<'d>) -> Self {
        let mut pwm = Self {
            red_green,
            blue,
            red_green_config: Self::config(),
            blue_config: Self::config(),
            duty: [0; 3],
            enabled: [false; 3],
        };
        for channel in Channel::ALL {
            pwm.apply(channel);
        }
        pwm
    }

    /// Slice configuration with both outputs at zero
    pub fn config() -> PwmConfig {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;
        config.compare_a = 0;
        config.compare_b = 0;
        config
    }

    fn apply(&mut self, channel: Channel) {
        let i = channel as usize;
        let compare = if self.enabled[i] {
            u16::from(self.duty[i])
        } else {
            0
        };

        match channel {
            Channel::Red => {
                self.red_green_config.compare_a = compare;
                self.red_green.set_config(&self.red_green_config);
            }
            Channel::Green => {
                self.red_green_config.compare_b = compare;
                self.red_green.set_config(&self.red_green_config);
            }
            Channel::Blue => {
                self.blue_config.compare_a = compare;
                self.blue.set_config(&self.blue_config);
            }
        }
    }
}

impl RgbPwm for Rp2040RgbPwm<'_> {
    fn set_duty(&mut self, channel: Channel, duty: u8) {
        self.duty[channel as usize] = duty;
        self.apply(channel);
    }

    fn enable_output(&mut self, channel: Channel) {
        self.enabled[channel as usize] = true;
        self.apply(channel);
    }

    fn disable_output(&mut self, channel: Channel) {
        self.enabled[channel as usize] = false;
        self.apply(channel);
    }

    fn is_output_enabled(&self, channel: Channel) -> bool {
        self.enabled[channel as usize]
    }
}
