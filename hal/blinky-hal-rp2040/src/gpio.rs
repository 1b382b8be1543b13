//! GPIO outputs

use blinky_hal::OutputPin;
use embassy_rp::gpio::Output;

/// Push-pull output driving the auxiliary line
pub struct AuxOutput<'d>(Output<'d>);

impl<'d> AuxOutput<'d> {
    /// Wrap a configured output pin
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for AuxOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
