//! PWM channel abstractions
//!
//! The indicator uses three PWM channels sharing one time base. Each channel
//! has a compare (duty) value and an output gate that can be closed
//! independently of the duty. A closed gate emits no pulses; whether the pin
//! is tri-stated or held inactive is up to the platform.

/// One of the three color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl Channel {
    /// All channels in wire order (R, G, B)
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// Three-channel PWM output with per-channel output gating
pub trait RgbPwm {
    /// Set the compare value of a channel (0 = never high, 255 = always high)
    fn set_duty(&mut self, channel: Channel, duty: u8);

    /// Emit pulses at the stored duty
    fn enable_output(&mut self, channel: Channel);

    /// Stop emitting pulses on the channel, keeping its duty
    ///
    /// The pin is either released or held at its inactive level.
    fn disable_output(&mut self, channel: Channel);

    /// Whether the channel currently emits pulses
    fn is_output_enabled(&self, channel: Channel) -> bool;
}
