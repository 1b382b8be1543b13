//! Trigger options bitmask

/// Options byte of the `Trigger` command
///
/// Unknown bits are carried but ignored by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerOptions(u8);

impl TriggerOptions {
    /// No cancellation source, no auxiliary output
    pub const NONE: Self = Self(0);
    /// A touch on the sensor cancels the blinking
    pub const TOUCH_SENSOR: Self = Self(1 << 0);
    /// The blinking stops after the configured timeout
    pub const TIMEOUT: Self = Self(1 << 1);
    /// Assert the auxiliary output while blinking
    pub const AUX_OUTPUT: Self = Self(1 << 2);

    /// Options used by the host software when none are given
    pub const HOST_DEFAULT: Self =
        Self(Self::TOUCH_SENSOR.0 | Self::TIMEOUT.0 | Self::AUX_OUTPUT.0);

    /// Wrap a raw options byte
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw options byte
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether all bits of `other` are set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Touch cancellation requested
    pub const fn touch_sensor(self) -> bool {
        self.contains(Self::TOUCH_SENSOR)
    }

    /// Timeout cancellation requested
    pub const fn timeout(self) -> bool {
        self.contains(Self::TIMEOUT)
    }

    /// Auxiliary output requested
    pub const fn aux_output(self) -> bool {
        self.contains(Self::AUX_OUTPUT)
    }
}

impl core::ops::BitOr for TriggerOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let opts = TriggerOptions::TOUCH_SENSOR | TriggerOptions::TIMEOUT;
        assert_eq!(opts.bits(), 0b011);
        assert!(opts.touch_sensor());
        assert!(opts.timeout());
        assert!(!opts.aux_output());
    }

    #[test]
    fn test_unknown_bits_ignored() {
        let opts = TriggerOptions::from_bits(0b1111_1000);
        assert!(!opts.touch_sensor());
        assert!(!opts.timeout());
        assert!(!opts.aux_output());
    }

    #[test]
    fn test_host_default() {
        assert_eq!(TriggerOptions::HOST_DEFAULT.bits(), 7);
    }
}
