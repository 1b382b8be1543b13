//! Device status bits
//!
//! Shared between the tick context (read-modify-write on every tick) and
//! the host context. All updates go through the scheduler while the device
//! is locked in a critical section, so the display bit always matches the
//! electrical output.

/// Status bit-set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceStatus(u8);

impl DeviceStatus {
    /// Display output is currently on
    pub const DISPLAY_ON: u8 = 1 << 0;
    /// A touch cancels the blinking
    pub const TOUCH_ARMED: u8 = 1 << 1;
    /// The blinking stops after the timeout
    pub const TIMEOUT_ARMED: u8 = 1 << 2;
    /// Auxiliary output is asserted
    pub const AUX_ON: u8 = 1 << 3;

    /// Empty status
    pub const fn new() -> Self {
        Self(0)
    }

    /// Raw bits, as reported to the host
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check a bit
    pub const fn contains(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    /// Set or clear a bit
    pub fn set(&mut self, bit: u8, value: bool) {
        if value {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }

    /// Display output is on
    pub const fn display_on(self) -> bool {
        self.contains(Self::DISPLAY_ON)
    }

    /// Touch cancellation is armed
    pub const fn touch_armed(self) -> bool {
        self.contains(Self::TOUCH_ARMED)
    }

    /// Timeout cancellation is armed
    pub const fn timeout_armed(self) -> bool {
        self.contains(Self::TIMEOUT_ARMED)
    }

    /// Auxiliary output is on
    pub const fn aux_on(self) -> bool {
        self.contains(Self::AUX_ON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut status = DeviceStatus::new();
        status.set(DeviceStatus::DISPLAY_ON, true);
        status.set(DeviceStatus::TIMEOUT_ARMED, true);
        assert!(status.display_on());
        assert!(status.timeout_armed());
        assert!(!status.touch_armed());
        assert_eq!(status.bits(), 0b101);

        status.set(DeviceStatus::DISPLAY_ON, false);
        assert!(!status.display_on());
        assert_eq!(status.bits(), 0b100);
    }
}
