//! Settings record layout
//!
//! ```text
//! 0x00  reserved   erased on an untouched device (corruption sentinel)
//! 0x01  header     'B' (0x42)
//! 0x02  version    layout version, zero-based
//! 0x03  red
//! 0x04  green
//! 0x05  blue
//! 0x06  interval   ticks between two toggles
//! 0x07  timeout    seconds past TIMEOUT_OFFSET
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use blinky_hal::storage::ERASED_BYTE;

use crate::color::Color;

/// Size of the record in bytes
pub const RECORD_SIZE: usize = 8;

/// Header tag of a record that was written by this firmware
pub const SETTINGS_HEADER: u8 = b'B';

/// Current layout version
pub const SETTINGS_VERSION: u8 = 0x00;

/// Color used when nothing valid is stored
pub const DEFAULT_COLOR: Color = Color::new(10, 10, 10);

/// Blink interval used when nothing valid is stored (about half a second)
pub const DEFAULT_INTERVAL: u8 = 31;

/// Encoded timeout used when nothing valid is stored (about one minute)
pub const DEFAULT_TIMEOUT: u8 = 16;

// Byte offsets
pub(crate) const OFFSET_RESERVED: usize = 0x00;
pub(crate) const OFFSET_HEADER: usize = 0x01;
pub(crate) const OFFSET_VERSION: usize = 0x02;
pub(crate) const OFFSET_COLOR: usize = 0x03;
pub(crate) const OFFSET_INTERVAL: usize = 0x06;
pub(crate) const OFFSET_TIMEOUT: usize = 0x07;

/// Settings record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Never written by the firmware; reads as erased on healthy media
    pub reserved: u8,
    /// Header tag
    pub header: u8,
    /// Layout version
    pub version: u8,
    /// Indicator color
    pub color: Color,
    /// Number of ticks between two display toggles
    pub blink_interval: u8,
    /// Timeout in seconds, offset by `TIMEOUT_OFFSET`
    pub blink_timeout: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reserved: ERASED_BYTE,
            header: SETTINGS_HEADER,
            version: SETTINGS_VERSION,
            color: DEFAULT_COLOR,
            blink_interval: DEFAULT_INTERVAL,
            blink_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Settings {
    /// Decode a record from its stored bytes
    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Self {
        Self {
            reserved: bytes[OFFSET_RESERVED],
            header: bytes[OFFSET_HEADER],
            version: bytes[OFFSET_VERSION],
            color: Color::new(
                bytes[OFFSET_COLOR],
                bytes[OFFSET_COLOR + 1],
                bytes[OFFSET_COLOR + 2],
            ),
            blink_interval: bytes[OFFSET_INTERVAL],
            blink_timeout: bytes[OFFSET_TIMEOUT],
        }
    }

    /// Encode the record into its stored bytes
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[OFFSET_RESERVED] = self.reserved;
        bytes[OFFSET_HEADER] = self.header;
        bytes[OFFSET_VERSION] = self.version;
        bytes[OFFSET_COLOR..OFFSET_INTERVAL].copy_from_slice(&self.color.to_bytes());
        bytes[OFFSET_INTERVAL] = self.blink_interval;
        bytes[OFFSET_TIMEOUT] = self.blink_timeout;
        bytes
    }

    /// Check the header tag and layout version
    pub fn is_valid(&self) -> bool {
        self.header == SETTINGS_HEADER && self.version == SETTINGS_VERSION
    }

    /// Stamp the current header tag and layout version
    pub fn stamp(&mut self) {
        self.header = SETTINGS_HEADER;
        self.version = SETTINGS_VERSION;
    }

    /// Reset the user-visible fields to the compiled defaults
    ///
    /// The reserved byte and the tag are left untouched.
    pub fn clear(&mut self) {
        self.color = DEFAULT_COLOR;
        self.blink_interval = DEFAULT_INTERVAL;
        self.blink_timeout = DEFAULT_TIMEOUT;
    }

    /// Check whether color and interval equal the compiled defaults
    pub fn has_default_values(&self) -> bool {
        self.color == DEFAULT_COLOR && self.blink_interval == DEFAULT_INTERVAL
    }
}
