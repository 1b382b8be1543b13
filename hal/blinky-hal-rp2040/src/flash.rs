//! Flash storage for the settings record
//!
//! The RP2040 has no EEPROM, so the settings page lives in the last erase
//! sector of the external QSPI flash, behind [`PagedStorage`].

use blinky_drivers::{PagedStorage, StorageError};
use embassy_rp::flash::{Blocking, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;

/// Flash size on the Raspberry Pi Pico
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Offset of the settings sector from the start of flash
pub const SETTINGS_OFFSET: u32 = (FLASH_SIZE - ERASE_SIZE) as u32;

/// Bytes mirrored in RAM for the settings page
pub const SETTINGS_PAGE_SIZE: usize = 256;

/// Blocking flash driver
pub type Rp2040Flash<'d> = Flash<'d, FLASH, Blocking, FLASH_SIZE>;

/// Byte storage for the settings record
pub type SettingsStorage<'d> = PagedStorage<Rp2040Flash<'d>, SETTINGS_PAGE_SIZE>;

/// Mount the settings page
pub fn settings_storage(flash: Peri<'_, FLASH>) -> Result<SettingsStorage<'_>, StorageError> {
    PagedStorage::new(Flash::new_blocking(flash), SETTINGS_OFFSET)
}
