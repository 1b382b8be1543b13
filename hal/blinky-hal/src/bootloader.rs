//! Firmware update hand-off

/// Jump into the platform bootloader
///
/// The call never returns; the device re-enumerates as an update target.
pub trait Bootloader {
    /// Leave the application and start the bootloader
    fn enter(&mut self) -> !;
}
