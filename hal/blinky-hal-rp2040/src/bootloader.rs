//! USB bootloader hand-off
//!
//! The RP2040 boot ROM carries a USB mass-storage bootloader; the firmware
//! is replaced by copying a UF2 file onto the drive it exposes.

use blinky_hal::Bootloader;

/// Reboots into the ROM USB bootloader
#[derive(Debug, Default, Clone, Copy)]
pub struct UsbBootloader;

impl Bootloader for UsbBootloader {
    fn enter(&mut self) -> ! {
        // No activity LED, both USB interfaces enabled
        embassy_rp::rom_data::reset_to_usb_boot(0, 0);
        loop {
            cortex_m::asm::wfi();
        }
    }
}
