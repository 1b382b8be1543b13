//! RP2040-specific HAL for the notification indicator firmware
//!
//! This crate provides RP2040 implementations of the shared `blinky-hal`
//! traits on top of embassy-rp:
//!
//! - RGB PWM on two PWM slices
//! - Auxiliary push-pull output
//! - Settings page in the last flash sector
//! - Tick and edge gates flipped by the core, observed by firmware tasks
//! - Jump to the USB mass-storage bootloader in ROM

#![no_std]

pub mod bootloader;
pub mod flash;
pub mod gate;
pub mod gpio;
pub mod pwm;

pub use bootloader::UsbBootloader;
pub use flash::{settings_storage, SettingsStorage};
pub use gate::{EdgeGate, Gate, LevelInput, TickGate};
pub use gpio::AuxOutput;
pub use pwm::Rp2040RgbPwm;
