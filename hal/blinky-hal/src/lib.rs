//! Blinky Hardware Abstraction Layer
//!
//! This crate defines the capability traits the notification core consumes.
//! Chip-specific crates implement them; the core never touches registers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (blinky-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  blinky-core (scheduler, settings, ...) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  blinky-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  blinky-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::EdgeWatch`] - Edge interrupt on a single input line
//! - [`pwm::RgbPwm`] - Three PWM channels with per-channel output gating
//! - [`timer::TickSource`] - Periodic tick with a documented rate
//! - [`storage::ByteStorage`] - Byte-addressable persistent storage
//! - [`bootloader::Bootloader`] - One-way firmware update hand-off

#![no_std]
#![deny(unsafe_code)]

pub mod bootloader;
pub mod gpio;
pub mod pwm;
pub mod storage;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use bootloader::Bootloader;
pub use gpio::{EdgeWatch, InputPin, OutputPin};
pub use pwm::{Channel, RgbPwm};
pub use storage::ByteStorage;
pub use timer::TickSource;
