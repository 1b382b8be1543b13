//! Board-agnostic notification core for the indicator firmware
//!
//! This crate contains all logic that does not depend on a specific chip:
//!
//! - Settings record layout, defaults and persistence
//! - PWM display driver with zero-duty output gating
//! - Blink/timeout scheduler (pure state machine plus effect executor)
//! - Host command dispatch
//! - Critical-section cell shared between tick, touch and host contexts

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod device;
pub mod display;
pub mod scheduler;
pub mod settings;
pub mod shared;
pub mod status;
pub mod traits;

pub use color::Color;
pub use device::{CommandError, Device};
pub use display::DisplayDriver;
pub use scheduler::{BlinkScheduler, Blinker};
pub use settings::{Settings, SettingsStore, StorageState};
pub use shared::Shared;
pub use status::DeviceStatus;
