//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in blinky-core and blinky-hal on top of generic hardware interfaces:
//!
//! - Touch sensor on a digital input line
//! - EEPROM-style byte storage on a NOR flash sector

#![no_std]
#![deny(unsafe_code)]

pub mod storage;
pub mod touch;

pub use storage::{PagedStorage, StorageError};
pub use touch::TouchSensor;
