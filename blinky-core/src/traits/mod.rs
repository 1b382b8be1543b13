//! Hardware abstraction traits
//!
//! Interfaces between the notification core and concrete drivers that go
//! beyond the raw capabilities in `blinky-hal`.

pub mod touch;

pub use touch::TouchInput;
