//! Board configuration for the Raspberry Pi Pico
//!
//! | Function      | GPIO | Peripheral        |
//! |---------------|------|-------------------|
//! | Host UART TX  | 0    | UART0             |
//! | Host UART RX  | 1    | UART0             |
//! | Touch sensor  | 15   | input, pull-down  |
//! | Red           | 16   | PWM slice 0 A     |
//! | Green         | 17   | PWM slice 0 B     |
//! | Blue          | 18   | PWM slice 1 A     |
//! | Aux output    | 19   | push-pull         |

use blinky_protocol::Revision;

/// Host link baud rate
pub const UART_BAUD: u32 = 115_200;

/// UART ring buffer size, per direction
pub const UART_BUF_SIZE: usize = 64;

/// The touch controller drives its output high on touch
pub const TOUCH_ACTIVE_LOW: bool = false;

/// Packet layout spoken by the host software
pub const PROTOCOL_REVISION: Revision = Revision::Synced;
