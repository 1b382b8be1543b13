//! Embassy async tasks
//!
//! Each task stands in for one execution context of the device: the host
//! link, the periodic tick and the touch edge.

pub mod host;
pub mod tick;
pub mod touch;

pub use host::host_task;
pub use tick::tick_task;
pub use touch::touch_task;
