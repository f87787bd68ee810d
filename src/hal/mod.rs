//! Hardware Abstraction Layer for SerialMenu.
//!
//! Thin wrappers around ESP-IDF peripherals.
//! Business logic stays in core modules, HAL is just I/O.

pub mod led;
pub mod rtc;
pub mod serial;

pub use led::GpioLed;
pub use rtc::{EspTicks, SystemClock};
pub use serial::{UartStream, UartWriter};
