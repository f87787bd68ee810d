//! UART-backed serial stream.

use core::ffi::c_void;

use esp_idf_svc::sys as esp_idf_sys;

use crate::serial::ByteStream;

/// Default console UART.
pub const CONSOLE_UART: esp_idf_sys::uart_port_t = 0;

const RX_BUFFER_SIZE: i32 = 256;

fn ms_to_ticks(ms: u32) -> u32 {
    (ms as u64 * esp_idf_sys::configTICK_RATE_HZ as u64 / 1000) as u32
}

/// Install the UART driver for `port`. Call once before constructing the
/// stream or writer. Baud rate and pins are whatever the ROM console set
/// up; only the RX ring buffer is ours.
pub fn install_driver(port: esp_idf_sys::uart_port_t) {
    // SAFETY: plain driver install, no queue, default interrupt flags
    unsafe {
        esp_idf_sys::uart_driver_install(port, RX_BUFFER_SIZE, 0, 0, core::ptr::null_mut(), 0);
    }
}

/// Receive side of the console UART.
pub struct UartStream {
    port: esp_idf_sys::uart_port_t,
}

impl UartStream {
    pub fn new(port: esp_idf_sys::uart_port_t) -> Self {
        Self { port }
    }
}

impl ByteStream for UartStream {
    fn available(&mut self) -> bool {
        let mut pending: usize = 0;
        // SAFETY: driver installed in install_driver
        unsafe {
            esp_idf_sys::uart_get_buffered_data_len(self.port, &mut pending);
        }
        pending > 0
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.read_with_timeout(0)
    }

    fn read_idle(&mut self, idle_ms: u32) -> Option<u8> {
        self.read_with_timeout(ms_to_ticks(idle_ms))
    }
}

impl UartStream {
    fn read_with_timeout(&mut self, ticks: u32) -> Option<u8> {
        let mut byte = 0u8;
        // SAFETY: one-byte read into a local, driver installed
        let n = unsafe {
            esp_idf_sys::uart_read_bytes(self.port, &mut byte as *mut u8 as *mut c_void, 1, ticks)
        };
        (n == 1).then_some(byte)
    }
}

/// Transmit side of the console UART.
pub struct UartWriter {
    port: esp_idf_sys::uart_port_t,
}

impl UartWriter {
    pub fn new(port: esp_idf_sys::uart_port_t) -> Self {
        Self { port }
    }
}

impl core::fmt::Write for UartWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        // SAFETY: blocking write of a valid byte slice
        unsafe {
            esp_idf_sys::uart_write_bytes(self.port, s.as_ptr() as *const c_void, s.len());
        }
        Ok(())
    }
}
