//! Time sources: internal RTC for wall time, esp_timer for ticks.

use esp_idf_svc::sys as esp_idf_sys;

use crate::clock::{Monotonic, WallClock};

/// Wall clock over the ESP32 internal RTC.
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now_unix(&self) -> i64 {
        let mut tv = esp_idf_sys::timeval { tv_sec: 0, tv_usec: 0 };
        // SAFETY: writes a local timeval
        unsafe {
            esp_idf_sys::gettimeofday(&mut tv, core::ptr::null_mut());
        }
        tv.tv_sec as i64
    }

    fn set_unix(&mut self, secs: i64) {
        let tv = esp_idf_sys::timeval { tv_sec: secs as _, tv_usec: 0 };
        // SAFETY: reads a local timeval
        unsafe {
            esp_idf_sys::settimeofday(&tv, core::ptr::null());
        }
    }
}

/// Millisecond ticks since boot.
pub struct EspTicks;

impl Monotonic for EspTicks {
    fn now_ms(&self) -> u64 {
        // SAFETY: esp_timer_get_time is always safe to call
        (unsafe { esp_idf_sys::esp_timer_get_time() } / 1000) as u64
    }
}
