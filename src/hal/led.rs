//! GPIO heartbeat LED.

use esp_idf_svc::sys as esp_idf_sys;

use crate::heartbeat::LedPin;

/// Builtin LED on most ESP32 dev boards.
pub const LED_BUILTIN: i32 = 2;

/// Push-pull output pin for the heartbeat.
pub struct GpioLed {
    pin: i32,
}

impl GpioLed {
    pub fn new(pin: i32) -> Self {
        // SAFETY: configuring a plain output pin
        unsafe {
            esp_idf_sys::gpio_set_direction(pin, esp_idf_sys::gpio_mode_t_GPIO_MODE_OUTPUT);
        }
        Self { pin }
    }
}

impl LedPin for GpioLed {
    fn set(&mut self, on: bool) {
        // SAFETY: pin configured as output in new
        unsafe {
            esp_idf_sys::gpio_set_level(self.pin, on as u32);
        }
    }
}
