//! Heartbeat timing tests

use rust_serial_menu::heartbeat::{drive, led_should_be_on, LedPin};

#[test]
fn test_pulse_window_property() {
    // High exactly while (now mod 1000) < 20, for any monotonic now
    for now in 0u64..5000 {
        assert_eq!(led_should_be_on(now, 1000, 20), now % 1000 < 20, "now={}", now);
    }
}

#[test]
fn test_large_now_values() {
    let now = u64::MAX - 3;
    assert_eq!(led_should_be_on(now, 1000, 20), now % 1000 < 20);
}

#[test]
fn test_zero_period_stays_off() {
    assert!(!led_should_be_on(123, 0, 20));
}

#[test]
fn test_drive_writes_pin_every_call() {
    let mut pin = RecordingPin::default();

    drive(&mut pin, 5, 1000, 20);
    drive(&mut pin, 500, 1000, 20);
    drive(&mut pin, 1010, 1000, 20);

    assert_eq!(pin.writes, vec![true, false, true]);
}

#[derive(Default)]
struct RecordingPin {
    writes: Vec<bool>,
}

impl LedPin for RecordingPin {
    fn set(&mut self, on: bool) {
        self.writes.push(on);
    }
}
