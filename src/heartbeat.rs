//! LED heartbeat
//!
//! Liveness blink for the main loop. The on/off decision is a pure
//! function of the monotonic clock, so the pin state is fully determined
//! by "now" and needs no bookkeeping between calls.

/// Binary digital output driven by the heartbeat.
pub trait LedPin {
    fn set(&mut self, on: bool);
}

/// True while the pulse window of the current period is open:
/// `(now mod period) < pulse_width`.
pub fn led_should_be_on(now_ms: u64, period_ms: u32, pulse_ms: u32) -> bool {
    if period_ms == 0 {
        return false;
    }
    now_ms % (period_ms as u64) < pulse_ms as u64
}

/// Write the pin for the current instant. Called once per idle pass of the
/// main loop; a blocked loop simply leaves the pin wherever it was.
pub fn drive(pin: &mut dyn LedPin, now_ms: u64, period_ms: u32, pulse_ms: u32) {
    pin.set(led_should_be_on(now_ms, period_ms, pulse_ms));
}
