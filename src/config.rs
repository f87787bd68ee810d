//! Compile-time configuration
//!
//! All tunables in one place. Values follow the classic serial-monitor
//! defaults: 1 s inactivity timeout (tripled while a date/time is typed,
//! six numbers take a while) and a short 20 ms blink on a 1 s period.

/// Heartbeat timing.
#[derive(Debug, Clone, Copy)]
pub struct HeartbeatConfig {
    pub period_ms: u32,
    pub pulse_ms: u32,
}

/// Menu runtime configuration.
#[derive(Debug, Clone, Copy)]
pub struct MenuConfig {
    /// Maximum silent gap between received bytes before a value read ends.
    pub idle_timeout_ms: u32,
    /// Timeout multiplier applied while reading a date/time line.
    pub date_time_timeout_factor: u32,
    pub heartbeat: HeartbeatConfig,
}

impl MenuConfig {
    pub const fn new() -> Self {
        Self {
            idle_timeout_ms: 1000,
            date_time_timeout_factor: 3,
            heartbeat: HeartbeatConfig { period_ms: 1000, pulse_ms: 20 },
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Firmware-wide defaults.
pub const CONFIG: MenuConfig = MenuConfig::new();
