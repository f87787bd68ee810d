//! Application state and the cooperative main loop
//!
//! One thread of control, two states: idle-polling and dispatching. An
//! invoked action runs to completion and blocks everything else,
//! including the heartbeat; that is the documented cost of the blocking
//! input design.

use core::fmt::Write;

use crate::clock::{Monotonic, WallClock};
use crate::config::MenuConfig;
use crate::heartbeat::{self, LedPin};
use crate::logging::EventLog;
use crate::menu::{actions, dispatch_once, Menu};
use crate::serial::ByteStream;

/// Mutable application state, owned by the main loop and lent to actions
/// through [`Context`]. Deliberately not a global.
pub struct AppState {
    pub heartbeat_enabled: bool,
}

impl AppState {
    pub const fn new() -> Self {
        Self { heartbeat_enabled: true }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything an action may touch, borrowed for one invocation.
pub struct Context<'a> {
    pub stream: &'a mut dyn ByteStream,
    pub out: &'a mut dyn Write,
    pub clock: &'a mut dyn WallClock,
    pub state: &'a mut AppState,
    pub config: &'a MenuConfig,
    pub menu: &'a Menu,
    pub log: &'a mut EventLog,
}

/// One pass of the main loop: service a pending key if there is one, then
/// the heartbeat. While a dispatched action blocks on input, neither runs
/// again until it returns.
pub fn tick(ctx: &mut Context<'_>, led: &mut dyn LedPin, ticks: &dyn Monotonic) {
    if ctx.stream.available() {
        dispatch_once(ctx);
    }

    if ctx.state.heartbeat_enabled {
        let hb = ctx.config.heartbeat;
        heartbeat::drive(led, ticks.now_ms(), hb.period_ms, hb.pulse_ms);
    }
}

/// Show the menu once, then poll forever.
pub fn run(ctx: &mut Context<'_>, led: &mut dyn LedPin, ticks: &dyn Monotonic) -> ! {
    actions::show_menu(ctx, "");
    loop {
        tick(ctx, led, ticks);
    }
}
