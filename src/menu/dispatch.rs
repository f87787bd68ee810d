//! Key dispatcher


use crate::app::Context;
use crate::log_event;
use crate::logging::LogLevel;
use crate::serial::CLEAR_LINE;

/// Service one pending keystroke: read the key, erase the prompt line,
/// invoke the first matching entry's action with its argument. Keys bound
/// to no entry are ignored without output (they still leave a debug event
/// in the ring).
///
/// Call only when `ctx.stream.available()`; with nothing pending this
/// returns without touching the display.
pub fn dispatch_once(ctx: &mut Context<'_>) {
    let Some(key) = ctx.stream.read_byte() else {
        return;
    };

    let _ = ctx.out.write_str(CLEAR_LINE);

    match ctx.menu.find(key) {
        Some(entry) => {
            log_event!(ctx.log, LogLevel::Info, "key '{}': {}", key as char, entry.label);
            let action = entry.action;
            action(ctx, entry.arg);
        }
        None => {
            log_event!(ctx.log, LogLevel::Debug, "ignored key 0x{:02x}", key);
        }
    }
}
