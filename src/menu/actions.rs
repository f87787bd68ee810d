//! Menu actions
//!
//! The table below is the whole user interface: radio presets, value
//! entry, date/time, heartbeat toggle, diagnostics. Value-entry actions
//! block until the stream's inactivity timeout fires; typed characters
//! are not echoed, so the value only shows up once the read ends.


use crate::app::Context;
use crate::clock::DateTime;
use crate::input::{parse_date_time, parse_float, parse_int, read_line, InputBuffer};
use crate::log_event;
use crate::logging::LogLevel;
use crate::menu::table::MenuEntry;
use crate::menu::VERSION;

/// The menu. Declaration order is display order and tie-break order.
pub static MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        key: b'0',
        label: "[0] Klassik Radio",
        arg: "http://stream.klassikradio.de/live/mp3-128/stream.klassikradio.de",
        action: play_radio,
    },
    MenuEntry {
        key: b'1',
        label: "[1] SRF1 AG-SO",
        arg: "http://stream.srg-ssr.ch/m/regi_ag_so/mp3_128",
        action: play_radio,
    },
    MenuEntry {
        key: b'2',
        label: "[2] SRF2",
        arg: "http://stream.srg-ssr.ch/m/drs2/mp3_128",
        action: play_radio,
    },
    MenuEntry {
        key: b'3',
        label: "[3] SRF3",
        arg: "http://stream.srg-ssr.ch/m/drs3/mp3_128",
        action: play_radio,
    },
    MenuEntry { key: b'h', label: "[h] Say Hello", arg: "Guten Tag", action: say_hello },
    MenuEntry {
        key: b'd',
        label: "[d] Set date and time as: yyyy mm dd hh mm ss",
        arg: "",
        action: set_date_time,
    },
    MenuEntry { key: b'D', label: "[D] Show date and time", arg: "", action: show_date_time },
    MenuEntry { key: b'i', label: "[i] Enter an integer", arg: "", action: enter_integer },
    MenuEntry { key: b'f', label: "[f] Enter a float", arg: "", action: enter_float },
    MenuEntry { key: b's', label: "[s] Enter a string", arg: "", action: enter_string },
    MenuEntry { key: b't', label: "[t] Toggle heartbeat", arg: "", action: toggle_heartbeat },
    MenuEntry { key: b'L', label: "[L] Show event log", arg: "", action: show_event_log },
    MenuEntry { key: b'S', label: "[S] Show menu", arg: "", action: show_menu },
];

/// Playback stub: real streaming is out of scope, print the station URL.
fn play_radio(ctx: &mut Context<'_>, url: &str) {
    let _ = write!(ctx.out, "Playing: {}", url);
}

/// Greet the user with the entry's fixed text.
fn say_hello(ctx: &mut Context<'_>, txt: &str) {
    let _ = write!(ctx.out, "{}", txt);
}

/// Ask an integer from the user.
fn enter_integer(ctx: &mut Context<'_>, _arg: &str) {
    let mut buf = InputBuffer::new();
    read_line(ctx.stream, ctx.config.idle_timeout_ms, &mut buf);
    let value = parse_int(buf.as_str());

    let _ = write!(ctx.out, "{} was entered ", value);
    log_event!(ctx.log, LogLevel::Info, "integer entered: {}", value);
}

/// Ask a float from the user.
fn enter_float(ctx: &mut Context<'_>, _arg: &str) {
    let mut buf = InputBuffer::new();
    read_line(ctx.stream, ctx.config.idle_timeout_ms, &mut buf);
    let value = parse_float(buf.as_str());

    let _ = write!(ctx.out, "{} was entered ", value);
    log_event!(ctx.log, LogLevel::Info, "float entered: {}", value);
}

/// Ask a string from the user, echoed back verbatim.
fn enter_string(ctx: &mut Context<'_>, _arg: &str) {
    let mut buf = InputBuffer::new();
    read_line(ctx.stream, ctx.config.idle_timeout_ms, &mut buf);

    let _ = write!(ctx.out, "{}", buf.as_str());
    log_event!(ctx.log, LogLevel::Info, "string entered ({} bytes)", buf.len());
}

/// Read `yyyy mm dd hh mm ss` and set the wall clock. The timeout is
/// extended while typing: six numbers take longer than one.
fn set_date_time(ctx: &mut Context<'_>, arg: &str) {
    let idle_ms = ctx.config.idle_timeout_ms * ctx.config.date_time_timeout_factor;

    let mut buf = InputBuffer::new();
    read_line(ctx.stream, idle_ms, &mut buf);

    let dt = parse_date_time(buf.as_str());
    ctx.clock.set_unix(dt.to_unix());
    log_event!(ctx.log, LogLevel::Info, "clock set to {}", dt);

    show_date_time(ctx, arg);
}

/// Display the wall clock.
fn show_date_time(ctx: &mut Context<'_>, _arg: &str) {
    let dt = DateTime::from_unix(ctx.clock.now_unix());
    let _ = write!(ctx.out, "{}", dt);
}

/// Turn the flashing LED on or off.
fn toggle_heartbeat(ctx: &mut Context<'_>, _arg: &str) {
    ctx.state.heartbeat_enabled = !ctx.state.heartbeat_enabled;
    if ctx.state.heartbeat_enabled {
        let _ = write!(ctx.out, "Heartbeat on ");
    } else {
        let _ = write!(ctx.out, "Heartbeat off ");
    }
}

/// Drain the diagnostic ring to the terminal.
fn show_event_log(ctx: &mut Context<'_>, _arg: &str) {
    if ctx.log.pending() == 0 {
        let _ = write!(ctx.out, "log empty ");
        return;
    }

    let _ = writeln!(ctx.out);
    while let Some(event) = ctx.log.drain() {
        let _ = writeln!(ctx.out, "[{:<5}] {}", event.level.as_str(), event.as_str());
    }

    let dropped = ctx.log.dropped();
    if dropped > 0 {
        let _ = writeln!(ctx.out, "({} dropped)", dropped);
        ctx.log.reset_dropped();
    }
}

/// Display menu on monitor. Public: the main loop shows it once at startup.
pub fn show_menu(ctx: &mut Context<'_>, _arg: &str) {
    let _ = write!(
        ctx.out,
        "\n\
         ---------------\n \
         CLI Menu Demo \n\
         ---------------\n\
         {}\n",
        VERSION
    );

    for entry in ctx.menu.entries() {
        let _ = writeln!(ctx.out, "{}", entry.label);
    }

    let _ = write!(ctx.out, "\nPress a key: ");
}
