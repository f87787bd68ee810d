//! In-memory diagnostic event ring
//!
//! Dispatches and entered values are recorded here instead of being
//! interleaved with menu output on the wire; the `[L]` menu entry drains
//! the ring on demand. Single producer, single consumer, both on the one
//! cooperative thread, so plain indices suffice. Push never blocks: when
//! the ring is full the event is dropped and counted.

use core::fmt::Write;

/// Maximum message length.
pub const MAX_MSG_LEN: usize = 80;

/// Event ring capacity (number of entries).
pub const EVENT_BUFFER_SIZE: usize = 16;

/// Event severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    /// Convert to string for output.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// A single recorded event.
#[derive(Clone, Copy)]
pub struct Event {
    pub level: LogLevel,
    len: u8,
    msg: [u8; MAX_MSG_LEN],
}

impl Event {
    const EMPTY: Event = Event { level: LogLevel::Info, len: 0, msg: [0; MAX_MSG_LEN] };

    /// Message text (lossy on truncated UTF-8).
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.msg[..self.len as usize]).unwrap_or("")
    }
}

/// Fixed ring of recent events with a drop counter.
pub struct EventLog<const N: usize = EVENT_BUFFER_SIZE> {
    entries: [Event; N],
    write_idx: usize,
    read_idx: usize,
    count: usize,
    dropped: u32,
}

impl<const N: usize> EventLog<N> {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            entries: [Event::EMPTY; N],
            write_idx: 0,
            read_idx: 0,
            count: 0,
            dropped: 0,
        }
    }

    /// Record an event. Returns `false` (and counts a drop) when full.
    pub fn push(&mut self, level: LogLevel, msg: &[u8]) -> bool {
        if self.count == N {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }

        let entry = &mut self.entries[self.write_idx];
        entry.level = level;
        entry.len = msg.len().min(MAX_MSG_LEN) as u8;
        entry.msg[..entry.len as usize].copy_from_slice(&msg[..entry.len as usize]);

        self.write_idx = (self.write_idx + 1) % N;
        self.count += 1;
        true
    }

    /// Take the oldest event, `None` when empty.
    pub fn drain(&mut self) -> Option<Event> {
        if self.count == 0 {
            return None;
        }
        let entry = self.entries[self.read_idx];
        self.read_idx = (self.read_idx + 1) % N;
        self.count -= 1;
        Some(entry)
    }

    /// Number of events waiting to be drained.
    pub fn pending(&self) -> usize {
        self.count
    }

    /// Count of events lost to a full ring.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Reset the drop counter (after reporting it).
    pub fn reset_dropped(&mut self) {
        self.dropped = 0;
    }
}

impl<const N: usize> Default for EventLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a message into a buffer.
///
/// Returns the number of bytes written; output is truncated at the buffer
/// end rather than failing.
pub fn format_to_buffer(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> usize {
    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let to_write = bytes.len().min(remaining);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };
    let _ = core::fmt::write(&mut writer, args);
    writer.pos
}

/// Record a formatted event.
///
/// # Example
///
/// ```ignore
/// log_event!(log, LogLevel::Info, "key '{}' dispatched", key as char);
/// ```
#[macro_export]
macro_rules! log_event {
    ($log:expr, $level:expr, $($arg:tt)*) => {{
        let mut buf = [0u8; $crate::logging::MAX_MSG_LEN];
        let len = $crate::logging::format_to_buffer(&mut buf, format_args!($($arg)*));
        $log.push($level, &buf[..len]);
    }};
}
