//! Blocking line reader with inactivity timeout

use crate::input::InputBuffer;
use crate::serial::ByteStream;

/// Collect bytes until the stream stays silent for `idle_ms` (or the
/// buffer fills). The first `read_idle` also waits up to `idle_ms` for the
/// user to start typing, which replaces the fixed pre-read delay of
/// polled designs. Echo is hidden: nothing is written back while reading.
pub fn read_line(stream: &mut dyn ByteStream, idle_ms: u32, buf: &mut InputBuffer) {
    buf.clear();
    while !buf.is_full() {
        match stream.read_idle(idle_ms) {
            Some(b) => buf.push(b),
            None => break,
        }
    }
}
