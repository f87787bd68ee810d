//! Blocking line reader tests

use std::collections::VecDeque;

use rust_serial_menu::input::buffer::{InputBuffer, INPUT_SIZE};
use rust_serial_menu::input::read_line;
use rust_serial_menu::serial::ByteStream;

#[test]
fn test_reads_until_idle() {
    let mut stream = ScriptedStream::new(b"hello");
    let mut buf = InputBuffer::new();

    read_line(&mut stream, 1000, &mut buf);

    assert_eq!(buf.as_str(), "hello");
}

#[test]
fn test_empty_stream_yields_empty_buffer() {
    let mut stream = ScriptedStream::new(b"");
    let mut buf = InputBuffer::new();

    read_line(&mut stream, 1000, &mut buf);

    assert!(buf.is_empty());
}

#[test]
fn test_clears_previous_contents() {
    let mut buf = InputBuffer::new();
    for b in b"stale" {
        buf.push(*b);
    }

    let mut stream = ScriptedStream::new(b"new");
    read_line(&mut stream, 1000, &mut buf);

    assert_eq!(buf.as_str(), "new");
}

#[test]
fn test_stops_at_capacity() {
    let long = vec![b'a'; INPUT_SIZE + 50];
    let mut stream = ScriptedStream::new(&long);
    let mut buf = InputBuffer::new();

    read_line(&mut stream, 1000, &mut buf);

    assert!(buf.is_full());
    assert_eq!(buf.len(), INPUT_SIZE);
    // untouched leftovers stay on the stream
    assert!(stream.available());
}

#[test]
fn test_timeout_passed_through() {
    let mut stream = ScriptedStream::new(b"ab");
    let mut buf = InputBuffer::new();

    read_line(&mut stream, 250, &mut buf);

    // two bytes plus the final timed-out call
    assert_eq!(stream.idle_calls, vec![250, 250, 250]);
}

// --- Fake ---

struct ScriptedStream {
    data: VecDeque<u8>,
    idle_calls: Vec<u32>,
}

impl ScriptedStream {
    fn new(data: &[u8]) -> Self {
        Self { data: data.iter().copied().collect(), idle_calls: Vec::new() }
    }
}

impl ByteStream for ScriptedStream {
    fn available(&mut self) -> bool {
        !self.data.is_empty()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.data.pop_front()
    }

    fn read_idle(&mut self, idle_ms: u32) -> Option<u8> {
        self.idle_calls.push(idle_ms);
        self.data.pop_front()
    }
}
