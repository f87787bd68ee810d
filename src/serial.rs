//! Serial byte stream collaborator interface
//!
//! The menu only needs three things from the wire: a non-destructive
//! "anything pending?" check, a non-blocking single-byte read, and a
//! blocking read that gives up after a period of line silence. Hardware
//! backends live in `hal`, tests provide scripted fakes.

/// Byte-oriented input side of the serial port.
pub trait ByteStream {
    /// True when at least one byte is buffered and `read_byte` would succeed.
    fn available(&mut self) -> bool;

    /// Take one buffered byte, `None` when nothing is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Block until a byte arrives or `idle_ms` elapses with no traffic.
    ///
    /// This is the inactivity timeout that terminates value entry: a read
    /// cycle keeps calling this until it returns `None`.
    fn read_idle(&mut self, idle_ms: u32) -> Option<u8>;
}

/// Erase the current terminal line: carriage return, 80 blanks, carriage
/// return to park the cursor back at column 0.
pub const CLEAR_LINE: &str =
    "\r                                                                                \r";

#[cfg(test)]
mod tests {
    use super::CLEAR_LINE;

    #[test]
    fn clear_line_is_cr_80_blanks_cr() {
        let bytes = CLEAR_LINE.as_bytes();
        assert_eq!(bytes.len(), 82);
        assert_eq!(bytes[0], b'\r');
        assert_eq!(bytes[81], b'\r');
        assert!(bytes[1..81].iter().all(|&b| b == b' '));
    }
}
