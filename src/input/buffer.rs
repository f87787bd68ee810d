//! Input buffer for one read cycle

/// Maximum accumulated input length.
pub const INPUT_SIZE: usize = 96;

/// Transient byte buffer, filled during one blocking read and discarded
/// once parsed. Bytes past capacity are silently dropped.
pub struct InputBuffer {
    buf: [u8; INPUT_SIZE],
    len: usize,
}

impl InputBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; INPUT_SIZE],
            len: 0,
        }
    }

    /// Append a byte
    pub fn push(&mut self, c: u8) {
        if self.len < INPUT_SIZE {
            self.buf[self.len] = c;
            self.len += 1;
        }
    }

    /// Discard contents
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if at capacity
    pub fn is_full(&self) -> bool {
        self.len == INPUT_SIZE
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_view() {
        let mut buf = InputBuffer::new();
        assert!(buf.is_empty());

        for b in b"42" {
            buf.push(*b);
        }
        assert_eq!(buf.as_str(), "42");
        assert_eq!(buf.len(), 2);

        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_overflow_is_silent() {
        let mut buf = InputBuffer::new();
        for _ in 0..INPUT_SIZE + 10 {
            buf.push(b'a');
        }
        assert!(buf.is_full());
        assert_eq!(buf.len(), INPUT_SIZE);
    }
}
