//! Menu error types

/// Menu construction error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    /// E01: Two entries share a trigger key
    DuplicateKey(u8),
}

impl MenuError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateKey(_) => "E01",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::DuplicateKey(_) => "duplicate menu key",
        }
    }
}

impl core::fmt::Display for MenuError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateKey(key) => {
                write!(f, "{}: {} '{}'", self.code(), self.message(), *key as char)
            }
        }
    }
}
