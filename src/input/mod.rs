//! Blocking value entry over the serial stream
//!
//! One read cycle per value: bytes accumulate into a fixed buffer until
//! the line goes quiet, then the text is parsed best-effort.

pub mod buffer;
pub mod parse;
pub mod reader;

pub use buffer::InputBuffer;
pub use parse::{parse_date_time, parse_float, parse_int};
pub use reader::read_line;
