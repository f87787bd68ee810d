//! Best-effort value parsers
//!
//! Manual terminal input gets no validation: whatever parses is the
//! value, anything else collapses to zero. This matches the
//! parse-what-you-can behavior of classic serial monitors.

use crate::clock::DateTime;

/// Parse an optional sign and leading digits; trailing junk is ignored,
/// nothing parseable yields 0. Saturates at the `i32` range.
pub fn parse_int(s: &str) -> i32 {
    let s = s.trim_start();
    let mut bytes = s.bytes().peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for b in bytes {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
        if value > i32::MAX as i64 + 1 {
            break;
        }
    }

    if negative {
        value = -value;
    }
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Parse a decimal number with optional sign and fractional part;
/// unparseable input yields 0.0.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let mut bytes = s.bytes().peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut value = 0.0f64;
    let mut in_fraction = false;
    let mut scale = 0.1f64;

    for b in bytes {
        match b {
            b'0'..=b'9' => {
                let d = (b - b'0') as f64;
                if in_fraction {
                    value += d * scale;
                    scale /= 10.0;
                } else {
                    value = value * 10.0 + d;
                }
            }
            b'.' if !in_fraction => in_fraction = true,
            _ => break,
        }
    }

    if negative {
        -value
    } else {
        value
    }
}

// Field widths of the `yyyy mm dd hh mm ss` pattern.
const DATE_TIME_WIDTHS: [usize; 6] = [4, 2, 2, 2, 2, 2];

/// Positional six-field scan of `yyyy mm dd hh mm ss`. Fields are
/// separated by exactly one byte of any kind (space, dash, colon, ...).
/// Fields that fail to scan stay 0; the result is not validated.
pub fn parse_date_time(s: &str) -> DateTime {
    let bytes = s.trim_start().as_bytes();
    let mut fields = [0u32; 6];
    let mut pos = 0;

    for (i, &width) in DATE_TIME_WIDTHS.iter().enumerate() {
        if i > 0 {
            // single delimiter byte between fields
            if pos >= bytes.len() {
                break;
            }
            pos += 1;
        }

        let mut taken = 0;
        while taken < width && pos < bytes.len() && bytes[pos].is_ascii_digit() {
            fields[i] = fields[i] * 10 + (bytes[pos] - b'0') as u32;
            pos += 1;
            taken += 1;
        }
    }

    DateTime {
        year: fields[0] as i32,
        month: fields[1],
        day: fields[2],
        hour: fields[3],
        minute: fields[4],
        second: fields[5],
    }
}
