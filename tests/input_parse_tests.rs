//! Value parser tests

use rust_serial_menu::input::{parse_date_time, parse_float, parse_int};

#[test]
fn test_parse_int_plain() {
    assert_eq!(parse_int("42"), 42);
    assert_eq!(parse_int("-15"), -15);
    assert_eq!(parse_int("+7"), 7);
}

#[test]
fn test_parse_int_defaults_to_zero() {
    assert_eq!(parse_int(""), 0);
    assert_eq!(parse_int("abc"), 0);
    assert_eq!(parse_int("-"), 0);
}

#[test]
fn test_parse_int_ignores_trailing() {
    assert_eq!(parse_int("123xyz"), 123);
    assert_eq!(parse_int("5 5"), 5);
}

#[test]
fn test_parse_float_plain() {
    assert!((parse_float("3.14") - 3.14).abs() < 1e-9);
    assert!((parse_float("-0.5") + 0.5).abs() < 1e-9);
    assert!((parse_float("10") - 10.0).abs() < 1e-9);
}

#[test]
fn test_parse_float_defaults_to_zero() {
    assert_eq!(parse_float(""), 0.0);
    assert_eq!(parse_float("x"), 0.0);
}

#[test]
fn test_parse_float_ignores_trailing() {
    assert!((parse_float("2.5abc") - 2.5).abs() < 1e-9);
}

#[test]
fn test_parse_date_time_space_delimited() {
    let dt = parse_date_time("2024 10 24 12 30 00");

    assert_eq!(dt.year, 2024);
    assert_eq!(dt.month, 10);
    assert_eq!(dt.day, 24);
    assert_eq!(dt.hour, 12);
    assert_eq!(dt.minute, 30);
    assert_eq!(dt.second, 0);
    assert_eq!(dt.to_unix(), 1_729_773_000);
}

#[test]
fn test_parse_date_time_any_single_delimiter() {
    let dt = parse_date_time("2024-10-24T12:30:00");

    assert_eq!((dt.year, dt.month, dt.day), (2024, 10, 24));
    assert_eq!((dt.hour, dt.minute, dt.second), (12, 30, 0));
}

#[test]
fn test_parse_date_time_malformed_is_total() {
    // Garbage produces zero fields, never a panic
    let dt = parse_date_time("not a date");
    assert_eq!(dt.year, 0);
    assert_eq!(dt.month, 0);

    let dt = parse_date_time("");
    assert_eq!(dt.second, 0);
}

#[test]
fn test_parse_date_time_partial_input() {
    // Only the first two fields typed; the rest stay zero
    let dt = parse_date_time("2024 10");
    assert_eq!((dt.year, dt.month), (2024, 10));
    assert_eq!((dt.day, dt.hour, dt.minute, dt.second), (0, 0, 0, 0));
}
