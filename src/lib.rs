//! # SerialMenu
//!
//! Interactive single-key menu for a microcontroller's serial console.
//!
//! ## Architecture
//!
//! A static table binds one keystroke to one action; the cooperative main
//! loop polls the serial stream and blinks a heartbeat LED between keys.
//! Actions are synchronous and run to completion: value entry blocks on
//! the stream's inactivity timeout, and nothing else progresses meanwhile.
//!
//! Hardware sits behind three narrow traits ([`serial::ByteStream`],
//! [`clock::WallClock`] + [`clock::Monotonic`], [`heartbeat::LedPin`]);
//! the `hal` module implements them for ESP-IDF, tests script them.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod clock;
pub mod config;
pub mod heartbeat;
pub mod input;
pub mod logging;
pub mod menu;
pub mod serial;

#[cfg(target_arch = "xtensa")]
pub mod hal;

pub use app::{AppState, Context};
pub use config::{MenuConfig, CONFIG};
pub use logging::{EventLog, LogLevel};
pub use menu::{Menu, MenuEntry, MenuError, MENU_ENTRIES};
pub use serial::ByteStream;
