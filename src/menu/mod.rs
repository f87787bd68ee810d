//! Single-key menu: table, dispatcher, actions
//!
//! A fixed table maps one keystroke to one action. Actions run to
//! completion on the caller's thread; the ones that take a value block on
//! the serial stream until its inactivity timeout ends the entry.

pub mod actions;
pub mod dispatch;
pub mod error;
pub mod table;

pub use actions::{show_menu, MENU_ENTRIES};
pub use dispatch::dispatch_once;
pub use error::MenuError;
pub use table::{Action, Menu, MenuEntry};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");
