//! Menu entry descriptors and the validated table

use crate::app::Context;
use crate::menu::MenuError;

/// Menu action. Receives the shared context plus the entry's fixed
/// argument string. Actions report nothing: bad input resolves to a
/// default inside the action itself.
pub type Action = fn(&mut Context<'_>, &str);

/// One key binding: trigger key, display label, fixed argument, action.
#[derive(Debug)]
pub struct MenuEntry {
    pub key: u8,
    pub label: &'static str,
    pub arg: &'static str,
    pub action: Action,
}

/// Validated, immutable menu table.
///
/// Lookup is a linear scan in declaration order, so the first entry with a
/// given key would always win; construction rejects duplicates outright to
/// keep that case impossible.
#[derive(Debug)]
pub struct Menu {
    entries: &'static [MenuEntry],
}

impl Menu {
    /// Wrap a static entry table, rejecting duplicate keys.
    pub fn new(entries: &'static [MenuEntry]) -> Result<Self, MenuError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.key == entry.key) {
                return Err(MenuError::DuplicateKey(entry.key));
            }
        }
        Ok(Self { entries })
    }

    /// First entry bound to `key`, if any.
    pub fn find(&self, key: u8) -> Option<&'static MenuEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// All entries in declaration order (for display).
    pub fn entries(&self) -> &'static [MenuEntry] {
        self.entries
    }
}
