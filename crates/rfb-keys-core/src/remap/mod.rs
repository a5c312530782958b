//! Layout-compatibility remapping of generated characters.
//!
//! Some peers interpret keysyms against a keyboard layout that differs from
//! the viewer's.  A remap table corrects for this: each entry says which
//! character to send instead of the one the host generated, and whether the
//! peer must see Shift held while it arrives.
//!
//! The tables themselves are data ([`tables`]); this module only provides the
//! generic lookup over them.  Characters with no entry pass through unchanged.

pub mod tables;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One remap rule: `input` is sent as `output`, optionally under Shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemapEntry {
    pub input: u8,
    pub needs_shift: bool,
    pub output: u8,
}

impl RemapEntry {
    /// An entry sent with a synthetic Shift held around it.
    pub const fn shifted(input: u8, output: u8) -> Self {
        Self {
            input,
            needs_shift: true,
            output,
        }
    }

    /// An entry sent without Shift.
    pub const fn plain(input: u8, output: u8) -> Self {
        Self {
            input,
            needs_shift: false,
            output,
        }
    }
}

/// Error returned when a configured remap mode is not a known variant.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown remap mode {0} (expected 0 or 1)")]
pub struct InvalidRemapMode(pub u8);

/// Which remap table variant is active, fixed per translator.
///
/// Serialized as its numeric value so configuration files read
/// `remap_mode = 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RemapMode {
    #[default]
    Mode0 = 0,
    Mode1 = 1,
}

impl TryFrom<u8> for RemapMode {
    type Error = InvalidRemapMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RemapMode::Mode0),
            1 => Ok(RemapMode::Mode1),
            other => Err(InvalidRemapMode(other)),
        }
    }
}

impl From<RemapMode> for u8 {
    fn from(mode: RemapMode) -> Self {
        mode as u8
    }
}

/// Lookup over a set of [`RemapEntry`] rules, indexed by input character.
///
/// Lookups are a single array index: every generated character goes through
/// this table.
#[derive(Debug, Clone)]
pub struct CharacterRemapTable {
    slots: [Option<RemapEntry>; 256],
}

impl CharacterRemapTable {
    /// Builds a table from arbitrary entries.  The first entry for a given
    /// input character wins.
    pub fn from_entries(entries: &[RemapEntry]) -> Self {
        let mut slots = [None; 256];
        for entry in entries {
            let slot = &mut slots[entry.input as usize];
            if slot.is_none() {
                *slot = Some(*entry);
            }
        }
        Self { slots }
    }

    /// Builds the built-in table for `mode`.
    pub fn for_mode(mode: RemapMode) -> Self {
        match mode {
            RemapMode::Mode0 => Self::from_entries(tables::MODE0),
            RemapMode::Mode1 => Self::from_entries(tables::MODE1),
        }
    }

    /// A table with no entries: every character passes through.
    pub fn identity() -> Self {
        Self { slots: [None; 256] }
    }

    /// Returns the rule for `ch`, or `None` if it passes through unchanged.
    pub fn lookup(&self, ch: u8) -> Option<RemapEntry> {
        self.slots[ch as usize]
    }

    /// Number of characters with a rule.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Default for CharacterRemapTable {
    fn default() -> Self {
        Self::for_mode(RemapMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_u8() {
        for mode in [RemapMode::Mode0, RemapMode::Mode1] {
            assert_eq!(RemapMode::try_from(u8::from(mode)), Ok(mode));
        }
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert_eq!(RemapMode::try_from(2), Err(InvalidRemapMode(2)));
        assert_eq!(
            InvalidRemapMode(7).to_string(),
            "unknown remap mode 7 (expected 0 or 1)"
        );
    }

    #[test]
    fn test_from_entries_first_entry_wins() {
        let table = CharacterRemapTable::from_entries(&[
            RemapEntry::plain(b'x', b'y'),
            RemapEntry::shifted(b'x', b'z'),
        ]);
        assert_eq!(table.lookup(b'x'), Some(RemapEntry::plain(b'x', b'y')));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_characters_outside_domain_pass_through() {
        let table = CharacterRemapTable::from_entries(&[RemapEntry::plain(b'@', b'[')]);
        assert_eq!(table.lookup(b'a'), None);
        assert_eq!(table.lookup(0xE9), None);
    }

    #[test]
    fn test_identity_table_is_empty() {
        let table = CharacterRemapTable::identity();
        assert!(table.is_empty());
        assert!((0u8..=255).all(|c| table.lookup(c).is_none()));
    }

    #[test]
    fn test_mode1_at_sign_maps_to_bracket_without_shift() {
        let table = CharacterRemapTable::for_mode(RemapMode::Mode1);
        assert_eq!(table.lookup(64), Some(RemapEntry::plain(64, 91)));
    }

    #[test]
    fn test_mode0_lowercase_letters_pass_through() {
        let table = CharacterRemapTable::for_mode(RemapMode::Mode0);
        assert!((b'a'..=b'z').all(|c| table.lookup(c).is_none()));
    }

    #[test]
    fn test_default_table_is_mode0() {
        let default = CharacterRemapTable::default();
        let mode0 = CharacterRemapTable::for_mode(RemapMode::Mode0);
        assert!((0u8..=255).all(|c| default.lookup(c) == mode0.lookup(c)));
    }
}
