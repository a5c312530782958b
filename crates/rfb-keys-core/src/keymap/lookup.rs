//! Hardware key → keysym lookup, built once from a static table.

use std::collections::HashMap;

use super::keysym::Keysym;
use super::windows_vk::{vk_keysym_table, VkKeysym};
use crate::domain::key::HardwareKey;

/// Immutable map from a physical key to the keysym it always reports,
/// regardless of layout or modifier state.
///
/// Built once at startup and shared read-only (typically behind an `Arc`)
/// by every translator.
#[derive(Debug, Clone)]
pub struct KeysymLookupTable {
    map: HashMap<HardwareKey, Keysym>,
}

impl KeysymLookupTable {
    /// Builds the table from `(vk, extended, keysym)` rows.
    ///
    /// When several rows share an identity the first one wins; later
    /// duplicates are ignored.  Rows with a zero keysym are skipped since zero
    /// is never a valid keysym.
    pub fn build<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a VkKeysym>,
    {
        let mut map = HashMap::new();
        for r in rows {
            if r.keysym == 0 {
                continue;
            }
            map.entry(HardwareKey::new(r.vk, r.extended))
                .or_insert(r.keysym);
        }
        Self { map }
    }

    /// Builds the table from the built-in Windows VK table.
    pub fn standard() -> Self {
        Self::build(vk_keysym_table())
    }

    /// Looks up the keysym for `key`.
    ///
    /// Tries the exact identity first, then the same code with the extended
    /// flag flipped.  Returns `None` if neither is present.
    pub fn lookup(&self, key: HardwareKey) -> Option<Keysym> {
        self.map
            .get(&key)
            .or_else(|| self.map.get(&key.toggled()))
            .copied()
    }

    /// Number of distinct identities in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeysymLookupTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::keysym::*;
    use crate::keymap::windows_vk::*;

    fn row(vk: u8, extended: bool, keysym: Keysym) -> VkKeysym {
        VkKeysym {
            vk,
            extended,
            keysym,
        }
    }

    #[test]
    fn test_build_keeps_first_of_duplicate_identities() {
        // Arrange
        let rows = [row(0x0C, false, 0x1111), row(0x0C, false, 0x2222)];

        // Act
        let table = KeysymLookupTable::build(rows.iter());

        // Assert
        assert_eq!(table.lookup(HardwareKey::new(0x0C, false)), Some(0x1111));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_build_treats_extended_variants_as_distinct() {
        let rows = [row(0x0D, false, XK_RETURN), row(0x0D, true, XK_KP_ENTER)];

        let table = KeysymLookupTable::build(rows.iter());

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(HardwareKey::new(0x0D, true)), Some(XK_KP_ENTER));
    }

    #[test]
    fn test_lookup_falls_back_to_toggled_extended_flag() {
        // Only the non-extended Escape exists; an extended report still resolves.
        let rows = [row(VK_ESCAPE, false, XK_ESCAPE)];
        let table = KeysymLookupTable::build(rows.iter());

        assert_eq!(table.lookup(HardwareKey::new(VK_ESCAPE, true)), Some(XK_ESCAPE));
    }

    #[test]
    fn test_lookup_miss_returns_none() {
        let table = KeysymLookupTable::standard();
        assert_eq!(table.lookup(HardwareKey::new(0x41, false)), None);
        assert_eq!(table.lookup(HardwareKey::new(VK_SPACE, false)), None);
    }

    #[test]
    fn test_zero_keysym_rows_are_ignored() {
        let rows = [row(0x07, false, 0)];
        let table = KeysymLookupTable::build(rows.iter());
        assert!(table.is_empty());
    }

    /// Pairs of (identity, expected keysym) for the standard table.
    const STANDARD_MAPPINGS: &[(u8, bool, Keysym)] = &[
        (VK_BACK, false, XK_BACKSPACE),
        (VK_TAB, false, XK_TAB),
        (VK_RETURN, false, XK_RETURN),
        (VK_RETURN, true, XK_KP_ENTER),
        (VK_CONTROL, false, XK_CONTROL_L),
        (VK_CONTROL, true, XK_CONTROL_R),
        (VK_MENU, false, XK_ALT_L),
        (VK_MENU, true, XK_ALT_R),
        (VK_SHIFT, false, XK_SHIFT_L),
        (VK_LSHIFT, false, XK_SHIFT_L),
        (VK_RSHIFT, false, XK_SHIFT_R),
        (VK_HOME, true, XK_HOME),
        (VK_HOME, false, XK_KP_HOME),
        (VK_DELETE, true, XK_DELETE),
        (VK_DELETE, false, XK_KP_DELETE),
        (VK_NUMPAD7, false, XK_KP_7),
        (VK_ADD, false, XK_KP_ADD),
        (VK_DIVIDE, true, XK_KP_DIVIDE),
        (VK_NUMLOCK, false, XK_NUM_LOCK),
        (VK_CAPITAL, false, XK_CAPS_LOCK),
        (VK_LWIN, false, XK_SUPER_L),
        (VK_APPS, false, XK_MENU),
        (VK_F1, false, XK_F1),
    ];

    #[test]
    fn test_standard_table_maps_well_known_keys() {
        let table = KeysymLookupTable::standard();
        for &(vk, extended, expected) in STANDARD_MAPPINGS {
            assert_eq!(
                table.lookup(HardwareKey::new(vk, extended)),
                Some(expected),
                "lookup(0x{vk:02X}, extended={extended}) should be 0x{expected:X}"
            );
        }
    }

    #[test]
    fn test_standard_table_resolves_clear_duplicate_to_first_row() {
        let table = KeysymLookupTable::standard();
        assert_eq!(table.lookup(HardwareKey::new(VK_CLEAR, false)), Some(XK_CLEAR));
    }

    #[test]
    fn test_divide_without_extended_flag_uses_fallback() {
        let table = KeysymLookupTable::standard();
        assert_eq!(table.lookup(HardwareKey::new(VK_DIVIDE, false)), Some(XK_KP_DIVIDE));
    }
}
