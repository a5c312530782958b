//! Windows Virtual Key (VK) codes and the static VK → keysym hardware table.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//! Windows VK codes range from 0x00 to 0xFF.
//!
//! # What is a Windows Virtual Key (VK) code?
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code",
//! named `VK_*` in `<winuser.h>` (e.g., `VK_RETURN = 0x0D`).  Keyboard messages
//! also carry an *extended* flag (bit 24 of `lParam`) that tells apart keys
//! sharing a VK code: the Enter key on the main block and the keypad Enter
//! both report `VK_RETURN`, but only the keypad one is extended.  The pair
//! `(vk, extended)` is therefore what identifies a physical key.
//!
//! # How this table works
//!
//! [`VK_KEYSYM_TABLE`] lists `(vk, extended, keysym)` triples for every key
//! that does not produce a character: cursor keys, function keys, modifiers,
//! and the keypad.  It is consumed by
//! [`KeysymLookupTable::build`](super::lookup::KeysymLookupTable::build),
//! which keeps the *first* entry for any duplicated identity, so the order of
//! rows here is significant.
//!
//! Printable keys are deliberately absent.  Their keysym depends on the active
//! layout and modifier state and is resolved by the host character translator.

use super::keysym::*;

// ── VK codes referenced by the translator and the table ──────────────────────
pub const VK_BACK: u8 = 0x08;
pub const VK_TAB: u8 = 0x09;
pub const VK_CLEAR: u8 = 0x0C;
pub const VK_RETURN: u8 = 0x0D;
pub const VK_SHIFT: u8 = 0x10;
pub const VK_CONTROL: u8 = 0x11;
pub const VK_MENU: u8 = 0x12;
pub const VK_PAUSE: u8 = 0x13;
pub const VK_CAPITAL: u8 = 0x14;
pub const VK_ESCAPE: u8 = 0x1B;
pub const VK_SPACE: u8 = 0x20;
pub const VK_PRIOR: u8 = 0x21;
pub const VK_NEXT: u8 = 0x22;
pub const VK_END: u8 = 0x23;
pub const VK_HOME: u8 = 0x24;
pub const VK_LEFT: u8 = 0x25;
pub const VK_UP: u8 = 0x26;
pub const VK_RIGHT: u8 = 0x27;
pub const VK_DOWN: u8 = 0x28;
pub const VK_SELECT: u8 = 0x29;
pub const VK_EXECUTE: u8 = 0x2B;
pub const VK_SNAPSHOT: u8 = 0x2C;
pub const VK_INSERT: u8 = 0x2D;
pub const VK_DELETE: u8 = 0x2E;
pub const VK_HELP: u8 = 0x2F;
pub const VK_LWIN: u8 = 0x5B;
pub const VK_RWIN: u8 = 0x5C;
pub const VK_APPS: u8 = 0x5D;
pub const VK_NUMPAD0: u8 = 0x60;
pub const VK_NUMPAD1: u8 = 0x61;
pub const VK_NUMPAD2: u8 = 0x62;
pub const VK_NUMPAD3: u8 = 0x63;
pub const VK_NUMPAD4: u8 = 0x64;
pub const VK_NUMPAD5: u8 = 0x65;
pub const VK_NUMPAD6: u8 = 0x66;
pub const VK_NUMPAD7: u8 = 0x67;
pub const VK_NUMPAD8: u8 = 0x68;
pub const VK_NUMPAD9: u8 = 0x69;
pub const VK_MULTIPLY: u8 = 0x6A;
pub const VK_ADD: u8 = 0x6B;
pub const VK_SEPARATOR: u8 = 0x6C;
pub const VK_SUBTRACT: u8 = 0x6D;
pub const VK_DECIMAL: u8 = 0x6E;
pub const VK_DIVIDE: u8 = 0x6F;
pub const VK_F1: u8 = 0x70;
pub const VK_NUMLOCK: u8 = 0x90;
pub const VK_SCROLL: u8 = 0x91;
pub const VK_LSHIFT: u8 = 0xA0;
pub const VK_RSHIFT: u8 = 0xA1;
pub const VK_LCONTROL: u8 = 0xA2;
pub const VK_RCONTROL: u8 = 0xA3;
pub const VK_LMENU: u8 = 0xA4;
pub const VK_RMENU: u8 = 0xA5;

/// One row of the hardware table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VkKeysym {
    /// Windows virtual-key code.
    pub vk: u8,
    /// Whether the key event carries the extended flag.
    pub extended: bool,
    /// RFB keysym reported for this key.
    pub keysym: Keysym,
}

const fn row(vk: u8, extended: bool, keysym: Keysym) -> VkKeysym {
    VkKeysym {
        vk,
        extended,
        keysym,
    }
}

/// Builds the F1..F24 rows; VK_F1..VK_F24 and XK_F1..XK_F24 are both contiguous.
const fn function_rows() -> [VkKeysym; 24] {
    let mut rows = [row(0, false, 0); 24];
    let mut i = 0;
    while i < 24 {
        rows[i] = row(VK_F1 + i as u8, false, XK_F1 + i as Keysym);
        i += 1;
    }
    rows
}

const FUNCTION_ROWS: [VkKeysym; 24] = function_rows();

/// Non-character keys, in priority order.
const BASE_ROWS: &[VkKeysym] = &[
    row(VK_BACK, false, XK_BACKSPACE),
    row(VK_TAB, false, XK_TAB),
    row(VK_CLEAR, false, XK_CLEAR),
    row(VK_RETURN, false, XK_RETURN),
    // Left/right distinction: the generic VK carries the extended flag for the
    // right-hand key, the L/R-specific VKs come from low-level hooks.
    row(VK_LSHIFT, false, XK_SHIFT_L),
    row(VK_RSHIFT, false, XK_SHIFT_R),
    row(VK_SHIFT, false, XK_SHIFT_L),
    row(VK_SHIFT, true, XK_SHIFT_R),
    row(VK_LCONTROL, false, XK_CONTROL_L),
    row(VK_RCONTROL, false, XK_CONTROL_R),
    row(VK_CONTROL, false, XK_CONTROL_L),
    row(VK_CONTROL, true, XK_CONTROL_R),
    row(VK_LMENU, false, XK_ALT_L),
    row(VK_RMENU, false, XK_ALT_R),
    row(VK_MENU, false, XK_ALT_L),
    row(VK_MENU, true, XK_ALT_R),
    row(VK_PAUSE, false, XK_PAUSE),
    row(VK_CAPITAL, false, XK_CAPS_LOCK),
    row(VK_ESCAPE, false, XK_ESCAPE),
    // Dedicated navigation block (extended).
    row(VK_PRIOR, true, XK_PRIOR),
    row(VK_NEXT, true, XK_NEXT),
    row(VK_END, true, XK_END),
    row(VK_HOME, true, XK_HOME),
    row(VK_LEFT, true, XK_LEFT),
    row(VK_UP, true, XK_UP),
    row(VK_RIGHT, true, XK_RIGHT),
    row(VK_DOWN, true, XK_DOWN),
    row(VK_INSERT, true, XK_INSERT),
    row(VK_DELETE, true, XK_DELETE),
    row(VK_SELECT, false, XK_SELECT),
    row(VK_EXECUTE, false, XK_EXECUTE),
    row(VK_SNAPSHOT, false, XK_PRINT),
    row(VK_HELP, false, XK_HELP),
    // Keypad with NumLock on.
    row(VK_NUMPAD0, false, XK_KP_0),
    row(VK_NUMPAD1, false, XK_KP_1),
    row(VK_NUMPAD2, false, XK_KP_2),
    row(VK_NUMPAD3, false, XK_KP_3),
    row(VK_NUMPAD4, false, XK_KP_4),
    row(VK_NUMPAD5, false, XK_KP_5),
    row(VK_NUMPAD6, false, XK_KP_6),
    row(VK_NUMPAD7, false, XK_KP_7),
    row(VK_NUMPAD8, false, XK_KP_8),
    row(VK_NUMPAD9, false, XK_KP_9),
    row(VK_MULTIPLY, false, XK_KP_MULTIPLY),
    row(VK_ADD, false, XK_KP_ADD),
    row(VK_SEPARATOR, false, XK_KP_SEPARATOR),
    row(VK_SUBTRACT, false, XK_KP_SUBTRACT),
    row(VK_DECIMAL, false, XK_KP_DECIMAL),
    row(VK_DIVIDE, true, XK_KP_DIVIDE),
    row(VK_RETURN, true, XK_KP_ENTER),
    // Keypad with NumLock off reports the navigation VKs without the extended flag.
    row(VK_PRIOR, false, XK_KP_PRIOR),
    row(VK_NEXT, false, XK_KP_NEXT),
    row(VK_END, false, XK_KP_END),
    row(VK_HOME, false, XK_KP_HOME),
    row(VK_LEFT, false, XK_KP_LEFT),
    row(VK_UP, false, XK_KP_UP),
    row(VK_RIGHT, false, XK_KP_RIGHT),
    row(VK_DOWN, false, XK_KP_DOWN),
    row(VK_INSERT, false, XK_KP_INSERT),
    row(VK_DELETE, false, XK_KP_DELETE),
    // Keypad 5 without NumLock is VK_CLEAR, already claimed by XK_Clear above.
    row(VK_CLEAR, false, XK_KP_BEGIN),
    row(VK_NUMLOCK, false, XK_NUM_LOCK),
    row(VK_SCROLL, false, XK_SCROLL_LOCK),
    row(VK_LWIN, false, XK_SUPER_L),
    row(VK_RWIN, false, XK_SUPER_R),
    row(VK_APPS, false, XK_MENU),
];

/// Complete VK → keysym hardware table: the base rows followed by F1..F24.
///
/// Exposed as an iterator so the two compile-time arrays need no runtime
/// concatenation.
pub fn vk_keysym_table() -> impl Iterator<Item = &'static VkKeysym> {
    BASE_ROWS.iter().chain(FUNCTION_ROWS.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contains_all_function_keys() {
        for n in 1u8..=24 {
            let vk = VK_F1 + n - 1;
            let found = vk_keysym_table().find(|r| r.vk == vk && !r.extended);
            assert_eq!(
                found.map(|r| r.keysym),
                function_key(n),
                "VK_F{n} (0x{vk:02X}) must map to XK_F{n}"
            );
        }
    }

    #[test]
    fn test_table_never_contains_the_zero_keysym() {
        for r in vk_keysym_table() {
            assert_ne!(r.keysym, 0, "row for VK 0x{:02X} has a zero keysym", r.vk);
        }
    }

    #[test]
    fn test_table_has_no_printable_character_keys() {
        // Letters, digits and the space bar are resolved by the host translator.
        for r in vk_keysym_table() {
            assert!(
                !(0x30..=0x39).contains(&r.vk) && !(0x41..=0x5A).contains(&r.vk),
                "VK 0x{:02X} must not be in the hardware table",
                r.vk
            );
            assert_ne!(r.vk, VK_SPACE);
        }
    }

    #[test]
    fn test_clear_is_listed_before_keypad_begin() {
        let clear_rows: Vec<Keysym> = vk_keysym_table()
            .filter(|r| r.vk == VK_CLEAR && !r.extended)
            .map(|r| r.keysym)
            .collect();
        assert_eq!(clear_rows, vec![XK_CLEAR, XK_KP_BEGIN]);
    }
}
