//! Windows character translation via `ToAscii`.
//!
//! `ToAscii` keeps the dead-key state for the calling thread, so a
//! [`WindowsCharacterTranslator`] must be used from the thread that receives
//! the keyboard messages.

#![cfg(target_os = "windows")]

use rfb_keys_core::{CharacterTranslator, ModifierSnapshot, Translation};
use tracing::warn;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyboardState, ToAscii};

const VK_SHIFT: usize = 0x10;
const VK_CONTROL: usize = 0x11;
const VK_MENU: usize = 0x12;
const VK_CAPITAL: usize = 0x14;
const VK_LSHIFT: usize = 0xA0;
const VK_RSHIFT: usize = 0xA1;
const VK_LCONTROL: usize = 0xA2;
const VK_RCONTROL: usize = 0xA3;
const VK_LMENU: usize = 0xA4;
const VK_RMENU: usize = 0xA5;

/// High bit: key is down.  Low bit: toggle key is on.
const KEY_DOWN: u8 = 0x80;
const KEY_TOGGLED: u8 = 0x01;

/// [`CharacterTranslator`] backed by the active Windows keyboard layout.
#[derive(Debug, Default)]
pub struct WindowsCharacterTranslator;

impl WindowsCharacterTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl CharacterTranslator for WindowsCharacterTranslator {
    fn query(&mut self, code: u8, modifiers: ModifierSnapshot) -> Translation {
        let mut state = [0u8; 256];
        // SAFETY: state is the 256-byte buffer GetKeyboardState requires.
        if let Err(e) = unsafe { GetKeyboardState(&mut state) } {
            warn!("GetKeyboardState failed: {e}");
        }
        apply_modifiers(&mut state, modifiers);

        let mut packed: u16 = 0;
        // SAFETY: state is a valid key state array and packed is a writable
        // WORD receiving up to two characters.
        let n = unsafe { ToAscii(u32::from(code), 0, Some(&state), &mut packed, 0) };
        let [first, second] = packed.to_le_bytes();
        match n {
            n if n < 0 => Translation::DeadKey,
            0 => Translation::Empty,
            1 => Translation::One(first),
            _ => Translation::Two([first, second]),
        }
    }
}

/// Overwrites the modifier entries of a key state array with `modifiers`.
fn apply_modifiers(state: &mut [u8; 256], modifiers: ModifierSnapshot) {
    let mut set = |vk: usize, down: bool| {
        state[vk] = if down { state[vk] | KEY_DOWN } else { state[vk] & !KEY_DOWN };
    };
    set(VK_LSHIFT, modifiers.contains(ModifierSnapshot::LEFT_SHIFT));
    set(VK_RSHIFT, modifiers.contains(ModifierSnapshot::RIGHT_SHIFT));
    set(VK_SHIFT, modifiers.shift());
    set(VK_LCONTROL, modifiers.contains(ModifierSnapshot::LEFT_CTRL));
    set(VK_RCONTROL, modifiers.contains(ModifierSnapshot::RIGHT_CTRL));
    set(VK_CONTROL, modifiers.ctrl());
    set(VK_LMENU, modifiers.contains(ModifierSnapshot::LEFT_ALT));
    set(VK_RMENU, modifiers.contains(ModifierSnapshot::RIGHT_ALT));
    set(VK_MENU, modifiers.alt());

    if modifiers.contains(ModifierSnapshot::CAPS_LOCK) {
        state[VK_CAPITAL] |= KEY_TOGGLED;
    } else {
        state[VK_CAPITAL] &= !KEY_TOGGLED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_modifiers_sets_generic_and_sided_entries() {
        let mut state = [0u8; 256];
        let mods = ModifierSnapshot::empty()
            .with(ModifierSnapshot::RIGHT_CTRL)
            .with(ModifierSnapshot::RIGHT_ALT);

        apply_modifiers(&mut state, mods);

        assert_eq!(state[VK_CONTROL] & KEY_DOWN, KEY_DOWN);
        assert_eq!(state[VK_RCONTROL] & KEY_DOWN, KEY_DOWN);
        assert_eq!(state[VK_LCONTROL], 0);
        assert_eq!(state[VK_MENU] & KEY_DOWN, KEY_DOWN);
        assert_eq!(state[VK_SHIFT], 0);
    }

    #[test]
    fn test_apply_modifiers_clears_stale_entries() {
        let mut state = [KEY_DOWN; 256];

        apply_modifiers(&mut state, ModifierSnapshot::empty());

        assert_eq!(state[VK_CONTROL], 0);
        assert_eq!(state[VK_LMENU], 0);
        assert_eq!(state[VK_CAPITAL] & KEY_TOGGLED, 0);
        // Non-modifier keys are left as reported.
        assert_eq!(state[0x41], KEY_DOWN);
    }
}
