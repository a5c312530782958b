//! Simulated keyboard layout for tests and the replay tool.
//!
//! [`MockCharacterTranslator`] behaves like `ToAscii` on a US-International
//! layout: letters, digits and punctuation with Shift and Caps Lock, control
//! characters with Ctrl, an AltGr (Ctrl+Alt) layer, and four dead keys that
//! remember a pending accent between calls.
//!
//! Every query is recorded in [`MockCharacterTranslator::queries`] so tests
//! can check that callers honour the once-per-key-down ordering contract.
//!
//! | Key        | Plain | Shift | Dead?                |
//! |------------|-------|-------|----------------------|
//! | `0xC0`     | `` ` `` | `~` | both (grave / tilde) |
//! | `0xDE`     | `'`   | `"`   | both (acute / diaeresis) |

use rfb_keys_core::{CharacterTranslator, ModifierSnapshot, Translation};

/// Accent remembered by a dead key until the next character key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadKey {
    Grave,
    Acute,
    Diaeresis,
    Tilde,
}

impl DeadKey {
    /// Character produced when the accent cannot combine (or with Space).
    pub fn spacing(self) -> u8 {
        match self {
            DeadKey::Grave => b'`',
            DeadKey::Acute => b'\'',
            DeadKey::Diaeresis => b'"',
            DeadKey::Tilde => b'~',
        }
    }

    /// The precomposed Latin-1 character for this accent on `base`, if any.
    pub fn compose(self, base: u8) -> Option<u8> {
        let table: &[(u8, u8)] = match self {
            DeadKey::Grave => &[
                (b'a', 0xE0),
                (b'e', 0xE8),
                (b'i', 0xEC),
                (b'o', 0xF2),
                (b'u', 0xF9),
                (b'A', 0xC0),
                (b'E', 0xC8),
                (b'I', 0xCC),
                (b'O', 0xD2),
                (b'U', 0xD9),
            ],
            DeadKey::Acute => &[
                (b'a', 0xE1),
                (b'e', 0xE9),
                (b'i', 0xED),
                (b'o', 0xF3),
                (b'u', 0xFA),
                (b'y', 0xFD),
                (b'A', 0xC1),
                (b'E', 0xC9),
                (b'I', 0xCD),
                (b'O', 0xD3),
                (b'U', 0xDA),
                (b'Y', 0xDD),
            ],
            DeadKey::Diaeresis => &[
                (b'a', 0xE4),
                (b'e', 0xEB),
                (b'i', 0xEF),
                (b'o', 0xF6),
                (b'u', 0xFC),
                (b'y', 0xFF),
                (b'A', 0xC4),
                (b'E', 0xCB),
                (b'I', 0xCF),
                (b'O', 0xD6),
                (b'U', 0xDC),
            ],
            DeadKey::Tilde => &[
                (b'a', 0xE3),
                (b'n', 0xF1),
                (b'o', 0xF5),
                (b'A', 0xC3),
                (b'N', 0xD1),
                (b'O', 0xD5),
            ],
        };
        table
            .iter()
            .find(|&&(b, _)| b == base)
            .map(|&(_, composed)| composed)
    }
}

/// What one key produces in isolation, before dead-key handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutput {
    Nothing,
    Char(u8),
    Dead(DeadKey),
}

/// Layout-simulating [`CharacterTranslator`] with dead-key state.
#[derive(Debug, Default)]
pub struct MockCharacterTranslator {
    pending: Option<DeadKey>,
    /// Every `(code, modifiers)` pair queried, in order.
    pub queries: Vec<(u8, ModifierSnapshot)>,
}

impl MockCharacterTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accent a previous dead key left pending, if any.
    pub fn pending_dead_key(&self) -> Option<DeadKey> {
        self.pending
    }
}

impl CharacterTranslator for MockCharacterTranslator {
    fn query(&mut self, code: u8, modifiers: ModifierSnapshot) -> Translation {
        self.queries.push((code, modifiers));

        match (self.pending, key_output(code, modifiers)) {
            // Modifier and other silent keys leave the accent pending.
            (_, KeyOutput::Nothing) => Translation::Empty,
            (None, KeyOutput::Char(ch)) => Translation::One(ch),
            (None, KeyOutput::Dead(dead)) => {
                self.pending = Some(dead);
                Translation::DeadKey
            }
            (Some(dead), KeyOutput::Char(b' ')) => {
                self.pending = None;
                Translation::One(dead.spacing())
            }
            (Some(dead), KeyOutput::Char(ch)) => {
                self.pending = None;
                match dead.compose(ch) {
                    Some(composed) => Translation::One(composed),
                    None => Translation::Two([dead.spacing(), ch]),
                }
            }
            (Some(dead), KeyOutput::Dead(next)) => {
                self.pending = None;
                Translation::Two([dead.spacing(), next.spacing()])
            }
        }
    }
}

fn key_output(code: u8, modifiers: ModifierSnapshot) -> KeyOutput {
    let shift = modifiers.shift();
    match (modifiers.ctrl(), modifiers.alt()) {
        (true, true) => altgr_output(code, shift),
        (true, false) => control_output(code),
        // Alt alone selects menus; the layout ignores it.
        (false, _) => plain_output(code, shift, modifiers.contains(ModifierSnapshot::CAPS_LOCK)),
    }
}

fn plain_output(code: u8, shift: bool, caps_lock: bool) -> KeyOutput {
    let pick = |plain: u8, shifted: u8| KeyOutput::Char(if shift { shifted } else { plain });
    match code {
        b'A'..=b'Z' if shift != caps_lock => KeyOutput::Char(code),
        b'A'..=b'Z' => KeyOutput::Char(code.to_ascii_lowercase()),
        b'0'..=b'9' if shift => KeyOutput::Char(b")!@#$%^&*("[usize::from(code - b'0')]),
        b'0'..=b'9' => KeyOutput::Char(code),
        0x20 => KeyOutput::Char(b' '),
        0x08 => KeyOutput::Char(0x08),
        0x09 => KeyOutput::Char(b'\t'),
        0x0D => KeyOutput::Char(b'\r'),
        0x1B => KeyOutput::Char(0x1B),
        0x60..=0x69 => KeyOutput::Char(b'0' + (code - 0x60)),
        0x6A => KeyOutput::Char(b'*'),
        0x6B => KeyOutput::Char(b'+'),
        0x6D => KeyOutput::Char(b'-'),
        0x6E => KeyOutput::Char(b'.'),
        0x6F => KeyOutput::Char(b'/'),
        0xBA => pick(b';', b':'),
        0xBB => pick(b'=', b'+'),
        0xBC => pick(b',', b'<'),
        0xBD => pick(b'-', b'_'),
        0xBE => pick(b'.', b'>'),
        0xBF => pick(b'/', b'?'),
        0xC0 if shift => KeyOutput::Dead(DeadKey::Tilde),
        0xC0 => KeyOutput::Dead(DeadKey::Grave),
        0xDB => pick(b'[', b'{'),
        0xDC => pick(b'\\', b'|'),
        0xDD => pick(b']', b'}'),
        0xDE if shift => KeyOutput::Dead(DeadKey::Diaeresis),
        0xDE => KeyOutput::Dead(DeadKey::Acute),
        _ => KeyOutput::Nothing,
    }
}

fn control_output(code: u8) -> KeyOutput {
    match code {
        b'A'..=b'Z' => KeyOutput::Char(code - 0x40),
        0x08 => KeyOutput::Char(0x7F),
        0x0D => KeyOutput::Char(b'\n'),
        0x1B => KeyOutput::Char(0x1B),
        0x20 => KeyOutput::Char(b' '),
        0xDB => KeyOutput::Char(0x1B),
        0xDC => KeyOutput::Char(0x1C),
        0xDD => KeyOutput::Char(0x1D),
        _ => KeyOutput::Nothing,
    }
}

fn altgr_output(code: u8, shift: bool) -> KeyOutput {
    let pick = |plain: u8, shifted: u8| KeyOutput::Char(if shift { shifted } else { plain });
    match code {
        b'1' => pick(0xA1, 0xB9), // ¡ ¹
        b'2' => KeyOutput::Char(0xB2), // ²
        b'5' => KeyOutput::Char(0x80), // Euro escape
        b'E' => KeyOutput::Char(0x80),
        b'Q' => pick(0xE4, 0xC4), // ä Ä
        b'S' => pick(0xDF, 0xA7), // ß §
        b'N' => pick(0xF1, 0xD1), // ñ Ñ
        0xBA => pick(0xB6, 0xB0), // ¶ °
        0xBF => KeyOutput::Char(0xBF), // ¿
        _ => KeyOutput::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: ModifierSnapshot = ModifierSnapshot::empty();

    fn shift() -> ModifierSnapshot {
        NONE.with(ModifierSnapshot::LEFT_SHIFT)
    }

    #[test]
    fn test_letters_follow_shift_and_caps_lock() {
        let mut layout = MockCharacterTranslator::new();
        let caps = NONE.with(ModifierSnapshot::CAPS_LOCK);

        assert_eq!(layout.query(b'A', NONE), Translation::One(b'a'));
        assert_eq!(layout.query(b'A', shift()), Translation::One(b'A'));
        assert_eq!(layout.query(b'A', caps), Translation::One(b'A'));
        assert_eq!(
            layout.query(b'A', caps.with(ModifierSnapshot::RIGHT_SHIFT)),
            Translation::One(b'a')
        );
    }

    #[test]
    fn test_shifted_digits() {
        let mut layout = MockCharacterTranslator::new();
        assert_eq!(layout.query(b'2', shift()), Translation::One(b'@'));
        assert_eq!(layout.query(b'0', shift()), Translation::One(b')'));
    }

    #[test]
    fn test_dead_key_composes_with_next_letter() {
        // Arrange
        let mut layout = MockCharacterTranslator::new();

        // Act
        let first = layout.query(0xDE, NONE);
        let second = layout.query(b'E', NONE);

        // Assert
        assert_eq!(first, Translation::DeadKey);
        assert_eq!(second, Translation::One(0xE9));
        assert_eq!(layout.pending_dead_key(), None);
    }

    #[test]
    fn test_dead_key_survives_shift_press() {
        let mut layout = MockCharacterTranslator::new();
        layout.query(0xC0, NONE);

        assert_eq!(layout.query(0x10, shift()), Translation::Empty);
        assert_eq!(layout.pending_dead_key(), Some(DeadKey::Grave));
        assert_eq!(layout.query(b'A', shift()), Translation::One(0xC0));
    }

    #[test]
    fn test_dead_key_with_uncombinable_key_yields_two_characters() {
        let mut layout = MockCharacterTranslator::new();
        layout.query(0xC0, NONE);

        assert_eq!(layout.query(b'Q', NONE), Translation::Two([b'`', b'q']));
    }

    #[test]
    fn test_dead_key_then_space_yields_accent_itself() {
        let mut layout = MockCharacterTranslator::new();
        layout.query(0xDE, shift());

        assert_eq!(layout.query(0x20, NONE), Translation::One(b'"'));
    }

    #[test]
    fn test_two_dead_keys_yield_both_accents() {
        let mut layout = MockCharacterTranslator::new();
        layout.query(0xC0, shift());

        assert_eq!(layout.query(0xDE, NONE), Translation::Two([b'~', b'\'']));
        assert_eq!(layout.pending_dead_key(), None);
    }

    #[test]
    fn test_control_letters_are_control_characters() {
        let mut layout = MockCharacterTranslator::new();
        let ctrl = NONE.with(ModifierSnapshot::LEFT_CTRL);

        assert_eq!(layout.query(b'C', ctrl), Translation::One(0x03));
        assert_eq!(layout.query(b'2', ctrl), Translation::Empty);
    }

    #[test]
    fn test_altgr_layer() {
        let mut layout = MockCharacterTranslator::new();
        let altgr = NONE
            .with(ModifierSnapshot::LEFT_CTRL)
            .with(ModifierSnapshot::RIGHT_ALT);

        assert_eq!(layout.query(b'E', altgr), Translation::One(0x80));
        assert_eq!(layout.query(b'Q', altgr), Translation::One(0xE4));
        assert_eq!(layout.query(b'Z', altgr), Translation::Empty);
    }

    #[test]
    fn test_queries_are_recorded_in_order() {
        let mut layout = MockCharacterTranslator::new();
        layout.query(b'A', NONE);
        layout.query(0x0D, shift());

        assert_eq!(layout.queries, vec![(b'A', NONE), (0x0D, shift())]);
    }
}
