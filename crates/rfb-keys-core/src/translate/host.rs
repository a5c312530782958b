//! Contract for the host's character-translation service.

use crate::domain::modifiers::ModifierSnapshot;

/// Character code Windows uses for the Euro sign in its ANSI code page; it is
/// sent as `XK_EuroSign` rather than as a Latin-1 keysym.
pub const EURO_ESCAPE: u8 = 128;

/// Returns `true` for a printable Latin-1 character, or the Euro escape.
pub const fn is_printable_latin1(ch: u8) -> bool {
    matches!(ch, 32..=126 | EURO_ESCAPE | 160..=255)
}

/// Result of asking the host what a key-down produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    /// The key is a dead key.  The host now remembers a pending diacritic and
    /// will combine it with the next key it translates.
    DeadKey,
    /// The key produces no character in this modifier state.
    Empty,
    /// One character.
    One(u8),
    /// Two characters, e.g. a dead key followed by a key it cannot combine with.
    Two([u8; 2]),
}

impl Translation {
    /// The characters produced, in order.  Empty for [`Translation::DeadKey`].
    pub fn chars(&self) -> &[u8] {
        match self {
            Translation::DeadKey | Translation::Empty => &[],
            Translation::One(ch) => std::slice::from_ref(ch),
            Translation::Two(chars) => chars,
        }
    }

    pub fn is_dead_key(&self) -> bool {
        matches!(self, Translation::DeadKey)
    }

    /// The result carries at least one character and the first is printable.
    pub fn starts_printable(&self) -> bool {
        self.chars().first().is_some_and(|&ch| is_printable_latin1(ch))
    }
}

/// The host's keyboard-layout service (e.g. Win32 `ToAscii`).
///
/// # Ordering contract
///
/// The service keeps hidden dead-key state between calls.  Callers must
/// query it **exactly once for every key-down event, in the order the events
/// occurred**, even when they intend to discard the answer.  Skipping a
/// key-down leaves a pending dead key that corrupts the translation of some
/// later, unrelated key.
///
/// A caller may issue extra queries while handling the same event (the
/// translator does so to resolve Control/Alt combinations), but never fewer
/// than one.
#[cfg_attr(test, mockall::automock)]
pub trait CharacterTranslator {
    /// Translates `code` under `modifiers`, updating any dead-key state.
    fn query(&mut self, code: u8, modifiers: ModifierSnapshot) -> Translation;
}

impl<T: CharacterTranslator + ?Sized> CharacterTranslator for &mut T {
    fn query(&mut self, code: u8, modifiers: ModifierSnapshot) -> Translation {
        (**self).query(code, modifiers)
    }
}

impl<T: CharacterTranslator + ?Sized> CharacterTranslator for Box<T> {
    fn query(&mut self, code: u8, modifiers: ModifierSnapshot) -> Translation {
        (**self).query(code, modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_ranges() {
        assert!(is_printable_latin1(b' '));
        assert!(is_printable_latin1(b'~'));
        assert!(is_printable_latin1(EURO_ESCAPE));
        assert!(is_printable_latin1(0xA0));
        assert!(is_printable_latin1(0xFF));
        assert!(!is_printable_latin1(0x1F));
        assert!(!is_printable_latin1(0x7F));
        assert!(!is_printable_latin1(0x81));
        assert!(!is_printable_latin1(0x9F));
    }

    #[test]
    fn test_chars_in_order() {
        assert_eq!(Translation::DeadKey.chars(), &[] as &[u8]);
        assert_eq!(Translation::Empty.chars(), &[] as &[u8]);
        assert_eq!(Translation::One(b'a').chars(), b"a");
        assert_eq!(Translation::Two([b'`', b'x']).chars(), b"`x");
    }

    #[test]
    fn test_starts_printable_checks_only_first_character() {
        assert!(Translation::Two([b'a', 0x08]).starts_printable());
        assert!(!Translation::Two([0x08, b'a']).starts_printable());
        assert!(!Translation::One(0x1B).starts_printable());
        assert!(!Translation::DeadKey.starts_printable());
        assert!(!Translation::Empty.starts_printable());
    }
}
