//! Hardware key identities and raw key events.

use std::fmt;

/// Identity of a physical key on the host: its virtual-key code plus the
/// extended flag.
///
/// Two identities are equal only if both fields match.  The same code with the
/// flag flipped (see [`HardwareKey::toggled`]) is a different key, but it is
/// the fallback the keysym lookup tries on a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HardwareKey {
    /// Windows virtual-key code.
    pub code: u8,
    /// Extended-key flag (bit 24 of the keyboard message `lParam`).
    pub extended: bool,
}

impl HardwareKey {
    pub const fn new(code: u8, extended: bool) -> Self {
        Self { code, extended }
    }

    /// Returns the same key code with the extended flag flipped.
    pub const fn toggled(self) -> Self {
        Self {
            code: self.code,
            extended: !self.extended,
        }
    }
}

impl fmt::Display for HardwareKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extended {
            write!(f, "0x{:02x}+ext", self.code)
        } else {
            write!(f, "0x{:02x}", self.code)
        }
    }
}

/// Slot in the key ledger.
///
/// Physical keys are keyed by their [`HardwareKey`].  Shift presses fabricated
/// by the translator to satisfy a remap entry live in their own slot so they
/// can never overwrite or release the ledger entry of a Shift key the user is
/// physically holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyId {
    Physical(HardwareKey),
    SyntheticShift,
}

impl From<HardwareKey> for KeyId {
    fn from(key: HardwareKey) -> Self {
        KeyId::Physical(key)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyId::Physical(key) => key.fmt(f),
            KeyId::SyntheticShift => f.write_str("synthetic-shift"),
        }
    }
}

/// A raw keyboard transition as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareKeyEvent {
    pub key: HardwareKey,
    /// `true` for key-down (including autorepeat), `false` for key-up.
    pub down: bool,
}

impl HardwareKeyEvent {
    pub const fn down(code: u8, extended: bool) -> Self {
        Self {
            key: HardwareKey::new(code, extended),
            down: true,
        }
    }

    pub const fn up(code: u8, extended: bool) -> Self {
        Self {
            key: HardwareKey::new(code, extended),
            down: false,
        }
    }
}
