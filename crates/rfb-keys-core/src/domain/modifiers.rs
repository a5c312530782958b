//! Snapshot of the host's modifier key state at the time of one key event.

use std::fmt;

/// Bit-set of the physical modifier keys (and lock toggles) that were down
/// when a key event was generated.
///
/// The platform fills this in for every event; the translator only reads it,
/// except for building the Control/Alt-free variant it uses for its retry
/// queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierSnapshot(pub u16);

impl ModifierSnapshot {
    pub const LEFT_CTRL: u16 = 1 << 0;
    pub const RIGHT_CTRL: u16 = 1 << 1;
    pub const LEFT_SHIFT: u16 = 1 << 2;
    pub const RIGHT_SHIFT: u16 = 1 << 3;
    pub const LEFT_ALT: u16 = 1 << 4;
    pub const RIGHT_ALT: u16 = 1 << 5;
    pub const LEFT_META: u16 = 1 << 6;
    pub const RIGHT_META: u16 = 1 << 7;
    /// CapsLock toggle is on (not whether the key is held).
    pub const CAPS_LOCK: u16 = 1 << 8;
    /// NumLock toggle is on.
    pub const NUM_LOCK: u16 = 1 << 9;

    const CTRL_MASK: u16 = Self::LEFT_CTRL | Self::RIGHT_CTRL;
    const ALT_MASK: u16 = Self::LEFT_ALT | Self::RIGHT_ALT;

    /// A snapshot with no modifiers down and both locks off.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns a copy with `bits` additionally set.
    pub const fn with(self, bits: u16) -> Self {
        Self(self.0 | bits)
    }

    /// Returns `true` if every bit in `bits` is set.
    pub const fn contains(self, bits: u16) -> bool {
        self.0 & bits == bits
    }

    /// Returns `true` if either Ctrl modifier is active.
    pub const fn ctrl(self) -> bool {
        self.0 & Self::CTRL_MASK != 0
    }

    /// Returns `true` if either Shift modifier is active.
    pub const fn shift(self) -> bool {
        self.0 & (Self::LEFT_SHIFT | Self::RIGHT_SHIFT) != 0
    }

    /// Returns `true` if either Alt modifier is active.
    pub const fn alt(self) -> bool {
        self.0 & Self::ALT_MASK != 0
    }

    /// Returns `true` if either Meta (Win) modifier is active.
    pub const fn meta(self) -> bool {
        self.0 & (Self::LEFT_META | Self::RIGHT_META) != 0
    }

    /// Control and Alt are both down: the host may be composing an AltGr character.
    pub const fn is_ctrl_alt_chord(self) -> bool {
        self.ctrl() && self.alt()
    }

    /// Returns a copy with every Control and Alt bit cleared.
    pub const fn without_ctrl_alt(self) -> Self {
        Self(self.0 & !(Self::CTRL_MASK | Self::ALT_MASK))
    }
}

impl fmt::Display for ModifierSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(u16, &str); 10] = [
            (ModifierSnapshot::LEFT_CTRL, "LCtrl"),
            (ModifierSnapshot::RIGHT_CTRL, "RCtrl"),
            (ModifierSnapshot::LEFT_SHIFT, "LShift"),
            (ModifierSnapshot::RIGHT_SHIFT, "RShift"),
            (ModifierSnapshot::LEFT_ALT, "LAlt"),
            (ModifierSnapshot::RIGHT_ALT, "RAlt"),
            (ModifierSnapshot::LEFT_META, "LWin"),
            (ModifierSnapshot::RIGHT_META, "RWin"),
            (ModifierSnapshot::CAPS_LOCK, "CapsLock"),
            (ModifierSnapshot::NUM_LOCK, "NumLock"),
        ];
        let mut first = true;
        for (bit, name) in NAMES {
            if self.0 & bit != 0 {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_reports_nothing_down() {
        let m = ModifierSnapshot::empty();
        assert!(!m.ctrl() && !m.alt() && !m.shift() && !m.meta());
        assert!(!m.is_ctrl_alt_chord());
    }

    #[test]
    fn test_either_side_counts_for_ctrl_and_alt() {
        let m = ModifierSnapshot::empty()
            .with(ModifierSnapshot::RIGHT_CTRL)
            .with(ModifierSnapshot::LEFT_ALT);
        assert!(m.ctrl());
        assert!(m.alt());
        assert!(m.is_ctrl_alt_chord());
    }

    #[test]
    fn test_ctrl_alone_is_not_a_chord() {
        let m = ModifierSnapshot::empty().with(ModifierSnapshot::LEFT_CTRL);
        assert!(!m.is_ctrl_alt_chord());
    }

    #[test]
    fn test_without_ctrl_alt_keeps_shift_and_locks() {
        // Arrange
        let m = ModifierSnapshot(
            ModifierSnapshot::LEFT_CTRL
                | ModifierSnapshot::RIGHT_ALT
                | ModifierSnapshot::LEFT_SHIFT
                | ModifierSnapshot::CAPS_LOCK,
        );

        // Act
        let cleared = m.without_ctrl_alt();

        // Assert
        assert!(!cleared.ctrl());
        assert!(!cleared.alt());
        assert!(cleared.shift());
        assert!(cleared.contains(ModifierSnapshot::CAPS_LOCK));
    }

    #[test]
    fn test_display_lists_active_modifiers() {
        let m = ModifierSnapshot(ModifierSnapshot::LEFT_CTRL | ModifierSnapshot::RIGHT_ALT);
        assert_eq!(m.to_string(), "LCtrl+RAlt");
        assert_eq!(ModifierSnapshot::empty().to_string(), "none");
    }
}
