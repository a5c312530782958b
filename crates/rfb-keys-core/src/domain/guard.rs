//! Temporary suppression of held modifier keys.
//!
//! When the host composes a character with Control+Alt (AltGr), the peer must
//! see the bare character, not Control+Alt+character.  The translator
//! therefore tells the peer that Control and Alt went up, sends the character,
//! and then tells the peer they are down again.  The ledger is not touched:
//! from the host's point of view the modifiers never moved.

use tracing::debug;

use super::key::{HardwareKey, KeyId};
use super::tracker::{KeyStateTracker, PeerSink};
use crate::keymap::keysym::Keysym;
use crate::keymap::windows_vk::{VK_CONTROL, VK_MENU};

/// Modifier keys released around an AltGr-composed character, in the order
/// they are released and restored.
pub const CHORD_MODIFIERS: [HardwareKey; 4] = [
    HardwareKey::new(VK_CONTROL, false),
    HardwareKey::new(VK_CONTROL, true),
    HardwareKey::new(VK_MENU, false),
    HardwareKey::new(VK_MENU, true),
];

/// Fake release of one modifier, with the matching re-press.
///
/// A guard starts idle.  [`release`](Self::release) emits a release only if
/// the ledger shows the target down, and remembers the keysym it released.
/// [`restore`](Self::restore) consumes the guard and re-presses exactly that
/// keysym, or does nothing if nothing was released.
#[derive(Debug)]
#[must_use = "a released modifier must be restored"]
pub struct ModifierGuard {
    target: KeyId,
    released: Option<Keysym>,
}

impl ModifierGuard {
    pub fn new(target: HardwareKey) -> Self {
        Self {
            target: KeyId::from(target),
            released: None,
        }
    }

    /// Tells the peer the target modifier went up, if the ledger holds it down.
    ///
    /// Calling it again on the same guard does nothing.
    pub fn release<S: PeerSink + ?Sized>(&mut self, tracker: &KeyStateTracker, sink: &mut S) {
        if self.released.is_some() {
            return;
        }
        if let Some(keysym) = tracker.keysym_for(self.target) {
            debug!("fake release {}, keysym 0x{keysym:x}", self.target);
            sink.key_event(keysym, false);
            self.released = Some(keysym);
        }
    }

    /// The keysym this guard released, if it released one.
    pub fn released(&self) -> Option<Keysym> {
        self.released
    }

    /// Re-presses the released keysym, if any.
    pub fn restore<S: PeerSink + ?Sized>(self, sink: &mut S) {
        if let Some(keysym) = self.released {
            debug!("fake press {}, keysym 0x{keysym:x}", self.target);
            sink.key_event(keysym, true);
        }
    }
}

/// Runs `body` with the Control/Alt chord released on the peer.
///
/// Every modifier in [`CHORD_MODIFIERS`] that the ledger shows down is
/// released before `body` runs and re-pressed once after it returns, however
/// `body` returns.  Modifiers that were not down are left alone on both sides.
pub fn with_chord_released<S, R, F>(tracker: &mut KeyStateTracker, sink: &mut S, body: F) -> R
where
    S: PeerSink + ?Sized,
    F: FnOnce(&mut KeyStateTracker, &mut S) -> R,
{
    let mut guards = CHORD_MODIFIERS.map(ModifierGuard::new);
    for guard in &mut guards {
        guard.release(tracker, sink);
    }

    let result = body(tracker, sink);

    for guard in guards {
        guard.restore(sink);
    }
    result
}
