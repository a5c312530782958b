//! The key event translator: hardware events in, balanced keysym events out.

use std::sync::Arc;

use tracing::debug;

use super::host::{CharacterTranslator, Translation, EURO_ESCAPE};
use crate::domain::guard::with_chord_released;
use crate::domain::key::{HardwareKey, HardwareKeyEvent, KeyId};
use crate::domain::modifiers::ModifierSnapshot;
use crate::domain::tracker::{KeyStateTracker, PeerSink};
use crate::keymap::keysym::{Keysym, XK_EURO_SIGN, XK_SHIFT_L};
use crate::keymap::lookup::KeysymLookupTable;
use crate::keymap::windows_vk::VK_SPACE;
use crate::remap::{CharacterRemapTable, RemapEntry, RemapMode};

/// What [`KeyEventTranslator::translate`] did with one event.
///
/// Purely informational; every outcome leaves the peer in a balanced state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key-up: whatever the key had pressed was released (possibly nothing).
    Released,
    /// The key is in the hardware table and was pressed as this keysym.
    Mapped(Keysym),
    /// The host produced characters and they were sent.
    Characters,
    /// The key is a dead key; its effect shows up on the next key.
    DeadKey,
    /// Nothing could be sent for this key.
    Dropped,
}

/// Translates host keyboard events into keysym press/release events.
///
/// One translator serves one remote connection.  It owns the ledger of keys
/// it has reported down, so every release it emits carries exactly the keysym
/// of the matching press even if the layout or modifiers changed in between.
pub struct KeyEventTranslator<T, S> {
    tracker: KeyStateTracker,
    keysyms: Arc<KeysymLookupTable>,
    remap: Arc<CharacterRemapTable>,
    chars: T,
    sink: S,
}

impl<T, S> KeyEventTranslator<T, S>
where
    T: CharacterTranslator,
    S: PeerSink,
{
    pub fn new(
        keysyms: Arc<KeysymLookupTable>,
        remap: Arc<CharacterRemapTable>,
        chars: T,
        sink: S,
    ) -> Self {
        Self {
            tracker: KeyStateTracker::new(),
            keysyms,
            remap,
            chars,
            sink,
        }
    }

    /// A translator over the built-in tables with the given remap mode.
    pub fn with_mode(mode: RemapMode, chars: T, sink: S) -> Self {
        Self::new(
            Arc::new(KeysymLookupTable::standard()),
            Arc::new(CharacterRemapTable::for_mode(mode)),
            chars,
            sink,
        )
    }

    /// Handles one hardware key event.
    ///
    /// `modifiers` is the host's modifier state at the time of the event.
    pub fn translate(
        &mut self,
        event: HardwareKeyEvent,
        modifiers: ModifierSnapshot,
    ) -> KeyOutcome {
        let key = event.key;
        if !event.down {
            self.tracker.release(&mut self.sink, KeyId::from(key));
            return KeyOutcome::Released;
        }

        // Must happen for every key-down, hit or miss, or the host's dead-key
        // state drifts out of step with the user's typing.
        let translation = self.chars.query(key.code, modifiers);

        if let Some(keysym) = self.keysyms.lookup(key) {
            self.tracker.press(&mut self.sink, KeyId::from(key), keysym);
            return KeyOutcome::Mapped(keysym);
        }

        if translation.is_dead_key() {
            debug!("{key}: dead key");
            return KeyOutcome::DeadKey;
        }

        if translation.starts_printable() {
            self.send_characters(key, translation, modifiers);
            return KeyOutcome::Characters;
        }

        self.retry_without_ctrl_alt(key, modifiers)
    }

    /// Releases every key the peer believes is down.
    pub fn release_all_keys(&mut self) {
        self.tracker.release_all(&mut self.sink);
    }

    pub fn tracker(&self) -> &KeyStateTracker {
        &self.tracker
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn character_translator_mut(&mut self) -> &mut T {
        &mut self.chars
    }

    fn send_characters(
        &mut self,
        key: HardwareKey,
        translation: Translation,
        modifiers: ModifierSnapshot,
    ) {
        let id = KeyId::from(key);
        let remap = &*self.remap;
        let send = |tracker: &mut KeyStateTracker, sink: &mut S| {
            for &ch in translation.chars() {
                press_remapped(tracker, sink, remap, id, ch);
            }
        };

        if modifiers.is_ctrl_alt_chord() {
            debug!("{key}: composed with {modifiers}, hiding chord from peer");
            with_chord_released(&mut self.tracker, &mut self.sink, send);
        } else {
            send(&mut self.tracker, &mut self.sink);
        }
    }

    /// Control/Alt combinations such as Ctrl+C yield control characters or
    /// nothing; the peer wants the plain character with its own modifiers.
    fn retry_without_ctrl_alt(
        &mut self,
        key: HardwareKey,
        modifiers: ModifierSnapshot,
    ) -> KeyOutcome {
        let bare = modifiers.without_ctrl_alt();
        let mut translation = self.chars.query(key.code, bare);

        if translation.is_dead_key() {
            // A dead key is now pending in the host; flush it with a space.
            debug!("{key}: dead key without ctrl/alt, flushing with space");
            translation = self.chars.query(VK_SPACE, bare);
            if translation.is_dead_key() {
                debug!("{key}: still a dead key, giving up");
                return KeyOutcome::Dropped;
            }
        }

        if !translation.starts_printable() {
            debug!("{key}: no character regardless of ctrl/alt");
            return KeyOutcome::Dropped;
        }

        for &ch in translation.chars() {
            self.tracker
                .press(&mut self.sink, KeyId::from(key), character_keysym(ch));
        }
        KeyOutcome::Characters
    }
}

/// Keysym for a character with no remapping applied.
fn character_keysym(ch: u8) -> Keysym {
    if ch == EURO_ESCAPE {
        XK_EURO_SIGN
    } else {
        Keysym::from(ch)
    }
}

fn press_remapped<S: PeerSink + ?Sized>(
    tracker: &mut KeyStateTracker,
    sink: &mut S,
    remap: &CharacterRemapTable,
    id: KeyId,
    ch: u8,
) {
    if ch == EURO_ESCAPE {
        tracker.press(sink, id, XK_EURO_SIGN);
        return;
    }

    match remap.lookup(ch) {
        Some(RemapEntry {
            needs_shift: true,
            output,
            ..
        }) => {
            debug!("remap 0x{ch:02x} -> shift+0x{output:02x}");
            tracker.press(sink, KeyId::SyntheticShift, XK_SHIFT_L);
            tracker.press(sink, id, Keysym::from(output));
            tracker.release(sink, KeyId::SyntheticShift);
        }
        Some(RemapEntry { output, .. }) => {
            debug!("remap 0x{ch:02x} -> 0x{output:02x}");
            tracker.press(sink, id, Keysym::from(output));
        }
        None => tracker.press(sink, id, Keysym::from(ch)),
    }
}
