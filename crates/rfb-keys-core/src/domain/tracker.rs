//! Press/release ledger between the host keyboard and the RFB peer.
//!
//! The peer only ever sees `(keysym, down)` transitions, so it cannot know
//! that the keysym it was told about on key-down was derived from a modifier
//! state that has since changed.  [`KeyStateTracker`] remembers, per physical
//! key, which keysym was actually pressed, and uses that record for every
//! subsequent release.  The peer therefore never sees a release for a keysym
//! it was not told was down, and never keeps a keysym down after the host key
//! came back up.

use std::collections::BTreeMap;

use tracing::debug;

use super::key::KeyId;
use crate::keymap::keysym::Keysym;

/// Receiver of protocol-level key transitions (the RFB connection writer).
///
/// Calls are fire-and-forget: the translator never consults a result, so
/// implementations must not block and must handle their own delivery errors.
pub trait PeerSink {
    /// Reports one key transition to the remote peer.
    fn key_event(&mut self, keysym: Keysym, down: bool);
}

impl<S: PeerSink + ?Sized> PeerSink for &mut S {
    fn key_event(&mut self, keysym: Keysym, down: bool) {
        (**self).key_event(keysym, down);
    }
}

impl<S: PeerSink + ?Sized> PeerSink for Box<S> {
    fn key_event(&mut self, keysym: Keysym, down: bool) {
        (**self).key_event(keysym, down);
    }
}

/// Ledger of the keysym currently reported "down" for each key slot.
///
/// Invariant: for every entry, the recorded keysym is the one carried by the
/// most recent press emitted for that slot that has not yet been matched by
/// an emitted release.
#[derive(Debug, Default)]
pub struct KeyStateTracker {
    down: BTreeMap<KeyId, Keysym>,
}

impl KeyStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports `keysym` as pressed on `id` and records it.
    ///
    /// If `id` is already down with a *different* keysym, that keysym is
    /// released first.  This happens when one key yields two characters, and
    /// when Shift is released while another key is autorepeating.  A repeat
    /// press of the same keysym is forwarded as-is (autorepeat).
    pub fn press<S: PeerSink + ?Sized>(&mut self, sink: &mut S, id: KeyId, keysym: Keysym) {
        if let Some(&previous) = self.down.get(&id) {
            if previous != keysym {
                debug!("release {id}, keysym 0x{previous:x} (superseded)");
                sink.key_event(previous, false);
            }
        }
        debug!("press   {id}, keysym 0x{keysym:x}");
        sink.key_event(keysym, true);
        self.down.insert(id, keysym);
    }

    /// Releases whatever keysym was pressed on `id`.
    ///
    /// The released keysym is always the recorded one, never one derived from
    /// the current keyboard state.  Releasing a key that was never pressed
    /// through the tracker (a lock key, or a key pressed before the session
    /// started) emits nothing.
    pub fn release<S: PeerSink + ?Sized>(&mut self, sink: &mut S, id: KeyId) {
        if let Some(keysym) = self.down.remove(&id) {
            debug!("release {id}, keysym 0x{keysym:x}");
            sink.key_event(keysym, false);
        }
    }

    /// Releases every key that is currently down and empties the ledger.
    ///
    /// Called when the session disconnects or the viewer loses keyboard focus,
    /// so that the peer is never left with a stuck key.
    pub fn release_all<S: PeerSink + ?Sized>(&mut self, sink: &mut S) {
        for (id, keysym) in std::mem::take(&mut self.down) {
            debug!("release {id}, keysym 0x{keysym:x} (release all)");
            sink.key_event(keysym, false);
        }
    }

    /// Returns the keysym recorded as down for `id`, if any.
    pub fn keysym_for(&self, id: KeyId) -> Option<Keysym> {
        self.down.get(&id).copied()
    }

    pub fn is_down(&self, id: KeyId) -> bool {
        self.down.contains_key(&id)
    }

    /// Number of key slots currently down.
    pub fn len(&self) -> usize {
        self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.down.is_empty()
    }

    /// Iterates over `(slot, keysym)` pairs currently down.
    pub fn iter(&self) -> impl Iterator<Item = (KeyId, Keysym)> + '_ {
        self.down.iter().map(|(&id, &keysym)| (id, keysym))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
