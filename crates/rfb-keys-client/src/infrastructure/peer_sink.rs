//! [`PeerSink`] implementations that do not talk to a real peer.
//!
//! The connection to a VNC server lives outside this workspace; these sinks
//! let tests and the replay tool observe exactly what would be sent.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rfb_keys_core::{Keysym, PeerSink};
use tracing::info;

/// One key event as the peer would receive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTransition {
    pub keysym: Keysym,
    pub down: bool,
}

impl KeyTransition {
    pub const fn press(keysym: Keysym) -> Self {
        Self { keysym, down: true }
    }

    pub const fn release(keysym: Keysym) -> Self {
        Self {
            keysym,
            down: false,
        }
    }
}

impl fmt::Display for KeyTransition {
    /// `down 0x0061 'a'`, `up   0xff0d`: Latin-1 keysyms show their character.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.down { "down" } else { "up  " };
        write!(f, "{action} 0x{:04x}", self.keysym)?;
        match u8::try_from(self.keysym) {
            Ok(ch @ (0x20..=0x7E | 0xA0..=0xFF)) => write!(f, " '{}'", char::from(ch)),
            _ => Ok(()),
        }
    }
}

/// Records every event into a shared buffer.
///
/// Clones share the buffer, so one handle can be given to a translator while
/// another stays with the caller for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<KeyTransition>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything recorded so far.
    pub fn events(&self) -> Vec<KeyTransition> {
        self.events.borrow().clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<KeyTransition> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl PeerSink for RecordingSink {
    fn key_event(&mut self, keysym: Keysym, down: bool) {
        self.events.borrow_mut().push(KeyTransition { keysym, down });
    }
}

/// Logs each event at `info` and forwards it to an inner sink.
#[derive(Debug, Clone, Default)]
pub struct TracingSink<S> {
    inner: S,
}

impl<S: PeerSink> TracingSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: PeerSink> PeerSink for TracingSink<S> {
    fn key_event(&mut self, keysym: Keysym, down: bool) {
        info!(target: "rfb_keys::peer", "{}", KeyTransition { keysym, down });
        self.inner.key_event(keysym, down);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_clones_share_buffer() {
        // Arrange
        let observer = RecordingSink::new();
        let mut sink = observer.clone();

        // Act
        sink.key_event(0x61, true);
        sink.key_event(0x61, false);

        // Assert
        assert_eq!(
            observer.events(),
            vec![KeyTransition::press(0x61), KeyTransition::release(0x61)]
        );
    }

    #[test]
    fn test_take_empties_buffer() {
        let mut sink = RecordingSink::new();
        sink.key_event(0xFF0D, true);

        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_tracing_sink_forwards_to_inner() {
        let observer = RecordingSink::new();
        let mut sink = TracingSink::new(observer.clone());

        sink.key_event(0x20AC, true);

        assert_eq!(observer.events(), vec![KeyTransition::press(0x20AC)]);
    }

    #[test]
    fn test_display_shows_latin1_character() {
        assert_eq!(KeyTransition::press(0x61).to_string(), "down 0x0061 'a'");
        assert_eq!(KeyTransition::release(0xE9).to_string(), "up   0x00e9 'é'");
        assert_eq!(KeyTransition::press(0xFF0D).to_string(), "down 0xff0d");
        assert_eq!(KeyTransition::press(0x20AC).to_string(), "down 0x20ac");
    }
}
