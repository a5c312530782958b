//! KeyboardSession: keyboard input for one remote connection.
//!
//! The session owns the translator for its connection.  The host's window
//! procedure calls [`KeyboardSession::handle_key`] for every keyboard message,
//! [`KeyboardSession::on_focus_lost`] when the viewer window is deactivated,
//! and [`KeyboardSession::on_disconnect`] when the connection closes.

use std::sync::Arc;

use rfb_keys_core::{
    CharacterRemapTable, CharacterTranslator, HardwareKeyEvent, KeyEventTranslator, KeyOutcome,
    KeysymLookupTable, ModifierSnapshot, PeerSink, RemapMode,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::infrastructure::config::KeyboardSection;

/// Error type for session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("keyboard session is disconnected")]
    Disconnected,
}

/// Lookup tables built once at startup and shared by every session.
#[derive(Debug, Clone)]
pub struct SharedTables {
    keysyms: Arc<KeysymLookupTable>,
    mode0: Arc<CharacterRemapTable>,
    mode1: Arc<CharacterRemapTable>,
}

impl SharedTables {
    pub fn new() -> Self {
        Self {
            keysyms: Arc::new(KeysymLookupTable::standard()),
            mode0: Arc::new(CharacterRemapTable::for_mode(RemapMode::Mode0)),
            mode1: Arc::new(CharacterRemapTable::for_mode(RemapMode::Mode1)),
        }
    }

    pub fn keysyms(&self) -> Arc<KeysymLookupTable> {
        Arc::clone(&self.keysyms)
    }

    pub fn remap(&self, mode: RemapMode) -> Arc<CharacterRemapTable> {
        match mode {
            RemapMode::Mode0 => Arc::clone(&self.mode0),
            RemapMode::Mode1 => Arc::clone(&self.mode1),
        }
    }
}

impl Default for SharedTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard state of one remote connection.
pub struct KeyboardSession<T, S> {
    translator: KeyEventTranslator<T, S>,
    connected: bool,
}

impl<T, S> KeyboardSession<T, S>
where
    T: CharacterTranslator,
    S: PeerSink,
{
    /// Creates a session using `settings` and the shared `tables`.
    pub fn new(tables: &SharedTables, settings: &KeyboardSection, chars: T, sink: S) -> Self {
        info!(
            "keyboard session started, remap mode {}",
            u8::from(settings.remap_mode)
        );
        Self {
            translator: KeyEventTranslator::new(
                tables.keysyms(),
                tables.remap(settings.remap_mode),
                chars,
                sink,
            ),
            connected: true,
        }
    }

    /// Translates one host key event and sends the result to the peer.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Disconnected`] after [`on_disconnect`](Self::on_disconnect).
    pub fn handle_key(
        &mut self,
        event: HardwareKeyEvent,
        modifiers: ModifierSnapshot,
    ) -> Result<KeyOutcome, SessionError> {
        if !self.connected {
            return Err(SessionError::Disconnected);
        }
        let outcome = self.translator.translate(event, modifiers);
        debug!("{} {} -> {outcome:?}", if event.down { "down" } else { "up" }, event.key);
        Ok(outcome)
    }

    /// The viewer window lost keyboard focus: key-ups for keys still held
    /// will go to another window, so release them on the peer now.
    pub fn on_focus_lost(&mut self) {
        if !self.connected {
            return;
        }
        let held = self.translator.tracker().len();
        if held > 0 {
            info!("focus lost, releasing {held} held key(s)");
        }
        self.translator.release_all_keys();
    }

    /// The connection is closing: release every held key and refuse further
    /// events.  Calling it twice does nothing the second time.
    pub fn on_disconnect(&mut self) {
        if !self.connected {
            warn!("on_disconnect called on a closed session");
            return;
        }
        let held = self.translator.tracker().len();
        info!("disconnecting, releasing {held} held key(s)");
        self.translator.release_all_keys();
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Number of keys the peer currently sees held.
    pub fn held_keys(&self) -> usize {
        self.translator.tracker().len()
    }

    pub fn sink(&self) -> &S {
        self.translator.sink()
    }
}
