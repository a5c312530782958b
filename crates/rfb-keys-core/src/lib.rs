//! # rfb-keys-core
//!
//! Translation of host keyboard events into the keysym press/release stream
//! of the RFB (VNC) protocol.
//!
//! This crate has no OS dependencies.  The host's keyboard-layout service and
//! the connection to the peer are both traits, implemented by
//! `rfb-keys-client` (or by tests).
//!
//! # Architecture overview
//!
//! - **`keymap`** – Keysym constants and the static table mapping Windows
//!   virtual-key codes to keysyms for keys that never produce a character.
//!
//! - **`remap`** – Optional per-character rewriting for peers whose keyboard
//!   layout disagrees with the viewer's.
//!
//! - **`domain`** – Key identities, the modifier snapshot, and the ledger that
//!   guarantees every press the peer sees is eventually released with the
//!   same keysym.
//!
//! - **`translate`** – The translator that ties the above together, one event
//!   at a time.

pub mod domain;
pub mod keymap;
pub mod remap;
pub mod translate;

pub use domain::key::{HardwareKey, HardwareKeyEvent, KeyId};
pub use domain::modifiers::ModifierSnapshot;
pub use domain::tracker::{KeyStateTracker, PeerSink};
pub use keymap::{Keysym, KeysymLookupTable};
pub use remap::{CharacterRemapTable, InvalidRemapMode, RemapEntry, RemapMode};
pub use translate::{CharacterTranslator, KeyEventTranslator, KeyOutcome, Translation};
