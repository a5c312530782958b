//! Turning hardware key events into keysym events.
//!
//! [`KeyEventTranslator`] combines the static keysym table, the host's
//! character translator ([`CharacterTranslator`]), the remap table, and the
//! key ledger.  Keys with a fixed meaning (Enter, arrows, modifiers) go
//! through the table; everything else is sent as the character the host's
//! keyboard layout produces for it.

pub mod host;
pub mod translator;

pub use host::{is_printable_latin1, CharacterTranslator, Translation, EURO_ESCAPE};
pub use translator::{KeyEventTranslator, KeyOutcome};
