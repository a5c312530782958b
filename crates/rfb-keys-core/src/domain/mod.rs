//! Domain entities for keyboard translation.
//!
//! This module contains pure logic with no OS dependencies: key identities,
//! the modifier snapshot, the press/release ledger that keeps the peer's view
//! of the keyboard balanced, and the scoped modifier guard.
//!
//! Code in outer layers (the host adapters in `rfb-keys-client`) depends on
//! the domain, but the domain never depends on them, so everything here can
//! be unit-tested on any platform.

pub mod guard;
pub mod key;
pub mod modifiers;
pub mod tracker;
