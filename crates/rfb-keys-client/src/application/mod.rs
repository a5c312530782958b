//! Application layer use cases for the client.
//!
//! - **`keyboard_session`** – One remote connection's keyboard: feeds host
//!   key events through a translator and makes sure the peer is left with no
//!   keys held when focus or the connection goes away.
//!
//! - **`replay`** – Drives a session from a textual script of key events,
//!   for the `rfb-keys-replay` diagnostic tool.

pub mod keyboard_session;
pub mod replay;
