//! Infrastructure layer: host-facing adapters and ambient services.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `rfb_keys_core`, but MUST NOT be imported by the core crate.
//!
//! # Sub-modules
//!
//! - **`char_translation`** – [`CharacterTranslator`] implementations: the
//!   `ToAscii` adapter on Windows, and a simulated layout for tests and the
//!   replay tool.
//!
//! - **`config`** – TOML configuration (remap mode, log level).
//!
//! - **`logging`** – `tracing-subscriber` setup.
//!
//! - **`peer_sink`** – Recording and logging [`PeerSink`] implementations.
//!
//! [`CharacterTranslator`]: rfb_keys_core::CharacterTranslator
//! [`PeerSink`]: rfb_keys_core::PeerSink

pub mod char_translation;
pub mod config;
pub mod logging;
pub mod peer_sink;
