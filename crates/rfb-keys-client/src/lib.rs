//! rfb-keys-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the replay binary in `main.rs` share the same module tree.
//!
//! # What does the client do?
//!
//! A VNC viewer receives raw keyboard messages from its host window system.
//! This crate connects those messages to the translator in `rfb-keys-core`:
//!
//! 1. Asks the host's keyboard layout (`ToAscii` on Windows) which character
//!    each key-down produces.
//! 2. Loads the remap mode and log level from a TOML configuration file.
//! 3. Runs one [`KeyboardSession`](application::keyboard_session::KeyboardSession)
//!    per connection, which releases every held key when the viewer loses
//!    focus or disconnects so the remote side never sees a stuck key.

/// Application layer: keyboard sessions and script replay.
pub mod application;

/// Infrastructure layer: host adapters, configuration, logging, sinks.
pub mod infrastructure;
