//! Implementations of [`CharacterTranslator`](rfb_keys_core::CharacterTranslator).
//!
//! The Windows implementation is selected at compile time via
//! `#[cfg(target_os = ...)]`.  The mock simulates a layout with dead keys and
//! is used by tests and the replay tool on every platform.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;
