//! Key code tables for translating host keys to RFB keysyms.
//!
//! The wire representation is the X11 KeySym (see [`keysym`]).  Keys that
//! never produce a character are translated through a static table keyed by
//! Windows virtual-key code and extended flag ([`windows_vk`]), loaded into a
//! [`KeysymLookupTable`] once at startup.

pub mod keysym;
pub mod lookup;
pub mod windows_vk;

pub use keysym::Keysym;
pub use lookup::KeysymLookupTable;
