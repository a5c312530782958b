//! X11 KeySym values used on the RFB wire.
//!
//! The RFB protocol identifies keys by X11 KeySym (RFC 6143 §7.5.4), so the
//! constants here are taken directly from `X11/keysymdef.h`.
//! Reference: https://gitlab.freedesktop.org/xorg/proto/xorgproto/-/blob/master/include/X11/keysymdef.h
//!
//! # Latin-1 keysyms
//!
//! Printable Latin-1 characters (0x20–0x7E and 0xA0–0xFF) are their own
//! keysym: `XK_a` is 0x0061, `XK_eacute` is 0x00E9.  That is why the
//! translator can press a character code directly once it has one.  Only the
//! keys that do not produce a character (cursor keys, function keys,
//! modifiers, keypad) need an entry in the hardware table.

/// An X11 KeySym as sent in an RFB `KeyEvent` message.
pub type Keysym = u32;

// ── TTY function keys ─────────────────────────────────────────────────────────
pub const XK_BACKSPACE: Keysym = 0xFF08;
pub const XK_TAB: Keysym = 0xFF09;
pub const XK_CLEAR: Keysym = 0xFF0B;
pub const XK_RETURN: Keysym = 0xFF0D;
pub const XK_PAUSE: Keysym = 0xFF13;
pub const XK_SCROLL_LOCK: Keysym = 0xFF14;
pub const XK_ESCAPE: Keysym = 0xFF1B;
pub const XK_DELETE: Keysym = 0xFFFF;

// ── Cursor control ────────────────────────────────────────────────────────────
pub const XK_HOME: Keysym = 0xFF50;
pub const XK_LEFT: Keysym = 0xFF51;
pub const XK_UP: Keysym = 0xFF52;
pub const XK_RIGHT: Keysym = 0xFF53;
pub const XK_DOWN: Keysym = 0xFF54;
pub const XK_PRIOR: Keysym = 0xFF55;
pub const XK_NEXT: Keysym = 0xFF56;
pub const XK_END: Keysym = 0xFF57;

// ── Misc functions ────────────────────────────────────────────────────────────
pub const XK_SELECT: Keysym = 0xFF60;
pub const XK_PRINT: Keysym = 0xFF61;
pub const XK_EXECUTE: Keysym = 0xFF62;
pub const XK_INSERT: Keysym = 0xFF63;
pub const XK_MENU: Keysym = 0xFF67;
pub const XK_HELP: Keysym = 0xFF6A;
pub const XK_NUM_LOCK: Keysym = 0xFF7F;

// ── Keypad ────────────────────────────────────────────────────────────────────
pub const XK_KP_ENTER: Keysym = 0xFF8D;
pub const XK_KP_HOME: Keysym = 0xFF95;
pub const XK_KP_LEFT: Keysym = 0xFF96;
pub const XK_KP_UP: Keysym = 0xFF97;
pub const XK_KP_RIGHT: Keysym = 0xFF98;
pub const XK_KP_DOWN: Keysym = 0xFF99;
pub const XK_KP_PRIOR: Keysym = 0xFF9A;
pub const XK_KP_NEXT: Keysym = 0xFF9B;
pub const XK_KP_END: Keysym = 0xFF9C;
pub const XK_KP_BEGIN: Keysym = 0xFF9D;
pub const XK_KP_INSERT: Keysym = 0xFF9E;
pub const XK_KP_DELETE: Keysym = 0xFF9F;
pub const XK_KP_MULTIPLY: Keysym = 0xFFAA;
pub const XK_KP_ADD: Keysym = 0xFFAB;
pub const XK_KP_SEPARATOR: Keysym = 0xFFAC;
pub const XK_KP_SUBTRACT: Keysym = 0xFFAD;
pub const XK_KP_DECIMAL: Keysym = 0xFFAE;
pub const XK_KP_DIVIDE: Keysym = 0xFFAF;
pub const XK_KP_0: Keysym = 0xFFB0;
pub const XK_KP_1: Keysym = 0xFFB1;
pub const XK_KP_2: Keysym = 0xFFB2;
pub const XK_KP_3: Keysym = 0xFFB3;
pub const XK_KP_4: Keysym = 0xFFB4;
pub const XK_KP_5: Keysym = 0xFFB5;
pub const XK_KP_6: Keysym = 0xFFB6;
pub const XK_KP_7: Keysym = 0xFFB7;
pub const XK_KP_8: Keysym = 0xFFB8;
pub const XK_KP_9: Keysym = 0xFFB9;

// ── Function keys ─────────────────────────────────────────────────────────────
// F1..F24 are contiguous: XK_F1 + n is F(n+1).
pub const XK_F1: Keysym = 0xFFBE;
pub const XK_F24: Keysym = 0xFFD5;

// ── Modifiers ─────────────────────────────────────────────────────────────────
pub const XK_SHIFT_L: Keysym = 0xFFE1;
pub const XK_SHIFT_R: Keysym = 0xFFE2;
pub const XK_CONTROL_L: Keysym = 0xFFE3;
pub const XK_CONTROL_R: Keysym = 0xFFE4;
pub const XK_CAPS_LOCK: Keysym = 0xFFE5;
pub const XK_ALT_L: Keysym = 0xFFE9;
pub const XK_ALT_R: Keysym = 0xFFEA;
pub const XK_SUPER_L: Keysym = 0xFFEB;
pub const XK_SUPER_R: Keysym = 0xFFEC;

// ── Latin-1 / currency ────────────────────────────────────────────────────────
pub const XK_SPACE: Keysym = 0x0020;
pub const XK_EURO_SIGN: Keysym = 0x20AC;

/// Returns the keysym for function key `F<n>` (`n` in 1..=24).
///
/// Returns `None` outside that range.
pub const fn function_key(n: u8) -> Option<Keysym> {
    if n >= 1 && n <= 24 {
        Some(XK_F1 + (n as Keysym - 1))
    } else {
        None
    }
}
