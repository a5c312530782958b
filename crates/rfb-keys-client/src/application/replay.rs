//! Replays a textual key event script through a [`KeyboardSession`].
//!
//! Used by the `rfb-keys-replay` tool to show what a sequence of host
//! keyboard messages turns into on the wire.  One command per line; `#`
//! starts a comment.
//!
//! ```text
//! # AltGr+E on a US-International layout
//! down 0x11          # left Control
//! down 0x12 ext      # right Alt
//! down E
//! up E
//! up 0x12 ext
//! up 0x11
//! focus-lost
//! disconnect
//! ```
//!
//! Key codes are Windows virtual-key codes, written in hex (`0x41`),
//! decimal (`65`), or as a single letter or digit (`A`, `7`).  The modifier
//! snapshot passed with each event follows the modifier keys the script
//! presses and releases, as the host's keyboard state would.

use rfb_keys_core::keymap::windows_vk::{
    VK_CAPITAL, VK_CONTROL, VK_LCONTROL, VK_LMENU, VK_LSHIFT, VK_LWIN, VK_MENU, VK_NUMLOCK,
    VK_RCONTROL, VK_RMENU, VK_RSHIFT, VK_RWIN, VK_SHIFT,
};
use rfb_keys_core::{
    CharacterTranslator, HardwareKey, HardwareKeyEvent, ModifierSnapshot, PeerSink,
};
use thiserror::Error;

use super::keyboard_session::{KeyboardSession, SessionError};

/// Error type for script parsing and replay.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("line {line}: unknown command {command:?}")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: invalid key code {token:?}")]
    BadKeyCode { line: usize, token: String },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: {source}")]
    Session {
        line: usize,
        #[source]
        source: SessionError,
    },
}

/// One parsed script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    Key(HardwareKeyEvent),
    FocusLost,
    Disconnect,
}

/// Parses one script line.  Blank lines and comments yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`ReplayError`] naming `line` if the command or key code is invalid.
pub fn parse_line(text: &str, line: usize) -> Result<Option<ScriptCommand>, ReplayError> {
    let text = text.split('#').next().unwrap_or_default();
    let mut words = text.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let parsed = match command {
        "down" | "up" => {
            let token = words.next().ok_or_else(|| ReplayError::Malformed {
                line,
                reason: format!("{command} needs a key code"),
            })?;
            let code = parse_key_code(token).ok_or_else(|| ReplayError::BadKeyCode {
                line,
                token: token.to_string(),
            })?;
            let extended = match words.next() {
                None => false,
                Some("ext") => true,
                Some(other) => {
                    return Err(ReplayError::Malformed {
                        line,
                        reason: format!("expected \"ext\", found {other:?}"),
                    })
                }
            };
            ScriptCommand::Key(HardwareKeyEvent {
                key: HardwareKey::new(code, extended),
                down: command == "down",
            })
        }
        "focus-lost" => ScriptCommand::FocusLost,
        "disconnect" => ScriptCommand::Disconnect,
        other => {
            return Err(ReplayError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };

    if let Some(extra) = words.next() {
        return Err(ReplayError::Malformed {
            line,
            reason: format!("unexpected {extra:?}"),
        });
    }
    Ok(Some(parsed))
}

fn parse_key_code(token: &str) -> Option<u8> {
    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return u8::from_str_radix(hex, 16).ok();
    }
    match token.as_bytes() {
        [ch @ (b'A'..=b'Z' | b'0'..=b'9')] => Some(*ch),
        [ch @ b'a'..=b'z'] => Some(ch.to_ascii_uppercase()),
        _ => token.parse().ok(),
    }
}

/// Follows modifier key presses to produce the snapshot the host would report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierState {
    snapshot: ModifierSnapshot,
}

impl ModifierState {
    pub fn snapshot(&self) -> ModifierSnapshot {
        self.snapshot
    }

    /// Updates the state for `event`.  Call before translating the event:
    /// the host's state already includes the key that is going down.
    pub fn apply(&mut self, event: HardwareKeyEvent) {
        let code = event.key.code;
        let extended = event.key.extended;
        let bit = match code {
            VK_SHIFT | VK_LSHIFT => ModifierSnapshot::LEFT_SHIFT,
            VK_RSHIFT => ModifierSnapshot::RIGHT_SHIFT,
            VK_CONTROL if extended => ModifierSnapshot::RIGHT_CTRL,
            VK_CONTROL | VK_LCONTROL => ModifierSnapshot::LEFT_CTRL,
            VK_RCONTROL => ModifierSnapshot::RIGHT_CTRL,
            VK_MENU if extended => ModifierSnapshot::RIGHT_ALT,
            VK_MENU | VK_LMENU => ModifierSnapshot::LEFT_ALT,
            VK_RMENU => ModifierSnapshot::RIGHT_ALT,
            VK_LWIN => ModifierSnapshot::LEFT_META,
            VK_RWIN => ModifierSnapshot::RIGHT_META,
            VK_CAPITAL | VK_NUMLOCK => {
                if event.down {
                    let lock = if code == VK_CAPITAL {
                        ModifierSnapshot::CAPS_LOCK
                    } else {
                        ModifierSnapshot::NUM_LOCK
                    };
                    self.snapshot = ModifierSnapshot(self.snapshot.0 ^ lock);
                }
                return;
            }
            _ => return,
        };
        self.snapshot = if event.down {
            self.snapshot.with(bit)
        } else {
            ModifierSnapshot(self.snapshot.0 & !bit)
        };
    }
}

/// Runs every command in `script` against `session`.
///
/// # Errors
///
/// Stops at the first invalid line, or at a key event after `disconnect`.
pub fn run_script<T, S>(
    session: &mut KeyboardSession<T, S>,
    script: &str,
) -> Result<(), ReplayError>
where
    T: CharacterTranslator,
    S: PeerSink,
{
    let mut modifiers = ModifierState::default();
    for (index, text) in script.lines().enumerate() {
        let line = index + 1;
        match parse_line(text, line)? {
            None => {}
            Some(ScriptCommand::Key(event)) => {
                modifiers.apply(event);
                session
                    .handle_key(event, modifiers.snapshot())
                    .map_err(|source| ReplayError::Session { line, source })?;
            }
            Some(ScriptCommand::FocusLost) => session.on_focus_lost(),
            Some(ScriptCommand::Disconnect) => session.on_disconnect(),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_lines() {
        assert_eq!(
            parse_line("down 0x0D ext", 1),
            Ok(Some(ScriptCommand::Key(HardwareKeyEvent::down(0x0D, true))))
        );
        assert_eq!(
            parse_line("  up 65  # letter A", 2),
            Ok(Some(ScriptCommand::Key(HardwareKeyEvent::up(0x41, false))))
        );
        assert_eq!(
            parse_line("down e", 3),
            Ok(Some(ScriptCommand::Key(HardwareKeyEvent::down(b'E', false))))
        );
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("", 1), Ok(None));
        assert_eq!(parse_line("   # just a note", 2), Ok(None));
    }

    #[test]
    fn test_session_commands() {
        assert_eq!(parse_line("focus-lost", 1), Ok(Some(ScriptCommand::FocusLost)));
        assert_eq!(parse_line("disconnect", 1), Ok(Some(ScriptCommand::Disconnect)));
    }

    #[test]
    fn test_errors_name_the_line() {
        assert_eq!(
            parse_line("press 0x41", 4),
            Err(ReplayError::UnknownCommand {
                line: 4,
                command: "press".to_string()
            })
        );
        assert_eq!(
            parse_line("down 0x1FF", 5),
            Err(ReplayError::BadKeyCode {
                line: 5,
                token: "0x1FF".to_string()
            })
        );
        assert!(matches!(
            parse_line("down", 6),
            Err(ReplayError::Malformed { line: 6, .. })
        ));
        assert!(matches!(
            parse_line("down 0x41 extended", 7),
            Err(ReplayError::Malformed { line: 7, .. })
        ));
    }

    #[test]
    fn test_modifier_state_follows_keys() {
        // Arrange
        let mut state = ModifierState::default();

        // Act
        state.apply(HardwareKeyEvent::down(VK_CONTROL, false));
        state.apply(HardwareKeyEvent::down(VK_MENU, true));

        // Assert
        assert!(state.snapshot().contains(ModifierSnapshot::LEFT_CTRL));
        assert!(state.snapshot().contains(ModifierSnapshot::RIGHT_ALT));
        assert!(state.snapshot().is_ctrl_alt_chord());

        state.apply(HardwareKeyEvent::up(VK_CONTROL, false));
        assert!(!state.snapshot().ctrl());
    }

    #[test]
    fn test_caps_lock_toggles_on_press_only() {
        let mut state = ModifierState::default();

        state.apply(HardwareKeyEvent::down(VK_CAPITAL, false));
        state.apply(HardwareKeyEvent::up(VK_CAPITAL, false));
        assert!(state.snapshot().contains(ModifierSnapshot::CAPS_LOCK));

        state.apply(HardwareKeyEvent::down(VK_CAPITAL, false));
        assert!(!state.snapshot().contains(ModifierSnapshot::CAPS_LOCK));
    }
}
