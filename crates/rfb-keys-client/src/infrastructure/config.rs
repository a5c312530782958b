//! TOML-based keyboard configuration.
//!
//! The default location is platform-specific:
//! - Windows:  `%APPDATA%\RfbKeys\keyboard.toml`
//! - Linux:    `~/.config/rfbkeys/keyboard.toml`
//! - macOS:    `~/Library/Application Support/RfbKeys/keyboard.toml`
//!
//! Example:
//!
//! ```toml
//! [keyboard]
//! remap_mode = 1
//!
//! [logging]
//! log_level = "debug"
//! ```
//!
//! Every field has a default, so an empty file, or no file at all, is a valid
//! configuration.

use std::path::{Path, PathBuf};

use rfb_keys_core::RemapMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML, or a value outside its allowed range (e.g. an unknown
    /// remap mode).
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyboardConfig {
    #[serde(default)]
    pub keyboard: KeyboardSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Translation settings, fixed for the lifetime of a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyboardSection {
    /// Character remap table: `0` or `1`.
    #[serde(default)]
    pub remap_mode: RemapMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSection {
    /// `tracing` level or filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the platform default path of the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the base directory cannot
/// be determined from the environment.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("keyboard.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or a value is out
/// of range.
pub fn parse_config(content: &str) -> Result<KeyboardConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Loads configuration from `path`, returning the defaults if the file does
/// not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<KeyboardConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(KeyboardConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads configuration from `path`, or returns the defaults when there is no
/// path to load from (no `--config` and no platform config directory).
///
/// # Errors
///
/// Same as [`load_config`].
pub fn load_config_or_default(path: Option<&Path>) -> Result<KeyboardConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(KeyboardConfig::default()),
    }
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &KeyboardConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("RfbKeys"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("rfbkeys"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("RfbKeys")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_mode0_and_info() {
        // Arrange / Act
        let cfg = KeyboardConfig::default();

        // Assert
        assert_eq!(cfg.keyboard.remap_mode, RemapMode::Mode0);
        assert_eq!(cfg.logging.log_level, "info");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg = parse_config("").expect("empty config");
        assert_eq!(cfg, KeyboardConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides_only_given_fields() {
        // Arrange
        let toml_str = r#"
[keyboard]
remap_mode = 1
"#;

        // Act
        let cfg = parse_config(toml_str).expect("partial config");

        // Assert
        assert_eq!(cfg.keyboard.remap_mode, RemapMode::Mode1);
        assert_eq!(cfg.logging.log_level, "info");
    }

    #[test]
    fn test_unknown_remap_mode_is_rejected() {
        let result = parse_config("[keyboard]\nremap_mode = 2\n");

        let err = result.expect_err("mode 2 must be rejected");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("unknown remap mode 2"), "{err}");
    }

    #[test]
    fn test_invalid_toml_returns_parse_error() {
        let result = parse_config("[[[ not valid toml");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_remap_mode_serializes_as_number() {
        let mut cfg = KeyboardConfig::default();
        cfg.keyboard.remap_mode = RemapMode::Mode1;

        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");

        assert!(toml_str.contains("remap_mode = 1"), "{toml_str}");
    }

    #[test]
    fn test_load_config_returns_default_when_file_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.toml");

        let cfg = load_config(&path).expect("absent file is not an error");

        assert_eq!(cfg, KeyboardConfig::default());
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("keyboard.toml");
        let mut cfg = KeyboardConfig::default();
        cfg.keyboard.remap_mode = RemapMode::Mode1;
        cfg.logging.log_level = "rfb_keys_core=debug".to_string();

        // Act
        save_config(&path, &cfg).expect("save");
        let loaded = load_config(&path).expect("load");

        // Assert
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_no_config_location_uses_defaults() {
        let cfg = load_config_or_default(None).expect("defaults need no file");

        assert_eq!(cfg, KeyboardConfig::default());
    }

    #[test]
    fn test_given_config_location_is_loaded() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("keyboard.toml");
        std::fs::write(&path, "[keyboard]\nremap_mode = 1\n").expect("write");

        // Act
        let cfg = load_config_or_default(Some(&path)).expect("load");

        // Assert
        assert_eq!(cfg.keyboard.remap_mode, RemapMode::Mode1);
    }

    #[test]
    fn test_load_config_on_directory_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");

        let result = load_config(dir.path());

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
