//! `rfb-keys-replay`: shows the keysym stream a key event script produces.
//!
//! Reads a script (see [`rfb_keys_client::application::replay`]) from a file
//! or stdin, runs it through a keyboard session backed by the simulated
//! US-International layout, and prints every event the peer would receive.
//!
//! ```text
//! $ rfb-keys-replay --mode 1 demos/altgr.keys
//! down 0xffe3
//! down 0xffea
//! up   0xffe3
//! ...
//! ```
//!
//! `RFB_KEYS_CONFIG` and `RFB_KEYS_MODE` stand in for `--config` and `--mode`;
//! the command line wins when both are given.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use rfb_keys_client::application::keyboard_session::{KeyboardSession, SharedTables};
use rfb_keys_client::application::replay::run_script;
use rfb_keys_client::infrastructure::{
    char_translation::mock::MockCharacterTranslator,
    config::{default_config_path, load_config_or_default},
    logging::init_logging,
    peer_sink::{RecordingSink, TracingSink},
};
use rfb_keys_core::RemapMode;

/// Replay host key events and print the resulting RFB key events
#[derive(Parser, Debug)]
#[command(name = "rfb-keys-replay")]
#[command(version)]
#[command(
    about = "Replay host key events and print the resulting RFB key events",
    long_about = None
)]
struct Args {
    /// Script of key events; `-` or absent reads stdin
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// TOML configuration file (defaults to the platform config location)
    #[arg(short, long, value_name = "CONFIG", env = "RFB_KEYS_CONFIG")]
    config: Option<PathBuf>,

    /// Remap mode, overriding the configuration
    #[arg(short, long, value_parser = parse_mode, env = "RFB_KEYS_MODE")]
    mode: Option<RemapMode>,
}

fn parse_mode(s: &str) -> Result<RemapMode, String> {
    let value: u8 = s.parse().map_err(|e| format!("{e}"))?;
    RemapMode::try_from(value).map_err(|e| e.to_string())
}

fn read_script(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display())),
        _ => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .context("reading script from stdin")?;
            Ok(script)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config_path, no_path_reason) = match args.config {
        Some(path) => (Some(path), None),
        None => match default_config_path() {
            Ok(path) => (Some(path), None),
            Err(e) => (None, Some(e)),
        },
    };
    let mut config = load_config_or_default(config_path.as_deref()).with_context(|| {
        let shown = config_path.as_deref().unwrap_or_else(|| Path::new("<none>"));
        format!("loading {}", shown.display())
    })?;
    if let Some(mode) = args.mode {
        config.keyboard.remap_mode = mode;
    }

    init_logging(&config.logging.log_level);
    if let Some(e) = no_path_reason {
        warn!("{e}, using the default config");
    }
    if let Some(path) = &config_path {
        info!("rfb-keys-replay starting, config {}", path.display());
    }

    let script = read_script(args.script.as_ref())?;

    let recording = RecordingSink::new();
    let mut session = KeyboardSession::new(
        &SharedTables::new(),
        &config.keyboard,
        MockCharacterTranslator::new(),
        TracingSink::new(recording.clone()),
    );
    run_script(&mut session, &script)?;

    for transition in recording.events() {
        println!("{transition}");
    }
    if session.held_keys() > 0 {
        info!("{} key(s) still held at end of script", session.held_keys());
    }
    Ok(())
}
