//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.hilo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Key bindings are kept as plain strings here; the TUI turns them into
//! real key matchers. Core stays free of terminal types.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HiloConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub seed: Option<u64>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KeysConfig {
    pub next: Option<Vec<String>>,
    pub reveal: Option<Vec<String>>,
    pub quit: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "hilo.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_NEXT_KEYS: &[&str] = &["tab"];
pub const DEFAULT_REVEAL_KEYS: &[&str] = &["space"];
pub const DEFAULT_QUIT_KEYS: &[&str] = &["q", "ctrl+c"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Fixed shuffle seed. `None` = seed from OS entropy.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub keys: KeyNames,
}

/// Key names per action, as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNames {
    pub next: Vec<String>,
    pub reveal: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeyNames {
    fn default() -> Self {
        Self {
            next: owned(DEFAULT_NEXT_KEYS),
            reveal: owned(DEFAULT_REVEAL_KEYS),
            quit: owned(DEFAULT_QUIT_KEYS),
        }
    }
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.hilo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".hilo").join("config.toml"))
}

/// Load config from `path`, or `~/.hilo/config.toml` when `path` is `None`.
///
/// A missing default config gets a commented-out template written in its place.
/// A missing explicit path is an error: the user asked for that file.
pub fn load_config(path: Option<&Path>) -> Result<HiloConfig, ConfigError> {
    if let Some(path) = path {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HiloConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(HiloConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<HiloConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: HiloConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Hilo Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# seed = 42                  # Fixed shuffle seed (or HILO_SEED / --seed); omit for random
# log_level = "info"         # "off", "error", "warn", "info", "debug", "trace" (or HILO_LOG_LEVEL)
# log_file = "hilo.log"

# [keys]
# Key names: a single character, tab, space, enter, esc, backspace,
# up, down, left, right, f1..f12; optionally prefixed with ctrl+, alt+ or shift+.
# next = ["tab"]
# reveal = ["space"]
# quit = ["q", "ctrl+c"]
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_seed` comes from `--seed` (None = not specified).
pub fn resolve(config: &HiloConfig, cli_seed: Option<u64>) -> ResolvedConfig {
    resolve_with_env(config, cli_seed, |name| std::env::var(name).ok())
}

fn resolve_with_env(
    config: &HiloConfig,
    cli_seed: Option<u64>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Seed: CLI → env → config → entropy
    let seed = cli_seed
        .or_else(|| {
            env("HILO_SEED").and_then(|raw| match raw.trim().parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!("Ignoring HILO_SEED={:?}: not an unsigned integer", raw);
                    None
                }
            })
        })
        .or(config.general.seed);

    // Log level: env → config → default
    let log_level = env("HILO_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|raw| match raw.trim().parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Ignoring unknown log level {:?}", raw);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .general
        .log_file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let defaults = KeyNames::default();
    let keys = KeyNames {
        next: pick_keys(config.keys.next.as_ref(), defaults.next),
        reveal: pick_keys(config.keys.reveal.as_ref(), defaults.reveal),
        quit: pick_keys(config.keys.quit.as_ref(), defaults.quit),
    };

    ResolvedConfig {
        seed,
        log_level,
        log_file,
        keys,
    }
}

/// An empty binding list would make the action unreachable, so it falls back too.
fn pick_keys(configured: Option<&Vec<String>>, default: Vec<String>) -> Vec<String> {
    match configured {
        Some(keys) if !keys.is_empty() => keys.clone(),
        Some(_) => {
            warn!("Empty key binding list in config, using defaults {:?}", default);
            default
        }
        None => default,
    }
}
