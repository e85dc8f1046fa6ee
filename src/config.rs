//! Manifest configuration.
//!
//! Every setting has a default matching the paths a static site expects, so
//! running the tool with no config file and no flags scans
//! `./static/wallpapers` and writes `./static/files.json`.
//!
//! Settings are layered: stock defaults, then an optional TOML file passed via
//! `--config`, then CLI flags.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source_dir = "./static/wallpapers"   # Directory to scan (not recursive)
//! output_path = "./static/files.json"  # Manifest destination, fully overwritten
//! on_decode_error = "abort"            # "abort" or "zero"
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SOURCE_DIR: &str = "./static/wallpapers";
pub const DEFAULT_OUTPUT_PATH: &str = "./static/files.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// What to do when an allow-listed file cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Propagate the decode error and abort the run.
    #[default]
    Abort,
    /// Record the file with zero width and height and keep going.
    Zero,
}

/// Manifest configuration.
///
/// All fields have defaults; a config file only needs the values it wants to
/// override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Directory whose direct entries are listed.
    pub source_dir: PathBuf,
    /// Manifest file written at the end of a successful run.
    pub output_path: PathBuf,
    /// Behaviour for malformed images with an allow-listed extension.
    pub on_decode_error: DecodePolicy,
    /// Parallel extraction settings.
    pub processing: ProcessingConfig,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            on_decode_error: DecodePolicy::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl ManifestConfig {
    /// Convenience constructor for embedding callers and tests.
    pub fn new(source_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "source_dir must not be empty".into(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_path must not be empty".into(),
            ));
        }
        if self.output_path.file_name().is_none() {
            return Err(ConfigError::Validation(format!(
                "output_path must name a file: {}",
                self.output_path.display()
            )));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel extraction workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Load and validate a TOML config file.
///
/// Values missing from the file keep their defaults.
pub fn load_config(path: &Path) -> Result<ManifestConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ManifestConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `--print-config` CLI flag.
pub fn stock_config_toml() -> &'static str {
    r##"# Wallpaper Manifest Configuration
# ================================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory to scan. Only direct entries are listed; dotfiles are skipped.
source_dir = "./static/wallpapers"

# Where the JSON manifest is written. The file is replaced atomically on
# every successful run. The parent directory must already exist.
output_path = "./static/files.json"

# What to do when a .jpg/.png/.gif file cannot be decoded:
#   "abort" - stop the run with an error, leaving any previous manifest intact
#   "zero"  - record the file with width = 0 and height = 0 and continue
on_decode_error = "abort"

# ---------------------------------------------------------------------------
# Parallel processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel workers for reading files. Omit to use all CPU cores.
# Set to 1 for fully sequential extraction.
# max_processes = 4
"##
}
