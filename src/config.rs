//! Settings from the embedded defaults, the user config file and the command line
//!
//! Resolution order, later wins:
//! 1. `config.toml` embedded in the binary
//! 2. the user file (`--config PATH`, or `<config dir>/sortty/config.toml`)
//! 3. command-line overrides
//!
//! Every value is clamped into its valid range when resolved, so the session
//! never sees an out-of-range size or delay.

use crate::algorithms::Algorithm;
use crate::array::clamp_size;
use crate::constants::{DEFAULT_DELAY, DEFAULT_HISTORY_LIMIT, DEFAULT_SIZE};
use crate::error::AppError;
use crate::session::clamp_delay;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
    #[serde(default)]
    runtime: RuntimeConfig,
}

#[derive(Debug, Deserialize, Default)]
struct DefaultsConfig {
    algorithm: Option<String>,
    size: Option<usize>,
    delay: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct RuntimeConfig {
    history_limit_mb: Option<usize>,
    seed: Option<u64>,
}

impl ConfigFile {
    /// Parse the defaults compiled into the binary
    pub fn embedded() -> Result<Self, AppError> {
        Self::parse(DEFAULT_CONFIG, Path::new("<embedded config.toml>"))
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, AppError> {
        toml::from_str(contents).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay every value `other` sets on top of `self`
    fn merge(&mut self, other: ConfigFile) {
        if other.defaults.algorithm.is_some() {
            self.defaults.algorithm = other.defaults.algorithm;
        }
        if other.defaults.size.is_some() {
            self.defaults.size = other.defaults.size;
        }
        if other.defaults.delay.is_some() {
            self.defaults.delay = other.defaults.delay;
        }
        if other.runtime.history_limit_mb.is_some() {
            self.runtime.history_limit_mb = other.runtime.history_limit_mb;
        }
        if other.runtime.seed.is_some() {
            self.runtime.seed = other.runtime.seed;
        }
    }
}

/// Location of the user config file, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sortty").join("config.toml"))
}

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub algorithm: Option<String>,
    pub size: Option<usize>,
    pub delay: Option<f64>,
    pub seed: Option<u64>,
}

/// Fully resolved, clamped settings for a session
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub size: usize,
    pub delay: f64,
    /// RNG seed; `None` draws from entropy
    pub seed: Option<u64>,
    /// History budget in bytes
    pub history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            algorithm: Algorithm::default(),
            size: DEFAULT_SIZE,
            delay: DEFAULT_DELAY,
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit `path` must exist and parse. The default user file is
    /// optional; if it is malformed a warning is logged and it is ignored.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self, AppError> {
        let mut file = ConfigFile::embedded()?;

        match path {
            Some(path) => file.merge(ConfigFile::load_from(path)?),
            None => {
                if let Some(path) = user_config_path().filter(|p| p.exists()) {
                    match ConfigFile::load_from(&path) {
                        Ok(user) => file.merge(user),
                        Err(e) => log::warn!(target: "config", "ignoring config: {}", e),
                    }
                }
            }
        }

        Ok(Self::resolve(file, overrides))
    }

    /// Combine a parsed file with command-line overrides
    pub fn resolve(file: ConfigFile, overrides: &Overrides) -> Self {
        let defaults = Settings::default();

        let algorithm = overrides
            .algorithm
            .as_deref()
            .or(file.defaults.algorithm.as_deref())
            .map(Algorithm::from_name)
            .unwrap_or(defaults.algorithm);
        let size = overrides
            .size
            .or(file.defaults.size)
            .unwrap_or(defaults.size);
        let delay = overrides
            .delay
            .or(file.defaults.delay)
            .unwrap_or(defaults.delay);
        let history_limit = file
            .runtime
            .history_limit_mb
            .map(|mb| mb.saturating_mul(1024 * 1024))
            .unwrap_or(defaults.history_limit);

        Settings {
            algorithm,
            size: clamp_size(size),
            delay: clamp_delay(delay),
            seed: overrides.seed.or(file.runtime.seed),
            history_limit,
        }
    }
}
