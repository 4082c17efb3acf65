//! Calculator configuration.
//!
//! Layers, later ones win:
//! 1. built-in defaults
//! 2. `matcalc.toml` in the working directory (or the file passed with `--config`)
//! 3. `MATCALC_*` environment variables
//! 4. command line flags (applied by the caller)

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::operation::registry::{MAX_CAPACITY, MIN_CAPACITY};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "matcalc.toml";
/// Prefix of environment variables that override the configuration.
pub const ENV_PREFIX: &str = "MATCALC_";

/// Largest matrix side accepted by `eval`.
pub const MAX_MATRIX_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry capacity bound. `None` leaves the registry unbounded unless
    /// `bounded` asks for one at startup.
    pub capacity: Option<usize>,
    /// Ask for a capacity before the first command when none is configured.
    pub bounded: bool,
    /// Upper bound on the side of matrices read by `eval`.
    pub max_matrix_size: usize,
    /// How many `read` scripts may be nested.
    pub max_read_depth: usize,
    /// Number of history entries kept.
    pub history_size: usize,
    /// Log filter handed to env_logger.
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: None,
            bounded: false,
            max_matrix_size: MAX_MATRIX_SIZE,
            max_read_depth: 16,
            history_size: 32,
            log: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load the layered configuration. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        if path.is_some() && !file.exists() {
            anyhow::bail!("config file {} not found", file.display());
        }
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the interpreter cannot honour.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(capacity) = self.capacity {
            anyhow::ensure!(
                (MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity),
                "capacity must be between {MIN_CAPACITY} and {MAX_CAPACITY}, got {capacity}"
            );
        }
        anyhow::ensure!(
            (1..=MAX_MATRIX_SIZE).contains(&self.max_matrix_size),
            "max_matrix_size must be between 1 and {MAX_MATRIX_SIZE}, got {}",
            self.max_matrix_size
        );
        anyhow::ensure!(self.max_read_depth > 0, "max_read_depth must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_matrix_size, 5);
        assert_eq!(config.capacity, None);
    }

    #[test]
    fn test_validate_rejects_bad_capacity() {
        let config = Config {
            capacity: Some(101),
            ..Config::default()
        };
        assert!(config.validate().is_err());
        let config = Config {
            max_matrix_size: 6,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_layers_file_and_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "capacity = 10\nlog = \"info\"")?;
            jail.set_env("MATCALC_MAX_READ_DEPTH", "4");
            let config = Config::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.capacity, Some(10));
            assert_eq!(config.log, "info");
            assert_eq!(config.max_read_depth, 4);
            assert_eq!(config.history_size, 32);
            Ok(())
        });
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        figment::Jail::expect_with(|_jail| {
            assert!(Config::load(Some(Path::new("nope.toml"))).is_err());
            Ok(())
        });
    }
}
