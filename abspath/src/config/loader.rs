//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::Config;
use crate::error::Result;

/// Loads configuration from a file and the environment.
///
/// # Examples
///
/// ```no_run
/// use abspath::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load(Some(Path::new("abspath.yaml"))).unwrap();
/// println!("style: {}", config.style_or_host());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read and parse one YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read and
    /// [`Error::Configuration`](crate::Error::Configuration) if it cannot be
    /// parsed.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Config::from_yaml_str(&contents)
    }

    /// Build the effective configuration: file (if any), then environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// environment override is invalid.
    pub fn load(file: Option<&Path>) -> Result<Config> {
        let mut config = Config::default();
        if let Some(path) = file {
            config.merge(&Self::load_file(path)?);
        }
        EnvironmentConfig::apply_overrides(&mut config)?;
        Ok(config)
    }
}
