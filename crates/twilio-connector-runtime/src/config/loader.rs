//! Configuration loader using figment.
//!
//! Supports layered loading from multiple sources, later sources overriding
//! earlier ones:
//!
//! 1. Built-in defaults
//! 2. Profile-specific config file (`twilio.{profile}.toml`)
//! 3. Main config file (`twilio.toml` / `config.toml`)
//! 4. Environment variables (`TWILIO_*`)
//! 5. Programmatic overrides
//!
//! # Environment Variable Mapping
//!
//! Environment variables use the `TWILIO_` prefix with `__` as separator:
//!
//! - `TWILIO_TWILIO__ACCOUNT_SID=AC...` → `twilio.account_sid = "AC..."`
//! - `TWILIO_TWILIO__AUTH_TOKEN=xxx` → `twilio.auth_token = "xxx"`
//! - `TWILIO_LOGGING__LEVEL=debug` → `logging.level = "debug"`
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_connector_runtime::ConfigLoader;
//!
//! // Simple loading from default locations
//! let config = ConfigLoader::new().load()?;
//!
//! // Load from a specific file with env overrides
//! let config = ConfigLoader::new()
//!     .file("./conf/twilio.toml")
//!     .with_env()
//!     .load()?;
//! ```

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::{debug, info, trace, warn};

use super::error::{ConfigError, ConfigResult};
use super::schema::ConnectorConfig;

/// Configuration profile for environment-specific settings.
#[derive(Debug, Clone, Default)]
pub enum Profile {
    /// Development profile (default).
    #[default]
    Development,
    /// Production profile.
    Production,
    /// Custom profile name.
    Custom(String),
}

impl Profile {
    /// Returns the profile name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Custom(name) => name,
        }
    }

    /// Creates a profile from `TWILIO_PROFILE` or defaults to Development.
    pub fn from_env() -> Self {
        std::env::var("TWILIO_PROFILE")
            .map(|p| Self::from_name(&p))
            .unwrap_or_default()
    }

    fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "development" | "dev" => Self::Development,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration loader with figment-based multi-source support.
pub struct ConfigLoader {
    /// Base figment instance.
    figment: Figment,
    /// Configuration profile.
    profile: Profile,
    /// Search paths for configuration files.
    search_paths: Vec<PathBuf>,
    /// Whether to load environment variables.
    load_env: bool,
    /// Specific config file to load (overrides search).
    config_file: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Base file names searched in each search path.
    const BASE_NAMES: [&'static str; 2] = ["twilio.toml", "config.toml"];

    /// Creates a new configuration loader with defaults.
    pub fn new() -> Self {
        Self {
            figment: Figment::new(),
            profile: Profile::from_env(),
            search_paths: Vec::new(),
            load_env: true,
            config_file: None,
        }
    }

    /// Sets the configuration profile.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Profile::from_name(&profile.into());
        self
    }

    /// Adds a search path for configuration files.
    pub fn search_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.search_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Sets a specific configuration file to load.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enables loading environment variables (default: true).
    pub fn with_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Disables loading environment variables.
    pub fn without_env(mut self) -> Self {
        self.load_env = false;
        self
    }

    /// Merges additional configuration programmatically.
    pub fn merge(mut self, config: ConnectorConfig) -> Self {
        self.figment = self.figment.merge(Serialized::defaults(config));
        self
    }

    /// Loads and returns the configuration.
    pub fn load(self) -> ConfigResult<ConnectorConfig> {
        let profile = self.profile.clone();
        let figment = self.build_figment()?;

        let config: ConnectorConfig = figment.extract().map_err(|e| {
            ConfigError::ParseError(format!("Failed to extract configuration: {e}"))
        })?;

        debug!(
            profile = %profile,
            logging_level = %config.logging.level,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Builds the figment instance with all sources.
    fn build_figment(mut self) -> ConfigResult<Figment> {
        // Start with defaults
        let mut figment = Figment::from(Serialized::defaults(ConnectorConfig::default()));

        // Merge user's pre-configured figment
        let user_figment = std::mem::take(&mut self.figment);
        figment = figment.merge(user_figment);

        // Load config files
        if let Some(path) = &self.config_file {
            if path.exists() {
                info!(path = %path.display(), "Loading configuration file");
                figment = figment.merge(Toml::file(path));
            } else {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
        } else {
            figment = self.load_config_files(figment);
        }

        // Load environment variables
        if self.load_env {
            trace!("Loading environment variables with TWILIO_ prefix");
            figment = figment.merge(
                Env::prefixed("TWILIO_")
                    .split("__")
                    .map(|key| key.as_str().replace("__", ".").into()),
            );
        }

        Ok(figment)
    }

    /// Resolves the effective list of search paths.
    fn resolve_search_paths(&self) -> Vec<PathBuf> {
        if self.search_paths.is_empty() {
            let mut paths = Vec::new();
            if let Ok(cwd) = std::env::current_dir() {
                paths.push(cwd);
            }
            if let Some(config_dir) = dirs::config_dir() {
                paths.push(config_dir.join("twilio-connector"));
            }
            paths
        } else {
            self.search_paths.clone()
        }
    }

    /// Searches for and loads configuration files from search paths.
    ///
    /// A profile-specific variant (`twilio.production.toml`) is merged before
    /// its base file; the search stops at the first base file found.
    fn load_config_files(&self, mut figment: Figment) -> Figment {
        for search_path in self.resolve_search_paths() {
            for base_name in Self::BASE_NAMES {
                let (stem, ext) = base_name
                    .rsplit_once('.')
                    .unwrap_or((base_name, "toml"));

                let profile_name = format!("{}.{}.{}", stem, self.profile.as_str(), ext);
                let profile_path = search_path.join(&profile_name);
                if profile_path.exists() {
                    debug!(path = %profile_path.display(), "Loading profile-specific config");
                    figment = figment.merge(Toml::file(&profile_path));
                }

                let base_path = search_path.join(base_name);
                if base_path.exists() {
                    info!(path = %base_path.display(), "Loading configuration file");
                    return figment.merge(Toml::file(&base_path));
                }
            }
        }

        warn!("No configuration file found, using defaults");
        figment
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn temp_config_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "twilio-connector-loader-{tag}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_config() {
        let config = ConfigLoader::new().without_env().load().unwrap();

        assert_eq!(config.logging.level.as_str(), "info");
        assert!(config.twilio.account_sid.is_empty());
        assert!(config.twilio.auto_generate_models);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ConfigLoader::new()
            .file("/nonexistent/twilio.toml")
            .without_env()
            .load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_programmatic_merge_overrides_defaults() {
        let mut overrides = ConnectorConfig::default();
        overrides.twilio.from_number = "+15005550006".to_string();

        let config = ConfigLoader::new()
            .merge(overrides)
            .without_env()
            .load()
            .unwrap();

        assert_eq!(config.twilio.from_number, "+15005550006");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = temp_config_dir("file");
        let path = dir.join("twilio.toml");
        fs::write(
            &path,
            "[twilio]\naccount_sid = \"ACfile\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = ConfigLoader::new()
            .file(&path)
            .without_env()
            .load()
            .unwrap();

        assert_eq!(config.twilio.account_sid, "ACfile");
        assert_eq!(config.logging.level.as_str(), "debug");
        // Defaults survive where the file is silent.
        assert!(config.twilio.auto_generate_models);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_profile_variant_merges_before_base() {
        let dir = temp_config_dir("profile");
        fs::write(
            dir.join("twilio.production.toml"),
            "[twilio]\naccount_sid = \"ACprofile\"\nauth_token = \"variant-token\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("twilio.toml"),
            "[twilio]\nauth_token = \"base-token\"\n",
        )
        .unwrap();

        let config = ConfigLoader::new()
            .profile("production")
            .search_path(&dir)
            .without_env()
            .load()
            .unwrap();

        // The variant contributes keys the base file omits; the base file,
        // merged after it, wins where both set the same key.
        assert_eq!(config.twilio.account_sid, "ACprofile");
        assert_eq!(config.twilio.auth_token, "base-token");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = temp_config_dir("env");
        let path = dir.join("twilio.toml");
        fs::write(
            &path,
            "[twilio]\naccount_sid = \"ACfile\"\nauth_token = \"file-token\"\n",
        )
        .unwrap();

        // SAFETY: This test is single-threaded and we clean up immediately after
        unsafe {
            std::env::set_var("TWILIO_TWILIO__AUTH_TOKEN", "env-token");
        }
        let config = ConfigLoader::new().file(&path).with_env().load().unwrap();
        unsafe {
            std::env::remove_var("TWILIO_TWILIO__AUTH_TOKEN");
        }

        assert_eq!(config.twilio.auth_token, "env-token");
        assert_eq!(config.twilio.account_sid, "ACfile");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_profile_from_name() {
        assert!(matches!(
            Profile::from_name("prod"),
            Profile::Production
        ));
        assert!(matches!(
            Profile::from_name("staging"),
            Profile::Custom(name) if name == "staging"
        ));
    }
}
