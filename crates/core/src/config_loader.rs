use std::path::Path;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

pub const DEFAULT_CONFIG_PATH: &str = "config/Config.toml";
const ENV_PREFIX: &str = "GAMEDAY_";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from defaults, `config/Config.toml`, and
    /// `GAMEDAY_` environment variables, in increasing priority.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be parsed.
    pub fn load() -> Result<AppConfig> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Same as [`ConfigLoader::load`] with an explicit TOML path. A missing
    /// file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig> {
        let path = path.as_ref();
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Loads configuration with a profile overlay `config/Config.{profile}.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be parsed.
    pub fn load_with_profile(profile: &str) -> Result<AppConfig> {
        Self::load_with_profile_from(DEFAULT_CONFIG_PATH, profile)
    }

    /// Same as [`ConfigLoader::load_with_profile`] with an explicit base path.
    /// The overlay sits next to it: `dir/Config.toml` pairs with
    /// `dir/Config.{profile}.toml`. Either file may be missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be parsed.
    pub fn load_with_profile_from(path: impl AsRef<Path>, profile: &str) -> Result<AppConfig> {
        let path = path.as_ref();
        let overlay = path.with_extension(format!("{profile}.toml"));
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Toml::file(&overlay))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| {
                format!(
                    "Failed to load configuration from {} with profile {profile}",
                    path.display()
                )
            })?;

        tracing::debug!(path = %path.display(), overlay = %overlay.display(), "Loaded configuration");
        Ok(config)
    }
}
