//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/uitree/uitree.toml`
//! 3. Explicit config file passed by the caller
//! 4. Environment variables: `UITREE_*` prefix, `__` as section separator

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::{Limits, MAX_ALL_CHILDREN, MAX_CHILDREN};
use crate::error::{Error, Result};

/// Capacity limits as configured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LimitSettings {
    /// Maximum immediate children per element
    pub max_children: usize,
    /// Maximum elements per traversal call, also the scratch buffer capacity
    pub max_all_children: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_children: MAX_CHILDREN,
            max_all_children: MAX_ALL_CHILDREN,
        }
    }
}

/// Raw limits for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLimitSettings {
    pub max_children: Option<usize>,
    pub max_all_children: Option<usize>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub log_filter: Option<String>,
    pub limits: RawLimitSettings,
}

/// Unified configuration for uitree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// `tracing` filter directive used by `init_logging` (default: "warn")
    pub log_filter: String,
    /// Tree capacity limits
    pub limits: LimitSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "warn".into(),
            limits: LimitSettings::default(),
        }
    }
}

/// Get the XDG config directory for uitree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "uitree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("uitree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("read {}: {}", path.display(), e)))?;
    toml::from_str(&content).map_err(|e| Error::config(format!("parse {}: {}", path.display(), e)))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional config file; unlike the global file it must exist
    ///
    /// The merged result is validated, see [`Settings::validate`].
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "applying global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Parse settings from a TOML string on top of the defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawSettings =
            toml::from_str(content).map_err(|e| Error::config(format!("parse: {e}")))?;
        let settings = Self::default().merge_with(&raw);
        settings.validate()?;
        Ok(settings)
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            log_filter: overlay
                .log_filter
                .clone()
                .unwrap_or_else(|| self.log_filter.clone()),
            limits: LimitSettings {
                max_children: overlay
                    .limits
                    .max_children
                    .unwrap_or(self.limits.max_children),
                max_all_children: overlay
                    .limits
                    .max_all_children
                    .unwrap_or(self.limits.max_all_children),
            },
        }
    }

    /// Apply UITREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("UITREE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<String>(&config, "log_filter")? {
            settings.log_filter = val;
        }
        if let Some(val) = env_value::<usize>(&config, "limits.max_children")? {
            settings.limits.max_children = val;
        }
        if let Some(val) = env_value::<usize>(&config, "limits.max_all_children")? {
            settings.limits.max_all_children = val;
        }

        Ok(settings)
    }

    /// Limits must be positive and a single element's fan-out must fit into
    /// one traversal.
    pub fn validate(&self) -> Result<()> {
        let LimitSettings {
            max_children,
            max_all_children,
        } = self.limits;
        if max_children == 0 || max_all_children == 0 {
            return Err(Error::config("limits must be greater than zero"));
        }
        if max_children > max_all_children {
            return Err(Error::config(format!(
                "max_children ({max_children}) exceeds max_all_children ({max_all_children})"
            )));
        }
        Ok(())
    }

    /// Limits to build trees and scratch buffers with.
    pub fn limits(&self) -> Limits {
        Limits {
            max_children: self.limits.max_children,
            max_all_children: self.limits.max_all_children,
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(format!("serialize config: {e}")))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# uitree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/uitree/uitree.toml
#   File:   explicit path passed to Settings::load
#   Env:    UITREE_* environment variables, e.g. UITREE_LIMITS__MAX_CHILDREN=50

# tracing filter directive
# log_filter = "warn"

[limits]
# Maximum immediate children per element
# max_children = 100

# Maximum elements enumerated by one traversal (scratch buffer capacity)
# max_all_children = 10000
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> Error {
    Error::config(e.to_string())
}

/// Unset keys are `None`; values that are set but do not parse are errors.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}
