//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/ssm-tree/ssm-tree.toml`, or the file given with `--config`
//! 3. Environment variables: `SSM_TREE_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::NodeIdentity;

/// Valid range of the SSM `MaxResults` request field.
pub const PAGE_SIZE_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub identity: Option<NodeIdentity>,
    pub page_size: Option<i32>,
    pub details: Option<bool>,
}

/// Unified configuration for ssm-tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// AWS region (default: SDK provider chain)
    pub region: Option<String>,
    /// Named AWS profile (default: SDK provider chain)
    pub profile: Option<String>,
    /// Node identity used for deduplication
    pub identity: NodeIdentity,
    /// Records per page, 1..=10 (default: service default)
    pub page_size: Option<i32>,
    /// Show parameter type and version on leaves
    pub details: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            identity: NodeIdentity::Path,
            page_size: None,
            details: false,
        }
    }
}

/// Get the XDG config directory for ssm-tree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ssm-tree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("ssm-tree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self: overlay wins if Some, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            region: overlay.region.clone().or_else(|| self.region.clone()),
            profile: overlay.profile.clone().or_else(|| self.profile.clone()),
            identity: overlay.identity.unwrap_or(self.identity),
            page_size: overlay.page_size.or(self.page_size),
            details: overlay.details.unwrap_or(self.details),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; replaces the global config lookup.
    ///   Unlike the global file, it must exist.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        match config_file {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        let raw = load_raw_settings(&global_path)?;
                        current = current.merge_with(&raw);
                    }
                }
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.validate()?;
        Ok(current)
    }

    /// Apply SSM_TREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SSM_TREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("region") {
            settings.region = Some(val);
        }
        if let Ok(val) = config.get_string("profile") {
            settings.profile = Some(val);
        }
        if let Ok(val) = config.get_string("identity") {
            settings.identity = val.parse().map_err(|e: crate::domain::DomainError| {
                ApplicationError::Config {
                    message: format!("SSM_TREE_IDENTITY: {e}"),
                }
            })?;
        }
        if let Ok(val) = config.get_int("page_size") {
            settings.page_size = Some(i32::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("SSM_TREE_PAGE_SIZE out of range: {val}"),
            })?);
        }
        if let Ok(val) = config.get_bool("details") {
            settings.details = val;
        }

        Ok(settings)
    }

    /// Reject values the parameter store would refuse.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if let Some(size) = self.page_size {
            if !PAGE_SIZE_RANGE.contains(&size) {
                return Err(ApplicationError::Config {
                    message: format!(
                        "page_size must be between {} and {}, got {}",
                        PAGE_SIZE_RANGE.start(),
                        PAGE_SIZE_RANGE.end(),
                        size
                    ),
                });
            }
        }
        if matches!(&self.region, Some(r) if r.trim().is_empty()) {
            return Err(ApplicationError::Config {
                message: "region must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
