//! Shell configuration.
//!
//! Loaded from `~/.config/vfsh/config.toml`. Every field is optional; a
//! missing file means defaults.
//!
//! ```toml
//! name = "portfolio"
//! user = "ada"
//! history_limit = 500
//!
//! [[routes]]
//! name = "blog"
//! path = "/blog"
//! description = "Read the blog"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::kernel::{default_routes, KernelConfig, Route, DEFAULT_STORAGE_KEY};
use crate::paths;
use crate::seed::DEFAULT_USER;
use crate::vfs::is_valid_name;
use crate::session::DEFAULT_HISTORY_LIMIT;

/// On-disk configuration for the vfsh shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Shell name (prompt and farewell).
    #[serde(default = "default_name")]
    pub name: String,

    /// Owner of the seeded home directory.
    #[serde(default = "default_user")]
    pub user: String,

    /// Storage key for the persisted filesystem.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Navigation commands. Replaces the built-in set when present.
    #[serde(default = "default_route_configs")]
    pub routes: Vec<RouteConfig>,
}

/// A navigation command as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub description: String,
}

fn default_name() -> String {
    "vfsh".to_string()
}

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_route_configs() -> Vec<RouteConfig> {
    default_routes().into_iter().map(RouteConfig::from).collect()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            user: default_user(),
            storage_key: default_storage_key(),
            history_limit: default_history_limit(),
            routes: default_route_configs(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let path = paths::config_path();

        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.history_limit == 0 {
            anyhow::bail!("history_limit must be at least 1");
        }
        if !is_valid_name(&config.user) {
            anyhow::bail!("user {:?} cannot be used as a directory name", config.user);
        }
        Ok(config)
    }
}

impl From<Route> for RouteConfig {
    fn from(route: Route) -> Self {
        Self {
            name: route.name,
            path: route.path,
            description: route.description,
        }
    }
}

impl From<RouteConfig> for Route {
    fn from(config: RouteConfig) -> Self {
        let description = if config.description.is_empty() {
            format!("Navigate to {}", config.path)
        } else {
            config.description
        };
        Route::new(config.name.to_lowercase(), config.path, description)
    }
}

impl From<ShellConfig> for KernelConfig {
    fn from(config: ShellConfig) -> Self {
        KernelConfig::named(&config.name)
            .with_user(config.user)
            .with_storage_key(config.storage_key)
            .with_history_limit(config.history_limit)
            .with_routes(config.routes.into_iter().map(Route::from).collect())
    }
}
