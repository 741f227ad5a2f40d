//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/ztree/ztree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `ZTREE_*` prefix
//!
//! Command-line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::DEFAULT_BRANCHING;
use crate::errors::{ZtreeError, ZtreeResult};
use crate::traversal::Order;

/// Depth of the tree built by the default scenario.
pub const DEFAULT_LEVELS: usize = 3;

/// Effective settings for building and traversing a tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Level of the leaves (root is level 0)
    pub levels: usize,
    /// Children per inner node
    pub branching: usize,
    /// Traversal used when no order is given on the command line
    pub order: Order,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS,
            branching: DEFAULT_BRANCHING,
            order: Order::default(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub levels: Option<usize>,
    pub branching: Option<usize>,
    pub order: Option<Order>,
}

/// Get the XDG config directory for ztree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ztree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("ztree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ZtreeResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ZtreeError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ZtreeError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            levels: overlay.levels.unwrap_or(self.levels),
            branching: overlay.branching.unwrap_or(self.branching),
            order: overlay.order.unwrap_or(self.order),
        }
    }

    /// Load settings with full precedence chain.
    ///
    /// `config_path` must exist when given; the global config is optional.
    #[instrument(level = "debug")]
    pub fn load(config_path: Option<&Path>) -> ZtreeResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_path {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current.apply_env_overrides(Environment::with_prefix("ZTREE").prefix_separator("_"))
    }

    /// Defaults overlaid with a single file; ignores global config and environment.
    pub fn from_file(path: &Path) -> ZtreeResult<Self> {
        Ok(Self::default().merge_with(&load_raw_settings(path)?))
    }

    /// Apply `ZTREE_*` environment variables as explicit overrides.
    ///
    /// A variable that is set but does not parse is an error, not a silent fallback.
    fn apply_env_overrides(mut self, environment: Environment) -> ZtreeResult<Self> {
        let config = Config::builder()
            .add_source(environment)
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(&config, "levels")? {
            self.levels = val;
        }
        if let Some(val) = env_value(&config, "branching")? {
            self.branching = val;
        }
        if let Some(val) = env_value(&config, "order")? {
            self.order = val;
        }

        Ok(self)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ZtreeResult<String> {
        toml::to_string_pretty(self).map_err(|e| ZtreeError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# ztree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/ztree/ztree.toml
#   File:   ztree --config <file>
#   Env:    ZTREE_LEVELS, ZTREE_BRANCHING, ZTREE_ORDER
#   Flags:  --levels, --branching, --order

# Level of the leaves; the tree has branching^0 + ... + branching^levels nodes
# levels = 3

# Children per inner node
# branching = 8

# Traversal for the default run: z-preorder, z-preorder1, preorder, z-preorder2
# order = "z-preorder2"
"#
        .to_string()
    }
}

fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> ZtreeResult<Option<T>> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ZtreeError {
    ZtreeError::Config {
        message: e.to_string(),
    }
}
