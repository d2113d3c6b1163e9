//! Layered configuration loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::GateConfig;
use crate::constants::{
    ENV_CACHE_BRANCH, ENV_CURRENT_BRANCH, ENV_IT_BRANCHES, ENV_START_DIR, PROJECT_CONFIG_FILE,
    USER_CONFIG_DIR, USER_CONFIG_FILE,
};
use crate::errors::ConfigError;
use crate::types::BranchSet;

/// On-disk shape of `branchgate.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    gate: GateConfig,
}

/// Programmatic overrides, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub it_branches: Option<BranchSet>,
    pub current_branch: Option<String>,
    pub start_dir: Option<PathBuf>,
    pub cache_branch: Option<bool>,
}

impl GateConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Programmatic overrides
    /// 2. Environment variables (`BRANCHGATE_*`)
    /// 3. Project config (`branchgate.toml` in `root`)
    /// 4. User config (`~/.branchgate/config.toml`)
    /// 5. Compiled defaults
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): programmatic overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration like [`GateConfig::load`], but never fail.
    ///
    /// Each file layer is merged on its own; a file that cannot be read or
    /// parsed is skipped while the other layers still apply. A field that
    /// fails validation is reset to its default. Every problem is returned
    /// alongside the config.
    pub fn load_lenient(
        root: &Path,
        overrides: Option<&ConfigOverrides>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        let file_layers = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(root.join(PROJECT_CONFIG_FILE)));
        for path in file_layers {
            if path.exists() {
                if let Err(e) = Self::merge_toml_file(&mut config, &path) {
                    errors.push(e);
                }
            }
        }

        Self::apply_env_overrides(&mut config);
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        if let Err(e) = config.validate_start_dir() {
            config.start_dir = None;
            errors.push(e);
        }

        (config, errors)
    }

    /// Compiled defaults plus the environment layer, without touching any file.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        Self::apply_env_overrides(&mut config);
        config
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str::<ConfigFile>(toml_str)
            .map(|file| file.gate)
            .map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let file = ConfigFile { gate: self.clone() };
        toml::to_string_pretty(&file).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_start_dir()
    }

    fn validate_start_dir(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.start_dir {
            if !dir.is_dir() {
                return Err(ConfigError::ValidationFailed {
                    field: "gate.start_dir".to_string(),
                    message: format!("{} is not a directory", dir.display()),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.branchgate/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }

    /// Merge a TOML file into the existing config.
    /// A relative `start_dir` is taken relative to the file's directory.
    fn merge_toml_file(config: &mut GateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut file_config: ConfigFile =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        if let (Some(dir), Some(parent)) = (&file_config.gate.start_dir, path.parent()) {
            if dir.is_relative() {
                file_config.gate.start_dir = Some(parent.join(dir));
            }
        }

        Self::merge(config, &file_config.gate);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` sets them.
    fn merge(base: &mut GateConfig, other: &GateConfig) {
        if !other.it_branches.is_empty() {
            base.it_branches = other.it_branches.clone();
        }
        if other.current_branch.is_some() {
            base.current_branch = other.current_branch.clone();
        }
        if other.start_dir.is_some() {
            base.start_dir = other.start_dir.clone();
        }
        if other.cache_branch.is_some() {
            base.cache_branch = other.cache_branch;
        }
    }

    /// Apply environment variable overrides.
    /// A set variable replaces the lower layers, even when empty.
    fn apply_env_overrides(config: &mut GateConfig) {
        if let Ok(val) = std::env::var(ENV_IT_BRANCHES) {
            config.it_branches = BranchSet::parse(&val);
        }
        if let Ok(val) = std::env::var(ENV_CURRENT_BRANCH) {
            config.current_branch = Some(val);
        }
        if let Some(val) = std::env::var_os(ENV_START_DIR) {
            config.start_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var(ENV_CACHE_BRANCH) {
            if let Ok(v) = val.parse::<bool>() {
                config.cache_branch = Some(v);
            }
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut GateConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.it_branches {
            config.it_branches = v.clone();
        }
        if let Some(ref v) = overrides.current_branch {
            config.current_branch = Some(v.clone());
        }
        if let Some(ref v) = overrides.start_dir {
            config.start_dir = Some(v.clone());
        }
        if let Some(v) = overrides.cache_branch {
            config.cache_branch = Some(v);
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
