//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.contactbook/config.toml`
//! 3. **Project config** - `./.contactbook/config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{ContactbookConfig, DisplayConfig, FormConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

pub const CONFIG_DIR_NAME: &str = ".contactbook";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Path of the config file under a root directory (home or project).
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.contactbook/config.toml`)
/// 3. Project config (`./.contactbook/config.toml`)
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<ContactbookConfig, ConfigError> {
    let project_root =
        std::env::current_dir().map_err(|source| ConfigError::CurrentDirUnavailable { source })?;
    load_from_roots(dirs::home_dir().as_deref(), &project_root)
}

/// Load and merge the user config under `home` and the project config under
/// `project_root`. A `None` home skips the user layer.
pub fn load_from_roots(
    home: Option<&Path>,
    project_root: &Path,
) -> Result<ContactbookConfig, ConfigError> {
    let mut config = ContactbookConfig::default();

    if let Some(home) = home
        && let Some(user_config) = load_optional(&config_path(home))?
    {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_optional(&config_path(project_root))? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a config file, treating a missing file as `None`.
fn load_optional(path: &Path) -> Result<Option<ContactbookConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => {
            debug!(event = "core.config.file_loaded", path = %path.display());
            Ok(Some(config))
        }
        Err(ConfigError::ConfigNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<ContactbookConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::IoError { source: e }
        }
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(
    base: ContactbookConfig,
    override_config: ContactbookConfig,
) -> ContactbookConfig {
    ContactbookConfig {
        display: DisplayConfig {
            empty_message: override_config
                .display
                .empty_message
                .or(base.display.empty_message),
            max_name_width: override_config
                .display
                .max_name_width
                .or(base.display.max_name_width),
            max_email_width: override_config
                .display
                .max_email_width
                .or(base.display.max_email_width),
        },
        form: FormConfig {
            trim_whitespace: override_config
                .form
                .trim_whitespace
                .or(base.form.trim_whitespace),
        },
    }
}
