//! Configuration validation.

use crate::config::types::ContactbookConfig;
use crate::errors::ConfigError;

/// Narrowest column the table renderer can truncate into ("a..." needs 4).
pub const MIN_COLUMN_WIDTH: usize = 4;

/// Validate the configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` if a column width is below
/// [`MIN_COLUMN_WIDTH`].
pub fn validate_config(config: &ContactbookConfig) -> Result<(), ConfigError> {
    let widths = [
        ("max_name_width", config.display.max_name_width()),
        ("max_email_width", config.display.max_email_width()),
    ];

    for (key, width) in widths {
        if width < MIN_COLUMN_WIDTH {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "display.{} must be at least {}, got {}",
                    key, MIN_COLUMN_WIDTH, width
                ),
            });
        }
    }

    Ok(())
}
