//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files. Optional fields left
//! unset fall back to the values in [`super::defaults`].
//!
//! # Example Configuration
//!
//! ```toml
//! [display]
//! empty_message = "No contacts added"
//! max_name_width = 30
//! max_email_width = 40
//!
//! [form]
//! trim_whitespace = true
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Project config values override user config values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContactbookConfig {
    /// How the contact list is rendered
    #[serde(default)]
    pub display: DisplayConfig,

    /// Add/edit form behaviour
    #[serde(default)]
    pub form: FormConfig,
}

/// Rendering preferences for the contact list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Message shown when the list is empty.
    /// Default: "No contacts added".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,

    /// Maximum width of the name column before truncation.
    /// Default: 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_name_width: Option<usize>,

    /// Maximum width of the email column before truncation.
    /// Default: 40.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_email_width: Option<usize>,
}

/// Add/edit form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Strip surrounding whitespace from field values before submitting.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim_whitespace: Option<bool>,
}
