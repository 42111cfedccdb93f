//! # Configuration System
//!
//! Hierarchical TOML configuration for contactbook.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.contactbook/config.toml` (global user preferences)
//! 3. **Project config** - `./.contactbook/config.toml` (directory-specific overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.contactbook/config.toml
//! [display]
//! empty_message = "Nobody here yet"
//! max_name_width = 24
//!
//! [form]
//! trim_whitespace = false
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use contactbook_core::config::ContactbookConfig;
//!
//! fn example() -> Result<(), contactbook_core::ConfigError> {
//!     let config = ContactbookConfig::load_hierarchy()?;
//!     println!("{}", config.display.empty_message());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{ContactbookConfig, DisplayConfig, FormConfig};
pub use validation::{MIN_COLUMN_WIDTH, validate_config};

impl ContactbookConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
