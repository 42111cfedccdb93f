//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::{DisplayConfig, FormConfig};

pub const DEFAULT_EMPTY_MESSAGE: &str = "No contacts added";
pub const DEFAULT_MAX_NAME_WIDTH: usize = 30;
pub const DEFAULT_MAX_EMAIL_WIDTH: usize = 40;

pub const DEFAULT_TRIM_WHITESPACE: bool = true;

impl FormConfig {
    pub fn trim_whitespace(&self) -> bool {
        self.trim_whitespace.unwrap_or(DEFAULT_TRIM_WHITESPACE)
    }
}

impl DisplayConfig {
    pub fn empty_message(&self) -> &str {
        self.empty_message.as_deref().unwrap_or(DEFAULT_EMPTY_MESSAGE)
    }

    pub fn max_name_width(&self) -> usize {
        self.max_name_width.unwrap_or(DEFAULT_MAX_NAME_WIDTH)
    }

    pub fn max_email_width(&self) -> usize {
        self.max_email_width.unwrap_or(DEFAULT_MAX_EMAIL_WIDTH)
    }
}
