//! Editor configuration.
//!
//! Configuration is resolved once by the host application and passed into
//! the operations that need it. Nothing here reads the environment.

use crate::core::Background;
use thiserror::Error;

/// Prefix used for generated slide ids (`slide1`, `slide2`, ...).
pub const DEFAULT_SLIDE_ID_PREFIX: &str = "slide";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Slide id prefix cannot be empty")]
    EmptySlideIdPrefix,
}

/// Settings for slide creation.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    slide_id_prefix: String,
    default_background: Background,
}

impl EditorConfig {
    pub fn new(
        slide_id_prefix: impl Into<String>,
        default_background: Background,
    ) -> Result<Self, ConfigError> {
        let slide_id_prefix = slide_id_prefix.into();
        if slide_id_prefix.trim().is_empty() {
            return Err(ConfigError::EmptySlideIdPrefix);
        }

        Ok(Self {
            slide_id_prefix,
            default_background,
        })
    }

    pub fn slide_id_prefix(&self) -> &str {
        &self.slide_id_prefix
    }

    /// Background given to newly added slides.
    pub fn default_background(&self) -> &Background {
        &self.default_background
    }

    /// Slide id for the `k`-th candidate.
    pub fn slide_id(&self, k: usize) -> String {
        format!("{}{}", self.slide_id_prefix, k)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            slide_id_prefix: DEFAULT_SLIDE_ID_PREFIX.to_string(),
            default_background: Background::default(),
        }
    }
}
