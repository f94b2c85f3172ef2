// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec configuration.
//!
//! Supports both programmatic and file-based configuration.
//!
//! ```toml
//! max_depth = 128
//! max_sequence_len = 1048576
//! reject_trailing_bytes = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Limits applied while decoding untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Maximum nesting of composite values.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum element count of a sequence or map, and byte length of a string.
    #[serde(default = "default_max_sequence_len")]
    pub max_sequence_len: usize,

    /// Fail when bytes remain after the top-level value.
    #[serde(default = "default_true")]
    pub reject_trailing_bytes: bool,
}

fn default_max_depth() -> usize {
    128
}

fn default_max_sequence_len() -> usize {
    1 << 20
}

fn default_true() -> bool {
    true
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_sequence_len: default_max_sequence_len(),
            reject_trailing_bytes: true,
        }
    }
}

impl CodecConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        if self.max_sequence_len == 0 {
            return Err(ConfigError::Invalid(
                "max_sequence_len must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Accept trailing bytes (for decoding a message prefix).
    pub fn allow_trailing_bytes(mut self) -> Self {
        self.reject_trailing_bytes = false;
        self
    }
}
