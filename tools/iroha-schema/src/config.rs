// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tool configuration file.
//!
//! ```toml
//! log_level = "info"
//!
//! [codec]
//! max_depth = 128
//! max_sequence_len = 1048576
//! reject_trailing_bytes = true
//! ```

use iroha_schema::{CodecConfig, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Log level (trace, debug, info, warn, error) or an `EnvFilter` directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Decoder limits.
    #[serde(default)]
    pub codec: CodecConfig,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            codec: CodecConfig::default(),
        }
    }
}

impl ToolConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if EnvFilter::try_new(&self.log_level).is_err() {
            return Err(ConfigError::Invalid(format!(
                "log_level `{}` is not a valid filter",
                self.log_level
            )));
        }
        self.codec.validate()
    }
}
