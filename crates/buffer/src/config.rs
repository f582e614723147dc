// Chunk: docs/chunks/limiter_config - Per-field limits and overflow behaviour

//! Limits for one field.
//!
//! The config deserializes from either snake_case or the camelCase names
//! form-binding hosts use (`maxTotalLength`, `maxLineLength`, `maxLines`,
//! `autoTruncate`). Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::limits::{LimitPolicy, OverflowMode};

/// Limits and overflow behaviour, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimiterConfig {
    /// Maximum summed width of the whole content, newlines excluded.
    #[serde(alias = "maxTotalLength")]
    pub max_total_length: usize,
    /// Maximum width of one visual line. Wider lines are soft-wrapped.
    #[serde(alias = "maxLineLength")]
    pub max_line_length: usize,
    /// Maximum number of visual lines; `None` means unlimited.
    #[serde(alias = "maxLines")]
    pub max_lines: Option<usize>,
    /// Drop overflowing input instead of reporting it.
    #[serde(alias = "autoTruncate")]
    pub auto_truncate: bool,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            max_total_length: 800,
            max_line_length: 80,
            max_lines: Some(10),
            auto_truncate: false,
        }
    }
}

impl LimiterConfig {
    /// Checks that every limit can be satisfied by some content.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_total_length == 0 {
            return Err(ConfigError::ZeroTotalLength);
        }
        if self.max_line_length < 2 {
            return Err(ConfigError::LineLengthTooSmall {
                max_line_length: self.max_line_length,
            });
        }
        if self.max_lines == Some(0) {
            return Err(ConfigError::ZeroMaxLines);
        }
        Ok(())
    }

    pub fn overflow_mode(&self) -> OverflowMode {
        if self.auto_truncate {
            OverflowMode::Truncate
        } else {
            OverflowMode::Signal
        }
    }

    /// Validates the config and builds the policy the engine enforces.
    pub fn to_policy(&self) -> Result<LimitPolicy, ConfigError> {
        self.validate()?;
        Ok(LimitPolicy::new(
            self.max_total_length,
            self.max_line_length,
            self.max_lines,
            self.overflow_mode(),
        ))
    }
}
