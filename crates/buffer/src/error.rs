// Chunk: docs/chunks/engine_errors - Edit and configuration errors

use thiserror::Error;

/// An edit the engine refused to apply. State is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Only `CompositionCommit` is accepted while an IME composition is open.
    #[error("cannot apply {intent} while an IME composition is active")]
    CompositionActive { intent: &'static str },
}

/// Limits that the engine cannot honour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_total_length must be at least 1")]
    ZeroTotalLength,

    /// A full-width character needs two units, so narrower lines could never
    /// hold it.
    #[error("max_line_length must be at least 2, got {max_line_length}")]
    LineLengthTooSmall { max_line_length: usize },

    #[error("max_lines must be at least 1 when set")]
    ZeroMaxLines,
}
