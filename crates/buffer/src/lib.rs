// Chunk: docs/chunks/text_buffer - Bounded text buffer engine
// Chunk: docs/chunks/soft_wrap_reflow - Width-bounded soft wrapping of logical content

//! textarea-limiter-buffer: a bounded, soft-wrapping text buffer engine.
//!
//! The engine keeps the plain text of one multi-line field, enforces limits
//! counted in display width (full-width glyphs count two units, half-width
//! one), and re-wraps the text with soft breaks after every edit. It knows
//! nothing about DOM events or rendering: a host feeds it [`EditIntent`]s
//! together with its current selection and applies the returned
//! [`EngineResult`].
//!
//! # Overview
//!
//! - [`TextBuffer`]: the engine. One per field.
//! - [`LimiterConfig`]: line width, total width, line count, overflow mode.
//! - [`Layout`]: the displayed form, as visual lines, plus offset conversion
//!   between [`LogicalOffset`] and [`DisplayOffset`].
//! - [`width_of`]: the width rule.
//!
//! # Example
//!
//! ```
//! use textarea_limiter_buffer::{EditIntent, LimiterConfig, Selection, TextBuffer};
//!
//! let config = LimiterConfig {
//!     max_line_length: 4,
//!     ..LimiterConfig::default()
//! };
//! let mut buffer = TextBuffer::new(config).unwrap();
//!
//! let result = buffer
//!     .apply_edit(EditIntent::Insert("ABCDE".into()), Selection::caret(0))
//!     .unwrap();
//! assert_eq!(result.displayed_content, "ABCD\u{2028}E");
//! assert_eq!(buffer.content(), "ABCDE");
//!
//! // The caret sits after the soft break, in front of nothing.
//! assert_eq!(result.selection(), Selection::caret(6));
//! ```
//!
//! # Overflow
//!
//! With `auto_truncate` the buffer never exceeds its limits: input that does
//! not fit is dropped. Without it the buffer keeps whatever the user typed and
//! every result carries a [`LimitSignal`] so the host can mark the field
//! invalid.

mod composition;
mod config;
mod edit;
mod error;
mod gap_buffer;
mod grapheme;
mod limits;
mod line_index;
mod reflow;
mod text_buffer;
mod types;
mod width;

pub use composition::Composition;
pub use config::LimiterConfig;
pub use edit::{EditIntent, EngineResult};
pub use error::{ConfigError, EditError};
pub use grapheme::{grapheme_boundary_left, grapheme_boundary_right, is_grapheme_boundary};
pub use limits::{LimitPolicy, LimitSignal, OverflowMode};
pub use reflow::{measure, strip_markers, Layout, LineBreak, Measure, VisualLine, SOFT_BREAK_MARKER};
pub use text_buffer::{normalize_input, TextBuffer};
pub use types::{DisplayOffset, LogicalOffset, Position, Selection};
pub use width::{str_width, width_of, CharWidth};
