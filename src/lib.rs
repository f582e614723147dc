// Chunk: docs/chunks/field_adapter - Host event to edit intent adapter
//!
//! textarea-limiter: a width-limited, auto-wrapping text field.
//!
//! The editing engine lives in `textarea-limiter-buffer`; this crate binds it
//! to a host control. [`LimitedField`] consumes host events and tells the host
//! what to write back, and [`script`] replays recorded sessions headlessly.
//!
//! # Example
//!
//! ```
//! use textarea_limiter::{Handled, LimitedField};
//! use textarea_limiter::buffer::LimiterConfig;
//! use textarea_limiter::input::{HostEvent, KeyEvent};
//!
//! let config = LimiterConfig {
//!     max_line_length: 4,
//!     ..LimiterConfig::default()
//! };
//! let mut field = LimitedField::new(config).unwrap();
//!
//! let mut response = None;
//! for ch in "ABCDE".chars() {
//!     response = Some(field.handle_event(HostEvent::Key(KeyEvent::char(ch))));
//! }
//! let response = response.unwrap();
//! assert_eq!(response.handled, Handled::Yes);
//! assert_eq!(response.update.unwrap().value, "ABCD\u{2028}E");
//! ```

pub mod field;
pub mod script;

pub use field::{FieldResponse, FieldUpdate, Handled, LimitedField};

pub use textarea_limiter_buffer as buffer;
pub use textarea_limiter_input as input;
