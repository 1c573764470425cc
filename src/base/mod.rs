//! Foundation types for the geo URI toolchain.
//!
//! This module provides:
//! - [`chars`] - ASCII character classes used by the grammar
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other geouri modules.

pub mod chars;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
