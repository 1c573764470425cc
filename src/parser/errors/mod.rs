//! Parser error handling module
//!
//! - Categorized error codes (syntax, semantic, numeric, encoding)
//! - The production active when the error was raised
//! - Hints for common mistakes

mod codes;
mod context;
mod error;

pub use codes::{ErrorCategory, ErrorCode};
pub use context::ParseContext;
pub use error::{ParseError, ParseErrorBuilder};
