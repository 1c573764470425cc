//! Parse error type
//!
//! Provides:
//! - Error codes for categorization
//! - The source range the error points at
//! - The production that was active
//! - Hints/suggestions for fixes

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::{ErrorCategory, ErrorCode};
use super::context::ParseContext;

/// A geo URI parse failure
///
/// Failure is terminal for the parse call that produced it: no partial
/// record is handed back alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,
    /// Byte range in the input
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
    /// Production active when the error was raised
    pub context: Option<ParseContext>,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl ParseError {
    /// Create a new error with minimal information
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            context: None,
            hint: None,
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Create a builder for more complex error construction
    pub fn builder(code: ErrorCode) -> ParseErrorBuilder {
        ParseErrorBuilder::new(code)
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the production this error was raised in
    pub fn with_context(mut self, context: ParseContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Check if this error has a hint
    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Category of the underlying code
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Check if this is a clause ordering/uniqueness violation
    pub fn is_semantic(&self) -> bool {
        self.code.is_semantic()
    }

    /// Byte offset the error starts at
    pub fn offset(&self) -> TextSize {
        self.range.start()
    }

    /// Format the error for display, including context and hint
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if let Some(context) = &self.context {
            result.push_str(&format!(
                " {} (expected {})",
                context.description(),
                context.expected_description()
            ));
        }
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

/// Builder for creating complex parse errors
#[derive(Debug)]
pub struct ParseErrorBuilder {
    code: ErrorCode,
    message: Option<String>,
    range: Option<TextRange>,
    context: Option<ParseContext>,
    hint: Option<String>,
}

impl ParseErrorBuilder {
    /// Create a new builder with an error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            range: None,
            context: None,
            hint: None,
        }
    }

    /// Set the error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the source range
    pub fn range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the offset (creates an empty range at that position)
    pub fn at_offset(mut self, offset: TextSize) -> Self {
        self.range = Some(TextRange::empty(offset));
        self
    }

    /// Set the active production
    pub fn context(mut self, context: ParseContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Add a hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Build the parse error
    ///
    /// Missing message falls back to the code's default message, missing
    /// range to an empty range at offset 0.
    pub fn build(self) -> ParseError {
        ParseError {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            range: self
                .range
                .unwrap_or_else(|| TextRange::empty(TextSize::new(0))),
            code: self.code,
            context: self.context,
            hint: self.hint,
        }
    }
}
