//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Syntax errors (input does not match the grammar)
//! - E02xx: Semantic errors (grammar matched, clause rules violated)
//! - E03xx: Numeric conversion errors
//! - E04xx: Encoding errors

use std::fmt;

/// Broad classification of an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input does not match a required production
    Syntax,
    /// The grammar matched but a cross-clause rule was broken
    Semantic,
    /// A numeric literal could not be converted to a finite value
    Numeric,
    /// A decoded parameter value is not valid text
    Encoding,
}

/// Error codes for parser diagnostics
///
/// Each error code represents a specific failure, so callers can give
/// precise diagnostics without matching on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Syntax errors
    // =========================================================================
    /// Missing `geo` scheme
    E0101,
    /// Missing `:` after the scheme
    E0102,
    /// Malformed coordinates
    E0103,
    /// Malformed CRS label after `;crs=`
    E0104,
    /// Malformed uncertainty value after `;u=`
    E0105,
    /// Unexpected input after the last parameter
    E0106,

    // =========================================================================
    // E02xx: Semantic errors
    // =========================================================================
    /// CRS clause given more than once
    E0201,
    /// Uncertainty clause given more than once
    E0202,
    /// CRS clause after the uncertainty clause
    E0203,

    // =========================================================================
    // E03xx: Numeric conversion errors
    // =========================================================================
    /// Number does not fit a finite floating point value
    E0301,

    // =========================================================================
    // E04xx: Encoding errors
    // =========================================================================
    /// Percent-decoded parameter value is not UTF-8
    E0401,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Syntax
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            Self::E0106 => "E0106",
            // Semantic
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            // Numeric
            Self::E0301 => "E0301",
            // Encoding
            Self::E0401 => "E0401",
        }
    }

    /// Get the category this code belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105 | Self::E0106 => {
                ErrorCategory::Syntax
            }
            Self::E0201 | Self::E0202 | Self::E0203 => ErrorCategory::Semantic,
            Self::E0301 => ErrorCategory::Numeric,
            Self::E0401 => ErrorCategory::Encoding,
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Syntax => "syntax error",
            ErrorCategory::Semantic => "semantic error",
            ErrorCategory::Numeric => "numeric conversion error",
            ErrorCategory::Encoding => "encoding error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Syntax
            Self::E0101 => "expected 'geo' scheme",
            Self::E0102 => "expected ':' after scheme",
            Self::E0103 => "malformed coordinates",
            Self::E0104 => "malformed CRS label",
            Self::E0105 => "malformed uncertainty value",
            Self::E0106 => "unexpected input",
            // Semantic
            Self::E0201 => "duplicate CRS",
            Self::E0202 => "duplicate uncertainty",
            Self::E0203 => "CRS must precede uncertainty",
            // Numeric
            Self::E0301 => "number out of range",
            // Encoding
            Self::E0401 => "parameter value is not valid UTF-8",
        }
    }

    /// Check if this is a semantic (clause ordering/uniqueness) error
    pub fn is_semantic(&self) -> bool {
        self.category() == ErrorCategory::Semantic
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
