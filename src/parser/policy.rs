//! Parse policy and per-parse clause tracking

use text_size::TextRange;

use super::errors::{ErrorCode, ParseContext, ParseError};

/// Parsing options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePolicy {
    /// Fold CRS labels and parameter names to lowercase as they are consumed.
    /// Parameter values are never folded.
    pub lowercase_label_text: bool,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        Self {
            lowercase_label_text: true,
        }
    }
}

impl ParsePolicy {
    /// Keep CRS labels and parameter names exactly as written
    pub fn preserve_case() -> Self {
        Self {
            lowercase_label_text: false,
        }
    }

    pub fn with_lowercase_label_text(mut self, enabled: bool) -> Self {
        self.lowercase_label_text = enabled;
        self
    }
}

/// Which at-most-once clauses one parse has consumed so far
///
/// Lives for a single parse call. The grammar alone cannot say that the CRS
/// comes before the uncertainty and that each appears once; these flags do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseState {
    crs_seen: bool,
    uncertainty_seen: bool,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crs_seen(&self) -> bool {
        self.crs_seen
    }

    pub fn uncertainty_seen(&self) -> bool {
        self.uncertainty_seen
    }

    /// Record a CRS clause spanning `range`
    pub fn mark_crs(&mut self, range: TextRange, context: ParseContext) -> Result<(), ParseError> {
        if self.crs_seen {
            return Err(ParseError::builder(ErrorCode::E0201)
                .range(range)
                .context(context)
                .hint("a geo URI carries at most one ';crs=' clause")
                .build());
        }
        if self.uncertainty_seen {
            return Err(ParseError::builder(ErrorCode::E0203)
                .range(range)
                .context(context)
                .hint("move ';crs=' before ';u='")
                .build());
        }
        self.crs_seen = true;
        Ok(())
    }

    /// Record an uncertainty clause spanning `range`
    pub fn mark_uncertainty(
        &mut self,
        range: TextRange,
        context: ParseContext,
    ) -> Result<(), ParseError> {
        if self.uncertainty_seen {
            return Err(ParseError::builder(ErrorCode::E0202)
                .range(range)
                .context(context)
                .hint("a geo URI carries at most one ';u=' clause")
                .build());
        }
        self.uncertainty_seen = true;
        Ok(())
    }

    /// Apply the clause rules to a generic parameter named `name`
    ///
    /// A parameter called `crs` or `u` (any case) counts as another
    /// occurrence of that clause.
    pub fn check_parameter(&mut self, name: &str, range: TextRange) -> Result<(), ParseError> {
        if name.eq_ignore_ascii_case("crs") {
            self.mark_crs(range, ParseContext::Parameter)
        } else if name.eq_ignore_ascii_case("u") {
            self.mark_uncertainty(range, ParseContext::Parameter)
        } else {
            Ok(())
        }
    }
}
