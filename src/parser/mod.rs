//! Recursive descent parser for geo URIs
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Cursor (byte position, char classes from `base::chars`)
//!     ↓
//! Leaf lexers → number, pct-encoded, labeltext, pvalue
//!     ↓
//! Parser → one method per production, ParseState enforces clause rules
//!     ↓
//! GeoVisitor → GeoUri (or any caller-supplied visitor)
//! ```
//!
//! Parsing is a single synchronous pass over an immutable `&str`. Nothing
//! global is read or written, so independent inputs can be parsed from any
//! number of threads at once.

mod cursor;
pub mod errors;
pub mod grammar;
mod number;
mod percent;
mod policy;
mod visitor;

pub use cursor::Cursor;
pub use errors::{ErrorCategory, ErrorCode, ParseContext, ParseError};
pub use grammar::{Match, Parser, WGS84};
pub use number::{Sign, number};
pub use percent::{pct_encoded, percent_encode_into};
pub use policy::{ParsePolicy, ParseState};
pub use visitor::GeoVisitor;

use crate::syntax::GeoUri;

/// Parse a complete geo URI with the default policy
///
/// Labels and parameter names are folded to lowercase.
pub fn parse(input: &str) -> Result<GeoUri, ParseError> {
    parse_with_policy(input, ParsePolicy::default())
}

/// Parse a complete geo URI; the whole of `input` must match
pub fn parse_with_policy(input: &str, policy: ParsePolicy) -> Result<GeoUri, ParseError> {
    let (uri, pos) = parse_prefix(input, policy)?;

    if let Some(unexpected) = input[pos..].chars().next() {
        let end = pos + unexpected.len_utf8();
        let mut builder = ParseError::builder(ErrorCode::E0106)
            .message(format!("unexpected {:?}", unexpected))
            .range(text_size::TextRange::new(
                cursor::to_text_size(pos),
                cursor::to_text_size(end),
            ))
            .context(ParseContext::ParameterList);
        if unexpected == ';' {
            builder = builder.hint("a parameter name is letters, digits and '-'");
        } else {
            builder = builder.hint("escape this character as %XX");
        }
        let err = builder.build();
        tracing::debug!(error = %err, "geo URI has trailing input");
        return Err(err);
    }

    Ok(uri)
}

/// Parse the longest geo URI at the start of `input`
///
/// Returns the record and the byte position just past the matched text.
/// Input after that position is left for the caller.
pub fn parse_prefix(input: &str, policy: ParsePolicy) -> Result<(GeoUri, usize), ParseError> {
    let mut uri = GeoUri::default();
    let pos = parse_with(input, policy, &mut uri)?;
    Ok((uri, pos))
}

/// Parse the longest geo URI at the start of `input`, feeding `visitor`
///
/// Returns the byte position just past the matched text. On error, fields
/// delivered before the failing production stay delivered; build into a
/// scratch value when that matters.
pub fn parse_with<V: GeoVisitor + ?Sized>(
    input: &str,
    policy: ParsePolicy,
    visitor: &mut V,
) -> Result<usize, ParseError> {
    let mut parser = Parser::new(input, policy, visitor);
    match parser.geo_uri() {
        Ok(()) => {
            tracing::debug!(matched = parser.position(), len = input.len(), "parsed geo URI");
            Ok(parser.position())
        }
        Err(err) => {
            tracing::debug!(error = %err, "failed to parse geo URI");
            Err(err)
        }
    }
}

/// Cheap pre-filter: does `input` start with `geo:` (any case)?
///
/// Only the scheme and the colon are checked.
pub fn like_geo_uri(input: &str) -> bool {
    let mut cursor = Cursor::new(input);
    grammar::scheme(&mut cursor) && cursor.eat(b':')
}
