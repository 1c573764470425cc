//! Numeric lexer
//!
//! ```text
//! num  = [ "-" ] pnum
//! pnum = 1*DIGIT [ "." 1*DIGIT ]
//! ```
//!
//! Conversion goes through `str::parse::<f64>`, which always uses `.` as the
//! decimal point whatever the host locale says.

use super::cursor::Cursor;
use super::errors::{ErrorCode, ParseError};
use crate::base::chars::is_digit;

/// Whether a leading `-` may be consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Coordinates: `num`
    Allowed,
    /// Uncertainty: `pnum`
    Forbidden,
}

/// Consume a decimal literal and convert it
///
/// - `Ok(Some(n))`: the literal was consumed.
/// - `Ok(None)`: no literal here (no digits, or a `.` not followed by a
///   digit); the cursor is untouched.
/// - `Err(_)`: the literal is well formed but does not fit a finite `f64`.
pub fn number(cursor: &mut Cursor<'_>, sign: Sign) -> Result<Option<f64>, ParseError> {
    let start = cursor.pos();

    if sign == Sign::Allowed {
        cursor.eat(b'-');
    }

    if !eat_digits(cursor) {
        tracing::trace!(offset = start, "no digits for numeric literal");
        cursor.reset(start);
        return Ok(None);
    }

    if cursor.eat(b'.') && !eat_digits(cursor) {
        tracing::trace!(offset = start, "decimal point without fraction digits");
        cursor.reset(start);
        return Ok(None);
    }

    let literal = cursor.slice_from(start);
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => {
            let range = cursor.range_from(start);
            cursor.reset(start);
            Err(ParseError::builder(ErrorCode::E0301)
                .message(format!("number '{}' is out of range", abbreviate(literal)))
                .range(range)
                .build())
        }
    }
}

fn eat_digits(cursor: &mut Cursor<'_>) -> bool {
    let start = cursor.pos();
    while cursor.eat_if(is_digit).is_some() {}
    cursor.pos() > start
}

fn abbreviate(literal: &str) -> String {
    const MAX: usize = 24;
    if literal.len() <= MAX {
        literal.to_string()
    } else {
        format!("{}...", &literal[..MAX])
    }
}
