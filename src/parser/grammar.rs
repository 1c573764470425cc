//! Recursive descent productions for geo URIs
//!
//! ```text
//! geo-URI       = geo-scheme ":" geo-path
//! geo-scheme    = "geo"
//! geo-path      = coordinates p
//! coordinates   = coord-a "," coord-b [ "," coord-c ]
//! p             = [ crsp ] [ uncp ] *parameter
//! crsp          = ";crs=" crslabel
//! crslabel      = "wgs84" / labeltext
//! uncp          = ";u=" uval
//! uval          = pnum
//! parameter     = ";" pname [ "=" pvalue ]
//! pname         = labeltext
//! pvalue        = *paramchar
//! paramchar     = p-unreserved / unreserved / pct-encoded
//! labeltext     = 1*( alphanum / "-" )
//! ```
//!
//! Scheme, `crs`, `u`, `wgs84` and (by default) parameter names are case
//! insensitive. Productions run strictly left to right and never undo a
//! sibling's consumption: each one either advances past what it matched or
//! leaves the cursor where it found it.

use smol_str::SmolStr;

use super::cursor::Cursor;
use super::errors::{ErrorCode, ParseContext, ParseError};
use super::number::{Sign, number};
use super::percent::pct_encoded;
use super::policy::{ParsePolicy, ParseState};
use super::visitor::GeoVisitor;
use crate::base::chars::{is_labelchar, is_paramchar_literal};

/// Default coordinate reference system label
pub const WGS84: &str = "wgs84";

/// Outcome of a composite production
///
/// `Ok(true)` matched and advanced, `Ok(false)` did not match and left the
/// cursor untouched, `Err` is a hard failure that ends the parse.
pub type Match = Result<bool, ParseError>;

// ============================================================================
// Leaf productions
// ============================================================================

/// `geo-scheme = "geo"`, any case
pub fn scheme(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat_ignore_ascii_case("geo")
}

/// `labeltext = 1*( alphanum / "-" )`, folded to lowercase when the policy asks
pub fn label_text(cursor: &mut Cursor<'_>, policy: &ParsePolicy) -> Option<SmolStr> {
    let start = cursor.pos();
    while cursor.eat_if(is_labelchar).is_some() {}
    if cursor.pos() == start {
        return None;
    }

    let text = cursor.slice_from(start);
    Some(if policy.lowercase_label_text {
        text.chars().map(|c| c.to_ascii_lowercase()).collect()
    } else {
        SmolStr::new(text)
    })
}

/// `pvalue = *paramchar`, percent-decoded
///
/// Consumes greedily and stops at the first byte that is neither a literal
/// `paramchar` nor a complete `%XX` escape. An empty value is accepted.
pub fn param_value(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    let start = cursor.pos();
    let mut bytes = Vec::new();

    loop {
        if let Some(b) = cursor.eat_if(is_paramchar_literal) {
            bytes.push(b);
        } else if let Some(b) = pct_encoded(cursor) {
            bytes.push(b);
        } else {
            break;
        }
    }

    String::from_utf8(bytes).map_err(|_| {
        let range = cursor.range_from(start);
        cursor.reset(start);
        ParseError::builder(ErrorCode::E0401)
            .range(range)
            .context(ParseContext::Parameter)
            .hint("percent escapes in a value must spell out UTF-8 text")
            .build()
    })
}

// ============================================================================
// Parser
// ============================================================================

/// The parser state for one parse call
///
/// Owns the cursor, the policy, the clause flags and the visitor that
/// receives each field. One method per composite production.
#[derive(Debug)]
pub struct Parser<'a, V> {
    cursor: Cursor<'a>,
    policy: ParsePolicy,
    state: ParseState,
    visitor: V,
}

impl<'a, V: GeoVisitor> Parser<'a, V> {
    pub fn new(input: &'a str, policy: ParsePolicy, visitor: V) -> Self {
        Self {
            cursor: Cursor::new(input),
            policy,
            state: ParseState::new(),
            visitor,
        }
    }

    /// Byte position reached so far
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }

    /// `geo-URI = geo-scheme ":" coordinates [ crsp ] [ uncp ] *parameter`
    ///
    /// On success the cursor sits after the last matched parameter, which
    /// is the end of input for a complete geo URI. On failure it is back at
    /// where it started.
    pub fn geo_uri(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.pos();
        let result = self.geo_uri_inner();
        if result.is_err() {
            self.cursor.reset(start);
        }
        result
    }

    fn geo_uri_inner(&mut self) -> Result<(), ParseError> {
        if !scheme(&mut self.cursor) {
            return Err(ParseError::builder(ErrorCode::E0101)
                .at_offset(self.cursor.offset())
                .context(ParseContext::Scheme)
                .build());
        }

        if !self.cursor.eat(b':') {
            return Err(ParseError::builder(ErrorCode::E0102)
                .at_offset(self.cursor.offset())
                .context(ParseContext::Scheme)
                .build());
        }

        if !self.coordinates()? {
            return Err(ParseError::builder(ErrorCode::E0103)
                .message("expected latitude and longitude separated by ','")
                .at_offset(self.cursor.offset())
                .context(ParseContext::Coordinates)
                .build());
        }

        self.crs_clause()?;
        self.uncertainty_clause()?;
        self.parameter_list()?;

        Ok(())
    }

    /// `coordinates = num "," num [ "," num ]`
    ///
    /// No match if the latitude or the first comma is missing. Once the
    /// first comma is consumed, a missing longitude is a hard failure, and
    /// so is a missing altitude after a second comma.
    pub fn coordinates(&mut self) -> Match {
        let start = self.cursor.pos();

        let Some(latitude) = self.coordinate()? else {
            tracing::trace!(offset = start, "no latitude");
            return Ok(false);
        };

        if !self.cursor.eat(b',') {
            tracing::trace!(offset = self.cursor.pos(), "no ',' after latitude");
            self.cursor.reset(start);
            return Ok(false);
        }

        let longitude = match self.required_coordinate("longitude") {
            Ok(longitude) => longitude,
            Err(err) => return self.fail(start, err),
        };

        let altitude = if self.cursor.eat(b',') {
            match self.required_coordinate("altitude") {
                Ok(altitude) => Some(altitude),
                Err(err) => return self.fail(start, err),
            }
        } else {
            None
        };

        self.visitor.visit_latitude(latitude);
        self.visitor.visit_longitude(longitude);
        if let Some(altitude) = altitude {
            self.visitor.visit_altitude(altitude);
        }

        Ok(true)
    }

    /// `crsp = ";crs=" ( "wgs84" / labeltext )`
    ///
    /// Optional. After `;crs=` the clause is committed and a missing label
    /// is a hard failure. `wgs84` is reported in lowercase whatever the
    /// policy.
    pub fn crs_clause(&mut self) -> Match {
        let start = self.cursor.pos();
        if !self.cursor.eat_ignore_ascii_case(";crs=") {
            return Ok(false);
        }

        let Some(label) = label_text(&mut self.cursor, &self.policy) else {
            let err = ParseError::builder(ErrorCode::E0104)
                .message("expected a CRS label after ';crs='")
                .at_offset(self.cursor.offset())
                .context(ParseContext::CrsClause)
                .build();
            return self.fail(start, err);
        };

        let label = if label.eq_ignore_ascii_case(WGS84) {
            SmolStr::new(WGS84)
        } else {
            label
        };

        let range = self.cursor.range_from(start);
        if let Err(err) = self.state.mark_crs(range, ParseContext::CrsClause) {
            return self.fail(start, err);
        }

        tracing::trace!(crs = %label, "matched CRS clause");
        self.visitor.visit_crs(label);
        Ok(true)
    }

    /// `uncp = ";u=" pnum`
    ///
    /// Optional. After `;u=` the clause is committed and a missing or
    /// signed number is a hard failure.
    pub fn uncertainty_clause(&mut self) -> Match {
        let start = self.cursor.pos();
        if !self.cursor.eat_ignore_ascii_case(";u=") {
            return Ok(false);
        }

        let value = match number(&mut self.cursor, Sign::Forbidden) {
            Ok(Some(value)) => value,
            Ok(None) => {
                let mut builder = ParseError::builder(ErrorCode::E0105)
                    .message("expected a number after ';u='")
                    .at_offset(self.cursor.offset())
                    .context(ParseContext::UncertaintyClause);
                if self.cursor.peek() == Some(b'-') {
                    builder = builder.hint("uncertainty cannot be negative");
                }
                return self.fail(start, builder.build());
            }
            Err(err) => return self.fail(start, err.with_context(ParseContext::UncertaintyClause)),
        };

        let range = self.cursor.range_from(start);
        if let Err(err) = self.state.mark_uncertainty(range, ParseContext::UncertaintyClause) {
            return self.fail(start, err);
        }

        tracing::trace!(uncertainty = value, "matched uncertainty clause");
        self.visitor.visit_uncertainty(value);
        Ok(true)
    }

    /// `parameter = ";" labeltext [ "=" pvalue ]`
    ///
    /// No match if `;` or the name is missing. A parameter named `crs` or
    /// `u` is held to the same once-only and ordering rules as the clauses.
    pub fn parameter(&mut self) -> Match {
        let start = self.cursor.pos();
        if !self.cursor.eat(b';') {
            return Ok(false);
        }

        let Some(name) = label_text(&mut self.cursor, &self.policy) else {
            tracing::trace!(offset = start, "no parameter name after ';'");
            self.cursor.reset(start);
            return Ok(false);
        };

        let value = if self.cursor.eat(b'=') {
            match param_value(&mut self.cursor) {
                Ok(value) => value,
                Err(err) => return self.fail(start, err),
            }
        } else {
            String::new()
        };

        let range = self.cursor.range_from(start);
        if let Err(err) = self.state.check_parameter(&name, range) {
            return self.fail(start, err);
        }

        self.visitor.visit_parameter(name, value);
        Ok(true)
    }

    /// `*parameter`
    ///
    /// Stops at the first parameter that does not match; returns how many
    /// matched.
    pub fn parameter_list(&mut self) -> Result<usize, ParseError> {
        let mut count = 0;
        while self.parameter()? {
            count += 1;
        }
        Ok(count)
    }

    fn coordinate(&mut self) -> Result<Option<f64>, ParseError> {
        number(&mut self.cursor, Sign::Allowed)
            .map_err(|err| err.with_context(ParseContext::Coordinates))
    }

    /// A coordinate that must follow a consumed `,`
    fn required_coordinate(&mut self, which: &str) -> Result<f64, ParseError> {
        self.coordinate()?.ok_or_else(|| {
            ParseError::builder(ErrorCode::E0103)
                .message(format!("expected {} after ','", which))
                .at_offset(self.cursor.offset())
                .context(ParseContext::Coordinates)
                .build()
        })
    }

    fn fail(&mut self, start: usize, err: ParseError) -> Match {
        tracing::trace!(offset = start, code = %err.code, "production failed");
        self.cursor.reset(start);
        Err(err)
    }
}
