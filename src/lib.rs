//! # geo-uri
//!
//! Parser and composer for `geo` URIs (RFC 5870), e.g.
//! `geo:48.198634,16.371648;crs=wgs84;u=40`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! syntax    → GeoUri value holder, composer, ComposePolicy
//!   ↓
//! parser    → Cursor, numeric lexer, grammar productions, ParsePolicy/ParseState,
//!             GeoVisitor, ParseError
//!   ↓
//! base      → Character classes, TextRange/TextSize
//! ```
//!
//! ## Example
//!
//! ```
//! let uri = geouri::parse("geo:66,30;u=6.500;FOo=this%2dthat;Bar").unwrap();
//!
//! assert_eq!(uri.latitude(), 66.0);
//! assert_eq!(uri.longitude(), 30.0);
//! assert!(!uri.has_altitude());
//! assert!(uri.is_wgs84());
//! assert_eq!(uri.uncertainty(), Some(6.5));
//! assert_eq!(uri.parameter("foo"), Some("this-that"));
//! assert_eq!(uri.parameter("bar"), Some(""));
//!
//! assert_eq!(uri.to_string(), "geo:66,30;u=6.5;foo=this-that;bar");
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax)
// ============================================================================

/// Foundation: character classes, TextRange/TextSize
pub mod base;

/// Parser: cursor, numeric lexer, grammar productions, errors
pub mod parser;

/// Syntax: GeoUri value holder and composer
pub mod syntax;

// Re-export commonly needed items
pub use parser::{
    ErrorCategory, ErrorCode, GeoVisitor, ParseError, ParsePolicy, like_geo_uri, parse,
    parse_prefix, parse_with, parse_with_policy,
};
pub use syntax::{
    ComposeError, ComposePolicy, GeoUri, check_composable, compose, compose_checked, compose_with,
};
