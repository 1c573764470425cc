//! Character classes of the geo URI grammar.
//!
//! The grammar is pure ASCII, so every class works on a single byte. Any
//! non-ASCII byte belongs to none of the classes.
//!
//! ```text
//! alphanum      = ALPHA / DIGIT
//! mark          = "-" / "_" / "." / "!" / "~" / "*" / "'" / "(" / ")"
//! unreserved    = alphanum / mark
//! p-unreserved  = "[" / "]" / ":" / "&" / "+" / "$"
//! ```

/// `DIGIT`: `0`..`9`.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `ALPHA`: `A`..`Z` / `a`..`z`.
#[inline]
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// `alphanum = ALPHA / DIGIT`
#[inline]
pub const fn is_alphanum(b: u8) -> bool {
    is_alpha(b) || is_digit(b)
}

/// `HEXDIG`, either case.
#[inline]
pub const fn is_hexdigit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// `mark`
#[inline]
pub const fn is_mark(b: u8) -> bool {
    matches!(
        b,
        b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
    )
}

/// `p-unreserved`
#[inline]
pub const fn is_p_unreserved(b: u8) -> bool {
    matches!(b, b'[' | b']' | b':' | b'&' | b'+' | b'$')
}

/// `unreserved = alphanum / mark`
#[inline]
pub const fn is_unreserved(b: u8) -> bool {
    is_alphanum(b) || is_mark(b)
}

/// A character allowed in `labeltext`: alphanum or `-`.
#[inline]
pub const fn is_labelchar(b: u8) -> bool {
    is_alphanum(b) || b == b'-'
}

/// A `paramchar` that stands for itself (everything except `pct-encoded`).
#[inline]
pub const fn is_paramchar_literal(b: u8) -> bool {
    is_p_unreserved(b) || is_unreserved(b)
}

/// Value of a hex digit, or `None` for any other byte.
#[inline]
pub const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
