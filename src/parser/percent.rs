//! Percent-encoding: `pct-encoded = "%" HEXDIG HEXDIG`

use super::cursor::Cursor;
use crate::base::chars::{hex_value, is_paramchar_literal};

/// Decode one `%XX` escape at the cursor
///
/// Consumes exactly three bytes and returns `16 * hi + lo`. Returns `None`
/// with the cursor untouched if the cursor is not at `%` or fewer than two
/// hex digits follow. Both hex digit cases are accepted.
pub fn pct_encoded(cursor: &mut Cursor<'_>) -> Option<u8> {
    let start = cursor.pos();
    if !cursor.eat(b'%') {
        return None;
    }

    let hi = cursor.eat_if(|b| hex_value(b).is_some()).and_then(hex_value);
    let lo = hi.and_then(|_| cursor.eat_if(|b| hex_value(b).is_some()).and_then(hex_value));

    match (hi, lo) {
        (Some(hi), Some(lo)) => Some(hi * 16 + lo),
        _ => {
            cursor.reset(start);
            None
        }
    }
}

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Append `value` to `out`, escaping every byte that is not a literal `paramchar`
pub fn percent_encode_into(value: &str, out: &mut String) {
    for &b in value.as_bytes() {
        if is_paramchar_literal(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX_UPPER[usize::from(b >> 4)] as char);
            out.push(HEX_UPPER[usize::from(b & 0x0F)] as char);
        }
    }
}
