//! Composer: renders a [`GeoUri`] as `geo:` text
//!
//! Output order is fixed: coordinates, CRS, uncertainty, then parameters in
//! insertion order. [`check_composable`] tells whether the text will parse
//! back to an equal record; [`compose_checked`] refuses to write it when it
//! will not, and the infallible writers log a warning instead.

mod error;
mod options;


use std::fmt;

pub use error::ComposeError;
pub use options::ComposePolicy;

use text_size::{TextRange, TextSize};

use super::GeoUri;
use crate::base::chars::{is_labelchar, is_paramchar_literal};
use crate::parser::{ParseContext, ParseState, percent_encode_into};

/// Render `uri` with the default (relaxed) policy
pub fn compose(uri: &GeoUri) -> String {
    compose_with(uri, &ComposePolicy::default())
}

/// Render `uri` according to `policy`
pub fn compose_with(uri: &GeoUri, policy: &ComposePolicy) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_geo_uri(&mut out, uri, policy);
    out
}

/// Render `uri`, or report the first field that would not parse back
pub fn compose_checked(uri: &GeoUri, policy: &ComposePolicy) -> Result<String, ComposeError> {
    check_composable(uri, policy)?;
    Ok(compose_with(uri, policy))
}

/// Whether `uri` composed under `policy` parses back to an equal record
///
/// Case folding is not checked: under the default parse policy an
/// uppercase CRS label or parameter name comes back lowercased.
pub fn check_composable(uri: &GeoUri, policy: &ComposePolicy) -> Result<(), ComposeError> {
    check_finite("latitude", uri.latitude())?;
    check_finite("longitude", uri.longitude())?;
    if let Some(altitude) = uri.altitude() {
        check_finite("altitude", altitude)?;
    }

    // Replays the clause rules the parser will apply to the written text
    let nowhere = TextRange::empty(TextSize::new(0));
    let mut state = ParseState::new();
    let writes_crs = !(uri.is_wgs84() && policy.suppress_default_crs);
    if writes_crs {
        if !is_label_text(uri.crs()) {
            return Err(ComposeError::InvalidCrsLabel(uri.crs().into()));
        }
        let _ = state.mark_crs(nowhere, ParseContext::CrsClause);
    }

    if let Some(uncertainty) = uri.uncertainty() {
        check_finite("uncertainty", uncertainty)?;
        // `-0` is written with its sign
        if uncertainty.is_sign_negative() {
            return Err(ComposeError::NegativeUncertainty(uncertainty));
        }
        let _ = state.mark_uncertainty(nowhere, ParseContext::UncertaintyClause);
    }

    for (name, value) in uri.parameters() {
        if !is_label_text(name) {
            return Err(ComposeError::InvalidParameterName(name.into()));
        }

        let reserved = name.eq_ignore_ascii_case("crs") || name.eq_ignore_ascii_case("u");
        if reserved
            && (!value.is_empty() || state.check_parameter(name, nowhere).is_err())
        {
            return Err(ComposeError::ReservedParameterName(name.into()));
        }

        if !policy.percent_encode_values && !value.bytes().all(is_paramchar_literal) {
            return Err(ComposeError::UnencodedValue(name.into()));
        }
    }

    Ok(())
}

/// Write `uri` into any [`fmt::Write`] sink
///
/// Text that will not parse back is still written, with a warning.
pub fn write_geo_uri<W: fmt::Write>(
    out: &mut W,
    uri: &GeoUri,
    policy: &ComposePolicy,
) -> fmt::Result {
    if let Err(err) = check_composable(uri, policy) {
        tracing::warn!(error = %err, "composed geo URI will not parse back");
    }

    out.write_str("geo:")?;
    write!(out, "{},{}", uri.latitude(), uri.longitude())?;
    if let Some(altitude) = uri.altitude() {
        write!(out, ",{}", altitude)?;
    }

    if !(uri.is_wgs84() && policy.suppress_default_crs) {
        write!(out, ";crs={}", uri.crs())?;
    }

    if let Some(uncertainty) = uri.uncertainty() {
        write!(out, ";u={}", uncertainty)?;
    }

    let mut scratch = String::new();
    for (name, value) in uri.parameters() {
        out.write_char(';')?;
        out.write_str(name)?;
        if value.is_empty() {
            continue;
        }
        out.write_char('=')?;
        if policy.percent_encode_values {
            scratch.clear();
            percent_encode_into(value, &mut scratch);
            out.write_str(&scratch)?;
        } else {
            out.write_str(value)?;
        }
    }

    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ComposeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ComposeError::NonFinite { field })
    }
}

fn is_label_text(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(is_labelchar)
}

impl fmt::Display for GeoUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_geo_uri(f, self, &ComposePolicy::default())
    }
}
