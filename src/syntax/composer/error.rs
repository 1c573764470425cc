//! Why a record cannot be written as a geo URI that parses back to it

use smol_str::SmolStr;
use thiserror::Error;

/// A field that the composer can write but the parser would not read back
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposeError {
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("uncertainty {0} is negative")]
    NegativeUncertainty(f64),

    #[error("CRS label {0:?} is not letters, digits and '-'")]
    InvalidCrsLabel(SmolStr),

    #[error("parameter name {0:?} is not letters, digits and '-'")]
    InvalidParameterName(SmolStr),

    /// A `crs` or `u` parameter would be read back as that clause, or
    /// would break the clause order
    #[error("parameter {0:?} would be read back as a clause")]
    ReservedParameterName(SmolStr),

    #[error("value of parameter {0:?} must be percent-encoded")]
    UnencodedValue(SmolStr),
}
