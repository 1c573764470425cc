//! Parse context tracking for context-aware error messages
//!
//! Each error remembers which production was running when it was raised.

/// The grammar production active when an error was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseContext {
    /// `geo-scheme ":"`
    Scheme,
    /// `coordinates = num "," num ["," num]`
    Coordinates,
    /// `crsp = ";crs=" crslabel`
    CrsClause,
    /// `uncp = ";u=" uval`
    UncertaintyClause,
    /// `parameter = ";" pname ["=" pvalue]`
    Parameter,
    /// `*parameter`
    ParameterList,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::Scheme => "in scheme",
            Self::Coordinates => "in coordinates",
            Self::CrsClause => "in CRS clause",
            Self::UncertaintyClause => "in uncertainty clause",
            Self::Parameter => "in parameter",
            Self::ParameterList => "in parameter list",
        }
    }

    /// Get a description of what is expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::Scheme => "'geo:'",
            Self::Coordinates => "two or three comma separated numbers",
            Self::CrsClause => "'wgs84' or a label of letters, digits and '-'",
            Self::UncertaintyClause => "a non-negative number",
            Self::Parameter => "a name of letters, digits and '-' with an optional '=value'",
            Self::ParameterList => "';' starting a parameter, or end of input",
        }
    }
}
