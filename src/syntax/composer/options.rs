//! Composer options

/// How a [`GeoUri`](crate::GeoUri) is rendered back to text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposePolicy {
    /// Leave out `;crs=wgs84`, since WGS-84 is implied when no CRS is given
    pub suppress_default_crs: bool,
    /// Escape parameter value bytes outside `paramchar` as `%XX`
    /// (false = write values verbatim)
    pub percent_encode_values: bool,
}

impl Default for ComposePolicy {
    fn default() -> Self {
        Self::relaxed()
    }
}

impl ComposePolicy {
    /// Omit the default CRS, write values verbatim
    pub const fn relaxed() -> Self {
        Self {
            suppress_default_crs: true,
            percent_encode_values: false,
        }
    }

    /// Always write the CRS clause, even for WGS-84
    pub const fn strict() -> Self {
        Self {
            suppress_default_crs: false,
            percent_encode_values: false,
        }
    }

    pub fn with_suppress_default_crs(mut self, enabled: bool) -> Self {
        self.suppress_default_crs = enabled;
        self
    }

    pub fn with_percent_encode_values(mut self, enabled: bool) -> Self {
        self.percent_encode_values = enabled;
        self
    }
}
