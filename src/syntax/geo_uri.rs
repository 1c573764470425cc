//! The parsed geo URI record

use std::str::FromStr;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use crate::parser::{GeoVisitor, ParseError, WGS84};

/// Parameter names to values, iterated in insertion order
///
/// Comparing two collections ignores order.
pub type Parameters = IndexMap<SmolStr, String, FxBuildHasher>;

/// A geo URI: `geo:<lat>,<lon>[,<alt>][;crs=<label>][;u=<uval>]*(;<name>[=<value>])`
///
/// Altitude and uncertainty are absent unless set; absence is never
/// encoded as zero. The CRS defaults to `wgs84`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoUri {
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>,
    crs: SmolStr,
    uncertainty: Option<f64>,
    parameters: Parameters,
}

impl Default for GeoUri {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            altitude: None,
            crs: SmolStr::new(WGS84),
            uncertainty: None,
            parameters: Parameters::default(),
        }
    }
}

impl GeoUri {
    /// A two-coordinate location in WGS-84 with no uncertainty or parameters
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Self::default()
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn set_latitude(&mut self, value: f64) {
        self.latitude = value;
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn set_longitude(&mut self, value: f64) {
        self.longitude = value;
    }

    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    pub fn set_altitude(&mut self, value: f64) {
        self.altitude = Some(value);
    }

    pub fn clear_altitude(&mut self) {
        self.altitude = None;
    }

    pub fn has_altitude(&self) -> bool {
        self.altitude.is_some()
    }

    pub fn with_altitude(mut self, value: f64) -> Self {
        self.set_altitude(value);
        self
    }

    /// Coordinate reference system label
    pub fn crs(&self) -> &str {
        &self.crs
    }

    pub fn set_crs(&mut self, label: impl Into<SmolStr>) {
        self.crs = label.into();
    }

    pub fn with_crs(mut self, label: impl Into<SmolStr>) -> Self {
        self.set_crs(label);
        self
    }

    /// Whether the CRS is WGS-84 (CRS labels compare case-insensitively)
    pub fn is_wgs84(&self) -> bool {
        self.crs.eq_ignore_ascii_case(WGS84)
    }

    /// Radius of the location's uncertainty, in meters
    pub fn uncertainty(&self) -> Option<f64> {
        self.uncertainty
    }

    pub fn set_uncertainty(&mut self, meters: f64) {
        self.uncertainty = Some(meters);
    }

    pub fn clear_uncertainty(&mut self) {
        self.uncertainty = None;
    }

    pub fn has_uncertainty(&self) -> bool {
        self.uncertainty.is_some()
    }

    pub fn with_uncertainty(mut self, meters: f64) -> Self {
        self.set_uncertainty(meters);
        self
    }

    /// Insert a parameter; an empty `value` stands for a bare `;name`
    ///
    /// Inserting a name that is already present replaces its value, keeps
    /// its original position and returns the old value.
    pub fn insert(&mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Option<String> {
        self.parameters.insert(name.into(), value.into())
    }

    pub fn with_parameter(mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Value of parameter `name` (exact match); `Some("")` for a bare `;name`
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Remove parameter `name`, keeping the order of the others
    pub fn remove_parameter(&mut self, name: &str) -> Option<String> {
        self.parameters.shift_remove(name)
    }

    /// Parameters in insertion order
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }
}

impl GeoVisitor for GeoUri {
    fn visit_latitude(&mut self, value: f64) {
        self.set_latitude(value);
    }

    fn visit_longitude(&mut self, value: f64) {
        self.set_longitude(value);
    }

    fn visit_altitude(&mut self, value: f64) {
        self.set_altitude(value);
    }

    fn visit_crs(&mut self, label: SmolStr) {
        self.set_crs(label);
    }

    fn visit_uncertainty(&mut self, value: f64) {
        self.set_uncertainty(value);
    }

    fn visit_parameter(&mut self, name: SmolStr, value: String) {
        self.insert(name, value);
    }
}

impl FromStr for GeoUri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}
