//! Visitor interface fed by the productions as they match

use smol_str::SmolStr;

/// Receives each grammar field as soon as its production matches
///
/// Every method defaults to doing nothing, so a visitor only implements the
/// fields it cares about. Fields arrive in input order. When a later
/// production fails, the fields already delivered are not retracted.
pub trait GeoVisitor {
    fn visit_latitude(&mut self, _value: f64) {}

    fn visit_longitude(&mut self, _value: f64) {}

    fn visit_altitude(&mut self, _value: f64) {}

    /// CRS label, folded per [`ParsePolicy`](super::ParsePolicy); `wgs84` is
    /// always delivered in lowercase
    fn visit_crs(&mut self, _label: SmolStr) {}

    fn visit_uncertainty(&mut self, _value: f64) {}

    /// Parameter name (folded per policy) and percent-decoded value, empty
    /// when `=value` was omitted
    fn visit_parameter(&mut self, _name: SmolStr, _value: String) {}
}

impl<V: GeoVisitor + ?Sized> GeoVisitor for &mut V {
    fn visit_latitude(&mut self, value: f64) {
        (**self).visit_latitude(value);
    }

    fn visit_longitude(&mut self, value: f64) {
        (**self).visit_longitude(value);
    }

    fn visit_altitude(&mut self, value: f64) {
        (**self).visit_altitude(value);
    }

    fn visit_crs(&mut self, label: SmolStr) {
        (**self).visit_crs(label);
    }

    fn visit_uncertainty(&mut self, value: f64) {
        (**self).visit_uncertainty(value);
    }

    fn visit_parameter(&mut self, name: SmolStr, value: String) {
        (**self).visit_parameter(name, value);
    }
}
