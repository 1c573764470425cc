//! The `GeoUri` record as a standalone value

use geouri::GeoUri;
use geouri::parser::WGS84;

#[test]
fn test_build_and_inspect() {
    let mut uri = GeoUri::new(48.2, 16.37)
        .with_altitude(183.0)
        .with_crs("local")
        .with_uncertainty(25.0);

    assert!(!uri.is_wgs84());
    assert_eq!(uri.crs(), "local");

    uri.set_crs(WGS84);
    uri.clear_altitude();
    uri.clear_uncertainty();

    assert_eq!(uri, GeoUri::new(48.2, 16.37));
}

#[test]
fn test_unset_is_not_zero() {
    let with_zero = GeoUri::new(1.0, 2.0).with_altitude(0.0).with_uncertainty(0.0);
    assert_ne!(with_zero, GeoUri::new(1.0, 2.0));
    assert_eq!(with_zero.to_string(), "geo:1,2,0;u=0");
}

#[test]
fn test_parameters_mut() {
    let mut uri = GeoUri::new(0.0, 0.0).with_parameter("a", "1");
    uri.parameters_mut().insert("b".into(), "2".to_string());
    uri.parameters_mut().sort_keys();
    assert_eq!(uri.to_string(), "geo:0,0;a=1;b=2");
}
