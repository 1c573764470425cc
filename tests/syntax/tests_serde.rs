//! Serialization of `GeoUri` behind the `serde` feature

#![cfg(feature = "serde")]

use geouri::GeoUri;

#[test]
fn test_json_round_trip() {
    let uri = GeoUri::new(66.0, 30.0)
        .with_uncertainty(6.5)
        .with_parameter("foo", "this-that")
        .with_parameter("bar", "");

    let json = serde_json::to_string(&uri).unwrap();
    let back: GeoUri = serde_json::from_str(&json).unwrap();
    assert_eq!(back, uri);
}

#[test]
fn test_json_shape() {
    let uri = GeoUri::new(1.0, 2.0).with_parameter("a", "1");
    let value = serde_json::to_value(&uri).unwrap();

    assert_eq!(value["latitude"], 1.0);
    assert_eq!(value["altitude"], serde_json::Value::Null);
    assert_eq!(value["crs"], "wgs84");
    assert_eq!(value["parameters"]["a"], "1");
}
