//! Production-level tests driven through `Parser` and `Cursor`

use geouri::parser::grammar::{label_text, param_value, scheme};
use geouri::parser::{Cursor, ErrorCode, ParsePolicy, Parser, Sign, number, pct_encoded};
use geouri::GeoUri;
use rstest::rstest;

fn parser(input: &str) -> Parser<'_, GeoUri> {
    Parser::new(input, ParsePolicy::default(), GeoUri::default())
}

// =============================================================================
// Leaf productions
// =============================================================================

#[rstest]
#[case("geo", true, 3)]
#[case("GEO", true, 3)]
#[case("gEo:1,2", true, 3)]
#[case("ge", false, 0)]
#[case("gel", false, 0)]
#[case("", false, 0)]
fn test_scheme(#[case] input: &str, #[case] matched: bool, #[case] pos: usize) {
    let mut cursor = Cursor::new(input);
    assert_eq!(scheme(&mut cursor), matched, "input: {:?}", input);
    assert_eq!(cursor.pos(), pos);
}

#[rstest]
#[case("12.5,", Sign::Allowed, Some(12.5), 4)]
#[case("-0.5", Sign::Allowed, Some(-0.5), 4)]
#[case("-0.5", Sign::Forbidden, None, 0)]
#[case("123.", Sign::Allowed, None, 0)]
#[case(".456", Sign::Allowed, None, 0)]
#[case("-", Sign::Allowed, None, 0)]
#[case("+1", Sign::Allowed, None, 0)]
#[case("007", Sign::Forbidden, Some(7.0), 3)]
fn test_number(
    #[case] input: &str,
    #[case] sign: Sign,
    #[case] expected: Option<f64>,
    #[case] pos: usize,
) {
    let mut cursor = Cursor::new(input);
    assert_eq!(number(&mut cursor, sign).unwrap(), expected, "input: {:?}", input);
    assert_eq!(cursor.pos(), pos);
}

#[test]
fn test_number_out_of_range() {
    let literal = format!("1{}", "0".repeat(400));
    let mut cursor = Cursor::new(&literal);
    let err = number(&mut cursor, Sign::Allowed).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0301);
    assert_eq!(cursor.pos(), 0);
}

#[rstest]
#[case("%2d", Some(0x2D), 3)]
#[case("%2D", Some(0x2D), 3)]
#[case("%C3", Some(0xC3), 3)]
#[case("%2", None, 0)]
#[case("%G0", None, 0)]
#[case("2d", None, 0)]
fn test_pct_encoded(#[case] input: &str, #[case] expected: Option<u8>, #[case] pos: usize) {
    let mut cursor = Cursor::new(input);
    assert_eq!(pct_encoded(&mut cursor), expected);
    assert_eq!(cursor.pos(), pos);
}

#[rstest]
#[case("Foo-1;", true, Some("foo-1"), 5)]
#[case("Foo-1;", false, Some("Foo-1"), 5)]
#[case("-", true, Some("-"), 1)]
#[case("=x", true, None, 0)]
fn test_label_text(
    #[case] input: &str,
    #[case] lowercase: bool,
    #[case] expected: Option<&str>,
    #[case] pos: usize,
) {
    let policy = ParsePolicy::default().with_lowercase_label_text(lowercase);
    let mut cursor = Cursor::new(input);
    let label = label_text(&mut cursor, &policy);
    assert_eq!(label.as_deref(), expected);
    assert_eq!(cursor.pos(), pos);
}

#[rstest]
#[case("this%2dthat", "this-that", 11)]
#[case("[]:&+$-_.!~*'()X9", "[]:&+$-_.!~*'()X9", 17)]
#[case("a;b", "a", 1)]
#[case("", "", 0)]
#[case("ab%2", "ab", 2)]
#[case("Wien%2F%C3%96sterreich", "Wien/Österreich", 22)]
fn test_param_value(#[case] input: &str, #[case] expected: &str, #[case] pos: usize) {
    let mut cursor = Cursor::new(input);
    assert_eq!(param_value(&mut cursor).unwrap(), expected);
    assert_eq!(cursor.pos(), pos);
}

#[test]
fn test_param_value_rejects_invalid_utf8() {
    let mut cursor = Cursor::new("%FF%FE");
    let err = param_value(&mut cursor).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0401);
    assert_eq!(cursor.pos(), 0);
}

// =============================================================================
// Composite productions
// =============================================================================

#[rstest]
#[case("1,2", Some((1.0, 2.0, None)), 3)]
#[case("1,2,3;", Some((1.0, 2.0, Some(3.0))), 5)]
#[case("-48.198634,16.371648", Some((-48.198634, 16.371648, None)), 20)]
#[case("1;2", None, 0)]
#[case("x", None, 0)]
fn test_coordinates(
    #[case] input: &str,
    #[case] expected: Option<(f64, f64, Option<f64>)>,
    #[case] pos: usize,
) {
    let mut p = parser(input);
    let matched = p.coordinates().unwrap();
    assert_eq!(matched, expected.is_some());
    assert_eq!(p.position(), pos);

    let uri = p.into_visitor();
    if let Some((lat, lon, alt)) = expected {
        assert_eq!(uri.latitude(), lat);
        assert_eq!(uri.longitude(), lon);
        assert_eq!(uri.altitude(), alt);
    }
}

#[rstest]
#[case("1,", "longitude")]
#[case("1,2,", "altitude")]
#[case("1,2,x", "altitude")]
fn test_coordinates_missing_after_comma(#[case] input: &str, #[case] which: &str) {
    let mut p = parser(input);
    let err = p.coordinates().unwrap_err();
    assert_eq!(err.code, ErrorCode::E0103);
    assert!(err.message.contains(which), "message: {}", err.message);
    assert_eq!(p.position(), 0);
}

#[test]
fn test_crs_clause() {
    let mut p = parser(";CRS=WGS84;u=1");
    assert!(p.crs_clause().unwrap());
    assert_eq!(p.position(), 10);
    assert!(p.state().crs_seen());
    assert_eq!(p.into_visitor().crs(), "wgs84");
}

#[test]
fn test_crs_clause_no_match() {
    let mut p = parser(";crsx=1");
    assert!(!p.crs_clause().unwrap());
    assert_eq!(p.position(), 0);
}

#[test]
fn test_crs_clause_committed() {
    let mut p = parser(";crs=;u=1");
    let err = p.crs_clause().unwrap_err();
    assert_eq!(err.code, ErrorCode::E0104);
    assert_eq!(p.position(), 0);
}

#[test]
fn test_uncertainty_clause() {
    let mut p = parser(";U=6.500");
    assert!(p.uncertainty_clause().unwrap());
    assert!(p.cursor().is_at_end());
    assert_eq!(p.into_visitor().uncertainty(), Some(6.5));
}

#[test]
fn test_uncertainty_clause_negative() {
    let mut p = parser(";u=-1");
    let err = p.uncertainty_clause().unwrap_err();
    assert_eq!(err.code, ErrorCode::E0105);
    assert!(err.has_hint());
}

#[test]
fn test_parameter_list() {
    let mut p = parser(";a=1;B;c=x%20y;");
    assert_eq!(p.parameter_list().unwrap(), 3);
    assert_eq!(p.cursor().rest(), ";");

    let uri = p.into_visitor();
    assert_eq!(uri.parameter("a"), Some("1"));
    assert_eq!(uri.parameter("b"), Some(""));
    assert_eq!(uri.parameter("c"), Some("x y"));
}

#[test]
fn test_parameter_named_crs_after_uncertainty() {
    let mut p = parser(";u=5;crs=abc");
    assert!(p.uncertainty_clause().unwrap());
    let err = p.parameter().unwrap_err();
    assert_eq!(err.code, ErrorCode::E0203);
    assert_eq!(p.position(), 4);
}
