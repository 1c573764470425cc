//! Custom visitors fed by `parse_with`

use geouri::parser::ParsePolicy;
use geouri::{GeoVisitor, parse_with};
use smol_str::SmolStr;

/// Records every callback in order
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl GeoVisitor for Recorder {
    fn visit_latitude(&mut self, value: f64) {
        self.events.push(format!("lat {}", value));
    }

    fn visit_longitude(&mut self, value: f64) {
        self.events.push(format!("lon {}", value));
    }

    fn visit_altitude(&mut self, value: f64) {
        self.events.push(format!("alt {}", value));
    }

    fn visit_crs(&mut self, label: SmolStr) {
        self.events.push(format!("crs {}", label));
    }

    fn visit_uncertainty(&mut self, value: f64) {
        self.events.push(format!("u {}", value));
    }

    fn visit_parameter(&mut self, name: SmolStr, value: String) {
        self.events.push(format!("param {}={}", name, value));
    }
}

/// Only counts parameters; every other callback keeps its default
#[derive(Default)]
struct ParameterCounter(usize);

impl GeoVisitor for ParameterCounter {
    fn visit_parameter(&mut self, _name: SmolStr, _value: String) {
        self.0 += 1;
    }
}

#[test]
fn test_events_arrive_in_input_order() {
    let mut recorder = Recorder::default();
    let pos = parse_with(
        "geo:1,2,3;crs=Abc;u=4;k=v;flag",
        ParsePolicy::default(),
        &mut recorder,
    )
    .unwrap();

    assert_eq!(pos, 30);
    assert_eq!(
        recorder.events,
        [
            "lat 1",
            "lon 2",
            "alt 3",
            "crs abc",
            "u 4",
            "param k=v",
            "param flag=",
        ]
    );
}

#[test]
fn test_partial_visitor() {
    let mut counter = ParameterCounter::default();
    parse_with("geo:1,2;a;b;c=1", ParsePolicy::default(), &mut counter).unwrap();
    assert_eq!(counter.0, 3);
}

#[test]
fn test_fields_delivered_before_failure_stay() {
    let mut recorder = Recorder::default();
    let result = parse_with("geo:1,2;u=1;u=2", ParsePolicy::default(), &mut recorder);

    assert!(result.is_err());
    assert_eq!(recorder.events, ["lat 1", "lon 2", "u 1"]);
}

#[test]
fn test_dyn_visitor() {
    let mut recorder = Recorder::default();
    let visitor: &mut dyn GeoVisitor = &mut recorder;
    parse_with("geo:5,6", ParsePolicy::default(), visitor).unwrap();
    assert_eq!(recorder.events, ["lat 5", "lon 6"]);
}
