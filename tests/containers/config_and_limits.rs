//! Configuration loading and limit enforcement on insertion.

use nyan::{Config, Error, LimitError, Limits};

use crate::common::*;

#[test]
fn config_builds_limited_containers() {
    init_tracing();
    let config = Config::from_toml_str(
        r#"
initial_capacity = 4

[limits]
max_container_entries = 2
max_nesting_depth = 1
"#,
    )
    .unwrap();

    let mut value = config.empty_container(ValueKind::OrderedSet).unwrap();
    let c = value.expect_container_mut().unwrap();
    assert!(c.add_checked(obj("a.A"), &config.limits).unwrap());
    assert!(c.add_checked(obj("a.B"), &config.limits).unwrap());
    assert!(!c.add_checked(obj("a.A"), &config.limits).unwrap());

    let err = c.add_checked(obj("a.C"), &config.limits).unwrap_err();
    assert!(matches!(
        err,
        Error::Limit(LimitError::TooManyEntries { max: 2 })
    ));
    assert_eq!(c.size(), 2);
}

#[test]
fn nested_container_over_depth_rejected() {
    let limits = Limits {
        max_nesting_depth: 1,
        ..Limits::default()
    };
    let mut outer = Set::new();
    let flat: Set = [Value::Int(1)].into_iter().collect();
    assert!(outer.add_checked(flat.into(), &limits).unwrap());

    let inner: Set = [Value::Int(1)].into_iter().collect();
    let deep: OrderedSet = [Value::from(inner)].into_iter().collect();
    let err = outer.add_checked(deep.into(), &limits).unwrap_err();
    assert!(matches!(
        err,
        Error::Limit(LimitError::NestingTooDeep { actual: 2, max: 1 })
    ));
    assert_eq!(outer.size(), 1);
}

#[test]
fn unchecked_add_ignores_limits() {
    let limits = Limits::with_small_limits();
    let mut set = Set::new();
    for i in 0..10 {
        set.add(Value::Int(i).into());
    }
    assert_eq!(set.size(), 10);
    assert!(limits.validate_value(&set.into()).is_err());
}

#[test]
fn invalid_config_reports_reason() {
    let err = Config::from_toml_str("[limits]\nmax_text_bytes = -1").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));

    let err = Config::default()
        .empty_container(ValueKind::Text)
        .unwrap_err();
    assert!(err.to_string().contains("container kind"));
}

#[test]
fn value_json_round_trip_through_facade() {
    let mut outer = OrderedSet::new();
    outer.add(Value::from([obj("a.A"), Value::Float(0.25)].into_iter().collect::<Set>()).into());
    outer.add(Value::file("textures/unit.png").into());
    let value = Value::from(outer);

    let json = value.to_json().unwrap();
    assert_eq!(Value::from_json(&json).unwrap(), value);
}

#[test]
fn containers_serialize_as_json_arrays() {
    let ordered: OrderedSet = [obj("a.B"), Value::Int(2), Value::Float(f64::NAN)]
        .into_iter()
        .collect();
    let json = serde_json::to_value(&ordered).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "Object": "a.B" }, { "Int": 2 }, { "Float": "NaN" }])
    );

    let back: OrderedSet = serde_json::from_value(json).unwrap();
    assert_eq!(back, ordered);

    let deduped: Set = serde_json::from_str(r#"[{"Int":1},{"Int":1},{"Float":-0.0},{"Float":0.0}]"#)
        .unwrap();
    assert_eq!(deduped.size(), 2);
    assert!(deduped.contains(&Value::Float(0.0)));
}
