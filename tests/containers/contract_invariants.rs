//! Container contract: size, add, contains, remove, begin/end.

use crate::common::*;

#[test]
fn add_then_contains_and_grows_by_one() {
    init_tracing();
    for mut c in all_containers() {
        let before = c.size();
        assert!(c.add(obj("engine.Unit").into()));
        assert!(c.contains(&obj("engine.Unit")));
        assert_eq!(c.size(), before + 1, "{:?}", c.value_kind());
    }
}

#[test]
fn duplicate_add_leaves_size_unchanged() {
    for mut c in all_containers() {
        c.add(Value::Int(1).into());
        c.add(Value::Int(2).into());
        assert!(!c.add(Value::Int(1).into()));
        assert_eq!(c.size(), 2);
        assert_eq!(walk(c.as_ref()).len(), 2);
    }
}

#[test]
fn remove_absent_is_noop() {
    init_tracing();
    for mut c in all_containers() {
        c.add(Value::Int(1).into());
        assert!(!c.remove(&Value::Int(2)));
        assert!(!c.remove(&Value::Float(1.0)));
        assert_eq!(c.size(), 1);
    }
}

#[test]
fn documented_scenario() {
    for mut c in all_containers() {
        let a = obj("a.A");
        let b = obj("a.B");

        assert!(c.add(ValueHolder::new(a.clone())));
        assert_eq!(c.size(), 1);
        assert!(c.add(ValueHolder::new(b.clone())));
        assert_eq!(c.size(), 2);
        assert!(!c.add(ValueHolder::new(a.clone())));
        assert_eq!(c.size(), 2);
        assert!(c.remove(&a));
        assert_eq!(c.size(), 1);
        assert!(!c.contains(&a));
        assert!(c.contains(&b));

        assert_eq!(walk(c.as_ref()), vec![b.clone()]);
    }
}

#[test]
fn begin_equals_end_iff_empty() {
    for mut c in all_containers() {
        assert_eq!(c.begin(), c.end());
        c.add(Value::Bool(true).into());
        assert_ne!(c.begin(), c.end());
        c.remove(&Value::Bool(true));
        assert_eq!(c.begin(), c.end());
    }
}

#[test]
fn iteration_visits_each_member_once() {
    for mut c in all_containers() {
        for i in 0..50 {
            c.add(Value::Int(i % 20).into());
        }
        let seen = walk(c.as_ref());
        assert_eq!(seen.len(), c.size());
        let mut ints: Vec<i64> = seen.iter().filter_map(Value::as_int).collect();
        ints.sort_unstable();
        ints.dedup();
        assert_eq!(ints, (0..20).collect::<Vec<_>>());
    }
}

#[test]
fn ordered_set_keeps_insertion_order() {
    let mut c = OrderedSet::new();
    for name in ["x.C", "x.A", "x.B"] {
        c.add(obj(name).into());
    }
    c.remove(&obj("x.A"));
    c.add(obj("x.D").into());
    assert_eq!(walk(&c), vec![obj("x.C"), obj("x.B"), obj("x.D")]);
}

#[test]
fn mixed_kinds_coexist() {
    for mut c in all_containers() {
        assert!(c.add(Value::Int(1).into()));
        assert!(c.add(Value::Float(1.0).into()));
        assert!(c.add(Value::from("1").into()));
        assert!(c.add(obj("1").into()));
        assert!(c.add(Value::file("1").into()));
        assert_eq!(c.size(), 5);
        assert!(c.remove(&Value::Float(1.0)));
        assert!(c.contains(&Value::Int(1)));
    }
}

#[test]
fn float_members_use_total_equality() {
    for mut c in all_containers() {
        assert!(c.add(Value::Float(f64::NAN).into()));
        assert!(!c.add(Value::Float(f64::NAN).into()));
        assert!(!c.add(Value::Float(-f64::NAN).into()));
        assert!(c.contains(&Value::Float(f64::NAN)));

        assert!(c.add(Value::Float(-0.0).into()));
        assert!(c.contains(&Value::Float(0.0)));
        assert!(!c.add(Value::Float(0.0).into()));
        assert_eq!(c.size(), 2, "{:?}", c.value_kind());

        assert!(c.remove(&Value::Float(0.0)));
        assert!(!c.contains(&Value::Float(-0.0)));
        assert!(c.remove(&Value::Float(f64::NAN)));
        assert!(c.is_empty());
        assert_eq!(c.begin(), c.end());
    }
}

#[test]
fn containers_nest_as_values() {
    let inner: Set = [obj("a.A"), obj("a.B")].into_iter().collect();
    let mut outer = OrderedSet::new();
    assert!(outer.add(Value::from(inner.clone()).into()));

    let reordered: Set = [obj("a.B"), obj("a.A")].into_iter().collect();
    assert!(outer.contains(&reordered.into()));

    let as_ordered: OrderedSet = [obj("a.A"), obj("a.B")].into_iter().collect();
    assert!(!outer.contains(&as_ordered.into()));

    let nested = outer.begin().value().expect_container().unwrap();
    assert_eq!(nested.value_kind(), ValueKind::Set);
    assert_eq!(nested.size(), 2);
}

#[test]
fn works_through_value_wrapper() {
    let mut value = Value::from(Set::new());
    {
        let c = value.expect_container_mut().unwrap();
        c.add(Value::Int(3).into());
        c.add(Value::Int(4).into());
    }
    let c = value.expect_container().unwrap();
    assert_eq!(c.iter().count(), 2);
    assert!(Value::Int(3).expect_container().is_err());
}

#[test]
fn set_operations_across_kinds() {
    let mut ordered: OrderedSet = (0..6).map(Value::Int).collect();
    let evens: Set = (0..10).step_by(2).map(Value::Int).collect();

    assert_eq!(ordered.intersect_with(&evens), 3);
    assert_eq!(walk(&ordered), vec![Value::Int(0), Value::Int(2), Value::Int(4)]);

    assert_eq!(ordered.union_with(&evens), 2);
    assert_eq!(ordered.size(), 5);

    assert_eq!(ordered.difference_with(&evens), 5);
    assert!(ordered.is_empty());
}
