//! Randomized add/remove sequences checked against a model.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::common::*;

#[derive(Debug, Clone)]
enum Op {
    Add(Value),
    Remove(Value),
}

/// Small domain so that duplicates and removals of present values are common.
fn arb_member() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0i64..8).prop_map(Value::Int),
        (0i32..4).prop_map(|i| Value::Float(f64::from(i))),
        prop_oneof![Just(f64::NAN), Just(-0.0), Just(0.0)].prop_map(Value::Float),
        "[a-c]".prop_map(Value::Text),
        "[a-c]\\.[A-C]".prop_map(Value::Object),
        Just(Value::Bool(true)),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_member().prop_map(Op::Add),
        1 => arb_member().prop_map(Op::Remove),
    ]
}

fn check_against_model(c: &mut dyn Container, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut model: HashSet<Value> = HashSet::new();
    for op in ops {
        let before = c.size();
        match op {
            Op::Add(v) => {
                let inserted = c.add(v.clone().into());
                prop_assert_eq!(inserted, model.insert(v.clone()));
                prop_assert!(c.contains(v));
                prop_assert_eq!(c.size(), if inserted { before + 1 } else { before });
            }
            Op::Remove(v) => {
                let removed = c.remove(v);
                prop_assert_eq!(removed, model.remove(v));
                prop_assert!(!c.contains(v));
                prop_assert_eq!(c.size(), if removed { before - 1 } else { before });
            }
        }
    }

    let seen = walk(c);
    prop_assert_eq!(seen.len(), c.size());
    let seen_set: HashSet<Value> = seen.into_iter().collect();
    prop_assert_eq!(seen_set, model);
    prop_assert_eq!(c.begin() == c.end(), c.size() == 0);
    Ok(())
}

proptest! {
    #[test]
    fn set_matches_model(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut set = Set::new();
        check_against_model(&mut set, &ops)?;
    }

    #[test]
    fn ordered_set_matches_model(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut ordered = OrderedSet::new();
        check_against_model(&mut ordered, &ops)?;
    }

    #[test]
    fn ordered_set_order_is_first_insertion(values in prop::collection::vec(arb_member(), 0..32)) {
        let ordered: OrderedSet = values.iter().cloned().collect();
        let mut expected: Vec<Value> = Vec::new();
        for v in values {
            if !expected.contains(&v) {
                expected.push(v);
            }
        }
        prop_assert_eq!(walk(&ordered), expected);
    }

    #[test]
    fn set_equality_ignores_insertion_order(values in prop::collection::vec(arb_member(), 0..32)) {
        let forward: Set = values.iter().cloned().collect();
        let backward: Set = values.iter().rev().cloned().collect();
        prop_assert_eq!(Value::from(forward), Value::from(backward));
    }

    #[test]
    fn clone_advance_never_moves_original(values in prop::collection::vec(arb_member(), 1..16), steps in 0usize..16) {
        let ordered: OrderedSet = values.into_iter().collect();
        let original = ordered.begin();
        let mut copy = original.clone();
        for _ in 0..steps.min(ordered.size()) {
            copy.advance();
        }
        prop_assert_eq!(original.value(), ordered.get(0).unwrap());
        prop_assert_eq!(copy == original, steps == 0);
    }
}
