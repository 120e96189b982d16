//! Comparison against counterparts of unknown type.
//!
//! Equality degrades to `false` for absent or foreign values; ordering is
//! defined for an absent counterpart (the tuple is greater) but refuses a
//! foreign type.

use std::cmp::Ordering;

use polyad::prelude::*;

#[test]
fn absent_counterpart_is_unequal() {
    assert!(!tuple!(1).dyn_eq(None));
    assert!(!tuple!(1, 2, 3).dyn_eq(None));
}

#[test]
fn foreign_type_is_unequal() {
    let x = tuple!(1, 2);
    assert!(!x.dyn_eq(Some(&"foo")));
    assert!(!x.dyn_eq(Some(&42_i32)));
}

#[test]
fn different_arity_is_a_foreign_type() {
    let x = tuple!(1, 2);
    assert!(!x.dyn_eq(Some(&tuple!(1, 2, 3))));
    assert!(x.dyn_cmp(Some(&tuple!(1, 2, 3))).is_err());
}

#[test]
fn same_closed_type_compares_slot_by_slot() {
    let x = tuple!(1, 2);
    assert!(x.dyn_eq(Some(&tuple!(1, 2))));
    assert!(!x.dyn_eq(Some(&tuple!(1, 3))));
}

#[test]
fn absent_counterpart_compares_less_than_any_tuple() {
    assert_eq!(tuple!(1).dyn_cmp(None), Ok(Ordering::Greater));
    assert_eq!(
        tuple!(i32::MIN, i32::MIN).dyn_cmp(None),
        Ok(Ordering::Greater)
    );
}

#[test]
fn foreign_type_refuses_to_be_ordered() {
    let x = Tuple1::new(1493878331);
    let err = x.dyn_cmp(Some(&"foo")).unwrap_err();
    assert!(matches!(err, Error::TupleTypeMismatch { .. }));
}

#[test]
fn dynamic_ordering_matches_static_ordering() {
    let x = Tuple1::new(1493878331);
    assert_eq!(
        x.dyn_cmp(Some(&Tuple1::new(1493878332))),
        Ok(Ordering::Less)
    );
    assert_eq!(
        x.dyn_cmp(Some(&Tuple1::new(1493878330))),
        Ok(Ordering::Greater)
    );
    assert_eq!(
        x.dyn_cmp(Some(&Tuple1::new(1493878331))),
        Ok(Ordering::Equal)
    );
}
