//! The pluggable-comparer surface: identical matching algorithms, per-slot
//! semantics supplied by the caller.

use std::any::Any;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};

use polyad::prelude::*;

/// Delegates to `Typed<i32>` while counting every per-slot invocation.
struct Counting(&'static AtomicUsize);

impl SlotComparer for Counting {
    fn eq_slots(&self, a: &dyn Any, b: &dyn Any) -> bool {
        self.0.fetch_add(1, Relaxed);
        Typed::<i32>::new().eq_slots(a, b)
    }

    fn cmp_slots(&self, a: &dyn Any, b: &dyn Any) -> Result<Ordering, Error> {
        self.0.fetch_add(1, Relaxed);
        Typed::<i32>::new().cmp_slots(a, b)
    }

    fn hash_slot(&self, value: &dyn Any) -> Result<u64, Error> {
        self.0.fetch_add(1, Relaxed);
        Typed::<i32>::new().hash_slot(value)
    }
}

/// Degenerate comparer: every slot hashes to zero.
struct ZeroHash;

impl SlotComparer for ZeroHash {
    fn eq_slots(&self, _: &dyn Any, _: &dyn Any) -> bool {
        true
    }

    fn cmp_slots(&self, _: &dyn Any, _: &dyn Any) -> Result<Ordering, Error> {
        Ok(Ordering::Equal)
    }

    fn hash_slot(&self, _: &dyn Any) -> Result<u64, Error> {
        Ok(0)
    }
}

// =============================================================================
// Equality and ordering through a comparer
// =============================================================================

#[test]
fn typed_comparer_matches_default_semantics() {
    let cmp = Typed::<i32>::new();
    let x = tuple!(1, 2, 3);

    assert!(x.eq_with(Some(&tuple!(1, 2, 3)), &cmp));
    assert!(!x.eq_with(Some(&tuple!(1, 2, 4)), &cmp));
    assert_eq!(x.cmp_with(Some(&tuple!(1, 3, 0)), &cmp), Ok(Ordering::Less));
    assert_eq!(
        x.cmp_with(Some(&tuple!(1, 2, 3)), &cmp),
        Ok(Ordering::Equal)
    );
}

#[test]
fn absent_and_foreign_follow_the_default_policy() {
    let cmp = Typed::<i32>::new();
    let x = tuple!(1, 2);

    assert!(!x.eq_with(None, &cmp));
    assert!(!x.eq_with(Some(&"foo"), &cmp));
    assert_eq!(x.cmp_with(None, &cmp), Ok(Ordering::Greater));
    assert!(matches!(
        x.cmp_with(Some(&"foo"), &cmp),
        Err(Error::TupleTypeMismatch { .. })
    ));
}

#[test]
fn comparer_is_not_invoked_for_absent_or_foreign_counterparts() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    let cmp = Counting(&CALLS);
    let x = tuple!(1, 2, 3);

    assert!(!x.eq_with(None, &cmp));
    assert!(!x.eq_with(Some(&"foo"), &cmp));
    assert!(x.cmp_with(Some(&"foo"), &cmp).is_err());
    assert_eq!(CALLS.load(Relaxed), 0);
}

#[test]
fn comparer_is_invoked_once_per_slot() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    let cmp = Counting(&CALLS);
    let x = tuple!(1, 2, 3);

    assert!(x.eq_with(Some(&tuple!(1, 2, 3)), &cmp));
    assert_eq!(CALLS.load(Relaxed), 3);
}

#[test]
fn comparer_short_circuits_like_the_default_ordering() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    let cmp = Counting(&CALLS);
    let x = tuple!(1, 9, 9);

    assert_eq!(x.cmp_with(Some(&tuple!(2, 0, 0)), &cmp), Ok(Ordering::Less));
    assert_eq!(CALLS.load(Relaxed), 1);
}

#[test]
fn typed_comparer_rejects_slots_of_other_types() {
    let cmp = Typed::<i32>::new();
    let x = tuple!(1, "left");
    let y = tuple!(1, "right");

    // Slot 1 ties as an i32; slot 2 is not an i32.
    assert!(matches!(
        x.cmp_with(Some(&y), &cmp),
        Err(Error::SlotTypeMismatch { .. })
    ));
    assert!(matches!(
        x.hash_with(&cmp),
        Err(Error::SlotTypeMismatch { .. })
    ));
}

// =============================================================================
// Hashing through a comparer
// =============================================================================

#[test]
fn typed_comparer_hash_matches_combined_hash() {
    let cmp = Typed::<i32>::new();
    let x = tuple!(10, 20, 30);
    assert_eq!(x.hash_with(&cmp), Ok(x.combined_hash()));
}

#[test]
fn constant_zero_hash_is_honored_verbatim() {
    assert_eq!(tuple!(1).hash_with(&ZeroHash), Ok(0));
    assert_eq!(tuple!(1, 2, 3, 4, 5).hash_with(&ZeroHash), Ok(0));

    let wide = tuple!(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17);
    assert_eq!(wide.hash_with(&ZeroHash), Ok(0));
}
