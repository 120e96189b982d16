//! Caller-supplied element semantics.
//!
//! [`SlotComparer`] is the capability a caller passes into the
//! [`CompareWith`](crate::tuple::ops::CompareWith) operations when the slot
//! types' own `Eq`/`Ord`/`Hash` must not apply — case-insensitive keys, a
//! deliberately degenerate hash under test, and so on. Dispatch is an
//! explicit parameter on every call, not runtime type inspection: the tuple
//! hands each slot over as `&dyn Any` and the comparer decides what to do
//! with it.

use core::any::{Any, type_name};
use core::cmp::Ordering;
use core::hash::Hash;
use core::marker::PhantomData;

use crate::error::Error;
use crate::primitives::hasher::hash_one;

// =============================================================================
// SlotComparer
// =============================================================================

/// Element-level equality, ordering and hashing over type-erased slots.
///
/// Implementations must be pure with respect to a single call: the tuple
/// operations invoke the comparer at most once per slot and never retry.
pub trait SlotComparer {
    /// Whether two slot values are equal.
    fn eq_slots(&self, a: &dyn Any, b: &dyn Any) -> bool;

    /// Relative order of two slot values.
    ///
    /// Errors when the comparer has no sound order for the given values
    /// (typically a type it does not handle).
    fn cmp_slots(&self, a: &dyn Any, b: &dyn Any) -> Result<Ordering, Error>;

    /// Hash code of one slot value.
    fn hash_slot(&self, value: &dyn Any) -> Result<u64, Error>;
}

// =============================================================================
// Typed<T>
// =============================================================================

/// The stock comparer: downcasts every slot to `T` and applies `T`'s own
/// `Eq`/`Ord`/`Hash`.
///
/// Useful for homogeneous tuples, and as the reference implementation of the
/// [`SlotComparer`] contract. Equality with a value that is not a `T` is
/// `false`; ordering or hashing a non-`T` is [`Error::SlotTypeMismatch`].
pub struct Typed<T>(PhantomData<fn() -> T>);

impl<T> Typed<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Any + Ord + Hash> SlotComparer for Typed<T> {
    fn eq_slots(&self, a: &dyn Any, b: &dyn Any) -> bool {
        match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn cmp_slots(&self, a: &dyn Any, b: &dyn Any) -> Result<Ordering, Error> {
        match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
            (Some(a), Some(b)) => Ok(a.cmp(b)),
            _ => Err(Error::SlotTypeMismatch {
                expected: type_name::<T>(),
            }),
        }
    }

    fn hash_slot(&self, value: &dyn Any) -> Result<u64, Error> {
        match value.downcast_ref::<T>() {
            Some(value) => Ok(hash_one(value)),
            None => Err(Error::SlotTypeMismatch {
                expected: type_name::<T>(),
            }),
        }
    }
}
