//! The four structural operations, as traits shared by every arity.
//!
//! The std traits cover the statically-typed surface (`PartialEq`,
//! `PartialOrd`, `Ord`, `Hash`, `Display`). The traits here cover what std
//! has no shape for:
//!
//! - [`StructuralHash`]: the combiner fold, resumable across a nested `rest`.
//! - [`RenderFlat`]: the unparenthesized slot list, so `rest` slots flatten
//!   into the head's parentheses instead of nesting their own.
//! - [`DynCompare`]: equality/ordering against an `Option<&dyn Any>`
//!   counterpart of unknown type.
//! - [`CompareWith`]: the same operations routed through a caller-supplied
//!   [`SlotComparer`].

use core::any::Any;
use core::cmp::Ordering;
use core::fmt;

use crate::comparer::SlotComparer;
use crate::error::Error;
use crate::primitives::combine::HashCombiner;

// =============================================================================
// StructuralHash
// =============================================================================

/// Order-sensitive combined hash over all slots.
///
/// Consistent with equality: equal tuples produce equal combined hashes.
pub trait StructuralHash {
    /// Folds every slot's hash code, in slot order, into `acc`.
    ///
    /// `TupleRest` resumes its nested tuple on the same combiner, which fixes
    /// the combination order over the flattened sequence: head slots 1..16,
    /// then `rest`. Two structurally equal tuples therefore hash identically
    /// regardless of how their nesting was constructed.
    #[must_use]
    fn fold_hash(&self, acc: HashCombiner) -> HashCombiner;

    /// The combined hash of the whole tuple.
    fn combined_hash(&self) -> u64 {
        self.fold_hash(HashCombiner::new()).finish()
    }
}

// =============================================================================
// RenderFlat
// =============================================================================

/// Writes the slot values as a bare `v1, v2, ..., vN` list.
///
/// `Display` wraps this in one pair of parentheses at the outermost tuple
/// only; a nested `rest` renders through `RenderFlat` so all slots land in a
/// single flat list.
pub trait RenderFlat {
    fn render_slots(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

// =============================================================================
// DynCompare
// =============================================================================

/// Equality and ordering against a counterpart of unknown type.
///
/// `None` models an absent counterpart: unequal, and any tuple compares
/// greater than it. A present value of a foreign type is unequal, but
/// refuses to be ordered — there is no sound order between unrelated types,
/// so [`dyn_cmp`](DynCompare::dyn_cmp) errors rather than guessing.
pub trait DynCompare {
    /// `true` iff `other` is the same closed type with equal slots.
    ///
    /// Never fails: an absent or foreign-typed `other` is simply unequal.
    fn dyn_eq(&self, other: Option<&dyn Any>) -> bool;

    /// Lexicographic ordering against `other`.
    ///
    /// `None` yields `Ok(Ordering::Greater)`; a foreign type yields
    /// [`Error::TupleTypeMismatch`].
    fn dyn_cmp(&self, other: Option<&dyn Any>) -> Result<Ordering, Error>;
}

// =============================================================================
// CompareWith
// =============================================================================

/// The structural operations under a caller-supplied element comparer.
///
/// The matching algorithms are identical to the default surface; only the
/// per-slot calls change, going through `cmp` instead of the slot types' own
/// `Eq`/`Ord`/`Hash`. The comparer is treated as read-only and invoked at
/// most once per slot per call; an absent or foreign-typed `other` resolves
/// before any slot is consulted, so the comparer is then never invoked.
pub trait CompareWith {
    /// Slot-by-slot equality through `cmp.eq_slots`.
    fn eq_with(&self, other: Option<&dyn Any>, cmp: &dyn SlotComparer) -> bool;

    /// Lexicographic ordering through `cmp.cmp_slots`, with the same
    /// short-circuit and absent/foreign-type policy as
    /// [`DynCompare::dyn_cmp`].
    fn cmp_with(&self, other: Option<&dyn Any>, cmp: &dyn SlotComparer) -> Result<Ordering, Error>;

    /// Folds `cmp.hash_slot` of every slot, in slot order, into `acc`.
    fn fold_hash_with(
        &self,
        cmp: &dyn SlotComparer,
        acc: HashCombiner,
    ) -> Result<HashCombiner, Error>;

    /// The combined hash of the whole tuple under `cmp`.
    ///
    /// A degenerate comparer is honored verbatim: if `cmp` hashes every slot
    /// to `0`, the combined result is `0`.
    fn hash_with(&self, cmp: &dyn SlotComparer) -> Result<u64, Error> {
        Ok(self.fold_hash_with(cmp, HashCombiner::new())?.finish())
    }
}
