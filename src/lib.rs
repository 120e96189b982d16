#![cfg_attr(not(feature = "std"), no_std)]

//! # polyad
//!
//! Fixed-arity, immutable value-type tuples with full structural semantics.
//!
//! `Tuple1..Tuple16` are generated structs of ordered, independently-typed
//! slots; `TupleRest` extends the family to arbitrary arity by nesting a
//! further tuple behind a 16-slot head. Every member of the family carries the
//! same four structural operations:
//!
//! - **Equality** — slot by slot, same closed type only (`PartialEq`/`Eq`).
//! - **Ordering** — lexicographic with strict short-circuit at the first
//!   non-equal slot (`PartialOrd`/`Ord`).
//! - **Hashing** — an order-sensitive fold of per-slot hash codes through
//!   [`HashCombiner`] ([`StructuralHash`]), consistent with equality.
//! - **Formatting** — `"(v1, v2, ..., vN)"` with nested `rest` slots
//!   flattened into the same single list (`Display` / [`RenderFlat`]).
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - HashCombiner (order-sensitive fold), Fnv1a64 (slot hasher)     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Tuple Core                                              |
//! |  - Tuple1..Tuple16 (fixed arity), TupleRest (head + nested rest)  |
//! |  - StructuralHash, RenderFlat, DynCompare, CompareWith            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - tuple! constructor macro, SlotComparer / Typed<T>, prelude     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick start
//!
//! ```
//! use polyad::prelude::*;
//!
//! let a = tuple!(1, "one", 10);
//! let b = tuple!(1, "one", 20);
//!
//! assert!(a < b); // first differing slot decides
//! assert_eq!(a.to_string(), "(1, one, 10)");
//! assert_eq!(a.item2, "one"); // slots read back verbatim
//! ```
//!
//! Beyond sixteen values, `tuple!` nests a [`TupleRest`] automatically and the
//! flattened semantics (ordering, hashing, rendering) are preserved across the
//! nesting boundary.
//!
//! ## Dynamic and comparer surfaces
//!
//! [`DynCompare`] compares against an `Option<&dyn Any>`: an absent value is
//! unequal but compares greater; a foreign type is unequal but refuses to be
//! ordered ([`Error::TupleTypeMismatch`]). [`CompareWith`] re-exposes all
//! operations through a caller-supplied [`SlotComparer`] for cases where the
//! slots' own semantics must not apply.
//!
//! [`Error::TupleTypeMismatch`]: Error#variant.TupleTypeMismatch

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Tuple Core
// =============================================================================
pub mod tuple;

// =============================================================================
// Layer 2: User API
// =============================================================================
pub mod comparer;
pub mod error;

// Syntax macros (tuple!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use comparer::{SlotComparer, Typed};
pub use error::Error;
pub use primitives::combine::HashCombiner;
pub use primitives::hasher::{Fnv1a64, hash_one};
pub use tuple::Tuple;
pub use tuple::fixed::{
    Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7, Tuple8, Tuple9, Tuple10, Tuple11,
    Tuple12, Tuple13, Tuple14, Tuple15, Tuple16,
};
pub use tuple::ops::{CompareWith, DynCompare, RenderFlat, StructuralHash};
pub use tuple::rest::TupleRest;

/// Common items for working with structural tuples.
pub mod prelude {
    pub use crate::comparer::{SlotComparer, Typed};
    pub use crate::error::Error;
    pub use crate::tuple;
    pub use crate::tuple::Tuple;
    pub use crate::tuple::fixed::{
        Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7, Tuple8, Tuple9, Tuple10, Tuple11,
        Tuple12, Tuple13, Tuple14, Tuple15, Tuple16,
    };
    pub use crate::tuple::ops::{CompareWith, DynCompare, RenderFlat, StructuralHash};
    pub use crate::tuple::rest::TupleRest;
}
