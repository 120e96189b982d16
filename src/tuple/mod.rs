//! # Layer 1: Tuple Core
//!
//! The tuple family and its structural operations.
//!
//! - **Types**: [`fixed::Tuple1`]..[`fixed::Tuple16`] (one struct per arity),
//!   [`rest::TupleRest`] (16-slot head + nested tuple for arity > 16).
//! - **Operations**: [`ops::StructuralHash`], [`ops::RenderFlat`],
//!   [`ops::DynCompare`], [`ops::CompareWith`], alongside the std traits
//!   `PartialEq`/`Eq`, `PartialOrd`/`Ord`, `Hash` and `Display`.

pub mod fixed;
pub mod ops;
pub mod rest;

pub use fixed::{
    Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7, Tuple8, Tuple9, Tuple10, Tuple11,
    Tuple12, Tuple13, Tuple14, Tuple15, Tuple16,
};
pub use ops::{CompareWith, DynCompare, RenderFlat, StructuralHash};
pub use rest::TupleRest;

/// Marker for every member of the tuple family.
///
/// [`ARITY`](Tuple::ARITY) counts the *flattened* slot sequence: a
/// `TupleRest` contributes its 16 head slots plus the arity of its nested
/// `rest`, recursively.
pub trait Tuple: 'static {
    /// Number of slots, flattened through any nested `rest`.
    const ARITY: usize;

    /// [`ARITY`](Tuple::ARITY) as a method, for use through references.
    fn arity(&self) -> usize {
        Self::ARITY
    }
}
