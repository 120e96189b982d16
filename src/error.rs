//! Failure cases of the structural operations.
//!
//! Equality never fails: an absent or foreign-typed counterpart is simply
//! unequal. Ordering fails on a foreign type because no sound order exists
//! between unrelated types, while an absent counterpart has a conventional
//! position (it compares less than any tuple).

use thiserror::Error;

/// Errors produced by the dynamic and comparer-based tuple operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An ordering was requested against a value that is not the exact closed
    /// tuple type. The order between unrelated types is undefined and never
    /// guessed.
    #[error("cannot order against a value that is not a `{expected}`")]
    TupleTypeMismatch {
        /// Type name of the tuple the comparison was invoked on.
        expected: &'static str,
    },

    /// A typed comparer was handed a slot value of a type it does not handle.
    #[error("comparer expects slot values of type `{expected}`")]
    SlotTypeMismatch {
        /// Type name the comparer operates on.
        expected: &'static str,
    },
}
