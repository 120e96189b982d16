//! Compile-time checks on the generated trait surface.

use static_assertions::{assert_impl_all, assert_not_impl_any};

use polyad::prelude::*;

// Value semantics: copy when the slots are, clone otherwise.
assert_impl_all!(Tuple2<i32, char>: Copy, Clone);
assert_impl_all!(Tuple2<i32, String>: Clone);
assert_not_impl_any!(Tuple2<i32, String>: Copy);

// The four structural operations plus std interop.
assert_impl_all!(
    Tuple3<i32, String, char>:
    PartialEq, Eq, PartialOrd, Ord, std::hash::Hash, std::fmt::Display, std::fmt::Debug,
    StructuralHash, RenderFlat, DynCompare, CompareWith
);

// Thread safety falls out of the slots; no interior state anywhere.
assert_impl_all!(Tuple16<u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8>: Send, Sync);
assert_impl_all!(
    TupleRest<i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, Tuple1<i32>>:
    Send, Sync, Copy, StructuralHash, DynCompare, CompareWith
);

const _: () = {
    assert!(Tuple1::<i32>::ARITY == 1);
    assert!(Tuple16::<u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8>::ARITY == 16);
};

#[test]
fn arity_is_exposed_per_instance() {
    assert_eq!(tuple!(1).arity(), 1);
    assert_eq!(tuple!(1, 2, 3, 4, 5, 6, 7, 8).arity(), 8);
}
