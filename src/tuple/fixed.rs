//! Fixed-arity tuples `Tuple1..Tuple16`.
//!
//! One algorithm, sixteen arities: `define_tuple!` expands the structural
//! operations once per arity, pasting the slot fields `item1..itemN` from the
//! slot indices. Arities beyond sixteen compose through
//! [`TupleRest`](super::rest::TupleRest).

use core::any::{Any, type_name};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use paste::paste;

use super::Tuple;
use super::ops::{CompareWith, DynCompare, RenderFlat, StructuralHash};
use crate::comparer::SlotComparer;
use crate::error::Error;
use crate::primitives::combine::HashCombiner;
use crate::primitives::hasher::hash_one;

// =============================================================================
// define_tuple! — the shared algorithm, stamped per arity
// =============================================================================

/// Generates one tuple struct and its full operation surface.
///
/// The first slot is split from the tail so that list rendering and the
/// lexicographic chains need no separator/first-iteration bookkeeping.
macro_rules! define_tuple {
    ($name:ident, $arity:literal, ($T0:ident, $n0:tt) $(, ($T:ident, $n:tt))*) => {
        paste! {
            #[doc = concat!("A structural tuple of ", stringify!($arity), " ordered slots.")]
            ///
            /// Slots are set at construction and read back through the public
            /// fields; assignment copies the whole value.
            #[derive(Debug, Clone, Copy)]
            pub struct $name<$T0 $(, $T)*> {
                pub [<item $n0>]: $T0,
                $(pub [<item $n>]: $T,)*
            }

            impl<$T0 $(, $T)*> $name<$T0 $(, $T)*> {
                #[doc = concat!("Creates a `", stringify!($name), "` from its slot values, in declaration order.")]
                #[allow(clippy::too_many_arguments)]
                pub const fn new([<item $n0>]: $T0 $(, [<item $n>]: $T)*) -> Self {
                    Self { [<item $n0>] $(, [<item $n>])* }
                }
            }

            impl<$T0: 'static $(, $T: 'static)*> Tuple for $name<$T0 $(, $T)*> {
                const ARITY: usize = $arity;
            }

            // Same closed type only; no cross-arity or cross-type equality.
            impl<$T0: PartialEq $(, $T: PartialEq)*> PartialEq for $name<$T0 $(, $T)*> {
                fn eq(&self, other: &Self) -> bool {
                    self.[<item $n0>] == other.[<item $n0>]
                        $(&& self.[<item $n>] == other.[<item $n>])*
                }
            }

            impl<$T0: Eq $(, $T: Eq)*> Eq for $name<$T0 $(, $T)*> {}

            impl<$T0: PartialOrd $(, $T: PartialOrd)*> PartialOrd for $name<$T0 $(, $T)*> {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    match self.[<item $n0>].partial_cmp(&other.[<item $n0>]) {
                        Some(Ordering::Equal) => {}
                        non_eq => return non_eq,
                    }
                    $(
                        match self.[<item $n>].partial_cmp(&other.[<item $n>]) {
                            Some(Ordering::Equal) => {}
                            non_eq => return non_eq,
                        }
                    )*
                    Some(Ordering::Equal)
                }
            }

            // Lexicographic: the first non-equal slot decides and later slots
            // are never inspected.
            impl<$T0: Ord $(, $T: Ord)*> Ord for $name<$T0 $(, $T)*> {
                fn cmp(&self, other: &Self) -> Ordering {
                    match self.[<item $n0>].cmp(&other.[<item $n0>]) {
                        Ordering::Equal => {}
                        non_eq => return non_eq,
                    }
                    $(
                        match self.[<item $n>].cmp(&other.[<item $n>]) {
                            Ordering::Equal => {}
                            non_eq => return non_eq,
                        }
                    )*
                    Ordering::Equal
                }
            }

            impl<$T0: Hash $(, $T: Hash)*> Hash for $name<$T0 $(, $T)*> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.[<item $n0>].hash(state);
                    $(self.[<item $n>].hash(state);)*
                }
            }

            impl<$T0: Hash $(, $T: Hash)*> StructuralHash for $name<$T0 $(, $T)*> {
                fn fold_hash(&self, acc: HashCombiner) -> HashCombiner {
                    let acc = acc.write(hash_one(&self.[<item $n0>]));
                    $(let acc = acc.write(hash_one(&self.[<item $n>]));)*
                    acc
                }
            }

            impl<$T0: fmt::Display $(, $T: fmt::Display)*> RenderFlat for $name<$T0 $(, $T)*> {
                fn render_slots(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.[<item $n0>])?;
                    $(write!(f, ", {}", self.[<item $n>])?;)*
                    Ok(())
                }
            }

            impl<$T0: fmt::Display $(, $T: fmt::Display)*> fmt::Display for $name<$T0 $(, $T)*> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("(")?;
                    self.render_slots(f)?;
                    f.write_str(")")
                }
            }

            impl<$T0: Ord + Any $(, $T: Ord + Any)*> DynCompare for $name<$T0 $(, $T)*> {
                fn dyn_eq(&self, other: Option<&dyn Any>) -> bool {
                    match other.and_then(|other| other.downcast_ref::<Self>()) {
                        Some(other) => self == other,
                        None => false,
                    }
                }

                fn dyn_cmp(&self, other: Option<&dyn Any>) -> Result<Ordering, Error> {
                    let Some(other) = other else {
                        return Ok(Ordering::Greater);
                    };
                    match other.downcast_ref::<Self>() {
                        Some(other) => Ok(self.cmp(other)),
                        None => Err(Error::TupleTypeMismatch {
                            expected: type_name::<Self>(),
                        }),
                    }
                }
            }

            impl<$T0: Any $(, $T: Any)*> CompareWith for $name<$T0 $(, $T)*> {
                fn eq_with(&self, other: Option<&dyn Any>, cmp: &dyn SlotComparer) -> bool {
                    // Resolve absent/foreign counterparts before touching cmp.
                    let Some(other) = other.and_then(|other| other.downcast_ref::<Self>()) else {
                        return false;
                    };
                    cmp.eq_slots(&self.[<item $n0>], &other.[<item $n0>])
                        $(&& cmp.eq_slots(&self.[<item $n>], &other.[<item $n>]))*
                }

                fn cmp_with(
                    &self,
                    other: Option<&dyn Any>,
                    cmp: &dyn SlotComparer,
                ) -> Result<Ordering, Error> {
                    let Some(other) = other else {
                        return Ok(Ordering::Greater);
                    };
                    let Some(other) = other.downcast_ref::<Self>() else {
                        return Err(Error::TupleTypeMismatch {
                            expected: type_name::<Self>(),
                        });
                    };
                    match cmp.cmp_slots(&self.[<item $n0>], &other.[<item $n0>])? {
                        Ordering::Equal => {}
                        non_eq => return Ok(non_eq),
                    }
                    $(
                        match cmp.cmp_slots(&self.[<item $n>], &other.[<item $n>])? {
                            Ordering::Equal => {}
                            non_eq => return Ok(non_eq),
                        }
                    )*
                    Ok(Ordering::Equal)
                }

                fn fold_hash_with(
                    &self,
                    cmp: &dyn SlotComparer,
                    acc: HashCombiner,
                ) -> Result<HashCombiner, Error> {
                    let acc = acc.write(cmp.hash_slot(&self.[<item $n0>])?);
                    $(let acc = acc.write(cmp.hash_slot(&self.[<item $n>])?);)*
                    Ok(acc)
                }
            }
        }
    };
}

// =============================================================================
// The sixteen fixed arities
// =============================================================================

define_tuple!(Tuple1, 1, (T1, 1));
define_tuple!(Tuple2, 2, (T1, 1), (T2, 2));
define_tuple!(Tuple3, 3, (T1, 1), (T2, 2), (T3, 3));
define_tuple!(Tuple4, 4, (T1, 1), (T2, 2), (T3, 3), (T4, 4));
define_tuple!(Tuple5, 5, (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5));
define_tuple!(Tuple6, 6, (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6));
define_tuple!(
    Tuple7, 7,
    (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6), (T7, 7)
);
define_tuple!(
    Tuple8, 8,
    (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6), (T7, 7), (T8, 8)
);
define_tuple!(
    Tuple9, 9,
    (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6), (T7, 7), (T8, 8), (T9, 9)
);
define_tuple!(
    Tuple10, 10,
    (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6), (T7, 7), (T8, 8), (T9, 9), (T10, 10)
);
define_tuple!(
    Tuple11, 11,
    (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6), (T7, 7), (T8, 8), (T9, 9), (T10, 10),
    (T11, 11)
);
define_tuple!(
    Tuple12, 12,
    (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6), (T7, 7), (T8, 8), (T9, 9), (T10, 10),
    (T11, 11), (T12, 12)
);
define_tuple!(
    Tuple13, 13,
    (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6), (T7, 7), (T8, 8), (T9, 9), (T10, 10),
    (T11, 11), (T12, 12), (T13, 13)
);
define_tuple!(
    Tuple14, 14,
    (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6), (T7, 7), (T8, 8), (T9, 9), (T10, 10),
    (T11, 11), (T12, 12), (T13, 13), (T14, 14)
);
define_tuple!(
    Tuple15, 15,
    (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6), (T7, 7), (T8, 8), (T9, 9), (T10, 10),
    (T11, 11), (T12, 12), (T13, 13), (T14, 14), (T15, 15)
);
define_tuple!(
    Tuple16, 16,
    (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6), (T7, 7), (T8, 8), (T9, 9), (T10, 10),
    (T11, 11), (T12, 12), (T13, 13), (T14, 14), (T15, 15), (T16, 16)
);
