//! Arbitrary arity through nested composition.
//!
//! [`TupleRest`] pairs a 16-slot head with a further tuple in `rest`. Every
//! operation is two-phase: the head is evaluated with the fixed 16-arity
//! algorithm (through a borrowing [`Tuple16`] view), and `rest` is consulted
//! only when the head ties. Since `rest` may itself be a `TupleRest`, the
//! family covers any arity while keeping lexicographic semantics over the
//! flattened slot sequence.

use core::any::{Any, type_name};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::Tuple;
use super::fixed::Tuple16;
use super::ops::{CompareWith, DynCompare, RenderFlat, StructuralHash};
use crate::comparer::SlotComparer;
use crate::error::Error;
use crate::primitives::combine::HashCombiner;

/// A structural tuple of 16 head slots plus a nested tuple of further slots.
///
/// `rest` carries slots 17 and beyond under the identical contract as the
/// head, recursively. Hash combination order is fixed — head slots 1..16,
/// then `rest` folded into the same combiner — so two structurally equal
/// extended tuples hash identically regardless of construction path.
#[derive(Debug, Clone, Copy)]
pub struct TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> {
    pub item1: T1,
    pub item2: T2,
    pub item3: T3,
    pub item4: T4,
    pub item5: T5,
    pub item6: T6,
    pub item7: T7,
    pub item8: T8,
    pub item9: T9,
    pub item10: T10,
    pub item11: T11,
    pub item12: T12,
    pub item13: T13,
    pub item14: T14,
    pub item15: T15,
    pub item16: T16,
    /// Slots 17 and beyond, as a nested tuple.
    pub rest: R,
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
    TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
{
    /// Creates an extended tuple from its 16 head slots and the nested rest.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        item1: T1,
        item2: T2,
        item3: T3,
        item4: T4,
        item5: T5,
        item6: T6,
        item7: T7,
        item8: T8,
        item9: T9,
        item10: T10,
        item11: T11,
        item12: T12,
        item13: T13,
        item14: T14,
        item15: T15,
        item16: T16,
        rest: R,
    ) -> Self {
        Self {
            item1,
            item2,
            item3,
            item4,
            item5,
            item6,
            item7,
            item8,
            item9,
            item10,
            item11,
            item12,
            item13,
            item14,
            item15,
            item16,
            rest,
        }
    }

    /// Borrowing view of the 16 head slots as a [`Tuple16`].
    ///
    /// The head phase of every operation runs on this view, so the extended
    /// tuple reuses the fixed-arity algorithm rather than restating it.
    pub const fn head(
        &self,
    ) -> Tuple16<
        &T1,
        &T2,
        &T3,
        &T4,
        &T5,
        &T6,
        &T7,
        &T8,
        &T9,
        &T10,
        &T11,
        &T12,
        &T13,
        &T14,
        &T15,
        &T16,
    > {
        Tuple16::new(
            &self.item1,
            &self.item2,
            &self.item3,
            &self.item4,
            &self.item5,
            &self.item6,
            &self.item7,
            &self.item8,
            &self.item9,
            &self.item10,
            &self.item11,
            &self.item12,
            &self.item13,
            &self.item14,
            &self.item15,
            &self.item16,
        )
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> Tuple
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
    T6: 'static,
    T7: 'static,
    T8: 'static,
    T9: 'static,
    T10: 'static,
    T11: 'static,
    T12: 'static,
    T13: 'static,
    T14: 'static,
    T15: 'static,
    T16: 'static,
    R: Tuple,
{
    const ARITY: usize = 16 + R::ARITY;
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> PartialEq
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: PartialEq,
    T2: PartialEq,
    T3: PartialEq,
    T4: PartialEq,
    T5: PartialEq,
    T6: PartialEq,
    T7: PartialEq,
    T8: PartialEq,
    T9: PartialEq,
    T10: PartialEq,
    T11: PartialEq,
    T12: PartialEq,
    T13: PartialEq,
    T14: PartialEq,
    T15: PartialEq,
    T16: PartialEq,
    R: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.head() == other.head() && self.rest == other.rest
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> Eq
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: Eq,
    T2: Eq,
    T3: Eq,
    T4: Eq,
    T5: Eq,
    T6: Eq,
    T7: Eq,
    T8: Eq,
    T9: Eq,
    T10: Eq,
    T11: Eq,
    T12: Eq,
    T13: Eq,
    T14: Eq,
    T15: Eq,
    T16: Eq,
    R: Eq,
{
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> PartialOrd
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: PartialOrd,
    T2: PartialOrd,
    T3: PartialOrd,
    T4: PartialOrd,
    T5: PartialOrd,
    T6: PartialOrd,
    T7: PartialOrd,
    T8: PartialOrd,
    T9: PartialOrd,
    T10: PartialOrd,
    T11: PartialOrd,
    T12: PartialOrd,
    T13: PartialOrd,
    T14: PartialOrd,
    T15: PartialOrd,
    T16: PartialOrd,
    R: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.head().partial_cmp(&other.head()) {
            Some(Ordering::Equal) => self.rest.partial_cmp(&other.rest),
            non_eq => non_eq,
        }
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> Ord
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: Ord,
    T2: Ord,
    T3: Ord,
    T4: Ord,
    T5: Ord,
    T6: Ord,
    T7: Ord,
    T8: Ord,
    T9: Ord,
    T10: Ord,
    T11: Ord,
    T12: Ord,
    T13: Ord,
    T14: Ord,
    T15: Ord,
    T16: Ord,
    R: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // Rest breaks ties only; head slots decide first.
        self.head()
            .cmp(&other.head())
            .then_with(|| self.rest.cmp(&other.rest))
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> Hash
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: Hash,
    T2: Hash,
    T3: Hash,
    T4: Hash,
    T5: Hash,
    T6: Hash,
    T7: Hash,
    T8: Hash,
    T9: Hash,
    T10: Hash,
    T11: Hash,
    T12: Hash,
    T13: Hash,
    T14: Hash,
    T15: Hash,
    T16: Hash,
    R: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.head().hash(state);
        self.rest.hash(state);
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> StructuralHash
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: Hash,
    T2: Hash,
    T3: Hash,
    T4: Hash,
    T5: Hash,
    T6: Hash,
    T7: Hash,
    T8: Hash,
    T9: Hash,
    T10: Hash,
    T11: Hash,
    T12: Hash,
    T13: Hash,
    T14: Hash,
    T15: Hash,
    T16: Hash,
    R: StructuralHash,
{
    fn fold_hash(&self, acc: HashCombiner) -> HashCombiner {
        // Head slots 1..16 first, then rest on the same combiner.
        self.rest.fold_hash(self.head().fold_hash(acc))
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> RenderFlat
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: fmt::Display,
    T2: fmt::Display,
    T3: fmt::Display,
    T4: fmt::Display,
    T5: fmt::Display,
    T6: fmt::Display,
    T7: fmt::Display,
    T8: fmt::Display,
    T9: fmt::Display,
    T10: fmt::Display,
    T11: fmt::Display,
    T12: fmt::Display,
    T13: fmt::Display,
    T14: fmt::Display,
    T15: fmt::Display,
    T16: fmt::Display,
    R: RenderFlat,
{
    fn render_slots(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.head().render_slots(f)?;
        f.write_str(", ")?;
        self.rest.render_slots(f)
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> fmt::Display
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: fmt::Display,
    T2: fmt::Display,
    T3: fmt::Display,
    T4: fmt::Display,
    T5: fmt::Display,
    T6: fmt::Display,
    T7: fmt::Display,
    T8: fmt::Display,
    T9: fmt::Display,
    T10: fmt::Display,
    T11: fmt::Display,
    T12: fmt::Display,
    T13: fmt::Display,
    T14: fmt::Display,
    T15: fmt::Display,
    T16: fmt::Display,
    R: RenderFlat,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One flat list; rest contributes no nested parentheses.
        f.write_str("(")?;
        self.render_slots(f)?;
        f.write_str(")")
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> DynCompare
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: Ord + Any,
    T2: Ord + Any,
    T3: Ord + Any,
    T4: Ord + Any,
    T5: Ord + Any,
    T6: Ord + Any,
    T7: Ord + Any,
    T8: Ord + Any,
    T9: Ord + Any,
    T10: Ord + Any,
    T11: Ord + Any,
    T12: Ord + Any,
    T13: Ord + Any,
    T14: Ord + Any,
    T15: Ord + Any,
    T16: Ord + Any,
    R: Ord + Any,
{
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

impl<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R> CompareWith
    for TupleRest<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, R>
where
    T1: Any,
    T2: Any,
    T3: Any,
    T4: Any,
    T5: Any,
    T6: Any,
    T7: Any,
    T8: Any,
    T9: Any,
    T10: Any,
    T11: Any,
    T12: Any,
    T13: Any,
    T14: Any,
    T15: Any,
    T16: Any,
    R: CompareWith + Any,
{
    fn eq_with(&self, other: Option<&dyn Any>, cmp: &dyn SlotComparer) -> bool {
        let Some(other) = other.and_then(|other| other.downcast_ref::<Self>()) else {
            return false;
        };
        cmp.eq_slots(&self.item1, &other.item1)
            && cmp.eq_slots(&self.item2, &other.item2)
            && cmp.eq_slots(&self.item3, &other.item3)
            && cmp.eq_slots(&self.item4, &other.item4)
            && cmp.eq_slots(&self.item5, &other.item5)
            && cmp.eq_slots(&self.item6, &other.item6)
            && cmp.eq_slots(&self.item7, &other.item7)
            && cmp.eq_slots(&self.item8, &other.item8)
            && cmp.eq_slots(&self.item9, &other.item9)
            && cmp.eq_slots(&self.item10, &other.item10)
            && cmp.eq_slots(&self.item11, &other.item11)
            && cmp.eq_slots(&self.item12, &other.item12)
            && cmp.eq_slots(&self.item13, &other.item13)
            && cmp.eq_slots(&self.item14, &other.item14)
            && cmp.eq_slots(&self.item15, &other.item15)
            && cmp.eq_slots(&self.item16, &other.item16)
            && self.rest.eq_with(Some(&other.rest), cmp)
    }

    fn cmp_with(&self, other: Option<&dyn Any>, cmp: &dyn SlotComparer) -> Result<Ordering, Error> {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };
        let Some(other) = other.downcast_ref::<Self>() else {
            return Err(Error::TupleTypeMismatch {
                expected: type_name::<Self>(),
            });
        };
        // Sequential: a decided slot stops all later comparer calls.
        match cmp.cmp_slots(&self.item1, &other.item1)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item2, &other.item2)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item3, &other.item3)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item4, &other.item4)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item5, &other.item5)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item6, &other.item6)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item7, &other.item7)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item8, &other.item8)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item9, &other.item9)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item10, &other.item10)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item11, &other.item11)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item12, &other.item12)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item13, &other.item13)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item14, &other.item14)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item15, &other.item15)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        match cmp.cmp_slots(&self.item16, &other.item16)? {
            Ordering::Equal => {}
            non_eq => return Ok(non_eq),
        }
        self.rest.cmp_with(Some(&other.rest), cmp)
    }

    fn fold_hash_with(
        &self,
        cmp: &dyn SlotComparer,
        acc: HashCombiner,
    ) -> Result<HashCombiner, Error> {
        let acc = acc.write(cmp.hash_slot(&self.item1)?);
        let acc = acc.write(cmp.hash_slot(&self.item2)?);
        let acc = acc.write(cmp.hash_slot(&self.item3)?);
        let acc = acc.write(cmp.hash_slot(&self.item4)?);
        let acc = acc.write(cmp.hash_slot(&self.item5)?);
        let acc = acc.write(cmp.hash_slot(&self.item6)?);
        let acc = acc.write(cmp.hash_slot(&self.item7)?);
        let acc = acc.write(cmp.hash_slot(&self.item8)?);
        let acc = acc.write(cmp.hash_slot(&self.item9)?);
        let acc = acc.write(cmp.hash_slot(&self.item10)?);
        let acc = acc.write(cmp.hash_slot(&self.item11)?);
        let acc = acc.write(cmp.hash_slot(&self.item12)?);
        let acc = acc.write(cmp.hash_slot(&self.item13)?);
        let acc = acc.write(cmp.hash_slot(&self.item14)?);
        let acc = acc.write(cmp.hash_slot(&self.item15)?);
        let acc = acc.write(cmp.hash_slot(&self.item16)?);
        self.rest.fold_hash_with(cmp, acc)
    }
}
