//! Order-sensitive hash combination.
//!
//! [`HashCombiner`] folds N discrete hash codes into one combined code. The
//! fold is deterministic and position-sensitive: the same codes in a
//! different order produce a different result, so `(a, b)` and `(b, a)` do
//! not collide by construction.

/// Deterministic, order-sensitive fold of 64-bit hash codes.
///
/// Each written code mixes into the accumulator as
/// `acc' = ((acc << 5) + acc) ^ code` over a zero seed. Two consequences the
/// tuple operations rely on:
///
/// - The first written code passes through verbatim, so a single-slot tuple
///   hashes to its slot's code.
/// - Folding all-zero codes yields zero: a degenerate comparer that hashes
///   every slot to a constant `0` is honored, never "fixed".
///
/// The combiner is a plain value; [`write`](HashCombiner::write) returns the
/// advanced state so folds chain through `let` rebinding or across a nested
/// `rest` tuple without mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashCombiner(u64);

impl HashCombiner {
    /// An empty combiner (zero seed).
    pub const fn new() -> Self {
        Self(0)
    }

    /// Folds one hash code into the accumulated state.
    #[must_use]
    pub const fn write(self, code: u64) -> Self {
        Self(((self.0 << 5).wrapping_add(self.0)) ^ code)
    }

    /// The combined hash of everything written so far.
    pub const fn finish(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::HashCombiner;

    #[test]
    fn first_code_passes_through() {
        assert_eq!(HashCombiner::new().write(0x1234).finish(), 0x1234);
    }

    #[test]
    fn zero_codes_fold_to_zero() {
        let folded = HashCombiner::new().write(0).write(0).write(0).finish();
        assert_eq!(folded, 0);
    }

    #[test]
    fn fold_is_order_sensitive() {
        // write(1) then write(2): ((1 << 5) + 1) ^ 2 = 35
        // write(2) then write(1): ((2 << 5) + 2) ^ 1 = 67
        assert_eq!(HashCombiner::new().write(1).write(2).finish(), 35);
        assert_eq!(HashCombiner::new().write(2).write(1).finish(), 67);
    }
}
