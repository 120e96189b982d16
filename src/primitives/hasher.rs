//! Default per-slot hasher.
//!
//! Slots produce their discrete hash code through a 64-bit FNV-1a
//! [`Hasher`]. FNV keeps the crate `core`-only (no `RandomState`) and, being
//! unseeded, keeps combined hashes stable across processes — a composite key
//! hashed today matches the same key hashed tomorrow.

use core::hash::{Hash, Hasher};

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// 64-bit FNV-1a hasher.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1a64(u64);

impl Fnv1a64 {
    pub const fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a64 {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u64::from(byte);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Hash code of a single value under the crate's default slot hasher.
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = Fnv1a64::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::hash_one;

    #[test]
    fn stable_across_calls() {
        assert_eq!(hash_one(&42_u32), hash_one(&42_u32));
        assert_eq!(hash_one("slot"), hash_one("slot"));
    }

    #[test]
    fn distinguishes_values() {
        assert_ne!(hash_one(&1_u32), hash_one(&2_u32));
    }
}
