//! # Layer 0: Primitives
//!
//! Hashing building blocks shared by every tuple arity:
//!
//! - [`combine::HashCombiner`]: order-sensitive fold of discrete hash codes.
//! - [`hasher::Fnv1a64`]: the default per-slot hasher (64-bit FNV-1a).

pub mod combine;
pub mod hasher;

pub use combine::HashCombiner;
pub use hasher::{Fnv1a64, hash_one};
