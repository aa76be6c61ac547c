//! Non-cryptographic 32-bit hashing.
//!
//! This crate provides the MurmurHash2 and MurmurHash3 (32-bit) hash
//! functions along with a multi-value hash combiner for synthesizing one
//! hash code from up to eight values. All engines are pure and stateless:
//! identical input bytes and seed produce the identical output on every
//! call, thread and platform. Arithmetic is wrapping throughout.
//!
//! None of these algorithms is cryptographically secure; collisions are
//! easy to construct on purpose. Use them for bucketing, deduplication and
//! change detection, not for integrity or authentication.

pub mod error;
pub mod hash_algorithm;
pub mod hash_code;
pub mod murmur2;
pub mod murmur3;

mod bits;

// Re-export commonly used types
pub use error::{HashError, HashResult};
pub use hash_algorithm::{Hash32Algorithm, UnknownHashAlgorithm};
pub use hash_code::{combine_hashes, HashCode, HashCode32};
