//! Multi-value hash combiner.
//!
//! Synthesizes one 32-bit hash code from 1-8 component hashes using the
//! xxHash32 prime schedule: up to three components are folded into a single
//! accumulator, four or more run through a four-lane state that is merged
//! before the final avalanche. The result is the bit pattern of the
//! accumulator reinterpreted as a signed 32-bit integer.
//!
//! Component hashes come from the [`HashCode32`] contract; an absent value
//! (`None`) contributes a component hash of `0`. Combining is infallible.

use crate::bits::rotl32;
use crate::murmur3;

const PRIME1: u32 = 2_654_435_761;
const PRIME2: u32 = 2_246_822_519;
const PRIME3: u32 = 3_266_489_917;
const PRIME4: u32 = 668_265_263;
const PRIME5: u32 = 374_761_393;

#[inline]
fn round(v: u32, hc: u32) -> u32 {
    rotl32(v.wrapping_add(hc.wrapping_mul(PRIME2)), 13).wrapping_mul(PRIME1)
}

#[inline]
fn queue_round(hash: u32, hc: u32) -> u32 {
    rotl32(hash.wrapping_add(hc.wrapping_mul(PRIME3)), 17).wrapping_mul(PRIME4)
}

#[inline]
fn mix_state(v1: u32, v2: u32, v3: u32, v4: u32) -> u32 {
    rotl32(v1, 1)
        .wrapping_add(rotl32(v2, 7))
        .wrapping_add(rotl32(v3, 12))
        .wrapping_add(rotl32(v4, 18))
}

#[inline]
fn mix_final(mut hash: u32) -> u32 {
    hash ^= hash >> 15;
    hash = hash.wrapping_mul(PRIME2);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(PRIME3);
    hash ^= hash >> 16;
    hash
}

/// Combines component hashes into a single signed 32-bit hash code.
///
/// Components beyond a multiple of four are folded through the queue path
/// after the four-lane state is merged; fewer than four components skip the
/// lanes entirely. Every seed yields a distinct, deterministic mapping.
///
/// # Arguments
///
/// * `seed` - The seed perturbing the combined hash
/// * `hashes` - The component hashes, usually 1 to 8 of them
///
/// # Returns
///
/// The combined hash code
pub fn combine_hashes(seed: u32, hashes: &[u32]) -> i32 {
    let byte_count = (hashes.len() as u32).wrapping_mul(4);

    let mut hash;
    let mut queued = hashes;

    if hashes.len() >= 4 {
        let mut v1 = seed.wrapping_add(PRIME1).wrapping_add(PRIME2);
        let mut v2 = seed.wrapping_add(PRIME2);
        let mut v3 = seed;
        let mut v4 = seed.wrapping_sub(PRIME1);

        // Lanes are reused cyclically: each full group of four runs one pass.
        let mut groups = hashes.chunks_exact(4);
        for group in groups.by_ref() {
            v1 = round(v1, group[0]);
            v2 = round(v2, group[1]);
            v3 = round(v3, group[2]);
            v4 = round(v4, group[3]);
        }
        queued = groups.remainder();

        hash = mix_state(v1, v2, v3, v4);
    } else {
        hash = seed.wrapping_add(PRIME5);
    }

    hash = hash.wrapping_add(byte_count);
    for &hc in queued {
        hash = queue_round(hash, hc);
    }

    mix_final(hash) as i32
}

/// The 32-bit component-hash contract consumed by the combiner.
///
/// Integer types hash to their own bit pattern, strings and byte buffers
/// hash through MurmurHash3 of their raw bytes, and `None` hashes to `0`.
/// The contract is deterministic across runs and platforms.
pub trait HashCode32 {
    /// Returns the 32-bit component hash of this value.
    fn hash_code(&self) -> u32;
}

impl HashCode32 for u32 {
    fn hash_code(&self) -> u32 {
        *self
    }
}

impl HashCode32 for i32 {
    fn hash_code(&self) -> u32 {
        *self as u32
    }
}

impl HashCode32 for u8 {
    fn hash_code(&self) -> u32 {
        *self as u32
    }
}

impl HashCode32 for i8 {
    fn hash_code(&self) -> u32 {
        *self as u32
    }
}

impl HashCode32 for u16 {
    fn hash_code(&self) -> u32 {
        *self as u32
    }
}

impl HashCode32 for i16 {
    fn hash_code(&self) -> u32 {
        *self as u32
    }
}

impl HashCode32 for u64 {
    fn hash_code(&self) -> u32 {
        (*self as u32) ^ ((*self >> 32) as u32)
    }
}

impl HashCode32 for i64 {
    fn hash_code(&self) -> u32 {
        (*self as u64).hash_code()
    }
}

impl HashCode32 for bool {
    fn hash_code(&self) -> u32 {
        *self as u32
    }
}

impl HashCode32 for char {
    fn hash_code(&self) -> u32 {
        *self as u32
    }
}

impl HashCode32 for str {
    fn hash_code(&self) -> u32 {
        murmur3::hash(self.as_bytes())
    }
}

impl HashCode32 for String {
    fn hash_code(&self) -> u32 {
        self.as_str().hash_code()
    }
}

impl HashCode32 for [u8] {
    fn hash_code(&self) -> u32 {
        murmur3::hash(self)
    }
}

impl HashCode32 for Vec<u8> {
    fn hash_code(&self) -> u32 {
        self.as_slice().hash_code()
    }
}

impl<T: HashCode32 + ?Sized> HashCode32 for &T {
    fn hash_code(&self) -> u32 {
        (**self).hash_code()
    }
}

impl<T: HashCode32> HashCode32 for Option<T> {
    fn hash_code(&self) -> u32 {
        match self {
            Some(value) => value.hash_code(),
            None => 0,
        }
    }
}

/// Arity-generic combiner surface over [`HashCode32`] values.
///
/// Mirrors the one-to-eight-argument combine family of the original API.
/// Each arity comes in an unseeded form (seed `0`) and a `_with_seed`
/// form, paired the way the Murmur engines pair `hash` and
/// `hash_with_seed`.
pub struct HashCode;

impl HashCode {
    /// Combines the hash code of one value.
    pub fn combine1<T1: HashCode32>(v1: &T1) -> i32 {
        Self::combine1_with_seed(0, v1)
    }

    /// Combines the hash code of one value with the given seed.
    pub fn combine1_with_seed<T1: HashCode32>(seed: u32, v1: &T1) -> i32 {
        combine_hashes(seed, &[v1.hash_code()])
    }

    /// Combines the hash codes of two values.
    pub fn combine2<T1: HashCode32, T2: HashCode32>(v1: &T1, v2: &T2) -> i32 {
        Self::combine2_with_seed(0, v1, v2)
    }

    /// Combines the hash codes of two values with the given seed.
    pub fn combine2_with_seed<T1: HashCode32, T2: HashCode32>(seed: u32, v1: &T1, v2: &T2) -> i32 {
        combine_hashes(seed, &[v1.hash_code(), v2.hash_code()])
    }

    /// Combines the hash codes of three values.
    pub fn combine3<T1, T2, T3>(v1: &T1, v2: &T2, v3: &T3) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
    {
        Self::combine3_with_seed(0, v1, v2, v3)
    }

    /// Combines the hash codes of three values with the given seed.
    pub fn combine3_with_seed<T1, T2, T3>(seed: u32, v1: &T1, v2: &T2, v3: &T3) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
    {
        combine_hashes(seed, &[v1.hash_code(), v2.hash_code(), v3.hash_code()])
    }

    /// Combines the hash codes of four values.
    pub fn combine4<T1, T2, T3, T4>(v1: &T1, v2: &T2, v3: &T3, v4: &T4) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
        T4: HashCode32,
    {
        Self::combine4_with_seed(0, v1, v2, v3, v4)
    }

    /// Combines the hash codes of four values with the given seed.
    pub fn combine4_with_seed<T1, T2, T3, T4>(seed: u32, v1: &T1, v2: &T2, v3: &T3, v4: &T4) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
        T4: HashCode32,
    {
        combine_hashes(
            seed,
            &[v1.hash_code(), v2.hash_code(), v3.hash_code(), v4.hash_code()],
        )
    }

    /// Combines the hash codes of five values.
    pub fn combine5<T1, T2, T3, T4, T5>(v1: &T1, v2: &T2, v3: &T3, v4: &T4, v5: &T5) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
        T4: HashCode32,
        T5: HashCode32,
    {
        Self::combine5_with_seed(0, v1, v2, v3, v4, v5)
    }

    /// Combines the hash codes of five values with the given seed.
    pub fn combine5_with_seed<T1, T2, T3, T4, T5>(
        seed: u32,
        v1: &T1,
        v2: &T2,
        v3: &T3,
        v4: &T4,
        v5: &T5,
    ) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
        T4: HashCode32,
        T5: HashCode32,
    {
        combine_hashes(
            seed,
            &[
                v1.hash_code(),
                v2.hash_code(),
                v3.hash_code(),
                v4.hash_code(),
                v5.hash_code(),
            ],
        )
    }

    /// Combines the hash codes of six values.
    pub fn combine6<T1, T2, T3, T4, T5, T6>(
        v1: &T1,
        v2: &T2,
        v3: &T3,
        v4: &T4,
        v5: &T5,
        v6: &T6,
    ) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
        T4: HashCode32,
        T5: HashCode32,
        T6: HashCode32,
    {
        Self::combine6_with_seed(0, v1, v2, v3, v4, v5, v6)
    }

    /// Combines the hash codes of six values with the given seed.
    pub fn combine6_with_seed<T1, T2, T3, T4, T5, T6>(
        seed: u32,
        v1: &T1,
        v2: &T2,
        v3: &T3,
        v4: &T4,
        v5: &T5,
        v6: &T6,
    ) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
        T4: HashCode32,
        T5: HashCode32,
        T6: HashCode32,
    {
        combine_hashes(
            seed,
            &[
                v1.hash_code(),
                v2.hash_code(),
                v3.hash_code(),
                v4.hash_code(),
                v5.hash_code(),
                v6.hash_code(),
            ],
        )
    }

    /// Combines the hash codes of seven values.
    pub fn combine7<T1, T2, T3, T4, T5, T6, T7>(
        v1: &T1,
        v2: &T2,
        v3: &T3,
        v4: &T4,
        v5: &T5,
        v6: &T6,
        v7: &T7,
    ) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
        T4: HashCode32,
        T5: HashCode32,
        T6: HashCode32,
        T7: HashCode32,
    {
        Self::combine7_with_seed(0, v1, v2, v3, v4, v5, v6, v7)
    }

    /// Combines the hash codes of seven values with the given seed.
    #[allow(clippy::too_many_arguments)]
    pub fn combine7_with_seed<T1, T2, T3, T4, T5, T6, T7>(
        seed: u32,
        v1: &T1,
        v2: &T2,
        v3: &T3,
        v4: &T4,
        v5: &T5,
        v6: &T6,
        v7: &T7,
    ) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
        T4: HashCode32,
        T5: HashCode32,
        T6: HashCode32,
        T7: HashCode32,
    {
        combine_hashes(
            seed,
            &[
                v1.hash_code(),
                v2.hash_code(),
                v3.hash_code(),
                v4.hash_code(),
                v5.hash_code(),
                v6.hash_code(),
                v7.hash_code(),
            ],
        )
    }

    /// Combines the hash codes of eight values.
    #[allow(clippy::too_many_arguments)]
    pub fn combine8<T1, T2, T3, T4, T5, T6, T7, T8>(
        v1: &T1,
        v2: &T2,
        v3: &T3,
        v4: &T4,
        v5: &T5,
        v6: &T6,
        v7: &T7,
        v8: &T8,
    ) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
        T4: HashCode32,
        T5: HashCode32,
        T6: HashCode32,
        T7: HashCode32,
        T8: HashCode32,
    {
        Self::combine8_with_seed(0, v1, v2, v3, v4, v5, v6, v7, v8)
    }

    /// Combines the hash codes of eight values with the given seed.
    #[allow(clippy::too_many_arguments)]
    pub fn combine8_with_seed<T1, T2, T3, T4, T5, T6, T7, T8>(
        seed: u32,
        v1: &T1,
        v2: &T2,
        v3: &T3,
        v4: &T4,
        v5: &T5,
        v6: &T6,
        v7: &T7,
        v8: &T8,
    ) -> i32
    where
        T1: HashCode32,
        T2: HashCode32,
        T3: HashCode32,
        T4: HashCode32,
        T5: HashCode32,
        T6: HashCode32,
        T7: HashCode32,
        T8: HashCode32,
    {
        combine_hashes(
            seed,
            &[
                v1.hash_code(),
                v2.hash_code(),
                v3.hash_code(),
                v4.hash_code(),
                v5.hash_code(),
                v6.hash_code(),
                v7.hash_code(),
                v8.hash_code(),
            ],
        )
    }
}
