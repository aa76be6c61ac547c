//! Shared bit-mixing primitives for the Murmur hash families.
//!
//! Both hash engines and the multi-value combiner are built from the same
//! small vocabulary: a 32-bit rotate-left and a final avalanche mixer.
//! All arithmetic in this crate is wrapping; overflow is part of the
//! algorithms, never an error.

/// Rotates `x` left by `count` bits.
///
/// The count is masked to 5 bits so that shift amounts outside `[0, 31]`
/// behave like native rotate instructions instead of panicking in debug
/// builds. Callers in this crate only pass counts in `[1, 31]`.
#[inline(always)]
pub(crate) const fn rotl32(x: u32, count: u32) -> u32 {
    x.rotate_left(count & 31)
}

/// Final avalanche mixer used by MurmurHash2.
#[inline(always)]
pub(crate) const fn fmix_murmur2(mut h: u32) -> u32 {
    h ^= h >> 13;
    h = h.wrapping_mul(0x5bd1e995);
    h ^= h >> 15;
    h
}

/// Final avalanche mixer used by MurmurHash3 (fmix32).
#[inline(always)]
pub(crate) const fn fmix_murmur3(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
