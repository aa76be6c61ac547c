//! MurmurHash2 (32-bit) implementation.
//!
//! Two implementations of the same contract are provided: [`hash_with_seed`]
//! walks the buffer by index, while [`hash_fast_with_seed`] decodes whole
//! little-endian words through `chunks_exact`. The fast path replaces the
//! original pointer-reinterpretation trick with explicit little-endian
//! decoding, so it produces identical output on every platform. The two
//! paths must never diverge for any `(data, seed)` pair.

use crate::bits::fmix_murmur2;

/// Default seed shared by both Murmur families.
pub const DEFAULT_SEED: u32 = 0xc58f1a7b;

const M: u32 = 0x5bd1e995;
const R: u32 = 24;

/// Computes the MurmurHash2 hash of the given data with the default seed.
///
/// # Arguments
///
/// * `data` - The data to hash
///
/// # Returns
///
/// The 32-bit MurmurHash2 hash of the data
pub fn hash(data: &[u8]) -> u32 {
    hash_with_seed(data, DEFAULT_SEED)
}

/// Computes the MurmurHash2 hash of the given data.
///
/// An empty buffer hashes to `0` for every seed; the seed is not mixed in
/// that case.
///
/// # Arguments
///
/// * `data` - The data to hash
/// * `seed` - The seed for the hash function
///
/// # Returns
///
/// The 32-bit MurmurHash2 hash of the data
pub fn hash_with_seed(data: &[u8], seed: u32) -> u32 {
    let len = data.len();
    if len == 0 {
        return 0;
    }

    let mut h = seed ^ len as u32;

    // Process 4-byte little-endian blocks
    let nblocks = len / 4;
    for i in 0..nblocks {
        let mut k = u32::from_le_bytes([
            data[i * 4],
            data[i * 4 + 1],
            data[i * 4 + 2],
            data[i * 4 + 3],
        ]);

        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h = h.wrapping_mul(M);
        h ^= k;
    }

    // Process remaining bytes: 16-bit pair first, then the top byte,
    // with a single multiply folding the whole tail.
    let offset = nblocks * 4;
    match len & 3 {
        3 => {
            h ^= data[offset] as u32 | (data[offset + 1] as u32) << 8;
            h ^= (data[offset + 2] as u32) << 16;
            h = h.wrapping_mul(M);
        }
        2 => {
            h ^= data[offset] as u32 | (data[offset + 1] as u32) << 8;
            h = h.wrapping_mul(M);
        }
        1 => {
            h ^= data[offset] as u32;
            h = h.wrapping_mul(M);
        }
        _ => {}
    }

    fmix_murmur2(h)
}

/// Computes the MurmurHash2 hash using the word-at-a-time fast path, with
/// the default seed.
pub fn hash_fast(data: &[u8]) -> u32 {
    hash_fast_with_seed(data, DEFAULT_SEED)
}

/// Computes the MurmurHash2 hash using the word-at-a-time fast path.
///
/// Bit-identical to [`hash_with_seed`] for every input; the block loop
/// decodes aligned 4-byte words via `chunks_exact` so the bounds check is
/// hoisted out of the loop.
///
/// # Arguments
///
/// * `data` - The data to hash
/// * `seed` - The seed for the hash function
///
/// # Returns
///
/// The 32-bit MurmurHash2 hash of the data
pub fn hash_fast_with_seed(data: &[u8], seed: u32) -> u32 {
    let len = data.len();
    if len == 0 {
        return 0;
    }

    let mut h = seed ^ len as u32;

    let mut blocks = data.chunks_exact(4);
    for block in blocks.by_ref() {
        let mut k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);

        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h = h.wrapping_mul(M);
        h ^= k;
    }

    let tail = blocks.remainder();
    match tail.len() {
        3 => {
            h ^= tail[0] as u32 | (tail[1] as u32) << 8;
            h ^= (tail[2] as u32) << 16;
            h = h.wrapping_mul(M);
        }
        2 => {
            h ^= tail[0] as u32 | (tail[1] as u32) << 8;
            h = h.wrapping_mul(M);
        }
        1 => {
            h ^= tail[0] as u32;
            h = h.wrapping_mul(M);
        }
        _ => {}
    }

    fmix_murmur2(h)
}
