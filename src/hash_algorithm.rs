//! Hash algorithm selection.
//!
//! A closed enum maps each supported 32-bit algorithm to its engine, so
//! callers configured with an algorithm name dispatch through an explicit
//! `match` instead of metadata lookup.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{HashError, HashResult};
use crate::{murmur2, murmur3};

/// The 32-bit non-cryptographic hash algorithms provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Hash32Algorithm {
    /// MurmurHash2, index-based implementation
    Murmur2 = 0x00,

    /// MurmurHash2, word-at-a-time implementation (bit-identical to `Murmur2`)
    Murmur2Fast = 0x01,

    /// MurmurHash3 (x86, 32-bit)
    Murmur3 = 0x02,
}

impl Hash32Algorithm {
    /// Returns the default seed for this algorithm.
    pub fn default_seed(&self) -> u32 {
        match self {
            Hash32Algorithm::Murmur2 | Hash32Algorithm::Murmur2Fast => murmur2::DEFAULT_SEED,
            Hash32Algorithm::Murmur3 => murmur3::DEFAULT_SEED,
        }
    }

    /// Returns the name of the hash algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Hash32Algorithm::Murmur2 => "MURMUR2",
            Hash32Algorithm::Murmur2Fast => "MURMUR2FAST",
            Hash32Algorithm::Murmur3 => "MURMUR3",
        }
    }

    /// Hashes the given buffer with this algorithm's default seed.
    ///
    /// An absent buffer is rejected with [`HashError::NullInput`]; it is
    /// never treated as an empty buffer.
    pub fn hash(&self, data: Option<&[u8]>) -> HashResult<u32> {
        self.hash_with_seed(data, self.default_seed())
    }

    /// Hashes the given buffer with the given seed.
    pub fn hash_with_seed(&self, data: Option<&[u8]>, seed: u32) -> HashResult<u32> {
        let data = data.ok_or(HashError::NullInput)?;
        Ok(match self {
            Hash32Algorithm::Murmur2 => murmur2::hash_with_seed(data, seed),
            Hash32Algorithm::Murmur2Fast => murmur2::hash_fast_with_seed(data, seed),
            Hash32Algorithm::Murmur3 => murmur3::hash_with_seed(data, seed),
        })
    }

    /// Reads a file fully into memory and hashes its content with this
    /// algorithm's default seed.
    pub fn hash_file<P: AsRef<Path>>(&self, path: P) -> HashResult<u32> {
        let content = std::fs::read(path)?;
        self.hash(Some(&content))
    }
}

impl fmt::Display for Hash32Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error type for hash algorithm parsing.
#[derive(Debug, thiserror::Error)]
#[error("Unknown hash algorithm: {0}")]
pub struct UnknownHashAlgorithm(String);

impl FromStr for Hash32Algorithm {
    type Err = UnknownHashAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MURMUR2" => Ok(Hash32Algorithm::Murmur2),
            "MURMUR2FAST" => Ok(Hash32Algorithm::Murmur2Fast),
            "MURMUR3" => Ok(Hash32Algorithm::Murmur3),
            _ => Err(UnknownHashAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_input_is_rejected() {
        for algorithm in [
            Hash32Algorithm::Murmur2,
            Hash32Algorithm::Murmur2Fast,
            Hash32Algorithm::Murmur3,
        ] {
            let result = algorithm.hash(None);
            assert!(matches!(result, Err(HashError::NullInput)));
        }
    }

    #[test]
    fn test_null_distinct_from_empty() {
        assert!(Hash32Algorithm::Murmur2.hash(None).is_err());
        assert_eq!(Hash32Algorithm::Murmur2.hash(Some(b"")).unwrap(), 0);
        assert_eq!(Hash32Algorithm::Murmur3.hash(Some(b"")).unwrap(), 0);
    }

    #[test]
    fn test_dispatch_matches_engines() {
        let data = b"hello world";
        assert_eq!(
            Hash32Algorithm::Murmur2.hash(Some(data)).unwrap(),
            murmur2::hash(data)
        );
        assert_eq!(
            Hash32Algorithm::Murmur2Fast.hash(Some(data)).unwrap(),
            murmur2::hash_fast(data)
        );
        assert_eq!(
            Hash32Algorithm::Murmur3.hash(Some(data)).unwrap(),
            murmur3::hash(data)
        );
    }

    #[test]
    fn test_round_trip_names() {
        for algorithm in [
            Hash32Algorithm::Murmur2,
            Hash32Algorithm::Murmur2Fast,
            Hash32Algorithm::Murmur3,
        ] {
            let parsed: Hash32Algorithm = algorithm.name().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
        assert_eq!(
            "murmur3".parse::<Hash32Algorithm>().unwrap(),
            Hash32Algorithm::Murmur3
        );
        assert!("SHA256".parse::<Hash32Algorithm>().is_err());
    }

    #[test]
    fn test_hash_file_missing_path() {
        let result = Hash32Algorithm::Murmur2.hash_file("/definitely/not/a/real/path");
        assert!(matches!(result, Err(HashError::Io(_))));
    }
}
