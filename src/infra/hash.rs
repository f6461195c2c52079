//! Short deterministic hash used to suffix fallback slugs.

use sha2::{Digest, Sha256};
use std::fmt;

/// Number of base-36 digits in a [`SlugHash`].
pub const HASH_LEN: usize = 6;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Six lowercase base-36 digits derived from the SHA-256 of a string.
///
/// Stable across platforms and releases: the first eight digest bytes are read
/// big-endian and reduced modulo 36^6, then written zero-padded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlugHash {
    digits: String,
}

impl SlugHash {
    pub fn compute(input: &str) -> Self {
        let digest = Sha256::digest(input.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let mut value = u64::from_be_bytes(prefix) % 36u64.pow(HASH_LEN as u32);

        let mut buf = [b'0'; HASH_LEN];
        for slot in buf.iter_mut().rev() {
            *slot = ALPHABET[(value % 36) as usize];
            value /= 36;
        }

        Self {
            digits: buf.iter().map(|&b| char::from(b)).collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for SlugHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Convenience wrapper returning the digits directly.
pub fn hash_base36(input: &str) -> String {
    SlugHash::compute(input).digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hash_has_fixed_length_and_alphabet() {
        let long = "x".repeat(10_000);
        for input in ["", "a", "hello world", "你好", long.as_str()] {
            let h = hash_base36(input);
            assert_eq!(h.len(), HASH_LEN, "{input:?}");
            assert!(h.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(SlugHash::compute("same"), SlugHash::compute("same"));
    }

    #[test]
    fn hash_differs_for_different_input() {
        assert_ne!(hash_base36("first"), hash_base36("second"));
        assert_ne!(hash_base36("."), hash_base36(".."));
    }

    #[test]
    fn hash_of_empty_string_is_pinned() {
        // sha256("") starts e3b0c44298fc1c14; that mod 36^6 is 897059860.
        assert_eq!(hash_base36(""), "eu33tg");
    }

    #[test]
    fn display_matches_as_str() {
        let h = SlugHash::compute("test");
        assert_eq!(h.to_string(), h.as_str());
    }
}
