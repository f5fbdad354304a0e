use crate::matcher::{doublecheck, Matcher};
use crate::modular::Modulus;
use crate::rolling_hash::{RollingHash, RollingWindows};

/// Rabin-Karp search for one chunk at a time.
///
/// The chunk is hashed once, the target hash rolls forward one byte per
/// position, and every hash hit is confirmed byte by byte.
#[derive(Debug, Default, Clone, Copy)]
pub struct RabinKarpMatcher {
    modulus: Modulus,
}

impl RabinKarpMatcher {
    pub fn new(modulus: Modulus) -> Self {
        RabinKarpMatcher { modulus }
    }

    /// Hashes of the first `count` windows of `target`.
    pub fn leading_hashes(&self, target: &[u8], window_len: usize, count: usize) -> Vec<u64> {
        RollingWindows::new(target, window_len, self.modulus)
            .take(count)
            .map(|(_, hash)| hash)
            .collect()
    }
}

impl Matcher for RabinKarpMatcher {
    fn is_match(&self, chunk: &[u8], target: &[u8]) -> bool {
        let Some(chunk_hash) = RollingHash::new(chunk, chunk.len(), self.modulus) else {
            return false;
        };
        let chunk_hash = chunk_hash.hash();
        let window_len = chunk.len();

        RollingWindows::new(target, window_len, self.modulus).any(|(position, hash)| {
            hash == chunk_hash && doublecheck(chunk, &target[position..position + window_len])
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rolling_hash::window_hash;

    #[test]
    fn hash_collisions_are_not_matches() {
        // with P = 2 roughly half of all windows collide with the chunk
        let matcher = RabinKarpMatcher::new(Modulus::new(2).unwrap());
        assert!(!matcher.is_match(b"zz", b"abcdefghijklmnop"));
        assert!(matcher.is_match(b"kl", b"abcdefghijklmnop"));
    }

    #[test]
    fn leading_hashes_follow_target_windows() {
        let modulus = Modulus::default();
        let matcher = RabinKarpMatcher::new(modulus);
        let hashes = matcher.leading_hashes(b"abcdefg", 3, 5);
        let expected: Vec<u64> = [&b"abc"[..], b"bcd", b"cde", b"def", b"efg"]
            .iter()
            .map(|window| window_hash(window, modulus))
            .collect();
        assert_eq!(hashes, expected);
        assert_eq!(matcher.leading_hashes(b"abcd", 3, 5).len(), 2);
        assert!(matcher.leading_hashes(b"ab", 3, 5).is_empty());
    }
}
