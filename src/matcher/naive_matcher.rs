use crate::matcher::Matcher;

/// Slides the chunk over every target position and compares bytes directly.
///
/// `O(k * n)` in the worst case, no hashing involved.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveMatcher;

impl Matcher for NaiveMatcher {
    fn is_match(&self, chunk: &[u8], target: &[u8]) -> bool {
        if chunk.is_empty() || chunk.len() > target.len() {
            return false;
        }
        target.windows(chunk.len()).any(|window| window == chunk)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_chunk_at_both_ends() {
        assert!(NaiveMatcher.is_match(b"ab", b"abxxxx"));
        assert!(NaiveMatcher.is_match(b"ab", b"xxxxab"));
        assert!(!NaiveMatcher.is_match(b"ab", b"axbxxa"));
    }

    #[test]
    fn target_shorter_than_chunk_never_matches() {
        assert!(!NaiveMatcher.is_match(b"abc", b""));
        assert!(!NaiveMatcher.is_match(b"abc", b"ab"));
    }
}
