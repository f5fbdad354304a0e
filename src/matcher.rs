mod batch_matcher;
mod naive_matcher;
mod rabin_karp_matcher;

use crate::chunks::Chunks;
pub use batch_matcher::{BatchMatch, BatchMatcher};
pub use naive_matcher::NaiveMatcher;
pub use rabin_karp_matcher::RabinKarpMatcher;

/// A strategy deciding whether query chunks occur in a target document.
///
/// Implementors only have to answer the single-chunk question; counting over
/// every chunk of a query is provided on top of it.
pub trait Matcher {
    /// Checks whether `chunk` occurs as a substring of `target`.
    ///
    /// # Parameters
    /// - `chunk`: Query chunk. An empty chunk never matches.
    /// - `target`: Document searched for the chunk.
    fn is_match(&self, chunk: &[u8], target: &[u8]) -> bool;

    /// Counts the chunks of a query that occur in `target`.
    ///
    /// # Returns
    /// Number of chunks confirmed present, each chunk counted at most once.
    ///
    /// # Note
    /// The default checks every chunk on its own. Strategies that can share
    /// work between chunks override it.
    fn count_matches(&self, chunks: Chunks, target: &[u8]) -> usize {
        chunks
            .iter()
            .filter(|chunk| self.is_match(chunk, target))
            .count()
    }
}

/// Byte-exact confirmation of a hash candidate.
pub fn doublecheck(first: &[u8], second: &[u8]) -> bool {
    first == second
}
