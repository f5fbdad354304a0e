use crate::chunks::Chunks;
use crate::error::ConfigurationError;
use crate::filter::BloomFilter;
use crate::matcher::{doublecheck, Matcher};
use crate::modular::Modulus;
use crate::rolling_hash::{window_hash, RollingWindows};
use std::collections::HashMap;

/// Rabin-Karp matching of every chunk of a query in one pass over the target.
///
/// Chunk hashes are loaded into a Bloom filter; each target window is tested
/// against the filter and only filter hits pay for a scan over the chunks.
#[derive(Debug, Clone)]
pub struct BatchMatcher {
    modulus: Modulus,
    /// Empty filter with the configured geometry, cloned for every run.
    empty_filter: BloomFilter,
}

/// Outcome of a batched run.
#[derive(Debug, Clone)]
pub struct BatchMatch {
    /// `matched[i]` is set when chunk `i` occurs in the target.
    pub matched: Vec<bool>,
    /// Filter holding the hashes of every chunk.
    pub filter: BloomFilter,
    /// Target windows the filter reported as possibly present.
    pub filter_hits: usize,
    /// Filter hits that no pending chunk confirmed.
    pub unconfirmed_hits: usize,
}

impl BatchMatch {
    pub fn matched_count(&self) -> usize {
        self.matched.iter().filter(|&&matched| matched).count()
    }
}

/// Chunks sharing the same bytes, listed by their indices in ascending order.
struct ChunkGroup<'a> {
    bytes: &'a [u8],
    hash: u64,
    members: Vec<usize>,
}

/// Groups identical chunks, ordered by the lowest index of each group.
fn group_chunks<'a>(chunks: Chunks<'a>, modulus: Modulus) -> Vec<ChunkGroup<'a>> {
    let mut groups: Vec<ChunkGroup<'a>> = Vec::new();
    let mut group_by_bytes: HashMap<&'a [u8], usize> = HashMap::new();

    for (index, chunk) in chunks.iter().enumerate() {
        match group_by_bytes.get(chunk) {
            Some(&group) => groups[group].members.push(index),
            None => {
                group_by_bytes.insert(chunk, groups.len());
                groups.push(ChunkGroup {
                    bytes: chunk,
                    hash: window_hash(chunk, modulus),
                    members: vec![index],
                });
            }
        }
    }
    groups
}

impl BatchMatcher {
    /// Creates a matcher whose filter has `filter_bits` bits and `hash_count` probes.
    pub fn new(
        filter_bits: usize,
        hash_count: usize,
        modulus: Modulus,
    ) -> Result<Self, ConfigurationError> {
        Ok(BatchMatcher {
            modulus,
            empty_filter: BloomFilter::with_hash_count(filter_bits, hash_count)?,
        })
    }

    /// Matches every chunk of `chunks` against `target`.
    ///
    /// When several pending chunks could confirm the same window, the one
    /// with the lowest index wins it, together with every chunk identical to it.
    pub fn match_batch(&self, chunks: Chunks, target: &[u8]) -> BatchMatch {
        let mut filter = self.empty_filter.clone();
        let mut matched = vec![false; chunks.len()];
        let mut filter_hits = 0;
        let mut unconfirmed_hits = 0;

        let groups = group_chunks(chunks, self.modulus);
        for group in &groups {
            filter.insert(group.hash);
        }
        filter.warn_if_saturated();

        let window_len = chunks.chunk_len();
        let mut pending: Vec<&ChunkGroup> = groups.iter().collect();

        for (position, hash) in RollingWindows::new(target, window_len, self.modulus) {
            if pending.is_empty() {
                break;
            }
            if !filter.query(hash) {
                continue;
            }
            filter_hits += 1;

            let window = &target[position..position + window_len];
            let confirmed = pending
                .iter()
                .position(|group| group.hash == hash && doublecheck(group.bytes, window));
            match confirmed {
                Some(slot) => {
                    let group = pending.remove(slot);
                    for &index in &group.members {
                        matched[index] = true;
                    }
                }
                None => unconfirmed_hits += 1,
            }
        }

        log::debug!(
            "Batch match: {} filter hits, {} unconfirmed, {} of {} chunk groups pending",
            filter_hits,
            unconfirmed_hits,
            pending.len(),
            groups.len()
        );

        BatchMatch {
            matched,
            filter,
            filter_hits,
            unconfirmed_hits,
        }
    }
}

impl Matcher for BatchMatcher {
    fn is_match(&self, chunk: &[u8], target: &[u8]) -> bool {
        if chunk.is_empty() {
            return false;
        }
        self.count_matches(Chunks::new(chunk, chunk.len()), target) == 1
    }

    fn count_matches(&self, chunks: Chunks, target: &[u8]) -> usize {
        self.match_batch(chunks, target).matched_count()
    }
}
