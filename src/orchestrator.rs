use crate::chunks::Chunks;
use crate::config::{Algorithm, MatchConfig};
use crate::error::MatchError;
use crate::matcher::{BatchMatcher, Matcher, NaiveMatcher, RabinKarpMatcher};
use std::fmt;
use std::time::Instant;

/// Chunks of the query found in the target, out of all query chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: usize,
    pub total: usize,
}

impl MatchResult {
    /// Share of chunks matched; `0.0` when there are no chunks.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} matched: {} out of {}",
            self.ratio(),
            self.matched,
            self.total
        )
    }
}

/// Side output of a run, meant for humans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// First window hashes of the target (rolling-hash mode).
    pub leading_hashes: Vec<u64>,
    /// Hex dump of the leading filter bits (batched mode).
    pub filter_dump: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub result: MatchResult,
    pub diagnostics: Diagnostics,
}

/// Counts how many chunks of `query` occur in `target`.
///
/// Both documents are expected to be normalized already. The configuration is
/// validated before any matching starts.
///
/// # Example
///
/// ```
/// use rkmatch::{match_documents, Algorithm, MatchConfig};
///
/// let config = MatchConfig::new(3, Algorithm::RabinKarp);
/// let report = match_documents(b"abcabcabc", b"xxabcxxabcxx", &config).unwrap();
/// assert_eq!(report.result.matched, 3);
/// assert_eq!(report.result.total, 3);
/// ```
pub fn match_documents(
    query: &[u8],
    target: &[u8],
    config: &MatchConfig,
) -> Result<MatchReport, MatchError> {
    config.validate(query.len())?;

    let chunks = Chunks::new(query, config.chunk_len);
    let mut diagnostics = Diagnostics::default();
    let time_start = Instant::now();

    let matched = match config.algorithm {
        Algorithm::Naive => NaiveMatcher.count_matches(chunks, target),
        Algorithm::RabinKarp => {
            let matcher = RabinKarpMatcher::new(config.modulus);
            diagnostics.leading_hashes =
                matcher.leading_hashes(target, config.chunk_len, config.leading_hashes);
            log::debug!("Leading target hashes: {:?}", diagnostics.leading_hashes);
            matcher.count_matches(chunks, target)
        }
        Algorithm::RabinKarpBatch => {
            let filter_bits = config.filter_size.bits(query.len(), config.chunk_len);
            let matcher = BatchMatcher::new(filter_bits, config.hash_count, config.modulus)?;
            let batch = matcher.match_batch(chunks, target);
            let dump = batch.filter.dump(config.dump_bits)?;
            log::debug!("Filter bits ({filter_bits} total): {dump}");
            diagnostics.filter_dump = Some(dump);
            batch.matched_count()
        }
    };

    let result = MatchResult {
        matched,
        total: chunks.len(),
    };
    log::info!(
        "{} run over {} chunks of {} bytes finished in {:?}: {}",
        config.algorithm,
        result.total,
        config.chunk_len,
        time_start.elapsed(),
        result
    );

    Ok(MatchReport {
        result,
        diagnostics,
    })
}
