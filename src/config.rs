use crate::error::{ConfigurationError, MatchError};
use crate::filter::DEFAULT_HASH_COUNT;
use crate::modular::Modulus;
use std::fmt;
use std::str::FromStr;

/// Default number of target hashes kept for diagnostics in rolling-hash mode.
pub const DEFAULT_LEADING_HASHES: usize = 5;
/// Default number of filter bits dumped for diagnostics in batched mode.
pub const DEFAULT_DUMP_BITS: usize = 160;
/// Default filter bits per query chunk.
pub const DEFAULT_OVERSAMPLING: usize = 10;

/// Matching strategy applied to the query chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Direct byte comparison at every target position.
    #[default]
    Naive,
    /// Rabin-Karp match of each chunk on its own.
    RabinKarp,
    /// One pass over the target, candidates pre-filtered by a Bloom filter.
    RabinKarpBatch,
}

impl TryFrom<u8> for Algorithm {
    type Error = MatchError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(Algorithm::Naive),
            1 => Ok(Algorithm::RabinKarp),
            2 => Ok(Algorithm::RabinKarpBatch),
            other => Err(MatchError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl FromStr for Algorithm {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "naive" | "simple" => Ok(Algorithm::Naive),
            "1" | "rk" | "rabin-karp" => Ok(Algorithm::RabinKarp),
            "2" | "rkbatch" | "rabin-karp-batch" => Ok(Algorithm::RabinKarpBatch),
            _ => Err(MatchError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Naive => "naive",
            Algorithm::RabinKarp => "rk",
            Algorithm::RabinKarpBatch => "rkbatch",
        };
        f.write_str(name)
    }
}

/// How many bits the batched matcher gives its membership filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSize {
    /// `((query_len * factor / chunk_len) >> 3) << 3` bits.
    Oversampled(usize),
    /// A fixed number of bits.
    Bits(usize),
}

impl Default for FilterSize {
    fn default() -> Self {
        FilterSize::Oversampled(DEFAULT_OVERSAMPLING)
    }
}

impl FilterSize {
    pub fn bits(&self, query_len: usize, chunk_len: usize) -> usize {
        match *self {
            FilterSize::Oversampled(factor) => {
                if chunk_len == 0 {
                    return 0;
                }
                ((query_len.saturating_mul(factor) / chunk_len) >> 3) << 3
            }
            FilterSize::Bits(bits) => bits,
        }
    }
}

/// Parameters of one matching run.
///
/// # Example
///
/// ```
/// use rkmatch::{Algorithm, FilterSize, MatchConfig};
///
/// let config = MatchConfig::new(20, Algorithm::RabinKarpBatch)
///     .with_filter_size(FilterSize::Bits(4096))
///     .with_hash_count(7);
/// assert_eq!(config.chunk_len, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub chunk_len: usize,
    pub algorithm: Algorithm,
    pub modulus: Modulus,
    pub filter_size: FilterSize,
    /// Probes per element in the membership filter.
    pub hash_count: usize,
    /// Filter bits rendered into the diagnostics of a batched run.
    pub dump_bits: usize,
    /// Target window hashes kept in the diagnostics of a rolling-hash run.
    pub leading_hashes: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            chunk_len: 100,
            algorithm: Algorithm::default(),
            modulus: Modulus::default(),
            filter_size: FilterSize::default(),
            hash_count: DEFAULT_HASH_COUNT,
            dump_bits: DEFAULT_DUMP_BITS,
            leading_hashes: DEFAULT_LEADING_HASHES,
        }
    }
}

impl MatchConfig {
    pub fn new(chunk_len: usize, algorithm: Algorithm) -> Self {
        MatchConfig {
            chunk_len,
            algorithm,
            ..Default::default()
        }
    }

    pub fn with_modulus(mut self, modulus: Modulus) -> Self {
        self.modulus = modulus;
        self
    }

    pub fn with_filter_size(mut self, filter_size: FilterSize) -> Self {
        self.filter_size = filter_size;
        self
    }

    pub fn with_hash_count(mut self, hash_count: usize) -> Self {
        self.hash_count = hash_count;
        self
    }

    pub fn with_dump_bits(mut self, dump_bits: usize) -> Self {
        self.dump_bits = dump_bits;
        self
    }

    pub fn with_leading_hashes(mut self, leading_hashes: usize) -> Self {
        self.leading_hashes = leading_hashes;
        self
    }

    /// Checks every precondition of a run over a query of `query_len` bytes.
    pub fn validate(&self, query_len: usize) -> Result<(), ConfigurationError> {
        if self.chunk_len == 0 {
            return Err(ConfigurationError::ChunkLength);
        }
        if query_len < self.chunk_len {
            return Err(ConfigurationError::NoChunks {
                query_len,
                chunk_len: self.chunk_len,
            });
        }
        if self.algorithm == Algorithm::RabinKarpBatch {
            if self.filter_size.bits(query_len, self.chunk_len) == 0 {
                return Err(ConfigurationError::FilterSize);
            }
            if self.hash_count == 0 {
                return Err(ConfigurationError::HashCount);
            }
            if self.dump_bits % 8 != 0 {
                return Err(ConfigurationError::DumpLength(self.dump_bits));
            }
        }
        Ok(())
    }
}
