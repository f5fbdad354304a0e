use crate::error::ConfigurationError;
use bit_vec::BitVec;

/// First prime modulus of the double-hashing probe.
pub const H1_PRIME: u64 = 4189793;
/// Second prime modulus of the double-hashing probe.
pub const H2_PRIME: u64 = 3296731;
/// Default number of probes per element.
pub const DEFAULT_HASH_COUNT: usize = 10;

/// Share of set bits above which the filter is considered saturated.
const SATURATION_WARNING_RATIO: f64 = 0.5;

/// Maps probe `i` of element `x` to a bit position in a filter of `bit_size` bits.
///
/// The position is `(x mod H1) + i * (x mod H2) + 1 + i^2`, taken modulo `bit_size`.
/// The quadratic term keeps the probes of one element apart even when
/// `x mod H2` is small.
///
/// `bit_size` must be positive.
pub fn probe_position(i: usize, x: u64, bit_size: usize) -> usize {
    let i = i as u64;
    let position = (x % H1_PRIME) + i * (x % H2_PRIME) + 1 + i * i;
    (position % bit_size as u64) as usize
}

/// Bloom filter over 64-bit values (rolling-hash residues).
///
/// Bits are only ever set, so an inserted value is always reported present.
/// A present answer may be a false positive and has to be verified by the caller.
#[derive(Debug, Clone)]
pub struct BloomFilter {
    bits: BitVec,
    hash_count: usize,
}

impl BloomFilter {
    /// Creates a zeroed filter of `bit_size` bits with [`DEFAULT_HASH_COUNT`] probes.
    pub fn new(bit_size: usize) -> Result<Self, ConfigurationError> {
        Self::with_hash_count(bit_size, DEFAULT_HASH_COUNT)
    }

    pub fn with_hash_count(bit_size: usize, hash_count: usize) -> Result<Self, ConfigurationError> {
        if bit_size == 0 {
            return Err(ConfigurationError::FilterSize);
        }
        if hash_count == 0 {
            return Err(ConfigurationError::HashCount);
        }
        Ok(BloomFilter {
            bits: BitVec::from_elem(bit_size, false),
            hash_count,
        })
    }

    pub fn bit_size(&self) -> usize {
        self.bits.len()
    }

    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    pub fn insert(&mut self, x: u64) {
        let bit_size = self.bit_size();
        for i in 0..self.hash_count {
            self.bits.set(probe_position(i, x, bit_size), true);
        }
    }

    /// Returns `false` only if `x` was certainly never inserted.
    pub fn query(&self, x: u64) -> bool {
        let bit_size = self.bit_size();
        (0..self.hash_count).all(|i| self.bits[probe_position(i, x, bit_size)])
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|bit| *bit).count()
    }

    /// Share of bits currently set, in `[0, 1]`.
    pub fn saturation(&self) -> f64 {
        self.count_ones() as f64 / self.bit_size() as f64
    }

    /// Renders the first `bit_count` bits as space separated hex bytes.
    ///
    /// Bit `j` is stored at bit `7 - j % 8` of byte `j / 8`, so the dump
    /// reads left to right in bit order.
    pub fn dump(&self, bit_count: usize) -> Result<String, ConfigurationError> {
        if bit_count % 8 != 0 {
            return Err(ConfigurationError::DumpLength(bit_count));
        }
        let bytes: Vec<String> = self
            .bits
            .to_bytes()
            .iter()
            .take(bit_count / 8)
            .map(|byte| format!("{byte:02x}"))
            .collect();
        Ok(bytes.join(" "))
    }

    pub(crate) fn warn_if_saturated(&self) {
        let saturation = self.saturation();
        if saturation > SATURATION_WARNING_RATIO {
            log::warn!(
                "Membership filter is {:.0}% saturated ({} of {} bits), expect many false positives",
                saturation * 100.0,
                self.count_ones(),
                self.bit_size()
            );
        }
    }
}
