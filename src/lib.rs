//! Counts how many fixed-size chunks of a query document occur in a target
//! document, with naive, Rabin-Karp and Bloom-filter batched Rabin-Karp matching.
//!
//! # Example
//!
//! ```
//! use rkmatch::{match_documents, Algorithm, Document, MatchConfig};
//!
//! let query = Document::from_raw(b"The quick  brown\nFox");
//! let target = Document::from_raw(b"a QUICK brown dog");
//! let config = MatchConfig::new(5, Algorithm::RabinKarpBatch);
//!
//! let report = match_documents(query.as_bytes(), target.as_bytes(), &config).unwrap();
//! assert_eq!(report.result.total, 3);
//! assert_eq!(report.result.matched, 2);
//! ```
pub use chunks::Chunks;
pub use config::{Algorithm, FilterSize, MatchConfig};
pub use document::{normalize, Document};
pub use error::{ConfigurationError, MatchError};
pub use filter::BloomFilter;
pub use modular::Modulus;
pub use orchestrator::{match_documents, Diagnostics, MatchReport, MatchResult};
pub use rolling_hash::{RollingHash, RollingWindows};

pub mod chunks;
pub mod config;
mod document;
mod error;
pub mod filter;
pub mod matcher;
pub mod modular;
mod orchestrator;
pub mod rolling_hash;
