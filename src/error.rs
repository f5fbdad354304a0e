use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned by the matching pipeline.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Unsupported algorithm {0:?} (choose from 0 1 2)")]
    UnsupportedAlgorithm(String),

    /// The document could not be read. Nothing of it reaches the matcher.
    #[error("Document unavailable: {}", path.display())]
    DocumentUnavailable {
        /// Path the document was requested from.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Precondition violations detected before any matching starts.
///
/// These errors occur when the chunk length, filter geometry or modulus
/// would make the computation degenerate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Chunk length must be positive")]
    ChunkLength,

    #[error("Query of {query_len} bytes holds no chunk of {chunk_len} bytes")]
    NoChunks {
        /// Length of the normalized query document.
        query_len: usize,
        /// Requested chunk length.
        chunk_len: usize,
    },

    #[error("Membership filter must have at least one bit")]
    FilterSize,

    #[error("Membership filter needs at least one probe")]
    HashCount,

    #[error("Invalid modulus {0} (allowed 2..=u64::MAX/256)")]
    Modulus(u64),

    #[error("Dump length {0} is not a multiple of 8")]
    DumpLength(usize),
}
