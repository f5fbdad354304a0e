use anyhow::{Context, Result};
use clap::Parser;
use rkmatch::{match_documents, Algorithm, Document, FilterSize, MatchConfig, Modulus};
use std::path::PathBuf;

/// Match every k-byte chunk of a query document against another document.
#[derive(Parser, Debug)]
#[command(name = "rkmatch", version)]
struct Args {
    /// Matching algorithm: 0 (naive), 1 (rabin-karp), 2 (batched rabin-karp)
    #[arg(short = 't', long = "algorithm", default_value = "0")]
    algorithm: String,

    /// Chunk length in bytes
    #[arg(short = 'k', long = "chunk-len", default_value_t = 100)]
    chunk_len: usize,

    /// Prime modulus of the rolling hash
    #[arg(short = 'q', long = "modulus")]
    modulus: Option<u64>,

    /// Fixed size of the membership filter in bits (batched mode)
    #[arg(long)]
    filter_bits: Option<usize>,

    /// Probes per element in the membership filter (batched mode)
    #[arg(long)]
    hashes: Option<usize>,

    /// Query document
    query: PathBuf,

    /// Document searched for query chunks
    doc: PathBuf,
}

fn config_from_args(args: &Args) -> Result<MatchConfig> {
    let algorithm: Algorithm = args.algorithm.parse()?;
    let mut config = MatchConfig::new(args.chunk_len, algorithm);
    if let Some(modulus) = args.modulus {
        config = config.with_modulus(Modulus::new(modulus)?);
    }
    if let Some(bits) = args.filter_bits {
        config = config.with_filter_size(FilterSize::Bits(bits));
    }
    if let Some(hashes) = args.hashes {
        config = config.with_hash_count(hashes);
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = config_from_args(&args)?;

    let query = Document::load(&args.query)
        .with_context(|| format!("reading query document {}", args.query.display()))?;
    let doc = Document::load(&args.doc)
        .with_context(|| format!("reading document {}", args.doc.display()))?;
    log::info!(
        "Query {} bytes, document {} bytes after normalization",
        query.len(),
        doc.len()
    );

    let report = match_documents(query.as_bytes(), doc.as_bytes(), &config)?;

    if !report.diagnostics.leading_hashes.is_empty() {
        let hashes: Vec<String> = report
            .diagnostics
            .leading_hashes
            .iter()
            .map(u64::to_string)
            .collect();
        println!("{}", hashes.join(" "));
    }
    if let Some(dump) = &report.diagnostics.filter_dump {
        println!("{dump}");
    }
    println!("{}", report.result);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let args = Args::parse_from(["rkmatch", "-t", "2", "-k", "20", "-q", "1000003", "x", "y"]);
        let config = config_from_args(&args).unwrap();
        assert_eq!(config.algorithm, Algorithm::RabinKarpBatch);
        assert_eq!(config.chunk_len, 20);
        assert_eq!(config.modulus.value(), 1000003);
        assert_eq!(args.query, PathBuf::from("x"));
    }

    #[test]
    fn rejects_unknown_algorithm() {
        let args = Args::parse_from(["rkmatch", "-t", "7", "x", "y"]);
        assert!(config_from_args(&args).is_err());
    }

    #[test]
    fn defaults_to_naive_with_100_byte_chunks() {
        let args = Args::parse_from(["rkmatch", "x", "y"]);
        let config = config_from_args(&args).unwrap();
        assert_eq!(config.algorithm, Algorithm::Naive);
        assert_eq!(config.chunk_len, 100);
        assert_eq!(config.filter_size, FilterSize::default());
    }
}
