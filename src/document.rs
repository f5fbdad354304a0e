use crate::error::MatchError;
use std::path::Path;

/// A normalized document, ready to be chunked or searched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    bytes: Vec<u8>,
}

impl Document {
    /// Wraps `raw` after normalizing it.
    pub fn from_raw(raw: &[u8]) -> Self {
        Document {
            bytes: normalize(raw),
        }
    }

    /// Reads the whole file at `path` and normalizes it.
    ///
    /// A read failure yields [`MatchError::DocumentUnavailable`]; a partially
    /// read file is never returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MatchError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| MatchError::DocumentUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded {} ({} bytes)", path.display(), raw.len());
        Ok(Self::from_raw(&raw))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Lower-cases ASCII letters and collapses every run of ASCII whitespace
/// into one space. Leading and trailing whitespace is dropped.
pub fn normalize(raw: &[u8]) -> Vec<u8> {
    let mut normalized = Vec::with_capacity(raw.len());
    let mut pending_space = false;

    for &byte in raw {
        if byte.is_ascii_whitespace() || byte == 0x0b {
            pending_space = !normalized.is_empty();
            continue;
        }
        if pending_space {
            normalized.push(b' ');
            pending_space = false;
        }
        normalized.push(byte.to_ascii_lowercase());
    }
    normalized
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize(b"a  b\t\tc\n\r\nd"), b"a b c d");
        assert_eq!(normalize(b"a\x0bb"), b"a b");
    }

    #[test]
    fn trims_both_ends() {
        assert_eq!(normalize(b"  \n Hello World \t\n"), b"hello world");
        assert_eq!(normalize(b"   "), b"");
        assert_eq!(normalize(b""), b"");
    }

    #[test]
    fn lowercases_ascii_only() {
        assert_eq!(normalize(b"ABC xyz 123"), b"abc xyz 123");
        assert_eq!(normalize("Ä".as_bytes()), "Ä".as_bytes());
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = normalize(b" The  QUICK\tbrown\n\nfox ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = Document::load("/nonexistent/rkmatch/query.txt").unwrap_err();
        assert!(matches!(err, MatchError::DocumentUnavailable { .. }));
    }

    #[test]
    fn loads_and_normalizes_file() {
        let path = std::env::temp_dir().join(format!("rkmatch-doc-{}.txt", rand::random::<u64>()));
        std::fs::write(&path, b"  Some\tText \n").unwrap();
        let document = Document::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(document.as_bytes(), b"some text");
        assert_eq!(document.len(), 9);
    }
}
