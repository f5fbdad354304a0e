use std::slice::ChunksExact;

/// Number of full chunks of `chunk_len` bytes in a document of `doc_len` bytes.
pub fn chunk_count(doc_len: usize, chunk_len: usize) -> usize {
    if chunk_len == 0 {
        0
    } else {
        doc_len / chunk_len
    }
}

/// Non-overlapping chunks of a query document.
///
/// A trailing remainder shorter than the chunk length is never yielded.
#[derive(Debug, Clone, Copy)]
pub struct Chunks<'a> {
    query: &'a [u8],
    chunk_len: usize,
}

impl<'a> Chunks<'a> {
    /// A zero `chunk_len` yields no chunks.
    pub fn new(query: &'a [u8], chunk_len: usize) -> Self {
        Chunks { query, chunk_len }
    }

    pub fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    pub fn len(&self) -> usize {
        chunk_count(self.query.len(), self.chunk_len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> ChunksExact<'a, u8> {
        let step = self.chunk_len.max(1);
        self.query[..self.len() * step].chunks_exact(step)
    }
}

impl<'a> IntoIterator for Chunks<'a> {
    type Item = &'a [u8];
    type IntoIter = ChunksExact<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
