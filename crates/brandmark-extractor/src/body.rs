//! Size-bounded response body reads.

use reqwest::Response;

/// Result of reading a body against an exclusive byte limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BodyRead {
    Complete(Vec<u8>),
    /// The declared length, or the bytes received when reading stopped,
    /// reached the limit.
    Exceeded { observed: usize },
}

/// Accumulates chunks until `limit` bytes have been seen.
#[derive(Debug)]
pub(crate) struct BodyBuffer {
    data: Vec<u8>,
    limit: usize,
}

impl BodyBuffer {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            limit,
        }
    }

    /// Appends `chunk`. Returns `false` once the buffer holds `limit` bytes or more.
    pub(crate) fn push(&mut self, chunk: &[u8]) -> bool {
        self.data.extend_from_slice(chunk);
        self.data.len() < self.limit
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

/// Reads `response` chunk by chunk, refusing bodies of `limit` bytes or more.
///
/// A `Content-Length` at or above the limit is refused before any body
/// bytes are read. Otherwise reading stops as soon as the limit is reached.
pub(crate) async fn read_capped(
    mut response: Response,
    limit: usize,
) -> Result<BodyRead, reqwest::Error> {
    if let Some(declared) = response.content_length() {
        let declared = usize::try_from(declared).unwrap_or(usize::MAX);
        if declared >= limit {
            return Ok(BodyRead::Exceeded { observed: declared });
        }
    }

    let mut buffer = BodyBuffer::new(limit);
    while let Some(chunk) = response.chunk().await? {
        if !buffer.push(&chunk) {
            return Ok(BodyRead::Exceeded {
                observed: buffer.len(),
            });
        }
    }
    Ok(BodyRead::Complete(buffer.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_accepts_chunks_below_limit() {
        let mut buffer = BodyBuffer::new(10);
        assert!(buffer.push(b"abc"));
        assert!(buffer.push(b"def"));
        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer.into_inner(), b"abcdef".to_vec());
    }

    #[test]
    fn buffer_stops_at_exact_limit() {
        let mut buffer = BodyBuffer::new(4);
        assert!(buffer.push(b"ab"));
        assert!(!buffer.push(b"cd"));
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn buffer_reports_bytes_seen_when_chunk_crosses_limit() {
        let mut buffer = BodyBuffer::new(5);
        assert!(buffer.push(b"abc"));
        assert!(!buffer.push(b"defghij"));
        assert_eq!(buffer.len(), 10);
    }

    #[test]
    fn empty_chunks_never_trip_a_nonzero_limit() {
        let mut buffer = BodyBuffer::new(1);
        assert!(buffer.push(b""));
        assert!(buffer.push(b""));
        assert_eq!(buffer.len(), 0);
    }
}
