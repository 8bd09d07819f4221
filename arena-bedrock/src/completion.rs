use arena_core::{ArenaError, Result};

/// Text reported when an agent's completion stream carried no chunk bytes.
pub const NO_RESPONSE: &str = "No response received";

/// Accumulates `chunk` payloads from an `InvokeAgent` completion stream.
///
/// Bytes are decoded only once the stream ends, so a multi-byte character
/// split across two chunks is reassembled correctly.
#[derive(Debug, Default)]
pub struct CompletionBuffer {
    bytes: Vec<u8>,
    chunks: usize,
}

impl CompletionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) {
        self.bytes.extend_from_slice(chunk);
        self.chunks += 1;
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks
    }

    pub fn finish(self) -> Result<String> {
        if self.bytes.is_empty() {
            return Ok(NO_RESPONSE.to_string());
        }
        String::from_utf8(self.bytes).map_err(|e| {
            ArenaError::MalformedResponse(format!("completion is not valid UTF-8: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenates_chunks() {
        let mut buf = CompletionBuffer::new();
        buf.push(b"Hello, ");
        buf.push(b"world");
        assert_eq!(buf.chunk_count(), 2);
        assert_eq!(buf.finish().unwrap(), "Hello, world");
    }

    #[test]
    fn test_empty_completion() {
        assert_eq!(CompletionBuffer::new().finish().unwrap(), NO_RESPONSE);

        let mut buf = CompletionBuffer::new();
        buf.push(b"");
        assert_eq!(buf.finish().unwrap(), NO_RESPONSE);
    }

    #[test]
    fn test_split_multibyte_character() {
        let text = "naïve café";
        let bytes = text.as_bytes();
        // 'ï' is two bytes; split between them.
        let split = text.find('ï').unwrap() + 1;

        let mut buf = CompletionBuffer::new();
        buf.push(&bytes[..split]);
        buf.push(&bytes[split..]);
        assert_eq!(buf.finish().unwrap(), text);
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let mut buf = CompletionBuffer::new();
        buf.push(&[0xff, 0xfe]);
        assert!(matches!(buf.finish(), Err(ArenaError::MalformedResponse(_))));
    }
}
