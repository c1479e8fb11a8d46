//! Fixed-window text chunking.

use raa_core::{Error, Result};

/// Splits page text into overlapping fixed-size character windows.
///
/// Window `i` starts where window `i - 1` ended, minus `overlap`
/// characters, so consecutive chunks share a region of `overlap`
/// characters. Windows operate on `char` boundaries, never raw bytes.
/// Each produced chunk is trimmed of surrounding whitespace; windows
/// that trim to nothing are dropped.
///
/// # Example
///
/// ```rust,ignore
/// use raa_rag::FixedWindowChunker;
///
/// let chunker = FixedWindowChunker::new(800, 100)?;
/// let chunks = chunker.chunk(&page_text);
/// ```
#[derive(Debug, Clone)]
pub struct FixedWindowChunker {
    max_chars: usize,
    overlap: usize,
}

impl FixedWindowChunker {
    /// Create a new chunker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `max_chars` is zero or `overlap` is
    /// not strictly smaller than `max_chars` — either would make the
    /// window advance non-positive and the sweep would never terminate.
    pub fn new(max_chars: usize, overlap: usize) -> Result<Self> {
        if max_chars == 0 {
            return Err(Error::Config("max_chars must be greater than zero".to_string()));
        }
        if overlap >= max_chars {
            return Err(Error::Config(format!(
                "overlap ({overlap}) must be less than max_chars ({max_chars})"
            )));
        }
        Ok(Self { max_chars, overlap })
    }

    /// Split `text` into ordered overlapping chunks.
    ///
    /// Empty text yields an empty sequence; text shorter than the window
    /// yields exactly one chunk.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }

        // Strictly positive by construction.
        let step = self.max_chars - self.overlap;

        let mut chunks = Vec::new();
        let mut start = 0;
        while start < chars.len() {
            let end = (start + self.max_chars).min(chars.len());
            let window: String = chars[start..end].iter().collect();
            let trimmed = window.trim();
            if !trimmed.is_empty() {
                chunks.push(trimmed.to_string());
            }
            if end == chars.len() {
                break;
            }
            start += step;
        }

        chunks
    }
}
