//! Paragraph splitting under a character budget.
//!
//! Splits text on blank-line boundaries, then greedily packs consecutive
//! paragraphs into chunks while a character budget holds.
//!
//! ## Why Paragraphs?
//!
//! Paragraph breaks are the author's own topic boundaries. For prose with
//! real structure (articles, books, documentation), packing whole
//! paragraphs keeps each chunk self-contained in a way character windows
//! never do.
//!
//! ```text
//! Budget: 120 chars
//!
//! Paragraphs (chars):  P1 (80)   P2 (30)   P3 (90)
//! Running length:      80        112       204 ← over budget
//!
//! Chunk 0: P1 + "\n\n" + P2   (112 chars)
//! Chunk 1: P3                 (90 chars)
//! ```
//!
//! A single paragraph longer than the budget is emitted as its own
//! oversized chunk rather than split mid-paragraph. Same flush semantics
//! as the sentence splitter: chunks close trimmed, the final non-empty
//! accumulator becomes the last chunk.

use crate::sentence::close_chunk;
use crate::{Chunk, Error, Result, Splitter};

/// Paragraph separator: a blank line.
const SEPARATOR: &str = "\n\n";

/// Paragraph splitter with a character budget per chunk.
///
/// ## Example
///
/// ```rust
/// use pith::{ParagraphSplitter, Splitter};
///
/// let splitter = ParagraphSplitter::new(40);
/// let text = "First paragraph.\n\nSecond paragraph.\n\nThird paragraph here.";
/// let chunks = splitter.split(text).unwrap();
///
/// assert_eq!(chunks.len(), 2);
/// assert!(chunks[0].text.contains("Second"));
/// ```
#[derive(Debug, Clone)]
pub struct ParagraphSplitter {
    chunk_size: usize,
}

impl ParagraphSplitter {
    /// Create a paragraph splitter.
    ///
    /// `chunk_size` is the character budget per chunk. It is validated at
    /// [`split`](Splitter::split) time, not here.
    #[must_use]
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// The configured character budget.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Splitter for ParagraphSplitter {
    fn split(&self, text: &str) -> Result<Vec<Chunk>> {
        if text.trim().is_empty() {
            return Err(Error::InvalidInput("text must be non-empty"));
        }
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfig {
                name: "chunk_size",
                message: "must be at least 1",
            });
        }

        // Paragraphs with byte offsets; blank segments are skipped but
        // still advance the offset.
        let paragraphs: Vec<(usize, &str)> = text
            .split(SEPARATOR)
            .scan(0usize, |offset, p| {
                let start = *offset;
                *offset += p.len() + SEPARATOR.len();
                Some((start, p))
            })
            .filter(|(_, p)| !p.trim().is_empty())
            .collect();

        let mut chunks = Vec::new();
        let mut span: Option<(usize, usize)> = None;

        for (start, para) in paragraphs {
            let end = start + para.len();

            match span {
                None => {
                    // An oversized single paragraph still becomes its own chunk.
                    span = Some((start, end));
                }
                Some((chunk_start, chunk_end))
                    if (chunk_end - chunk_start) + SEPARATOR.len() + para.len()
                        <= self.chunk_size =>
                {
                    span = Some((chunk_start, end));
                }
                Some((chunk_start, chunk_end)) => {
                    if let Some(chunk) = close_chunk(text, chunk_start, chunk_end, chunks.len()) {
                        chunks.push(chunk);
                    }
                    span = Some((start, end));
                }
            }
        }

        if let Some((chunk_start, chunk_end)) = span {
            if let Some(chunk) = close_chunk(text, chunk_start, chunk_end, chunks.len()) {
                chunks.push(chunk);
            }
        }

        Ok(chunks)
    }
}
