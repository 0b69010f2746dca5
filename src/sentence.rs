//! Sentence splitting under a token budget.
//!
//! Splits text on sentence boundaries, then greedily packs consecutive
//! sentences into chunks while a word-token budget holds.
//!
//! ## The Hard Part: Finding Sentences
//!
//! Sentence detection seems simple until you encounter:
//!
//! ```text
//! "Dr. Smith went to Washington D.C. on Jan. 15th."
//!     ^                          ^       ^
//!     Not a sentence end (abbreviation)
//! ```
//!
//! We use Unicode Standard Annex #29 (UAX #29) for sentence segmentation,
//! which handles most edge cases including abbreviations, decimal numbers,
//! ellipses, and URLs. Word tokens are counted with the same annex's word
//! segmentation.
//!
//! ## Greedy Packing
//!
//! ```text
//! Budget: 12 tokens
//!
//! Sentences (tokens):  S1 (5)   S2 (6)   S3 (4)   S4 (2)
//! Running count:       5        11       15 ← over budget
//!
//! Chunk 0: [S1, S2]    (11 tokens)
//! Chunk 1: [S3, S4]    (6 tokens)
//! ```
//!
//! A single sentence whose own token count exceeds the budget is emitted
//! as its own oversized chunk rather than split mid-sentence. Chunks are
//! closed trimmed of surrounding whitespace; the final non-empty
//! accumulator is flushed as the last chunk.

use unicode_segmentation::UnicodeSegmentation;

use crate::{Chunk, Error, Result, Splitter};

/// Sentence splitter with a word-token budget per chunk.
///
/// ## Example
///
/// ```rust
/// use pith::{SentenceSplitter, Splitter};
///
/// let splitter = SentenceSplitter::new(6);
/// let text = "First sentence here. Second sentence here. Third one.";
/// let chunks = splitter.split(text).unwrap();
///
/// assert_eq!(chunks.len(), 2);
/// assert!(chunks[0].text.contains("First"));
/// assert!(chunks[0].text.contains("Second"));
/// ```
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    max_tokens: usize,
}

impl SentenceSplitter {
    /// Create a sentence splitter.
    ///
    /// `max_tokens` is the word-token budget per chunk. It is validated at
    /// [`split`](Splitter::split) time, not here.
    #[must_use]
    pub fn new(max_tokens: usize) -> Self {
        Self { max_tokens }
    }

    /// The configured token budget.
    #[must_use]
    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }
}

/// Sentences with their byte offsets, whitespace-only segments removed.
pub(crate) fn sentences_with_offsets(text: &str) -> Vec<(usize, &str)> {
    text.split_sentence_bounds()
        .scan(0usize, |offset, s| {
            let start = *offset;
            *offset += s.len();
            Some((start, s))
        })
        .filter(|(_, s)| !s.trim().is_empty())
        .collect()
}

/// Close a span of source text into a trimmed chunk, adjusting offsets.
pub(crate) fn close_chunk(text: &str, start: usize, end: usize, index: usize) -> Option<Chunk> {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let leading_ws = raw.len() - raw.trim_start().len();
    let trailing_ws = raw.len() - raw.trim_end().len();

    Some(Chunk::new(
        trimmed,
        start + leading_ws,
        end - trailing_ws,
        index,
    ))
}

impl Splitter for SentenceSplitter {
    fn split(&self, text: &str) -> Result<Vec<Chunk>> {
        if text.trim().is_empty() {
            return Err(Error::InvalidInput("text must be non-empty"));
        }
        if self.max_tokens == 0 {
            return Err(Error::InvalidConfig {
                name: "max_tokens_per_chunk",
                message: "must be at least 1",
            });
        }

        let sentences = sentences_with_offsets(text);

        let mut chunks = Vec::new();
        // Current accumulator: span into `text` plus its running token count.
        let mut span: Option<(usize, usize)> = None;
        let mut tokens = 0usize;

        for (start, sentence) in sentences {
            let count = sentence.unicode_words().count();

            match span {
                None => {
                    // An oversized single sentence still becomes its own chunk.
                    span = Some((start, start + sentence.len()));
                    tokens = count;
                }
                Some((chunk_start, _)) if tokens + count <= self.max_tokens => {
                    span = Some((chunk_start, start + sentence.len()));
                    tokens += count;
                }
                Some((chunk_start, chunk_end)) => {
                    if let Some(chunk) = close_chunk(text, chunk_start, chunk_end, chunks.len()) {
                        chunks.push(chunk);
                    }
                    span = Some((start, start + sentence.len()));
                    tokens = count;
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
