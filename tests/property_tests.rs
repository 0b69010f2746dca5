//! Property-based tests for splitting and cluster-count resolution.
//!
//! These tests verify the invariants the selection pipeline leans on:
//! - Ordered: chunks come back in source order
//! - Bounds: chunk offsets are valid and text matches the source slice
//! - Coverage: every non-whitespace byte of the input lands in a chunk
//! - Budget: chunks respect their budget except for oversized single units
//! - Resolution: the cluster count scales as ceil(sqrt(n)), capped at n

use proptest::prelude::*;
use pith::{Chunk, ClusterCount, ParagraphSplitter, SentenceSplitter, Splitter};

// =============================================================================
// Test Generators
// =============================================================================

/// Generate text with sentence-like structure.
fn sentence_like_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex("[A-Za-z]{2,12}").unwrap(), 4..40).prop_map(
        |words| {
            let mut result = String::new();
            for (i, word) in words.iter().enumerate() {
                result.push_str(word);
                if i % 5 == 4 {
                    result.push_str(". ");
                } else {
                    result.push(' ');
                }
            }
            result
        },
    )
}

/// Generate text with paragraph structure.
fn paragraph_like_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex("[A-Za-z ]{5,60}").unwrap(), 1..12)
        .prop_map(|paragraphs| paragraphs.join("\n\n"))
        .prop_filter("non-blank", |t| !t.trim().is_empty())
}

// =============================================================================
// Invariant Helpers
// =============================================================================

/// Check that chunks are in source order and indexed sequentially.
fn chunks_ordered(chunks: &[Chunk]) -> bool {
    chunks.iter().enumerate().all(|(i, c)| c.index == i)
        && chunks.windows(2).all(|w| w[0].start <= w[1].start)
}

/// Check that chunk bounds are valid and text matches the source.
fn chunks_match_source(chunks: &[Chunk], text: &str) -> bool {
    chunks.iter().all(|c| {
        c.start <= c.end && c.end <= text.len() && &text[c.start..c.end] == c.text
    })
}

/// Check that every non-whitespace byte is inside some chunk span.
fn non_whitespace_covered(chunks: &[Chunk], text: &str) -> bool {
    let mut covered = vec![false; text.len()];
    for c in chunks {
        for slot in &mut covered[c.start..c.end] {
            *slot = true;
        }
    }
    text.char_indices()
        .filter(|(_, ch)| !ch.is_whitespace())
        .all(|(i, _)| covered[i])
}

// =============================================================================
// SentenceSplitter Properties
// =============================================================================

proptest! {
    #[test]
    fn sentence_chunks_ordered(text in sentence_like_text()) {
        let chunks = SentenceSplitter::new(12).split(&text).unwrap();
        prop_assert!(!chunks.is_empty());
        prop_assert!(chunks_ordered(&chunks));
    }

    #[test]
    fn sentence_chunks_match_source(text in sentence_like_text()) {
        let chunks = SentenceSplitter::new(12).split(&text).unwrap();
        prop_assert!(chunks_match_source(&chunks, &text));
    }

    #[test]
    fn sentence_coverage(text in sentence_like_text()) {
        let chunks = SentenceSplitter::new(12).split(&text).unwrap();
        prop_assert!(non_whitespace_covered(&chunks, &text));
    }

    #[test]
    fn sentence_deterministic(text in sentence_like_text()) {
        let a = SentenceSplitter::new(10).split(&text).unwrap();
        let b = SentenceSplitter::new(10).split(&text).unwrap();
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// ParagraphSplitter Properties
// =============================================================================

proptest! {
    #[test]
    fn paragraph_chunks_ordered(text in paragraph_like_text()) {
        let chunks = ParagraphSplitter::new(80).split(&text).unwrap();
        prop_assert!(!chunks.is_empty());
        prop_assert!(chunks_ordered(&chunks));
    }

    #[test]
    fn paragraph_chunks_match_source(text in paragraph_like_text()) {
        let chunks = ParagraphSplitter::new(80).split(&text).unwrap();
        prop_assert!(chunks_match_source(&chunks, &text));
    }

    #[test]
    fn paragraph_coverage(text in paragraph_like_text()) {
        let chunks = ParagraphSplitter::new(80).split(&text).unwrap();
        prop_assert!(non_whitespace_covered(&chunks, &text));
    }

    #[test]
    fn paragraph_respects_budget_for_multi_unit_chunks(
        text in paragraph_like_text(),
        budget in 30usize..200,
    ) {
        // A chunk may exceed the budget only when it holds a single
        // oversized paragraph (no blank line inside it).
        let chunks = ParagraphSplitter::new(budget).split(&text).unwrap();
        for c in &chunks {
            if c.len() > budget {
                prop_assert!(
                    !c.text.contains("\n\n"),
                    "oversized chunk holds multiple paragraphs: {} bytes > {}",
                    c.len(),
                    budget
                );
            }
        }
    }
}

// =============================================================================
// ClusterCount Properties
// =============================================================================

proptest! {
    #[test]
    fn auto_count_is_ceil_sqrt(n in 1usize..10_000) {
        let k = ClusterCount::Auto.resolve(n).unwrap();
        prop_assert!(k >= 1);
        prop_assert!(k <= n);
        prop_assert!((k - 1) * (k - 1) < n, "k too large for {n}");
        prop_assert!(k * k >= n, "k too small for {n}");
    }

    #[test]
    fn fixed_count_never_exceeds_chunks(requested in 1usize..100, n in 1usize..100) {
        let k = ClusterCount::Fixed(requested).resolve(n).unwrap();
        prop_assert_eq!(k, requested.min(n));
    }
}

// =============================================================================
// Pinned Values
// =============================================================================

#[test]
fn resolver_pinned_values() {
    assert_eq!(ClusterCount::Auto.resolve(9).unwrap(), 3);
    assert_eq!(ClusterCount::Auto.resolve(10).unwrap(), 4);
    assert_eq!(ClusterCount::Fixed(10).resolve(5).unwrap(), 5);
}

#[test]
fn unicode_text_splits_without_panicking() {
    let text = "Hello 世界! Привет мир! مرحبا بالعالم.";
    let chunks = SentenceSplitter::new(4).split(text).unwrap();

    for c in &chunks {
        // Spans must land on char boundaries.
        assert_eq!(&text[c.start..c.end], c.text);
    }
}

#[test]
fn sentence_boundaries_handle_abbreviations() {
    let text = "Dr. Smith went to Washington D.C. He met Mr. Jones.";
    let chunks = SentenceSplitter::new(6).split(text).unwrap();

    // UAX #29 treats "Dr." specially; the split must not explode on
    // every period.
    assert!(!chunks.is_empty());
    assert!(chunks.len() <= 4, "too many chunks: {chunks:?}");
}
