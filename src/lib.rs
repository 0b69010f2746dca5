//! # pith
//!
//! Representative chunk selection for long documents.
//!
//! ## The Problem
//!
//! A summarizer (human or model) can't read a 400-page document, but it
//! can read twenty well-chosen passages. Which twenty? Taking the first N
//! pages misses the ending; sampling at random misses whole topics.
//!
//! What you actually want is *coverage of the semantic space*: split the
//! document into chunks, embed each one, group the embeddings into
//! clusters, and keep the chunk nearest each cluster's center. Every
//! major topic contributes one passage; redundant passages collapse into
//! their cluster's representative.
//!
//! ```text
//! text ──▶ split ──▶ embed ──▶ cluster ──▶ one chunk per cluster
//!            │
//!            └──▶ first + last chunk, verbatim
//! ```
//!
//! The first and last chunks are carried along unconditionally — a
//! document's lead and conclusion matter structurally even when nothing
//! in the middle clusters near them.
//!
//! ## Splitting
//!
//! Two policies, both greedy packers that never split a unit in half:
//!
//! | Splitter | Unit | Budget |
//! |----------|------|--------|
//! | [`SentenceSplitter`] | UAX #29 sentences | word tokens per chunk |
//! | [`ParagraphSplitter`] | blank-line paragraphs | characters per chunk |
//!
//! A single unit larger than the budget becomes its own oversized chunk;
//! splitting mid-sentence would cost more meaning than the budget buys.
//!
//! ## Clustering
//!
//! Two strategies behind one [`Strategy`] enum:
//!
//! - **Centroid partition** (k-means): deterministic seeded k-means++
//!   plus Lloyd refinement. Representatives are found by *global*
//!   nearest-neighbor search from each centroid.
//! - **Hierarchical merge** (agglomerative, Ward): bottom-up merging to
//!   exactly k clusters, explicit mean centroids, representatives found
//!   *within* each cluster only.
//!
//! Cluster count defaults to `ceil(sqrt(num_chunks))` and can be pinned
//! with [`ClusterCount::Fixed`].
//!
//! Nearest-neighbor work runs through a [`NeighborSearch`] backend
//! chosen at construction: a plain scan, or a flat contiguous index
//! layout for larger corpora. Both are exact.
//!
//! ## Quick Start
//!
//! ```rust
//! use pith::{ClusterCount, Embedder, Extractor, ProviderError};
//!
//! # struct ToyEmbedder;
//! # impl Embedder for ToyEmbedder {
//! #     fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
//! #         Ok(texts.iter().map(|t| vec![t.len() as f32, 1.0]).collect())
//! #     }
//! # }
//! // Any Embedder works; OllamaEmbedder talks to a local Ollama server.
//! let extractor = Extractor::new(ToyEmbedder).with_clusters(ClusterCount::Auto);
//!
//! let text = "Introduction to the topic. Detail one. Detail two. Conclusion.";
//! let result = extractor.extract(text)?;
//!
//! println!("lead: {}", result.first.unwrap().text);
//! for chunk in &result.selected {
//!     println!("representative: {}", chunk.text);
//! }
//! # Ok::<(), pith::Error>(())
//! ```
//!
//! ## Performance Considerations
//!
//! | Stage | Cost | Notes |
//! |-------|------|-------|
//! | Split | O(n) | n = document bytes |
//! | Embed | provider-bound | one call, all chunks |
//! | K-means | O(i · c · k · d) | i ≤ 20 iterations |
//! | Agglomerative | O(c³) worst case | fine for c in the hundreds |
//! | Select | O(k · c · d) | exact search |
//!
//! Where c = chunk count, d = embedding dimension. The embedding call
//! dominates in practice; everything else is arithmetic over a few
//! hundred vectors.
//!
//! The pipeline is synchronous and shares nothing across calls: run
//! extractions concurrently if your embedding provider allows it.

mod agglomerative;
mod chunk;
mod count;
mod embed;
mod error;
mod extract;
mod fetch;
mod index;
mod kmeans;
mod ollama;
mod paragraph;
mod select;
mod sentence;
mod strategy;

#[cfg(feature = "local")]
mod local;

pub use agglomerative::Agglomerative;
pub use chunk::Chunk;
pub use count::ClusterCount;
pub use embed::{embed_chunks, Embedder, ProviderError};
pub use error::{Error, Result};
pub use extract::{Extraction, Extractor, IndexBackend, SplitMethod};
pub use fetch::{fetch, FetchOutcome};
pub use index::{ExhaustiveSearch, FlatIndex, NeighborSearch};
pub use kmeans::{Kmeans, KmeansFit};
pub use ollama::OllamaEmbedder;
pub use paragraph::ParagraphSplitter;
pub use select::{select_representatives, SearchScope};
pub use sentence::SentenceSplitter;
pub use strategy::{Partition, Strategy};

#[cfg(feature = "local")]
pub use local::LocalEmbedder;

/// A text splitting strategy.
///
/// Both splitters implement this trait, enabling polymorphic usage:
///
/// ```rust
/// use pith::{ParagraphSplitter, SentenceSplitter, Splitter};
///
/// fn chunk_count(splitter: &dyn Splitter, text: &str) -> usize {
///     splitter.split(text).map(|chunks| chunks.len()).unwrap_or(0)
/// }
///
/// let text = "First sentence. Second sentence.";
/// let by_sentence = chunk_count(&SentenceSplitter::new(3), text);
/// let by_paragraph = chunk_count(&ParagraphSplitter::new(100), text);
/// ```
pub trait Splitter: Send + Sync {
    /// Split text into an ordered sequence of chunks.
    ///
    /// Each [`Chunk`] carries its byte span in the original document and
    /// its position in the sequence. Order is source order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] for empty or whitespace-only text;
    /// [`Error::InvalidConfig`] for an unusable budget.
    fn split(&self, text: &str) -> Result<Vec<Chunk>>;
}
