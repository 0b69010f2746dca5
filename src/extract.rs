//! The end-to-end selection pipeline.
//!
//! [`Extractor`] composes the pieces into a linear pipeline:
//!
//! ```text
//! text ──▶ split ──▶ embed ──▶ resolve k ──▶ cluster ──▶ select
//!            │
//!            └──▶ first chunk, last chunk (verbatim)
//! ```
//!
//! Each stage fully completes before the next begins; any failure aborts
//! the whole run with a typed error and no partial result. The first and
//! last chunks ride along untouched by clustering — a document's lead
//! and conclusion are structurally significant and may not survive as
//! cluster representatives on their own.
//!
//! The pipeline is synchronous. The embedding call blocks; callers
//! needing deadlines or cancellation wrap the call externally. Nothing
//! is shared between invocations, so concurrent `extract` calls are safe
//! as long as the embedding provider itself is.

use crate::index::{ExhaustiveSearch, FlatIndex};
use crate::{
    embed_chunks, select_representatives, Chunk, ClusterCount, Embedder, NeighborSearch,
    ParagraphSplitter, Result, SentenceSplitter, Splitter, Strategy,
};

/// How to split source text into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMethod {
    /// Sentence boundaries packed under a word-token budget.
    #[default]
    Sentences,
    /// Blank-line boundaries packed under a character budget.
    Paragraphs,
}

/// Which nearest-neighbor backend drives assignment and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBackend {
    /// Per-query linear scan. No setup cost; fine for most documents.
    #[default]
    Exhaustive,
    /// Flat contiguous layout with precomputed norms, for large corpora.
    Flat,
}

impl IndexBackend {
    fn searcher(&self) -> Box<dyn NeighborSearch> {
        match self {
            Self::Exhaustive => Box::new(ExhaustiveSearch),
            Self::Flat => Box::new(FlatIndex),
        }
    }
}

/// Result of a full extraction run.
///
/// `first` and `last` are `None` only when splitting produced no chunks
/// at all; for any non-empty split both are present, and for a
/// single-chunk document they are the same chunk.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// One representative chunk per cluster, in cluster order.
    pub selected: Vec<Chunk>,
    /// The document's first chunk, verbatim.
    pub first: Option<Chunk>,
    /// The document's last chunk, verbatim.
    pub last: Option<Chunk>,
}

/// Representative-chunk extractor.
///
/// Configuration mirrors the selection pipeline's knobs; defaults are
/// sensible for prose:
///
/// | option | default |
/// |--------|---------|
/// | split method | sentences |
/// | max tokens per chunk | 512 |
/// | chunk size (paragraph mode) | 500 |
/// | strategy | centroid partition |
/// | cluster count | auto |
/// | backend | exhaustive |
///
/// ## Example
///
/// ```rust
/// use pith::{ClusterCount, Embedder, Extractor, ProviderError, Strategy};
///
/// # struct ToyEmbedder;
/// # impl Embedder for ToyEmbedder {
/// #     fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
/// #         Ok(texts.iter().map(|t| vec![t.len() as f32, 1.0]).collect())
/// #     }
/// # }
/// let extractor = Extractor::new(ToyEmbedder)
///     .with_strategy(Strategy::HierarchicalMerge)
///     .with_clusters(ClusterCount::Fixed(2));
///
/// let result = extractor.extract("One sentence. Another sentence. A third.")?;
/// assert!(!result.selected.is_empty());
/// assert!(result.first.is_some());
/// # Ok::<(), pith::Error>(())
/// ```
#[derive(Debug)]
pub struct Extractor<E> {
    embedder: E,
    strategy: Strategy,
    clusters: ClusterCount,
    split_method: SplitMethod,
    max_tokens_per_chunk: usize,
    chunk_size: usize,
    backend: IndexBackend,
}

impl<E: Embedder> Extractor<E> {
    /// Create an extractor with default configuration.
    #[must_use]
    pub fn new(embedder: E) -> Self {
        Self {
            embedder,
            strategy: Strategy::default(),
            clusters: ClusterCount::default(),
            split_method: SplitMethod::default(),
            max_tokens_per_chunk: 512,
            chunk_size: 500,
            backend: IndexBackend::default(),
        }
    }

    /// Choose the clustering strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Choose the cluster count (explicit or auto).
    #[must_use]
    pub fn with_clusters(mut self, clusters: ClusterCount) -> Self {
        self.clusters = clusters;
        self
    }

    /// Choose the split method.
    #[must_use]
    pub fn with_split_method(mut self, split_method: SplitMethod) -> Self {
        self.split_method = split_method;
        self
    }

    /// Set the word-token budget for sentence-mode splitting.
    #[must_use]
    pub fn with_max_tokens_per_chunk(mut self, max_tokens: usize) -> Self {
        self.max_tokens_per_chunk = max_tokens;
        self
    }

    /// Set the character budget for paragraph-mode splitting.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Choose the nearest-neighbor backend.
    #[must_use]
    pub fn with_backend(mut self, backend: IndexBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Split `text` with the configured method and budget.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] for blank text, [`Error::InvalidConfig`]
    /// for a zero budget.
    pub fn split(&self, text: &str) -> Result<Vec<Chunk>> {
        match self.split_method {
            SplitMethod::Sentences => SentenceSplitter::new(self.max_tokens_per_chunk).split(text),
            SplitMethod::Paragraphs => ParagraphSplitter::new(self.chunk_size).split(text),
        }
    }

    /// Cluster pre-computed embeddings and pick representatives.
    ///
    /// Exposed so callers who already hold an embedding matrix (cached,
    /// or produced elsewhere) can run just the selection stages.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] for a zero cluster count,
    /// [`Error::Clustering`] for shape mismatches or degenerate input.
    pub fn select(&self, chunks: &[Chunk], embeddings: &[Vec<f32>]) -> Result<Vec<Chunk>> {
        let k = self.clusters.resolve(chunks.len())?;
        let search = self.backend.searcher();
        let partition = self.strategy.cluster(embeddings, k, search.as_ref())?;
        select_representatives(
            chunks,
            embeddings,
            &partition,
            self.strategy.search_scope(),
            search.as_ref(),
        )
    }

    /// Run the full pipeline on `text`.
    ///
    /// Returns the selected representatives plus the document's first
    /// and last chunks. If splitting yields no chunks the result is
    /// empty rather than an error.
    ///
    /// # Errors
    ///
    /// Any stage's typed error; see [`Error`]. No partial results.
    pub fn extract(&self, text: &str) -> Result<Extraction> {
        // Reject misconfiguration before doing any work.
        self.clusters.resolve(1)?;

        let chunks = self.split(text)?;

        if chunks.is_empty() {
            return Ok(Extraction {
                selected: Vec::new(),
                first: None,
                last: None,
            });
        }

        let first = chunks[0].clone();
        let last = chunks[chunks.len() - 1].clone();

        let embeddings = embed_chunks(&self.embedder, &chunks)?;
        let selected = self.select(&chunks, &embeddings)?;

        Ok(Extraction {
            selected,
            first: Some(first),
            last: Some(last),
        })
    }
}
