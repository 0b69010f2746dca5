//! Embedding computation at the provider boundary.
//!
//! Computing a vector for a piece of text is delegated to an external
//! [`Embedder`]. This module owns the boundary: it hands chunk texts to
//! the provider, validates the shape of what comes back, and wraps any
//! provider failure into [`Error::Embedding`].
//!
//! ## Why f32?
//!
//! Flat L2 index layouts work on single-precision vectors, so the whole
//! pipeline standardizes on `f32`. The trait bakes the precision into the
//! signature; providers working in f64 convert before returning.
//!
//! ## No Retries
//!
//! A provider failure aborts the pipeline. Retry policy (backoff,
//! fallback models) belongs to the caller, who knows the deployment.

use crate::{Chunk, Error, Result};

/// Opaque failure from an embedding provider.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// An external embedding provider.
///
/// Maps each input text to a fixed-length vector, preserving length and
/// order. Failures are opaque to this crate and are wrapped into
/// [`Error::Embedding`] at the call site.
///
/// ## Example
///
/// ```rust
/// use pith::{Embedder, ProviderError};
///
/// /// Toy provider: vector of [byte length, vowel count].
/// struct ToyEmbedder;
///
/// impl Embedder for ToyEmbedder {
///     fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
///         Ok(texts
///             .iter()
///             .map(|t| {
///                 let vowels = t.chars().filter(|c| "aeiou".contains(*c)).count();
///                 vec![t.len() as f32, vowels as f32]
///             })
///             .collect())
///     }
/// }
/// ```
pub trait Embedder: Send + Sync {
    /// Embed each text, returning one vector per input in input order.
    ///
    /// # Errors
    ///
    /// Any provider-side failure (network, model, encoding).
    fn embed_documents(&self, texts: &[String]) -> std::result::Result<Vec<Vec<f32>>, ProviderError>;
}

/// Compute the embedding matrix for a chunk sequence.
///
/// Returns one row per chunk, in chunk order. The provider's output is
/// validated: row count must match the chunk count and every row must
/// share one dimensionality.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `chunks` is empty.
/// - [`Error::Embedding`] wrapping any provider failure or shape
///   violation.
pub fn embed_chunks(embedder: &dyn Embedder, chunks: &[Chunk]) -> Result<Vec<Vec<f32>>> {
    if chunks.is_empty() {
        return Err(Error::InvalidInput("chunks must be non-empty"));
    }

    let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
    let embeddings = embedder
        .embed_documents(&texts)
        .map_err(|e| Error::Embedding(e.to_string()))?;

    if embeddings.len() != chunks.len() {
        return Err(Error::Embedding(format!(
            "provider returned {} vectors for {} chunks",
            embeddings.len(),
            chunks.len()
        )));
    }

    let dim = embeddings[0].len();
    if dim == 0 {
        return Err(Error::Embedding("provider returned zero-length vectors".into()));
    }
    for (i, row) in embeddings.iter().enumerate() {
        if row.len() != dim {
            return Err(Error::Embedding(format!(
                "dimension mismatch at row {i}: expected {dim}, found {}",
                row.len()
            )));
        }
    }

    Ok(embeddings)
}
