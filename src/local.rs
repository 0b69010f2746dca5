//! Local embedding via fastembed (ONNX).
//!
//! Runs the embedding model in-process instead of calling out to a
//! server. First use downloads the model weights; the `#[ignore]`d tests
//! reflect that.

use crate::{Embedder, ProviderError};

/// Embedding provider running fastembed's default model locally.
///
/// Uses BGE-small-en (384 dimensions). Requires the `local` feature.
///
/// ## Example
///
/// ```rust,ignore
/// use pith::{Embedder, LocalEmbedder};
///
/// let embedder = LocalEmbedder::new()?;
/// let vectors = embedder.embed_documents(&["hello".to_string()])?;
/// assert_eq!(vectors[0].len(), 384);
/// ```
pub struct LocalEmbedder {
    model: fastembed::TextEmbedding,
}

impl LocalEmbedder {
    /// Create a provider with fastembed's default model.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedding model fails to load.
    pub fn new() -> std::result::Result<Self, ProviderError> {
        let model = fastembed::TextEmbedding::try_new(Default::default())?;
        Ok(Self { model })
    }
}

impl Embedder for LocalEmbedder {
    fn embed_documents(
        &self,
        texts: &[String],
    ) -> std::result::Result<Vec<Vec<f32>>, ProviderError> {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        Ok(self.model.embed(refs, None)?)
    }
}

impl std::fmt::Debug for LocalEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalEmbedder").finish_non_exhaustive()
    }
}
