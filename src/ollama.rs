//! Ollama-backed embedding provider.
//!
//! Talks to a local Ollama server's `/api/embed` endpoint over HTTP.
//! The call is an ordinary blocking request: the pipeline is synchronous
//! end to end, and callers needing deadlines or cancellation impose them
//! externally.

use serde::{Deserialize, Serialize};

use crate::{Embedder, ProviderError};

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "nomic-embed-text";

/// Embedding provider backed by a running Ollama server.
///
/// Defaults to `nomic-embed-text` on `http://localhost:11434`.
///
/// ## Example
///
/// ```rust,no_run
/// use pith::{Embedder, OllamaEmbedder};
///
/// let embedder = OllamaEmbedder::new().with_model("mxbai-embed-large");
/// let vectors = embedder.embed_documents(&["hello".to_string()])?;
/// # Ok::<(), pith::ProviderError>(())
/// ```
#[derive(Debug)]
pub struct OllamaEmbedder {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaEmbedder {
    /// Create a provider with the default model and local server address.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Use a different embedding model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point at a different Ollama server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for OllamaEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl Embedder for OllamaEmbedder {
    fn embed_documents(
        &self,
        texts: &[String],
    ) -> std::result::Result<Vec<Vec<f32>>, ProviderError> {
        let url = format!("{}/api/embed", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()?
            .error_for_status()?;

        let body: EmbedResponse = response.json()?;
        Ok(body.embeddings)
    }
}
