/// Embedder trait and shared types for text embedding.
///
/// The retrieval core only sees the [`Embedder`] trait; the backend is chosen
/// at startup. [`OnnxEmbedder`] runs all-MiniLM-L6-v2 locally via ONNX
/// Runtime, [`MockEmbedder`] produces deterministic vectors for tests and
/// offline runs.
pub mod download;
pub mod mock;
pub mod onnx;

pub use mock::MockEmbedder;
pub use onnx::OnnxEmbedder;

use thiserror::Error;

/// Errors that can occur during embedding operations.
#[derive(Error, Debug)]
pub enum EmbedderError {
    #[error("model load failed: {0}")]
    ModelLoadFailed(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),
}

/// Trait for text embedding implementations.
///
/// All implementations must be `Send + Sync` to allow concurrent use
/// behind `Arc`.
pub trait Embedder: Send + Sync {
    /// Embed a single text string into a vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedderError>;

    /// Embed multiple text strings into vectors.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedderError>;

    /// Return the dimensionality of the embedding vectors.
    fn dimensions(&self) -> usize;
}
