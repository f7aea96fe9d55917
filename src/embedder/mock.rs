/// Mock embedder for testing purposes.
///
/// Generates deterministic unit vectors from a hash of the input text.
/// Identical texts embed identically (cosine 1.0); distinct texts get
/// pseudorandom directions, which at a few hundred dimensions are close to
/// orthogonal. That makes both retrieval outcomes reachable without a real
/// model: querying a corpus question verbatim clears any sensible confidence
/// threshold, anything else falls well below it.
use std::hash::{DefaultHasher, Hash, Hasher};

use super::{Embedder, EmbedderError};

/// A mock embedder that produces deterministic vectors from text hashes.
///
/// Useful for testing and offline runs without loading a real ONNX model.
pub struct MockEmbedder {
    pub dimensions: usize,
}

impl MockEmbedder {
    /// Create a new `MockEmbedder` with the given dimensionality.
    #[must_use]
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self { dimensions: 384 }
    }
}

/// splitmix64 step: decorrelates consecutive outputs of a seeded stream.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl Embedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedderError> {
        // Seed a per-text pseudorandom stream from the text hash
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut state = hasher.finish();

        // Fill with values uniform in [-1, 1)
        let mut embedding = Vec::with_capacity(self.dimensions);
        for _ in 0..self.dimensions {
            let unit = (splitmix64(&mut state) >> 40) as f32 / (1u64 << 24) as f32;
            embedding.push(2.0 * unit - 1.0);
        }

        // L2 normalize
        let norm_sq: f32 = embedding.iter().map(|v| v * v).sum();
        if norm_sq > 0.0 {
            let inv = 1.0 / norm_sq.sqrt();
            for v in &mut embedding {
                *v *= inv;
            }
        }

        Ok(embedding)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedderError> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
