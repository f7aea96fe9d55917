/// Dense semantic matcher.
///
/// FAQ questions are embedded once at startup into an [`EmbeddingTable`];
/// each query embeds once and is scored against every row by cosine
/// similarity. The corpus is small enough that exhaustive scoring beats any
/// index structure.
use crate::embedder::{Embedder, EmbedderError};

/// A scored candidate from the semantic tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Index into the knowledge base this table was built from.
    pub entry_index: usize,
    /// Cosine similarity in [-1, 1] for unit vectors; 0.0 if either side
    /// has zero norm.
    pub score: f32,
}

/// Precomputed embeddings of the corpus questions, row i belonging to
/// knowledge-base entry i.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    vectors: Vec<Vec<f32>>,
}

impl EmbeddingTable {
    /// Embed every question in one batch.
    pub fn build(embedder: &dyn Embedder, texts: &[&str]) -> Result<Self, EmbedderError> {
        let vectors = embedder.embed_batch(texts)?;
        Ok(Self { vectors })
    }

    #[must_use]
    pub fn from_vectors(vectors: Vec<Vec<f32>>) -> Self {
        Self { vectors }
    }

    #[must_use]
    pub fn vectors(&self) -> &[Vec<f32>] {
        &self.vectors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Score `query_text` against every row of `table` and return the best
/// `top_k` matches, highest score first. Ties break toward the lower entry
/// index, so ranking is fully deterministic.
pub fn rank(
    embedder: &dyn Embedder,
    table: &EmbeddingTable,
    query_text: &str,
    top_k: usize,
) -> Result<Vec<Match>, EmbedderError> {
    let query = embedder.embed(query_text)?;

    let mut matches: Vec<Match> = table
        .vectors
        .iter()
        .enumerate()
        .map(|(entry_index, vector)| Match {
            entry_index,
            score: cosine_similarity(&query, vector),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.entry_index.cmp(&b.entry_index))
    });
    matches.truncate(top_k);

    Ok(matches)
}

/// Cosine similarity of two equal-length vectors. Returns 0.0 when either
/// vector has zero norm rather than dividing by zero.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
