/// Retrieval engines for the FAQ bot.
///
/// Two tiers: [`semantic`] ranks entries by cosine similarity over sentence
/// embeddings; [`keyword`] maintains the sparse inverted index that backs the
/// [`suggest`] fallback when semantic confidence is low.
pub mod keyword;
pub mod semantic;
pub mod suggest;
