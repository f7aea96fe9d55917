/// Retrieval orchestrator and conversation entry point.
///
/// Ties the tiers together: a query is scored semantically first; when the
/// best score clears the confidence threshold the matching entry's answer is
/// returned directly, otherwise the keyword index supplies "Did you mean"
/// suggestions, and failing that, a no-match message listing example
/// questions.
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::embedder::{Embedder, EmbedderError};
use crate::kb::KnowledgeBase;
use crate::retrieval::keyword::KeywordIndex;
use crate::retrieval::semantic::{self, EmbeddingTable};
use crate::retrieval::suggest::suggest;

/// Errors surfaced to callers of the retrieval API.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error(transparent)]
    Embedding(#[from] EmbedderError),

    #[error("query is empty")]
    EmptyQuery,
}

/// Who authored a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One record in the conversation history. History is append-only: turns add
/// messages, nothing rewrites earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Outcome of one retrieval.
///
/// `confidence` is the top-1 cosine score on the direct path, the fixed
/// fallback constant when suggestions are offered, and 0.0 when nothing
/// matched. `suggestions` is only non-empty on the suggestion path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub answer: String,
    pub confidence: f32,
    pub suggestions: Vec<String>,
}

/// The FAQ bot: knowledge base, keyword index, and corpus embeddings behind
/// one query API.
///
/// All state is built once at construction and read-only afterwards, so a
/// single instance can serve queries from multiple threads.
pub struct FaqBot {
    config: Config,
    kb: KnowledgeBase,
    index: KeywordIndex,
    table: EmbeddingTable,
    embedder: Arc<dyn Embedder>,
}

impl FaqBot {
    /// Build a bot over the built-in knowledge base.
    pub fn new(config: Config, embedder: Arc<dyn Embedder>) -> Result<Self, RetrievalError> {
        Self::with_knowledge_base(config, KnowledgeBase::builtin(), embedder)
    }

    /// Build a bot over a caller-supplied knowledge base.
    ///
    /// Embeds every corpus question up front; a failing embedder fails
    /// construction rather than the first query.
    pub fn with_knowledge_base(
        config: Config,
        kb: KnowledgeBase,
        embedder: Arc<dyn Embedder>,
    ) -> Result<Self, RetrievalError> {
        let index = KeywordIndex::build(&kb);

        let questions: Vec<&str> = kb.entries().iter().map(|e| e.question.as_str()).collect();
        let table = EmbeddingTable::build(embedder.as_ref(), &questions)?;

        info!(
            "Knowledge base ready: {} entries, {} keyword index keys",
            kb.len(),
            index.len()
        );

        Ok(Self {
            config,
            kb,
            index,
            table,
            embedder,
        })
    }

    /// Answer a single query.
    ///
    /// Rejects empty (or whitespace-only) queries. Embedding failures
    /// propagate to the caller; the bot itself stays usable for the next
    /// query.
    pub fn retrieve(&self, query: &str) -> Result<Response, RetrievalError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RetrievalError::EmptyQuery);
        }

        let matches = semantic::rank(
            self.embedder.as_ref(),
            &self.table,
            query,
            self.config.retrieval.top_k,
        )?;

        if let Some(best) = matches.first() {
            if best.score >= self.config.retrieval.confidence_threshold {
                if let Some(entry) = self.kb.get(best.entry_index) {
                    debug!(
                        "Direct answer from entry {} (score {:.3})",
                        best.entry_index, best.score
                    );
                    return Ok(Response {
                        answer: entry.answer.clone(),
                        confidence: best.score,
                        suggestions: Vec::new(),
                    });
                }
            } else {
                debug!(
                    "Best score {:.3} below threshold, trying keywords",
                    best.score
                );
            }
        }

        Ok(self.fallback(query))
    }

    /// Keyword fallback: suggest questions sharing a keyword with the query,
    /// or list example questions when nothing overlaps.
    fn fallback(&self, query: &str) -> Response {
        let max = self.config.retrieval.max_suggestions;
        let suggestions = suggest(query, &self.index, &self.kb, max);

        if suggestions.is_empty() {
            debug!("No keyword overlap for {query:?}");
            let examples: Vec<String> = self
                .kb
                .entries()
                .iter()
                .take(max)
                .map(|e| e.question.clone())
                .collect();
            return Response {
                answer: format_no_match(&examples),
                confidence: 0.0,
                suggestions: Vec::new(),
            };
        }

        debug!("{} keyword suggestions for {query:?}", suggestions.len());
        Response {
            answer: format_suggestions(&suggestions),
            confidence: self.config.retrieval.fallback_confidence,
            suggestions,
        }
    }

    /// Run one conversation turn: retrieve an answer, then append the user
    /// message and the bot's reply to `history`.
    ///
    /// On failure the history is left untouched, so a failed turn never
    /// leaves a user message without a reply.
    pub fn handle_turn(
        &self,
        history: &mut Vec<Message>,
        query: &str,
    ) -> Result<Response, RetrievalError> {
        let response = self.retrieve(query)?;
        history.push(Message::user(query));
        history.push(Message::assistant(response.answer.as_str()));
        Ok(response)
    }

    /// All corpus questions, in entry order.
    #[must_use]
    pub fn example_questions(&self) -> Vec<&str> {
        self.kb
            .entries()
            .iter()
            .map(|e| e.question.as_str())
            .collect()
    }
}

fn format_suggestions(questions: &[String]) -> String {
    let list: Vec<String> = questions.iter().map(|q| format!("- {q}")).collect();
    format!("Did you mean:\n{}", list.join("\n"))
}

fn format_no_match(examples: &[String]) -> String {
    let list: Vec<String> = examples.iter().map(|q| format!("- {q}")).collect();
    format!(
        "I couldn't find an answer. Here are some questions I can answer:\n{}",
        list.join("\n")
    )
}
