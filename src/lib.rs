//! # faqbot — Semantic FAQ Retrieval Core
//!
//! Answers free-text questions against a small, static knowledge base of
//! question/answer pairs. Retrieval is two-tier: dense semantic similarity
//! over sentence embeddings, with a sparse keyword/tag fallback that produces
//! "Did you mean" suggestions when semantic confidence is low.
//!
//! ## Architecture
//!
//! - **[`config`]** — Retrieval constants, model settings, log verbosity
//! - **[`kb`]** — Static knowledge base of FAQ entries (question/answer/tags)
//! - **[`embedder`]** — Text embedding via ONNX Runtime (all-MiniLM-L6-v2)
//! - **[`retrieval`]** — Keyword index, semantic ranking, suggestion engine
//! - **[`bot`]** — Retrieval orchestrator and conversation entry point

pub mod bot;
pub mod config;
pub mod embedder;
pub mod kb;
pub mod retrieval;
