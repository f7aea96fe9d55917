/// Static knowledge base of FAQ entries.
///
/// Entries are question/answer pairs with optional tags. The built-in corpus
/// ships with the crate; [`KnowledgeBase::from_entries`] exists for callers
/// that supply their own.
use serde::{Deserialize, Serialize};

/// One FAQ entry: a canonical question, its answer, and tags that widen
/// keyword matching beyond the question's own words.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FaqEntry {
    pub fn new(question: &str, answer: &str, tags: &[&str]) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// An ordered, immutable collection of FAQ entries. Entry indices are stable
/// for the lifetime of the knowledge base; retrieval results refer to entries
/// by index.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<FaqEntry>,
}

impl KnowledgeBase {
    /// The corpus the bot ships with.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(vec![
            FaqEntry::new(
                "What services does your company offer?",
                "Our company offers web development, mobile app development, UI/UX design, and digital marketing services.",
                &["services", "offerings", "what we do"],
            ),
            FaqEntry::new(
                "What are your business hours?",
                "Our business hours are Monday through Friday, 9 AM to 5 PM Eastern Time.",
                &["hours", "availability", "contact time"],
            ),
            FaqEntry::new(
                "How can I contact customer support?",
                "You can contact our customer support team via email at support@example.com or by phone at (555) 123-4567.",
                &["contact", "support", "help"],
            ),
            FaqEntry::new(
                "Do you offer refunds?",
                "Yes, we offer full refunds within 30 days of purchase if you're not satisfied with our services.",
                &["refund", "money back", "cancellation"],
            ),
            FaqEntry::new(
                "What is your pricing structure?",
                "Our pricing is project-based. We offer free consultations to discuss your needs and provide a custom quote.",
                &["pricing", "cost", "rates"],
            ),
            FaqEntry::new(
                "How long does a project take?",
                "Small projects take 2-4 weeks, while larger ones may take months. We provide a timeline during consultation.",
                &["timeline", "duration", "project length"],
            ),
        ])
    }

    #[must_use]
    pub fn from_entries(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
