//! Reply selection
//!
//! A [`Responder`] turns a user utterance into the assistant's reply. The
//! shipped implementation is [`KeywordResponder`], an ordered substring
//! match over a [`ReplyBook`].

use async_trait::async_trait;

use crate::config::ReplyBook;

/// Source of assistant replies
///
/// # Example
///
/// ```ignore
/// struct Echo;
///
/// #[async_trait]
/// impl Responder for Echo {
///     fn greeting(&self) -> &str {
///         "Say something"
///     }
///
///     async fn respond(&self, utterance: &str) -> String {
///         utterance.to_string()
///     }
/// }
/// ```
#[async_trait]
pub trait Responder: Send + Sync {
    /// Message that opens every conversation
    fn greeting(&self) -> &str;

    /// Produce the reply for one user utterance
    async fn respond(&self, utterance: &str) -> String;
}

/// Case-insensitive, first-match-wins keyword classifier
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    book: ReplyBook,
}

impl KeywordResponder {
    pub fn new(book: ReplyBook) -> Self {
        Self { book }
    }

    /// Pick the reply for `utterance`. Total and deterministic.
    pub fn classify(&self, utterance: &str) -> &str {
        let lowered = utterance.to_lowercase();

        self.book
            .rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k.as_str())))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(self.book.fallback.as_str())
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(ReplyBook::builtin())
    }
}

#[async_trait]
impl Responder for KeywordResponder {
    fn greeting(&self) -> &str {
        &self.book.greeting
    }

    async fn respond(&self, utterance: &str) -> String {
        self.classify(utterance).to_string()
    }
}
