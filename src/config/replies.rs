//! Reply book: the ordered keyword table behind the assistant
//!
//! The built-in book ships with the binary. A custom book can be loaded
//! from a TOML file.
//!
//! # Example Reply Book
//!
//! ```toml
//! greeting = "Welcome! Looking for a new home?"
//! fallback = "I can help with villas and apartments."
//!
//! [[rules]]
//! keywords = ["villa", "house"]
//! reply = "Our villas start from $1.2M."
//!
//! [[rules]]
//! keywords = ["apartment", "flat"]
//! reply = "Apartments range from $300K to $2M."
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// One keyword group and the reply it triggers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyRule {
    /// Substrings to look for, matched case-insensitively
    pub keywords: Vec<String>,

    /// Reply sent when any keyword matches
    pub reply: String,
}

impl ReplyRule {
    pub fn new(keywords: &[&str], reply: impl Into<String>) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            reply: reply.into(),
        }
    }
}

/// Priority-ordered reply rules plus the greeting and fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyBook {
    /// Seeded assistant message for a new conversation
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Reply when no rule matches
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Rules in priority order; the first match wins
    #[serde(default)]
    pub rules: Vec<ReplyRule>,
}

fn default_greeting() -> String {
    builtin::GREETING.to_string()
}

fn default_fallback() -> String {
    builtin::FALLBACK.to_string()
}

impl ReplyBook {
    /// The brand's canned replies
    pub fn builtin() -> Self {
        Self {
            greeting: default_greeting(),
            fallback: default_fallback(),
            rules: vec![
                ReplyRule::new(&["villa", "house"], builtin::VILLA),
                ReplyRule::new(&["apartment", "flat"], builtin::APARTMENT),
                ReplyRule::new(&["commercial", "office"], builtin::COMMERCIAL),
                ReplyRule::new(&["investment", "roi"], builtin::INVESTMENT),
                ReplyRule::new(&["price", "budget"], builtin::PRICE),
                ReplyRule::new(&["location", "area"], builtin::LOCATION),
                ReplyRule::new(&["booking", "visit", "appointment"], builtin::BOOKING),
            ],
        }
    }

    /// Parse a reply book from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ReplyBookError> {
        let book: ReplyBook = toml::from_str(content)?;
        book.normalized()
    }

    /// Load a reply book from a TOML file
    pub async fn from_file(path: &Path) -> Result<Self, ReplyBookError> {
        let content = fs::read_to_string(path).await?;
        let book = Self::from_str(&content)?;

        tracing::info!(
            path = %path.display(),
            rules = book.rules.len(),
            "Loaded reply book"
        );
        Ok(book)
    }

    // Keywords are stored lower-case so matching only lowers the input.
    fn normalized(mut self) -> Result<Self, ReplyBookError> {
        if self.rules.is_empty() {
            return Err(ReplyBookError::Validation(
                "reply book has no rules".to_string(),
            ));
        }

        for (index, rule) in self.rules.iter_mut().enumerate() {
            if rule.keywords.is_empty() {
                return Err(ReplyBookError::Validation(format!(
                    "rule {} has no keywords",
                    index + 1
                )));
            }
            if rule.reply.trim().is_empty() {
                return Err(ReplyBookError::Validation(format!(
                    "rule {} has an empty reply",
                    index + 1
                )));
            }
            for keyword in rule.keywords.iter_mut() {
                if keyword.trim().is_empty() {
                    return Err(ReplyBookError::Validation(format!(
                        "rule {} has an empty keyword",
                        index + 1
                    )));
                }
                *keyword = keyword.to_lowercase();
            }
        }

        if self.fallback.trim().is_empty() {
            return Err(ReplyBookError::Validation(
                "fallback reply is empty".to_string(),
            ));
        }

        Ok(self)
    }
}

impl Default for ReplyBook {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Errors from reply book loading
#[derive(Debug, thiserror::Error)]
pub enum ReplyBookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Built-in replies that don't require files
pub mod builtin {
    pub const GREETING: &str = "Hello! I'm your real estate assistant. How can I help you find the perfect property today?";

    pub const VILLA: &str = "I found several beautiful villas for you! We have luxury villas starting from $1.2M in premium locations. Would you like to see properties in a specific area?";

    pub const APARTMENT: &str = "Great choice! Our apartment collection includes modern units from $300K to $2M. Are you looking for a specific number of bedrooms?";

    pub const COMMERCIAL: &str = "We have excellent commercial properties available! From office spaces to retail locations. What type of commercial property interests you?";

    pub const INVESTMENT: &str = "Our investment properties offer excellent ROI potential! Average returns range from 8-15% annually. Would you like to see our investment calculator?";

    pub const PRICE: &str = "I can help you find properties within your budget! What's your price range? We have options from $200K to $50M+";

    pub const LOCATION: &str = "Location is key! We have properties in premium areas including downtown, beachfront, and suburban locations. Which area interests you most?";

    pub const BOOKING: &str = "I'd be happy to help you schedule a property visit! You can book directly through our booking page or I can connect you with one of our agents.";

    /// Generic help prompt when nothing matches
    pub const FALLBACK: &str = "Thank you for your question! I can help you with property searches, pricing information, location details, and booking visits. What specific information are you looking for?";
}
