//! Conversation engine components
//!
//! This module contains the reply scheduling and reply selection logic
//! behind the property assistant.

mod chat;
mod responder;

pub use chat::{ChatEngine, SubmitOutcome};
pub use responder::{KeywordResponder, Responder};
