//! Chat widget state
//!
//! Wraps a [`ChatEngine`] with the bits of state the floating chat window
//! needs: whether it is open, the input buffer, and the send button.

use crate::conversation::Message;
use crate::core::{ChatEngine, SubmitOutcome};

pub struct ChatWidget {
    engine: ChatEngine,
    open: bool,
    input: String,
}

impl ChatWidget {
    pub fn new(engine: ChatEngine) -> Self {
        Self {
            engine,
            open: false,
            input: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the window. The transcript survives either way.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the send button is enabled
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty() && !self.engine.is_pending()
    }

    /// Whether to show the typing indicator
    pub fn typing(&self) -> bool {
        self.engine.is_pending()
    }

    /// Submit the input buffer; it is cleared only if the engine took it
    pub async fn send(&mut self) -> SubmitOutcome {
        let outcome = self.engine.submit(&self.input).await;
        if outcome.is_accepted() {
            self.input.clear();
        }
        outcome
    }

    pub async fn transcript(&self) -> Vec<Message> {
        self.engine.transcript().await
    }

    pub fn engine(&self) -> &ChatEngine {
        &self.engine
    }

    /// End the widget session
    pub async fn end_session(&mut self) {
        self.open = false;
        self.engine.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::replies::builtin;
    use crate::core::KeywordResponder;
    use std::sync::Arc;
    use std::time::Duration;

    fn widget() -> ChatWidget {
        let engine = ChatEngine::new(
            Arc::new(KeywordResponder::default()),
            Duration::from_millis(1000),
        );
        ChatWidget::new(engine)
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_keeps_transcript() {
        let mut widget = widget();
        assert!(!widget.is_open());
        assert!(widget.toggle());

        widget.set_input("commercial");
        widget.send().await;
        widget.engine().wait_for_reply().await;

        assert!(!widget.toggle());
        assert!(widget.toggle());
        assert_eq!(widget.transcript().await.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_clears_input_when_accepted() {
        let mut widget = widget();

        widget.set_input("Any offices for lease?");
        assert!(widget.can_send());

        let outcome = widget.send().await;
        assert_eq!(outcome, SubmitOutcome::Accepted(2));
        assert_eq!(widget.input(), "");
        assert!(widget.typing());

        widget.engine().wait_for_reply().await;
        assert!(!widget.typing());

        let transcript = widget.transcript().await;
        assert_eq!(transcript[2].text, builtin::COMMERCIAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sent_text_kept_as_typed() {
        let mut widget = widget();

        widget.set_input("  villa near the beach  ");
        assert!(widget.can_send());
        widget.send().await;

        let transcript = widget.transcript().await;
        assert_eq!(transcript[1].text, "  villa near the beach  ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_cannot_send() {
        let mut widget = widget();

        widget.set_input("   ");
        assert!(!widget.can_send());
        assert_eq!(widget.send().await, SubmitOutcome::Ignored);
        assert_eq!(widget.input(), "   ");
        assert!(!widget.typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_kept_while_busy() {
        let mut widget = widget();

        widget.set_input("villa");
        widget.send().await;

        widget.set_input("booking");
        assert!(!widget.can_send());
        assert_eq!(widget.send().await, SubmitOutcome::Busy);
        assert_eq!(widget.input(), "booking");

        widget.engine().wait_for_reply().await;
        assert!(widget.can_send());
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_session() {
        let mut widget = widget();
        widget.toggle();

        widget.set_input("price");
        widget.send().await;
        widget.end_session().await;

        assert!(!widget.is_open());
        assert!(!widget.typing());
    }
}
