//! Conversation engine
//!
//! The ChatEngine owns one widget session's transcript. It:
//! 1. Accepts a user utterance and appends it immediately
//! 2. Marks a reply as pending
//! 3. Schedules the assistant's reply after a fixed delay
//! 4. Appends the reply and clears the pending flag
//!
//! Only one reply can be outstanding at a time; submissions made while a
//! reply is pending are refused.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use uuid::Uuid;

use crate::conversation::{Message, Transcript};

use super::responder::Responder;

/// What happened to a submitted utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Appended as the message with this id; a reply is on its way
    Accepted(u64),

    /// Empty or whitespace-only input, nothing changed
    Ignored,

    /// A reply is still pending, nothing changed
    Busy,

    /// The conversation was closed, nothing changed
    Closed,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

struct EngineState {
    transcript: Transcript,
    in_flight: Option<JoinHandle<()>>,
    closed: bool,
}

struct Inner {
    id: Uuid,
    responder: Arc<dyn Responder>,
    delay: Duration,
    state: Mutex<EngineState>,
    pending: watch::Sender<bool>,
}

/// The conversation engine for one widget session
pub struct ChatEngine {
    inner: Arc<Inner>,
}

impl ChatEngine {
    /// Create an engine whose transcript opens with the responder's greeting
    pub fn new(responder: Arc<dyn Responder>, delay: Duration) -> Self {
        let transcript = Transcript::with_greeting(responder.greeting());
        let id = transcript.id;
        let (pending, _) = watch::channel(false);

        tracing::debug!(conversation = %id, "Conversation started");

        Self {
            inner: Arc::new(Inner {
                id,
                responder,
                delay,
                state: Mutex::new(EngineState {
                    transcript,
                    in_flight: None,
                    closed: false,
                }),
                pending,
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Submit a user utterance
    pub async fn submit(&self, utterance: &str) -> SubmitOutcome {
        if utterance.trim().is_empty() {
            tracing::debug!(conversation = %self.inner.id, "Ignored empty input");
            return SubmitOutcome::Ignored;
        }

        let mut state = self.inner.state.lock().await;

        if state.closed {
            return SubmitOutcome::Closed;
        }
        if state.in_flight.is_some() {
            tracing::debug!(conversation = %self.inner.id, "Reply pending, refusing input");
            return SubmitOutcome::Busy;
        }

        let id = state.transcript.add_user(utterance);
        self.inner.pending.send_replace(true);

        // Deadline is fixed here so a late first poll doesn't stretch the delay.
        let deadline = Instant::now() + self.inner.delay;
        let inner = Arc::clone(&self.inner);
        let utterance = utterance.to_string();
        state.in_flight = Some(tokio::spawn(async move {
            inner.deliver_reply(utterance, deadline).await;
        }));

        tracing::info!(conversation = %self.inner.id, message = id, "Accepted user message");
        SubmitOutcome::Accepted(id)
    }

    /// Snapshot of the transcript in display order
    pub async fn transcript(&self) -> Vec<Message> {
        self.inner.state.lock().await.transcript.messages().to_vec()
    }

    /// Whether an assistant reply is being composed
    pub fn is_pending(&self) -> bool {
        *self.inner.pending.borrow()
    }

    /// Watch the pending flag, e.g. to drive a typing indicator
    ///
    /// If the engine is dropped mid-reply, subscribers see `false` before
    /// the channel closes.
    pub fn subscribe_pending(&self) -> watch::Receiver<bool> {
        self.inner.pending.subscribe()
    }

    /// Wait until no reply is pending
    pub async fn wait_for_reply(&self) {
        let mut pending = self.inner.pending.subscribe();
        // The sender lives in `inner`, which we hold.
        let _ = pending.wait_for(|pending| !*pending).await;
    }

    /// End the conversation, dropping any reply still in flight
    pub async fn close(&self) {
        let mut state = self.inner.state.lock().await;
        state.closed = true;

        if let Some(handle) = state.in_flight.take() {
            handle.abort();
            tracing::info!(conversation = %self.inner.id, "Dropped pending reply");
        }
        self.inner.pending.send_replace(false);
    }
}

impl Drop for ChatEngine {
    fn drop(&mut self) {
        match self.inner.state.try_lock() {
            Ok(mut state) => {
                if let Some(handle) = state.in_flight.take() {
                    handle.abort();
                    self.inner.pending.send_replace(false);
                }
            }
            // The reply task holds the lock and clears the flag itself.
            Err(_) => tracing::debug!(
                conversation = %self.inner.id,
                "Reply being appended, abort skipped on drop"
            ),
        }
    }
}

impl Inner {
    async fn deliver_reply(&self, utterance: String, deadline: Instant) {
        sleep_until(deadline).await;

        let reply = self.responder.respond(&utterance).await;

        let mut state = self.state.lock().await;
        let id = state.transcript.add_assistant(&reply);
        state.in_flight = None;
        self.pending.send_replace(false);

        tracing::debug!(conversation = %self.id, message = id, "Appended assistant reply");
    }
}
