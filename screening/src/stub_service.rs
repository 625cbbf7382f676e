//! Scoring service for exercising sessions without a backend.
//!
//! `StubScoringService` answers every submission with one pre-configured
//! reply and records what it was sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use screening::{StubReply, StubScoringService, SubmissionResult};
//!
//! let stub = StubScoringService::new(StubReply::Result(SubmissionResult::success("ok")));
//! let assessment = session.submit(&stub, "token").await?;
//!
//! assert_eq!(stub.calls(), 1);
//! assert_eq!(stub.last_token().as_deref(), Some("token"));
//! ```

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::{ApiError, ScoringService, SubmissionPayload, SubmissionResult};

/// The outcome a [`StubScoringService`] produces for every call.
#[derive(Debug, Clone)]
pub enum StubReply {
    Result(SubmissionResult),
    Application(String),
    Transport(u16, String),
    Io(String),
}

impl StubReply {
    fn to_outcome(&self) -> Result<SubmissionResult, ApiError> {
        match self {
            Self::Result(result) => Ok(result.clone()),
            Self::Application(reason) => Err(ApiError::Application(reason.clone())),
            Self::Transport(status, message) => Err(ApiError::transport(*status, message.clone())),
            Self::Io(message) => Err(ApiError::Io(anyhow::anyhow!("{message}"))),
        }
    }
}

#[derive(Debug)]
pub struct StubScoringService {
    reply: StubReply,
    delay: Option<Duration>,
    calls: AtomicUsize,
    completed: AtomicUsize,
    received: Mutex<Vec<(SubmissionPayload, String)>>,
}

impl StubScoringService {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Wait this long before replying, to simulate a slow backend.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Calls that have started.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Calls that have produced their reply.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<SubmissionPayload> {
        self.received
            .lock()
            .ok()?
            .last()
            .map(|(payload, _)| payload.clone())
    }

    pub fn last_token(&self) -> Option<String> {
        self.received
            .lock()
            .ok()?
            .last()
            .map(|(_, token)| token.clone())
    }
}

impl ScoringService for StubScoringService {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
        auth_token: &str,
    ) -> Result<SubmissionResult, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut received) = self.received.lock() {
            received.push((payload.clone(), auth_token.to_string()));
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.completed.fetch_add(1, Ordering::SeqCst);
        self.reply.to_outcome()
    }
}
