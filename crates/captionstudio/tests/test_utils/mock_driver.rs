//! Scripted [`GenerationDriver`] for tests.

use async_trait::async_trait;
use captionstudio_core::{ModelTier, StructuredRequest};
use captionstudio_error::{GenerationError, GenerationErrorKind};
use captionstudio_interface::GenerationDriver;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock does when called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this text
    Respond(String),
    /// Fail with this error kind
    Fail(GenerationErrorKind),
}

/// Driver that replays a fixed behavior and records every request.
#[derive(Debug)]
pub struct MockDriver {
    behavior: Mutex<MockBehavior>,
    calls: AtomicUsize,
    requests: Mutex<Vec<StructuredRequest>>,
}

#[allow(dead_code)]
impl MockDriver {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Driver that answers with `text`.
    pub fn responding(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Respond(text.into()))
    }

    /// Driver that fails with `kind`.
    pub fn failing(kind: GenerationErrorKind) -> Self {
        Self::new(MockBehavior::Fail(kind))
    }

    /// Change what later calls do.
    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().expect("behavior lock poisoned") = behavior;
    }

    /// Number of calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most recent request.
    pub fn last_request(&self) -> Option<StructuredRequest> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .last()
            .cloned()
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());

        let behavior = self.behavior.lock().expect("behavior lock poisoned").clone();
        match behavior {
            MockBehavior::Respond(text) => Ok(text),
            MockBehavior::Fail(kind) => Err(GenerationError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Standard => "mock-standard",
            ModelTier::Enhanced => "mock-enhanced",
        }
    }
}
