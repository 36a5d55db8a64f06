pub mod openai;

use crate::base::types::{Recommendation, Res, TriageContext};
use async_trait::async_trait;
use std::ops::Deref;
use std::sync::Arc;

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// This trait defines the single model interaction the kiosk needs: turning
/// a triage context into a structured department recommendation. Implementing
/// it allows different LLM providers to back the kiosk, and lets tests swap
/// in deterministic stubs.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Generate a department recommendation from the triage agent.
    ///
    /// Errors here are transport- or shape-level (network failure, timeout,
    /// refusal, unparsable output). Domain validity of the returned fields is
    /// deliberately not checked at this layer.
    async fn get_triage_agent_response(&self, context: &TriageContext) -> Res<Recommendation>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}
