//! The triage recommender: free-text symptoms in, department recommendation out.
//!
//! This is the degradation boundary of the kiosk. Every failure of the
//! underlying model call — transport, timeout, refusal, malformed output —
//! is absorbed here and converted into the fixed per-language fallback, so
//! the check-in flow never stalls on the AI service. Callers distinguish a
//! degraded answer via [`Recommendation::is_degraded`].

use tracing::{info, instrument, warn};

use crate::{
    base::types::{Language, Recommendation, TriageContext, is_known_department},
    service::llm::LlmClient,
};

/// Stateless per call; each invocation is independent and side-effect-free
/// except for the outbound model request. Concurrent invocations are not
/// deduplicated — the caller disables re-triggering while a request is
/// outstanding.
#[derive(Clone)]
pub struct TriageRecommender {
    llm: LlmClient,
}

impl TriageRecommender {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Produce a department recommendation for free-text symptoms.
    ///
    /// Never fails. Model output is passed through unchanged, including
    /// confidence values outside 0-100 and department codes outside the
    /// catalog; the latter only logs a warning. On any error from the model
    /// call the fixed fallback for `language` is returned instead, carrying
    /// `confidence = 0`.
    #[instrument(skip_all, fields(language = %language))]
    pub async fn recommend(&self, symptoms: &str, language: Language) -> Recommendation {
        let context = TriageContext {
            symptoms: symptoms.to_string(),
            language,
        };

        match self.llm.get_triage_agent_response(&context).await {
            Ok(recommendation) => {
                if !is_known_department(&recommendation.dept_code) {
                    warn!("Model suggested a department outside the catalog: {}", recommendation.dept_code);
                }

                info!("Triage recommendation: {} (confidence {})", recommendation.dept_code, recommendation.confidence);

                recommendation
            }
            Err(err) => {
                warn!("Triage call failed, returning fallback: {err}");

                Recommendation::fallback(language)
            }
        }
    }
}
