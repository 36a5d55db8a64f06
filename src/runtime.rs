//! Runtime services and shared state for the check-in kiosk.

use tracing::{error, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    interaction::{self, console::Console},
    service::{booking::TicketCounter, identity::IdentityClient, llm::LlmClient, triage::TriageRecommender},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the LLM client, the identity scanner, the triage
/// recommender, and the configuration. It is designed to be trivially
/// cloneable, allowing it to be passed around without the need for `Arc` or
/// `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The LLM client instance.
    pub llm: LlmClient,
    /// The identity scanner instance.
    pub identity: IdentityClient,
    /// The triage recommender.
    pub triage: TriageRecommender,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the LLM client.
        let llm = LlmClient::openai(&config);

        // Initialize the identity scanner.
        let identity = IdentityClient::simulated(&config);

        // Initialize the triage recommender on top of the LLM client.
        let triage = TriageRecommender::new(llm.clone());

        Ok(Self { config, llm, identity, triage })
    }

    /// Run check-in sessions until console input closes.
    pub async fn start(&self) -> Void {
        let mut console = Console::stdin();
        let tickets = TicketCounter::new();
        let mut language = self.config.default_language;

        loop {
            if let Err(err) = interaction::run_session(self, &mut console, &mut language, &tickets).await {
                error!("Check-in session ended: {err}");
                return Ok(());
            }
        }
    }
}
