//! Library root for `checkin-kiosk`.
//!
//! Checkin-kiosk is an LLM-assisted patient check-in flow for a hospital
//! lobby kiosk designed to:
//! - Register a service type (fee-for-service or health insurance)
//! - Verify identity via a simulated document/face scan
//! - Triage free-text symptoms into a department recommendation
//! - Render a summary ticket and an outbound booking payload
//!
//! The triage step calls OpenAI with a schema-constrained response and
//! degrades to a fixed department when the call fails, so a patient is never
//! blocked on the AI service. The architecture is built around extensible
//! traits that allow for different implementations of each service.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the kiosk runtime:
/// - Creates the runtime context with LLM, scanner, and triage clients
/// - Starts the session loop that walks patients through the steps
pub async fn start(config: Config) -> Void {
    info!("Starting check-in kiosk ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
