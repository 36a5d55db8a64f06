//! Step handling for the kiosk check-in flow.
//!
//! One handler module per step, each advancing the caller-owned
//! [`CheckinState`](crate::base::types::CheckinState) and returning the next
//! [`CheckinStep`](crate::base::types::CheckinStep):
//! - Service type selection (plus the language toggle)
//! - Identity verification via the scanner client
//! - Symptom triage via the recommender
//! - Summary ticket and outbound booking payload

pub mod console;
pub mod identity;
pub mod service_select;
pub mod summary;
pub mod triage;

use tokio::io::AsyncBufRead;
use tracing::instrument;

use crate::{
    base::types::{CheckinState, CheckinStep, Language, Res},
    runtime::Runtime,
    service::booking::TicketCounter,
};

use console::Console;

/// Drive one patient through the check-in steps.
///
/// Returns the completed state once the summary step has rendered; the
/// caller starts the next session with fresh state.
#[instrument(skip_all)]
pub async fn run_session<R>(runtime: &Runtime, console: &mut Console<R>, language: &mut Language, tickets: &TicketCounter) -> Res<CheckinState>
where
    R: AsyncBufRead + Unpin,
{
    let mut state = CheckinState::default();
    let mut step = CheckinStep::Welcome;

    loop {
        step = match step {
            CheckinStep::Welcome => service_select::handle(console, language, &mut state).await?,
            CheckinStep::Identity => identity::handle(runtime, console, *language, &mut state).await?,
            CheckinStep::Triage => triage::handle(runtime, console, *language, &mut state).await?,
            CheckinStep::Summary => {
                summary::handle(runtime, console, *language, &state, tickets).await?;
                return Ok(state);
            }
        };
    }
}
