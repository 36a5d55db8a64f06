use chrono::Utc;
use tokio::io::AsyncBufRead;
use tracing::instrument;

use crate::{
    base::{
        i18n,
        types::{CheckinState, Language, ServiceType, Void},
    },
    runtime::Runtime,
    service::booking::{BookingPayload, TicketCounter},
};

use super::console::Console;

/// Summary step: render the ticket and the outbound booking payload.
#[instrument(skip_all)]
pub async fn handle<R>(runtime: &Runtime, console: &mut Console<R>, language: Language, state: &CheckinState, tickets: &TicketCounter) -> Void
where
    R: AsyncBufRead + Unpin,
{
    let t = i18n::strings(language);
    let ticket = tickets.next();

    console.say("");
    console.say(t.summary_success);
    console.say(&format!("{} #{}", t.ticket_number, ticket));

    let patient = state.patient.as_ref();
    console.say(&format!("{}: {}", t.patient, patient.and_then(|p| p.name.as_deref()).unwrap_or(t.guest)));
    if let Some(citizen_id) = patient.and_then(|p| p.citizen_id.as_deref()) {
        console.say(&format!("  CCCD: {citizen_id}"));
    }

    let service = match state.service_type {
        Some(ServiceType::Insurance) => t.type_insurance,
        _ => t.type_service,
    };
    console.say(&format!("{}: {}", t.type_label, service));

    if let Some(recommendation) = &state.recommendation {
        console.say(&format!("{}: {} ({})", t.dept, recommendation.dept_name, recommendation.dept_code));
        if recommendation.is_degraded() {
            console.say(t.degraded_notice);
        }
    }

    let payload = BookingPayload::from_state(state, language, &runtime.config.kiosk_id, Utc::now());
    console.say(t.payload_heading);
    console.say(&serde_json::to_string_pretty(&payload)?);

    console.prompt(t.next_patient).await?;

    Ok(())
}
