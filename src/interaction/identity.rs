use tokio::io::AsyncBufRead;
use tracing::instrument;

use crate::{
    base::{
        i18n,
        types::{CheckinState, CheckinStep, Language, Res},
    },
    runtime::Runtime,
};

use super::console::Console;

/// Identity step: document scan, then face verification.
#[instrument(skip_all)]
pub async fn handle<R>(runtime: &Runtime, console: &mut Console<R>, language: Language, state: &mut CheckinState) -> Res<CheckinStep>
where
    R: AsyncBufRead + Unpin,
{
    let t = i18n::strings(language);

    console.say("");
    console.say(t.identity_title);

    if console.prompt(t.document_prompt).await?.eq_ignore_ascii_case(t.back_hint) {
        return Ok(CheckinStep::Welcome);
    }

    console.say(t.document_scanning);
    let document = runtime.identity.scan_document().await?;

    console.say(&format!(
        "{} {} - {}",
        t.recognized,
        document.name.as_deref().unwrap_or(t.guest),
        document.citizen_id.as_deref().unwrap_or("-"),
    ));

    if console.prompt(t.face_prompt).await?.eq_ignore_ascii_case(t.back_hint) {
        return Ok(CheckinStep::Welcome);
    }

    console.say(t.face_scanning);
    let verified = runtime.identity.scan_face(&document).await?;
    console.say(t.verified);

    state.patient = Some(verified);

    Ok(CheckinStep::Triage)
}
