use tokio::io::AsyncBufRead;
use tracing::instrument;

use crate::base::{
    i18n,
    types::{CheckinState, CheckinStep, Language, Res, ServiceType},
};

use super::console::Console;

/// Welcome screen: language toggle plus service type selection.
#[instrument(skip_all)]
pub async fn handle<R>(console: &mut Console<R>, language: &mut Language, state: &mut CheckinState) -> Res<CheckinStep>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let t = i18n::strings(*language);

        console.say("");
        console.say(t.app_name);
        console.say(t.welcome_title);
        console.say(&format!("  1. {}", t.type_service));
        console.say(&format!("  2. {}", t.type_insurance));
        console.say(t.language_hint);

        match console.read_line().await?.to_lowercase().as_str() {
            "1" => {
                state.service_type = Some(ServiceType::Service);
                return Ok(CheckinStep::Identity);
            }
            "2" => {
                state.service_type = Some(ServiceType::Insurance);
                return Ok(CheckinStep::Identity);
            }
            "vi" => *language = Language::Vi,
            "en" => *language = Language::En,
            _ => console.say(t.invalid_choice),
        }
    }
}
