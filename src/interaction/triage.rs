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

/// Triage step: collect symptoms, run the recommender, confirm the result.
///
/// Empty input is rejected before the recommender is called; the loading
/// state lives here, so re-triggering while a request is outstanding is not
/// possible from this front end.
#[instrument(skip_all)]
pub async fn handle<R>(runtime: &Runtime, console: &mut Console<R>, language: Language, state: &mut CheckinState) -> Res<CheckinStep>
where
    R: AsyncBufRead + Unpin,
{
    let t = i18n::strings(language);

    console.say("");
    console.say(t.triage_title);
    for (index, tag) in t.quick_tags.iter().enumerate() {
        console.say(&format!("  {}. {tag}", index + 1));
    }

    loop {
        let input = console.prompt(t.triage_prompt).await?;

        if input.eq_ignore_ascii_case(t.back_hint) {
            return Ok(CheckinStep::Identity);
        }

        // A bare digit selects a quick tag.
        let symptoms = match input.parse::<usize>() {
            Ok(n) if (1..=t.quick_tags.len()).contains(&n) => t.quick_tags[n - 1].to_string(),
            _ => input,
        };

        if symptoms.trim().is_empty() {
            console.say(t.empty_symptoms);
            continue;
        }

        console.say(t.analyzing);
        let recommendation = runtime.triage.recommend(&symptoms, language).await;

        console.say(&format!("{} {} ({})", t.suggested_dept, recommendation.dept_name, recommendation.dept_code));
        console.say(&format!("  {}", recommendation.reasoning));
        console.say(&format!("  {} {:.0}/100", t.confidence, recommendation.confidence));

        if recommendation.is_degraded() {
            console.say(t.degraded_notice);
        }

        if console.prompt(t.confirm_prompt).await?.eq_ignore_ascii_case("y") {
            state.symptoms = symptoms;
            state.recommendation = Some(recommendation);
            return Ok(CheckinStep::Summary);
        }
    }
}
