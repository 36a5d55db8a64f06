//! Integration with Large Language Model services.
//!
//! This module provides a thin wrapper around LLM clients (e.g., OpenAI)
//! for turning free-text symptoms into a structured department
//! recommendation.
//!
//! The request carries a schema constraint forcing the four-field JSON
//! object, so the raw response is expected to already be well-formed; any
//! deviation surfaces as an error that the triage recommender converts to
//! its fallback.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::base::{
    config::Config,
    prompts,
    types::{Recommendation, Res, TriageContext},
};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::responses::{
        Content, CreateResponseArgs, Input, InputItem, InputMessageArgs, OutputContent, Response, ResponseFormatJsonSchema, Role, TextConfig, TextResponseFormat,
    },
};
use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the openai implementation.

impl LlmClient {
    pub fn openai(config: &Config) -> Self {
        let client = OpenAiLlmClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// OpenAI LLM client implementation.
#[derive(Clone)]
pub struct OpenAiLlmClient {
    client: Client<OpenAIConfig>,
    config: Config,
}

impl OpenAiLlmClient {
    /// Create a new OpenAI LLM client.
    #[instrument(name = "OpenAiLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        let cfg = OpenAIConfig::new().with_api_key(config.openai_api_key.clone());

        Self {
            client: Client::with_config(cfg),
            config: config.clone(),
        }
    }

    /// Build the triage input: the department catalog as allowed-answer
    /// context, the requested response language, and the raw symptom text.
    #[instrument(name = "OpenAiLlmClient::build_triage_input", skip_all)]
    fn build_triage_input(&self, context: &TriageContext) -> Res<Input> {
        Ok(Input::Items(vec![
            InputItem::Message(
                InputMessageArgs::default()
                    .role(Role::Developer)
                    .content(format!("## Department Catalog\n\n[{}]\n\n", prompts::department_catalog()))
                    .build()?,
            ),
            InputItem::Message(
                InputMessageArgs::default()
                    .role(Role::Developer)
                    .content(format!("## Response Language\n\n`{}`\n\n", context.language))
                    .build()?,
            ),
            InputItem::Message(
                InputMessageArgs::default()
                    .role(Role::User)
                    .content(format!("# Patient Symptoms\n\n{}\n\n", context.symptoms))
                    .build()?,
            ),
        ]))
    }

    /// Helper function to make OpenAI API calls with bounded retry and timeout handling.
    async fn call_openai_api(&self, request_builder: CreateResponseArgs) -> Res<Response> {
        // A single bounded retry; on the second failure the recommender falls back.
        const MAX_RETRIES: u32 = 1;
        const TIMEOUT: u64 = 30; // The kiosk is interactive, so fail fast.
        const RETRY_DELAY_MS: u64 = 500;

        let mut retries = 0;

        loop {
            let request = request_builder.build()?;
            let result = timeout(Duration::from_secs(TIMEOUT), self.client.responses().create(request)).await;

            match result {
                Ok(Ok(response)) => {
                    info!("OpenAI API call succeeded after {} attempts", retries + 1);
                    return Ok(response);
                }
                Ok(Err(err)) => {
                    if retries >= MAX_RETRIES {
                        return Err(anyhow::anyhow!("OpenAI API call failed after {MAX_RETRIES} retries: {err}"));
                    }
                    retries += 1;
                    warn!("OpenAI API call failed, retrying {retries}/{MAX_RETRIES}: {err}");

                    let delay = Duration::from_millis(RETRY_DELAY_MS * 2_u64.pow(retries - 1));
                    tokio::time::sleep(delay).await;
                }
                Err(_) => {
                    if retries >= MAX_RETRIES {
                        return Err(anyhow::anyhow!("OpenAI API call timed out after {MAX_RETRIES} attempts"));
                    }
                    retries += 1;
                    warn!("OpenAI API call timed out, retrying {retries}/{MAX_RETRIES}");

                    let delay = Duration::from_millis(RETRY_DELAY_MS * 2_u64.pow(retries - 1));
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

#[async_trait]
impl GenericLlmClient for OpenAiLlmClient {
    #[instrument(name = "OpenAiLlmClient::get_triage_agent_response", skip_all)]
    async fn get_triage_agent_response(&self, context: &TriageContext) -> Res<Recommendation> {
        let input = self.build_triage_input(context)?;

        // Schema-constrained output: the four recommendation fields, nothing else.
        let text_config = get_openai_text_config().clone();

        let mut request = CreateResponseArgs::default();
        request
            .instructions(self.config.triage_directive(context.language).to_string())
            .max_output_tokens(self.config.openai_max_tokens)
            .model(&self.config.openai_triage_model)
            .text(text_config)
            .input(input);

        // Add the temperature for the non-reasoning models.
        if self.config.openai_triage_model.starts_with("gpt") {
            request.temperature(self.config.openai_triage_temperature);
        }

        let response = self.call_openai_api(request).await?;

        parse_openai_response(&response)
    }
}

/// Parse the first text output of the response into a `Recommendation`.
#[instrument(skip_all)]
pub fn parse_openai_response(response: &Response) -> Res<Recommendation> {
    info!("LLM response has {} outputs.", response.output.len());

    for output in &response.output {
        match output {
            OutputContent::Message(message) => {
                for message_content in &message.content {
                    match message_content {
                        Content::OutputText(text) => {
                            return Ok(serde_json::from_str::<Recommendation>(&text.text)?);
                        }
                        Content::Refusal(reason) => {
                            return Err(anyhow::anyhow!("Request refused: {reason:#?}"));
                        }
                    }
                }
            }
            _ => {
                warn!("Unknown output: {output:#?}");
            }
        }
    }

    Err(anyhow::anyhow!("LLM response contained no recommendation output."))
}

// Statics.

static OPENAI_TEXT_CONFIG: OnceLock<TextConfig> = OnceLock::new();

fn get_openai_text_config() -> &'static TextConfig {
    OPENAI_TEXT_CONFIG.get_or_init(|| TextConfig {
        format: TextResponseFormat::JsonSchema(ResponseFormatJsonSchema {
            name: "DepartmentRecommendation".to_string(),
            description: Some("Structured department recommendation for patient triage.".to_string()),
            schema: Some(serde_json::json!({
                "type": "object",
                "properties": {
                    "deptCode": { "type": "string", "description": "Department code from the catalog (e.g. NOI_KHOA)." },
                    "deptName": { "type": "string", "description": "Department display name, in the requested language." },
                    "reasoning": { "type": "string", "description": "Short explanation for the patient, in the requested language." },
                    "confidence": { "type": "number", "description": "Prediction confidence, 0-100." }
                },
                "required": ["deptCode", "deptName", "reasoning", "confidence"],
                "additionalProperties": false
            })),
            strict: Some(true),
        }),
    })
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{
        config::ConfigInner,
        types::{DEPARTMENTS, Language},
    };

    fn create_test_config() -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                openai_api_key: "test_key".to_string(),
                openai_triage_model: "gpt-4.1-mini".to_string(),
                openai_triage_temperature: 0.0,
                openai_max_tokens: 200u32,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn triage_input_carries_catalog_language_and_symptoms() {
        let config = create_test_config();
        let client = OpenAiLlmClient::new(&config);
        let context = TriageContext {
            symptoms: "đau bụng, sốt nhẹ".to_string(),
            language: Language::Vi,
        };

        let input = client.build_triage_input(&context).unwrap();

        let Input::Items(items) = input else {
            panic!("expected itemized input");
        };
        assert_eq!(items.len(), 3);

        let serialized = serde_json::to_string(&items).unwrap();
        assert!(serialized.contains("đau bụng, sốt nhẹ"));
        assert!(serialized.contains("`vi`"));
        for department in DEPARTMENTS {
            assert!(serialized.contains(department.code));
        }
    }

    #[test]
    fn text_config_constrains_the_four_fields() {
        let TextResponseFormat::JsonSchema(schema) = &get_openai_text_config().format else {
            panic!("expected a JSON schema response format");
        };

        assert_eq!(schema.strict, Some(true));

        let required = schema.schema.as_ref().unwrap()["required"].as_array().unwrap();
        let required = required.iter().map(|v| v.as_str().unwrap()).collect::<Vec<_>>();
        assert_eq!(required, vec!["deptCode", "deptName", "reasoning", "confidence"]);
    }

    #[test]
    fn recommendation_parses_from_schema_shaped_text() {
        let text = r#"{"deptCode":"TIM_MACH","deptName":"Tim Mạch","reasoning":"Đau ngực.","confidence":91}"#;

        let rec = serde_json::from_str::<Recommendation>(text).unwrap();

        assert_eq!(rec.dept_code, "TIM_MACH");
        assert_eq!(rec.confidence, 91.0);
    }

    /// Build a `Response` carrying the given output items.
    fn response_fixture(output: serde_json::Value) -> Response {
        serde_json::from_value(serde_json::json!({
            "created_at": 0,
            "id": "resp_test",
            "model": "gpt-4.1-mini",
            "object": "response",
            "status": "completed",
            "output": output,
        }))
        .unwrap()
    }

    fn message_fixture(content: serde_json::Value) -> serde_json::Value {
        serde_json::json!([{
            "type": "message",
            "id": "msg_test",
            "role": "assistant",
            "status": "completed",
            "content": content,
        }])
    }

    #[test]
    fn well_formed_output_text_parses_into_a_recommendation() {
        let response = response_fixture(message_fixture(serde_json::json!([{
            "type": "output_text",
            "annotations": [],
            "text": r#"{"deptCode":"NOI_KHOA","deptName":"Nội Khoa Tổng Quát","reasoning":"Triệu chứng tiêu hóa.","confidence":87}"#,
        }])));

        let rec = parse_openai_response(&response).unwrap();

        assert_eq!(rec.dept_code, "NOI_KHOA");
        assert_eq!(rec.confidence, 87.0);
    }

    #[test]
    fn unparsable_output_text_is_an_error() {
        let response = response_fixture(message_fixture(serde_json::json!([{
            "type": "output_text",
            "annotations": [],
            "text": "Sorry, I cannot pick a department for that.",
        }])));

        assert!(parse_openai_response(&response).is_err());
    }

    #[test]
    fn empty_output_is_an_error() {
        let response = response_fixture(serde_json::json!([]));

        assert!(parse_openai_response(&response).is_err());
    }

    #[test]
    fn refusal_is_an_error() {
        let response = response_fixture(message_fixture(serde_json::json!([{
            "type": "refusal",
            "refusal": "I cannot help with that.",
        }])));

        assert!(parse_openai_response(&response).is_err());
    }
}
