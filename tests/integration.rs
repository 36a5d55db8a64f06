#![cfg(test)]

use std::sync::Arc;

use async_trait::async_trait;
use checkin_kiosk::{
    base::{
        config::{Config, ConfigInner},
        types::{CheckinState, Language, PatientData, Recommendation, Res, ServiceType, TriageContext},
    },
    interaction::{self, console::Console},
    runtime::Runtime,
    service::{
        booking::TicketCounter,
        identity::{GenericIdentityScanner, IdentityClient},
        llm::{GenericLlmClient, LlmClient},
        triage::TriageRecommender,
    },
};
use mockall::mock;

// Mocks.

mock! {
    pub Llm {}

    #[async_trait]
    impl GenericLlmClient for Llm {
        async fn get_triage_agent_response(&self, context: &TriageContext) -> Res<Recommendation>;
    }
}

mock! {
    pub Scanner {}

    #[async_trait]
    impl GenericIdentityScanner for Scanner {
        async fn scan_document(&self) -> Res<PatientData>;
        async fn scan_face(&self, patient: &PatientData) -> Res<PatientData>;
    }
}

fn get_mock_scanner() -> MockScanner {
    let mut mock = MockScanner::new();

    mock.expect_scan_document().returning(|| {
        Ok(PatientData {
            citizen_id: Some("001095012345".to_string()),
            name: Some("NGUYỄN VĂN A".to_string()),
            ..PatientData::default()
        })
    });
    mock.expect_scan_face().returning(|patient| {
        Ok(PatientData {
            face_token: Some("ft_8a7sd8f7a8sdf7".to_string()),
            image: Some("captured_frame_mock".to_string()),
            ..patient.clone()
        })
    });

    mock
}

fn sample_recommendation() -> Recommendation {
    Recommendation {
        dept_code: "NOI_KHOA".to_string(),
        dept_name: "Nội Khoa Tổng Quát".to_string(),
        reasoning: "Triệu chứng tiêu hóa kèm sốt nhẹ, phù hợp sàng lọc nội khoa.".to_string(),
        confidence: 87.0,
    }
}

/// Helper function to set up a runtime over mocked services.
fn setup_runtime(llm: MockLlm, scanner: MockScanner) -> Runtime {
    let config = Config {
        inner: Arc::new(ConfigInner {
            openai_api_key: "test_key".to_string(),
            kiosk_id: "KIOSK_01".to_string(),
            ..Default::default()
        }),
    };

    let llm = LlmClient::new(Arc::new(llm));
    let identity = IdentityClient::new(Arc::new(scanner));
    let triage = TriageRecommender::new(llm.clone());

    Runtime { config, llm, identity, triage }
}

// Recommender contract.

#[tokio::test]
async fn recommend_passes_model_output_through_unchanged() {
    let mut llm = MockLlm::new();
    llm.expect_get_triage_agent_response().returning(|_| Ok(sample_recommendation()));

    let runtime = setup_runtime(llm, get_mock_scanner());

    let result = runtime.triage.recommend("đau bụng, sốt nhẹ", Language::Vi).await;

    assert_eq!(result, sample_recommendation());
    assert!(!result.is_degraded());
}

#[tokio::test]
async fn recommend_falls_back_on_transport_error() {
    let mut llm = MockLlm::new();
    llm.expect_get_triage_agent_response().returning(|_| Err(anyhow::anyhow!("connection refused")));

    let runtime = setup_runtime(llm, get_mock_scanner());

    let result = runtime.triage.recommend("chest pain", Language::En).await;

    assert_eq!(
        result,
        Recommendation {
            dept_code: "NOI_KHOA".to_string(),
            dept_name: "General Internal Medicine".to_string(),
            reasoning: "AI System busy, defaulting to General Internal Medicine.".to_string(),
            confidence: 0.0,
        }
    );
    assert!(result.is_degraded());
}

#[tokio::test]
async fn recommend_forwards_symptoms_and_language() {
    let mut llm = MockLlm::new();
    llm.expect_get_triage_agent_response()
        .withf(|context| context.symptoms == "đau bụng, sốt nhẹ" && context.language == Language::Vi)
        .returning(|_| Ok(sample_recommendation()));

    let runtime = setup_runtime(llm, get_mock_scanner());

    let result = runtime.triage.recommend("đau bụng, sốt nhẹ", Language::Vi).await;

    assert_eq!(result.confidence, 87.0);
}

#[tokio::test]
async fn recommend_is_deterministic_against_a_deterministic_stub() {
    let mut llm = MockLlm::new();
    llm.expect_get_triage_agent_response().times(2).returning(|_| Ok(sample_recommendation()));

    let runtime = setup_runtime(llm, get_mock_scanner());

    let first = runtime.triage.recommend("đau bụng, sốt nhẹ", Language::Vi).await;
    let second = runtime.triage.recommend("đau bụng, sốt nhẹ", Language::Vi).await;

    assert_eq!(first, second);
}

// Full session flow.

#[tokio::test]
async fn session_walks_the_four_steps_and_collects_state() {
    let mut llm = MockLlm::new();
    llm.expect_get_triage_agent_response()
        .withf(|context| context.language == Language::En)
        .returning(|_| {
            Ok(Recommendation {
                dept_code: "TIM_MACH".to_string(),
                dept_name: "Cardiology".to_string(),
                reasoning: "Chest pain warrants a cardiac work-up.".to_string(),
                confidence: 92.0,
            })
        });

    let runtime = setup_runtime(llm, get_mock_scanner());

    // Toggle to English, pick fee-for-service, scan twice, describe symptoms,
    // confirm the recommendation, dismiss the summary.
    let script = "en\n1\n\n\nchest pain\ny\n\n";
    let mut console = Console::new(script.as_bytes());
    let mut language = Language::Vi;
    let tickets = TicketCounter::new();

    let state: CheckinState = interaction::run_session(&runtime, &mut console, &mut language, &tickets).await.unwrap();

    assert_eq!(language, Language::En);
    assert_eq!(state.service_type, Some(ServiceType::Service));

    let patient = state.patient.unwrap();
    assert_eq!(patient.citizen_id.as_deref(), Some("001095012345"));
    assert_eq!(patient.face_token.as_deref(), Some("ft_8a7sd8f7a8sdf7"));

    assert_eq!(state.symptoms, "chest pain");
    assert_eq!(state.recommendation.unwrap().dept_code, "TIM_MACH");
}

#[tokio::test]
async fn session_completes_with_a_degraded_recommendation_when_the_model_is_down() {
    let mut llm = MockLlm::new();
    llm.expect_get_triage_agent_response().returning(|_| Err(anyhow::anyhow!("service unavailable")));

    let runtime = setup_runtime(llm, get_mock_scanner());

    // Insurance check-in, quick tag 4, accept the fallback.
    let script = "2\n\n\n4\ny\n\n";
    let mut console = Console::new(script.as_bytes());
    let mut language = Language::Vi;
    let tickets = TicketCounter::new();

    let state = interaction::run_session(&runtime, &mut console, &mut language, &tickets).await.unwrap();

    assert_eq!(state.service_type, Some(ServiceType::Insurance));
    assert_eq!(state.symptoms, "Đau ngực");

    let recommendation = state.recommendation.unwrap();
    assert!(recommendation.is_degraded());
    assert_eq!(recommendation, Recommendation::fallback(Language::Vi));
}

#[tokio::test]
async fn back_from_identity_returns_to_the_welcome_screen() {
    let mut llm = MockLlm::new();
    llm.expect_get_triage_agent_response().returning(|_| Ok(sample_recommendation()));

    let runtime = setup_runtime(llm, get_mock_scanner());

    // Enter identity, back out, re-select, then complete normally.
    let script = "1\nback\n2\n\n\nđau bụng, sốt nhẹ\ny\n\n";
    let mut console = Console::new(script.as_bytes());
    let mut language = Language::Vi;
    let tickets = TicketCounter::new();

    let state = interaction::run_session(&runtime, &mut console, &mut language, &tickets).await.unwrap();

    // The re-selection wins.
    assert_eq!(state.service_type, Some(ServiceType::Insurance));
    assert_eq!(state.recommendation.unwrap(), sample_recommendation());
}

#[tokio::test]
async fn empty_symptoms_are_rejected_before_the_model_is_called() {
    let mut llm = MockLlm::new();
    // Exactly one model call despite the empty first attempt.
    llm.expect_get_triage_agent_response().times(1).returning(|_| Ok(sample_recommendation()));

    let runtime = setup_runtime(llm, get_mock_scanner());

    let script = "1\n\n\n\nđau bụng, sốt nhẹ\ny\n\n";
    let mut console = Console::new(script.as_bytes());
    let mut language = Language::Vi;
    let tickets = TicketCounter::new();

    let state = interaction::run_session(&runtime, &mut console, &mut language, &tickets).await.unwrap();

    assert_eq!(state.symptoms, "đau bụng, sốt nhẹ");
}

#[tokio::test]
async fn session_errors_when_console_input_closes() {
    let llm = MockLlm::new();
    let runtime = setup_runtime(llm, get_mock_scanner());

    let mut console = Console::new(&b"1\n"[..]);
    let mut language = Language::Vi;
    let tickets = TicketCounter::new();

    // Input ends mid-identity; the session loop surfaces the closure.
    let result = interaction::run_session(&runtime, &mut console, &mut language, &tickets).await;

    assert!(result.is_err());
}
