//! Common types and result handling for the check-in kiosk.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The error type used throughout the application.
pub type Err = anyhow::Error;
/// Result alias over [`Err`].
pub type Res<T> = Result<T, Err>;
/// Result alias for operations with no value.
pub type Void = Res<()>;

/// Kiosk display and model-output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Vietnamese (the kiosk default).
    #[default]
    Vi,
    /// English.
    En,
}

impl Language {
    /// The lowercase language code (`vi` / `en`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the static department catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Department {
    /// Stable identifier, e.g. `NOI_KHOA`.
    pub code: &'static str,
    /// Display label, in Vietnamese.
    pub name: &'static str,
}

/// The hospital department catalog. Static reference data; never mutated.
pub const DEPARTMENTS: [Department; 8] = [
    Department { code: "NOI_KHOA", name: "Nội Khoa Tổng Quát" },
    Department { code: "NGOAI_KHOA", name: "Ngoại Khoa" },
    Department { code: "TIM_MACH", name: "Tim Mạch" },
    Department { code: "NHI_KHOA", name: "Nhi Khoa" },
    Department { code: "TAI_MUI_HONG", name: "Tai Mũi Họng" },
    Department { code: "DA_LIEU", name: "Da Liễu" },
    Department { code: "THAN_KINH", name: "Thần Kinh" },
    Department { code: "CHAN_THUONG", name: "Chấn Thương Chỉnh Hình" },
];

/// Whether a department code belongs to the catalog.
///
/// The upstream model is asked to answer from the catalog but is not trusted
/// to; callers must not assume membership.
pub fn is_known_department(code: &str) -> bool {
    DEPARTMENTS.iter().any(|d| d.code == code)
}

/// Department code carried by the degraded fallback recommendation.
pub const FALLBACK_DEPT_CODE: &str = "NOI_KHOA";

/// A structured department recommendation, either model-produced or the
/// fixed fallback. Immutable after creation; owned by the caller that
/// triggered the request.
///
/// Field names follow the wire contract of the triage schema (`deptCode`,
/// `deptName`, `reasoning`, `confidence`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Department code, expected (but not guaranteed) to be from the catalog.
    pub dept_code: String,
    /// Department display name, in the requested language.
    pub dept_name: String,
    /// Short explanation for the patient, in the requested language.
    pub reasoning: String,
    /// 0-100 by schema contract, but out-of-range values from the model are
    /// passed through rather than rejected.
    pub confidence: f32,
}

impl Recommendation {
    /// The deterministic fallback returned when the triage call fails.
    ///
    /// Always carries `confidence = 0`, which callers may use as the signal
    /// that the result is a degraded, non-AI answer.
    pub fn fallback(language: Language) -> Self {
        match language {
            Language::Vi => Self {
                dept_code: FALLBACK_DEPT_CODE.to_string(),
                dept_name: "Nội Khoa Tổng Quát".to_string(),
                reasoning: "Hệ thống AI đang bận, chuyển về nội khoa để sàng lọc.".to_string(),
                confidence: 0.0,
            },
            Language::En => Self {
                dept_code: FALLBACK_DEPT_CODE.to_string(),
                dept_name: "General Internal Medicine".to_string(),
                reasoning: "AI System busy, defaulting to General Internal Medicine.".to_string(),
                confidence: 0.0,
            },
        }
    }

    /// Whether this recommendation is the degraded fallback rather than a
    /// model-produced answer.
    pub fn is_degraded(&self) -> bool {
        self.confidence == 0.0 && self.dept_code == FALLBACK_DEPT_CODE
    }
}

/// Service types offered on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    /// Fee-for-service visit.
    #[serde(rename = "DichVu")]
    Service,
    /// Health insurance (BHYT) visit.
    #[serde(rename = "BHYT")]
    Insurance,
}

/// Identity data accumulated across the document and face scan phases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientData {
    /// Citizen ID (CCCD) number from the document scan.
    pub citizen_id: Option<String>,
    /// Full name from the document scan.
    pub name: Option<String>,
    /// Token issued by the face verification.
    pub face_token: Option<String>,
    /// Captured frame from the face scan.
    pub image: Option<String>,
}

/// The linear check-in step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinStep {
    /// Service type selection (and the language toggle).
    Welcome,
    /// Document and face scan.
    Identity,
    /// Symptom collection and the recommendation.
    Triage,
    /// Ticket and booking payload.
    Summary,
}

/// Caller-owned state accumulated over one check-in session.
#[derive(Debug, Clone, Default)]
pub struct CheckinState {
    /// Service type picked on the welcome screen.
    pub service_type: Option<ServiceType>,
    /// Verified identity data.
    pub patient: Option<PatientData>,
    /// Free-text symptom description, as confirmed by the patient.
    pub symptoms: String,
    /// The confirmed department recommendation.
    pub recommendation: Option<Recommendation>,
}

/// Request context handed to the triage agent.
#[derive(Debug, Clone)]
pub struct TriageContext {
    /// Free-text symptom description.
    pub symptoms: String,
    /// Language for the directive and the model's output.
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_uses_wire_field_names() {
        let rec = Recommendation {
            dept_code: "TIM_MACH".to_string(),
            dept_name: "Tim Mạch".to_string(),
            reasoning: "Đau ngực kéo dài.".to_string(),
            confidence: 91.0,
        };

        let value = serde_json::to_value(&rec).unwrap();

        assert_eq!(value["deptCode"], "TIM_MACH");
        assert_eq!(value["deptName"], "Tim Mạch");
        assert_eq!(value["reasoning"], "Đau ngực kéo dài.");
        assert_eq!(value["confidence"], 91.0);
    }

    #[test]
    fn fallback_is_degraded_in_both_languages() {
        assert!(Recommendation::fallback(Language::Vi).is_degraded());
        assert!(Recommendation::fallback(Language::En).is_degraded());
    }

    #[test]
    fn model_result_with_confidence_is_not_degraded() {
        let mut rec = Recommendation::fallback(Language::Vi);
        rec.confidence = 87.0;
        assert!(!rec.is_degraded());
    }

    #[test]
    fn fallback_department_is_in_the_catalog() {
        assert!(is_known_department(FALLBACK_DEPT_CODE));
        assert!(!is_known_department("KHOA_LA"));
    }

    #[test]
    fn service_type_serializes_to_booking_codes() {
        assert_eq!(serde_json::to_value(ServiceType::Service).unwrap(), "DichVu");
        assert_eq!(serde_json::to_value(ServiceType::Insurance).unwrap(), "BHYT");
    }
}
