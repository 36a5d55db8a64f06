//! Outbound booking payload and ticket numbering.
//!
//! When a check-in completes, the kiosk renders a summary ticket and emits a
//! booking payload for the hospital booking queue. The payload shape is the
//! queue's contract; field names here are wire names, not display names.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::base::types::{CheckinState, Language, ServiceType};

/// Payload posted to the hospital booking queue when a check-in completes.
#[derive(Debug, Clone, Serialize)]
pub struct BookingPayload {
    pub action: &'static str,
    pub timestamp: String,
    pub source: String,
    pub language: Language,
    pub patient_data: PatientPayload,
    pub clinical: ClinicalPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientPayload {
    pub cccd: String,
    /// `manual_override` when the face scan produced no token.
    pub face_token: String,
    pub insurance_type: Option<ServiceType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClinicalPayload {
    pub symptoms: String,
    pub dept_code: Option<String>,
    pub dept_name: Option<String>,
    pub ai_confidence: Option<f32>,
}

impl BookingPayload {
    /// Assemble the payload from a completed check-in session.
    pub fn from_state(state: &CheckinState, language: Language, kiosk_id: &str, timestamp: DateTime<Utc>) -> Self {
        let patient = state.patient.as_ref();
        let recommendation = state.recommendation.as_ref();

        Self {
            action: "BOOKING_CREATE",
            timestamp: timestamp.to_rfc3339(),
            source: kiosk_id.to_string(),
            language,
            patient_data: PatientPayload {
                cccd: patient.and_then(|p| p.citizen_id.clone()).unwrap_or_default(),
                face_token: patient.and_then(|p| p.face_token.clone()).unwrap_or_else(|| "manual_override".to_string()),
                insurance_type: state.service_type,
            },
            clinical: ClinicalPayload {
                symptoms: state.symptoms.clone(),
                dept_code: recommendation.map(|r| r.dept_code.clone()),
                dept_name: recommendation.map(|r| r.dept_name.clone()),
                ai_confidence: recommendation.map(|r| r.confidence),
            },
        }
    }
}

/// Sequential ticket numbers for one kiosk process.
///
/// Resets when the kiosk restarts; uniqueness across kiosks comes from the
/// kiosk id on the payload, not from the ticket number.
pub struct TicketCounter(AtomicU32);

impl TicketCounter {
    pub fn new() -> Self {
        Self(AtomicU32::new(101))
    }

    pub fn next(&self) -> String {
        format!("A{}", self.0.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TicketCounter {
    fn default() -> Self {
        Self::new()
    }
}
