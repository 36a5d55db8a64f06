//! Identity verification hardware abstraction.
//!
//! The kiosk verifies identity in two phases: a document scan (citizen ID
//! OCR) followed by a face scan matched against the document. Real OCR and
//! biometric matching are out of scope; the simulated scanner replays fixed
//! results after a configurable delay, mirroring the capture timing of the
//! kiosk camera.

use std::{ops::Deref, sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::instrument;

use crate::base::{
    config::Config,
    types::{PatientData, Res},
};

// Traits.

/// Generic identity scanner trait that hardware integrations must implement.
#[async_trait]
pub trait GenericIdentityScanner: Send + Sync + 'static {
    /// Scan the patient's identity document and extract its fields.
    async fn scan_document(&self) -> Res<PatientData>;

    /// Verify the patient's face against the scanned document.
    ///
    /// Returns the patient data enriched with the face token and the
    /// captured frame.
    async fn scan_face(&self, patient: &PatientData) -> Res<PatientData>;
}

// Structs.

/// Identity client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct IdentityClient {
    inner: Arc<dyn GenericIdentityScanner>,
}

impl Deref for IdentityClient {
    type Target = dyn GenericIdentityScanner;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl IdentityClient {
    pub fn new(inner: Arc<dyn GenericIdentityScanner>) -> Self {
        Self { inner }
    }

    pub fn simulated(config: &Config) -> Self {
        Self {
            inner: Arc::new(SimulatedScanner::new(config)),
        }
    }
}

/// Simulated scanner implementation.
pub struct SimulatedScanner {
    document_delay: Duration,
    face_delay: Duration,
}

impl SimulatedScanner {
    pub fn new(config: &Config) -> Self {
        Self {
            document_delay: Duration::from_millis(config.document_scan_delay_ms),
            face_delay: Duration::from_millis(config.face_scan_delay_ms),
        }
    }
}

#[async_trait]
impl GenericIdentityScanner for SimulatedScanner {
    #[instrument(name = "SimulatedScanner::scan_document", skip_all)]
    async fn scan_document(&self) -> Res<PatientData> {
        tokio::time::sleep(self.document_delay).await;

        Ok(PatientData {
            citizen_id: Some("001095012345".to_string()),
            name: Some("NGUYỄN VĂN A".to_string()),
            ..PatientData::default()
        })
    }

    #[instrument(name = "SimulatedScanner::scan_face", skip_all)]
    async fn scan_face(&self, patient: &PatientData) -> Res<PatientData> {
        tokio::time::sleep(self.face_delay).await;

        Ok(PatientData {
            face_token: Some("ft_8a7sd8f7a8sdf7".to_string()),
            image: Some("captured_frame_mock".to_string()),
            ..patient.clone()
        })
    }
}
