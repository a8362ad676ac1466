//! Image-analysis capability behind the disease and pest identifiers.
//!
//! The only backend today is a randomized stub; a real model slots in
//! behind the same trait without touching the record log or the views.

pub mod disease;
pub mod pest;
pub mod stub;

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::store::{InvalidPayload, Payload, RecordLog, Storage, StreamConfig};
use crate::tools::Crop;

pub use stub::RandomStub;

pub const HISTORY_STREAM: &str = "disease_history";
pub const HISTORY_CAPACITY: usize = 10;
pub const HISTORY_DISPLAY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    Disease,
    Pest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRequest {
    pub crop: Crop,
    pub kind: ScanKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Band mapping used by the result view.
    pub fn from_confidence(confidence_pct: u8) -> Self {
        if confidence_pct > 90 {
            Severity::High
        } else if confidence_pct > 80 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnosis {
    pub label: &'static str,
    pub confidence_pct: u8,
    pub severity: Severity,
}

/// An analysis backend.
pub trait Classifier {
    /// Processing time for one request (simulated or real).
    fn latency(&self) -> Duration;
    fn classify(&mut self, request: &ScanRequest) -> Diagnosis;
}

/// Runs one analysis: a single pending delay, then the classification.
/// The `&mut` borrow keeps at most one analysis in flight per classifier.
pub async fn analyze<C: Classifier>(classifier: &mut C, request: &ScanRequest) -> Diagnosis {
    tokio::time::sleep(classifier.latency()).await;
    classifier.classify(request)
}

/// One saved scan result in the history stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    pub crop: Crop,
    pub kind: ScanKind,
    pub label: String,
    pub confidence_pct: u8,
    pub severity: Severity,
}

impl DiagnosisRecord {
    pub fn new(request: &ScanRequest, diagnosis: &Diagnosis) -> Self {
        Self {
            crop: request.crop,
            kind: request.kind,
            label: diagnosis.label.to_string(),
            confidence_pct: diagnosis.confidence_pct,
            severity: diagnosis.severity,
        }
    }
}

impl Payload for DiagnosisRecord {
    fn validate(&self) -> Result<(), InvalidPayload> {
        if self.label.trim().is_empty() {
            return Err(InvalidPayload::new("diagnosis label must not be empty"));
        }
        if self.confidence_pct > 100 {
            return Err(InvalidPayload::new("confidence is a percentage"));
        }
        Ok(())
    }

    fn metric(&self) -> Option<f64> {
        Some(f64::from(self.confidence_pct))
    }
}

pub fn open_history(storage: Arc<dyn Storage>) -> RecordLog<DiagnosisRecord> {
    RecordLog::open(
        StreamConfig::new(HISTORY_STREAM, HISTORY_CAPACITY).rounded_mean(),
        storage,
    )
}
