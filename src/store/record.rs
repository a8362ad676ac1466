use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted observation: an opaque domain payload plus the identity
/// and creation time the log assigned at insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<P> {
    /// Stream-unique, strictly increasing, never reused after deletion.
    pub id: u64,
    /// Serialized as an ISO-8601 string.
    pub timestamp: DateTime<Utc>,
    pub payload: P,
}
