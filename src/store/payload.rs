use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::InvalidPayload;

/// Domain contract a record payload brings to its stream.
///
/// The validator is the per-tool predicate consulted by `append`; a
/// rejected payload never mutates the stream.
pub trait Payload: Clone + Serialize + DeserializeOwned {
    fn validate(&self) -> Result<(), InvalidPayload>;

    /// The numeric field aggregate statistics run over. `None` for
    /// payloads with no meaningful number (e.g. reminders).
    fn metric(&self) -> Option<f64> {
        None
    }
}
