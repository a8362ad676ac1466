//! Bounded append-only record streams.
//!
//! # CAPACITY INVARIANT
//! A stream never holds more than its configured capacity. When an append
//! would exceed it, the **oldest** record is evicted first (FIFO), one at a
//! time, never more than necessary.
//!
//! # ORDER INVARIANT
//! Insertion order is authoritative. Identifiers are strictly increasing
//! within a stream and are never reused after deletion, so two appends in
//! the same millisecond still have a deterministic relative order.
//!
//! # DURABILITY
//! Every mutating operation serializes the full stream before returning.
//! Persistence failures are non-fatal: the in-memory effect stands for the
//! session, a warning is logged, and the log's `durable()` flag drops.
//! Corrupt or absent persisted state degrades to an empty stream on open.

pub mod error;
pub mod log;
pub mod payload;
pub mod record;
pub mod stats;
pub mod storage;

pub use error::{InvalidPayload, StorageError};
pub use log::{ListOrder, RecordLog, StreamConfig};
pub use payload::Payload;
pub use record::Record;
pub use stats::{MeanRounding, SampleStats};
pub use storage::{FileStorage, MemoryStorage, Storage};
