use std::collections::VecDeque;
use std::sync::Arc;

use chrono::Utc;

use super::error::{InvalidPayload, StorageError};
use super::payload::Payload;
use super::record::Record;
use super::stats::{self, MeanRounding, SampleStats};
use super::storage::Storage;

/// Identity and retention policy of one stream.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Stable persisted key.
    pub name: String,
    /// Maximum retained records. Exceeding appends evict oldest-first.
    pub capacity: usize,
    pub rounding: MeanRounding,
}

impl StreamConfig {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity: capacity.max(1),
            rounding: MeanRounding::Exact,
        }
    }

    /// Display-oriented streams round the mean to the nearest integer.
    pub fn rounded_mean(mut self) -> Self {
        self.rounding = MeanRounding::NearestInteger;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// A named, capacity-bounded, insertion-ordered record stream with durable
/// persistence. Oldest records live at the head.
pub struct RecordLog<P> {
    config: StreamConfig,
    records: VecDeque<Record<P>>,
    storage: Arc<dyn Storage>,
    next_id: u64,
    durable: bool,
}

impl<P: Payload> RecordLog<P> {
    /// Opens the stream, deserializing persisted state if present.
    /// Corrupt or unreadable state degrades to an empty stream; it never
    /// surfaces to the caller.
    pub fn open(config: StreamConfig, storage: Arc<dyn Storage>) -> Self {
        let records = match storage.read(&config.name) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Record<P>>>(&raw) {
                Ok(list) => VecDeque::from(list),
                Err(e) => {
                    tracing::warn!(
                        stream = %config.name,
                        error = %e,
                        "discarding corrupt persisted stream"
                    );
                    VecDeque::new()
                }
            },
            Ok(None) => VecDeque::new(),
            Err(e) => {
                tracing::warn!(
                    stream = %config.name,
                    error = %e,
                    "persisted stream unreadable, starting empty"
                );
                VecDeque::new()
            }
        };

        let next_id = records.iter().map(|r| r.id).max().map_or(0, |id| id + 1);
        let mut log = Self {
            config,
            records,
            storage,
            next_id,
            durable: true,
        };
        // Capacity may have shrunk since the stream was last written.
        while log.records.len() > log.config.capacity {
            log.records.pop_front();
        }
        log
    }

    /// Validates and appends a payload. On success the record gets its
    /// timestamp and identifier, the oldest record is evicted if capacity
    /// is exceeded, and the stream is persisted.
    pub fn append(&mut self, payload: P) -> Result<Record<P>, InvalidPayload> {
        payload.validate()?;

        let record = Record {
            id: self.allocate_id(),
            timestamp: Utc::now(),
            payload,
        };
        self.records.push_back(record.clone());
        while self.records.len() > self.config.capacity {
            self.records.pop_front();
        }
        self.persist();
        Ok(record)
    }

    /// Removes the record with the given identifier. Idempotent: an absent
    /// id is a no-op, not an error. Returns whether a record was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Empties the stream unconditionally and persists the empty state.
    pub fn clear(&mut self) {
        self.records.clear();
        self.persist();
    }

    /// Pure, restartable view of the current records. `limit` truncates
    /// without mutating.
    pub fn list(
        &self,
        limit: Option<usize>,
        order: ListOrder,
    ) -> Box<dyn Iterator<Item = &Record<P>> + '_> {
        let limit = limit.unwrap_or(usize::MAX);
        match order {
            ListOrder::NewestFirst => Box::new(self.records.iter().rev().take(limit)),
            ListOrder::OldestFirst => Box::new(self.records.iter().take(limit)),
        }
    }

    pub fn latest(&self) -> Option<&Record<P>> {
        self.records.back()
    }

    /// Aggregate statistics over all retained records' metrics.
    /// `None` is the no-data sentinel.
    pub fn stats(&self) -> Option<SampleStats> {
        stats::compute(
            self.records.iter().filter_map(|r| r.payload.metric()),
            self.config.rounding,
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// False once a persistence attempt has failed this session. The
    /// in-memory stream stays authoritative either way.
    pub fn durable(&self) -> bool {
        self.durable
    }

    /// Wall-clock-derived but strictly increasing, so two appends in the
    /// same millisecond still get distinct, ordered identifiers.
    fn allocate_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.next_id);
        self.next_id = id + 1;
        id
    }

    fn persist(&mut self) {
        match self.write_snapshot() {
            Ok(()) => self.durable = true,
            Err(e) => {
                tracing::warn!(
                    stream = %self.config.name,
                    error = %e,
                    "storage unavailable, keeping in-memory state only"
                );
                self.durable = false;
            }
        }
    }

    fn write_snapshot(&self) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&self.records)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.write(&self.config.name, &serialized)
    }
}
