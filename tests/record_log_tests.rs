use std::sync::Arc;

use farmkit::store::{ListOrder, MemoryStorage, RecordLog, Storage, StreamConfig};
use farmkit::tools::moisture::MoistureReading;

fn open_log(capacity: usize) -> RecordLog<MoistureReading> {
    RecordLog::open(
        StreamConfig::new("test_readings", capacity),
        Arc::new(MemoryStorage::new()),
    )
}

#[test]
fn capacity_bound_holds_after_every_append() {
    let mut log = open_log(10);
    for i in 0..25u8 {
        log.append(MoistureReading::new(i % 100)).unwrap();
        assert!(log.len() <= 10, "len {} exceeded capacity", log.len());
    }
    assert_eq!(log.len(), 10);
}

#[test]
fn eviction_removes_exactly_the_oldest() {
    let mut log = open_log(3);
    let first = log.append(MoistureReading::new(1)).unwrap();
    let second = log.append(MoistureReading::new(2)).unwrap();
    log.append(MoistureReading::new(3)).unwrap();
    // Fourth append exceeds capacity by one: only the first record goes.
    log.append(MoistureReading::new(4)).unwrap();

    let ids: Vec<u64> = log.list(None, ListOrder::OldestFirst).map(|r| r.id).collect();
    assert_eq!(ids.len(), 3);
    assert!(!ids.contains(&first.id), "oldest record should be evicted");
    assert!(ids.contains(&second.id), "second-oldest must survive");
}

#[test]
fn rapid_appends_get_distinct_increasing_ids() {
    let mut log = open_log(50);
    let ids: Vec<u64> = (0..20)
        .map(|_| log.append(MoistureReading::new(5)).unwrap().id)
        .collect();
    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1], "ids must be strictly increasing");
    }
}

#[test]
fn remove_is_idempotent() {
    let mut log = open_log(10);
    let keep = log.append(MoistureReading::new(10)).unwrap();
    let target = log.append(MoistureReading::new(20)).unwrap();

    assert!(log.remove(target.id));
    let after_first: Vec<u64> = log.list(None, ListOrder::OldestFirst).map(|r| r.id).collect();

    assert!(!log.remove(target.id), "second removal is a no-op");
    let after_second: Vec<u64> = log.list(None, ListOrder::OldestFirst).map(|r| r.id).collect();

    assert_eq!(after_first, after_second);
    assert_eq!(after_first, vec![keep.id]);
}

#[test]
fn invalid_payload_leaves_stream_untouched() {
    let mut log = open_log(10);
    log.append(MoistureReading::new(50)).unwrap();

    let err = log.append(MoistureReading::new(101)).unwrap_err();
    assert!(err.reason.contains("0 and 100"));
    assert_eq!(log.len(), 1);
}

#[test]
fn clear_empties_and_persists() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let mut log: RecordLog<MoistureReading> =
        RecordLog::open(StreamConfig::new("cleared", 10), storage.clone());
    log.append(MoistureReading::new(40)).unwrap();
    log.append(MoistureReading::new(60)).unwrap();
    log.clear();
    assert!(log.is_empty());

    // A fresh open sees the persisted empty state, not the old records.
    let reopened: RecordLog<MoistureReading> =
        RecordLog::open(StreamConfig::new("cleared", 10), storage);
    assert!(reopened.is_empty());
}

#[test]
fn list_orders_and_limits_without_mutating() {
    let mut log = open_log(10);
    for percent in [10, 20, 30] {
        log.append(MoistureReading::new(percent)).unwrap();
    }

    let newest: Vec<u8> = log
        .list(None, ListOrder::NewestFirst)
        .map(|r| r.payload.percent)
        .collect();
    assert_eq!(newest, vec![30, 20, 10]);

    let oldest: Vec<u8> = log
        .list(None, ListOrder::OldestFirst)
        .map(|r| r.payload.percent)
        .collect();
    assert_eq!(oldest, vec![10, 20, 30]);

    let limited: Vec<u8> = log
        .list(Some(2), ListOrder::NewestFirst)
        .map(|r| r.payload.percent)
        .collect();
    assert_eq!(limited, vec![30, 20]);

    // Restartable: a second identical call sees the same sequence.
    let again: Vec<u8> = log
        .list(Some(2), ListOrder::NewestFirst)
        .map(|r| r.payload.percent)
        .collect();
    assert_eq!(again, limited);
    assert_eq!(log.len(), 3);
}

#[test]
fn single_append_then_overflow_evicts_first_value() {
    let mut log = open_log(10);
    log.append(MoistureReading::new(55)).unwrap();
    let listed: Vec<u8> = log
        .list(None, ListOrder::NewestFirst)
        .map(|r| r.payload.percent)
        .collect();
    assert_eq!(listed, vec![55]);

    for percent in 60..70u8 {
        log.append(MoistureReading::new(percent)).unwrap();
    }
    assert_eq!(log.len(), 10);
    assert!(
        log.list(None, ListOrder::OldestFirst)
            .all(|r| r.payload.percent != 55),
        "first inserted value must have been evicted"
    );
}
