pub mod classify;
pub mod store;
pub mod tools;

// Re-export the core types most callers start from.
pub use store::{ListOrder, RecordLog, StreamConfig};
