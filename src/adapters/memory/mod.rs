//! In-memory storage adapters.

mod record_store;

pub use record_store::InMemoryRecordStore;
