//! In-process storage backend
//!
//! [`MemoryStore`] implements every storage trait on top of sharded
//! concurrent maps. It backs local runs (`STORAGE_BACKEND=memory`) and the
//! test suites.

mod counters;
mod locks;
mod store;

pub use store::MemoryStore;
