//! The SLAM relay's in-memory history: an insertion-ordered store of
//! deduplicated, sequence-numbered chunks, together with the ingestion
//! pipeline that produces them.
//!
//! The pipeline's session state (the voxel occupancy set and the pending
//! point/pose buffers) lives inside [`ChunkStore`] on purpose: it shares the
//! session's scope and must be cleared atomically with the history, so it
//! shares the store's lock.
//!
//! All access goes through [`ChunkStoreHandle`], a cheaply clonable handle
//! around a read-write lock. Critical sections are short; readers copy
//! `Arc<Chunk>`s out.

mod gc;
mod reads;
mod stats;
mod store;
mod writes;

pub use self::reads::SyncStatus;
pub use self::stats::ChunkStoreStats;
pub use self::store::{
    ChunkStore, ChunkStoreConfig, ChunkStoreError, ChunkStoreHandle, ChunkStoreResult,
};
