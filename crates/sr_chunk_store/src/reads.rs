use std::sync::Arc;

use sr_types::{Chunk, ChunkId};

use crate::ChunkStore;

// ---

/// Inventory of a session's retained history, for consumer-side cache
/// reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncStatus {
    pub session_id: String,
    pub total_chunks: usize,

    /// Highest sequence number ever assigned, −1 when no chunk exists yet.
    pub latest_sequence: i64,

    /// Ids of the session's retained chunks, in sequence order.
    pub available_chunk_ids: Vec<ChunkId>,
}

// ---

impl ChunkStore {
    /// Looks a chunk up by id.
    pub fn get(&self, chunk_id: &str) -> Option<Arc<Chunk>> {
        let sequence = self.sequence_by_chunk_id.get(chunk_id)?;
        self.chunks_by_sequence.get(sequence).cloned()
    }

    /// The chunks of `session_id` with sequence strictly greater than
    /// `sequence`, ascending. Pass −1 for the full session history.
    pub fn chunks_after(&self, sequence: i64, session_id: &str) -> Vec<Arc<Chunk>> {
        self.chunks_by_sequence
            .range(sequence.saturating_add(1)..)
            .filter(|(_, chunk)| chunk.session_id == session_id)
            .map(|(_, chunk)| Arc::clone(chunk))
            .collect()
    }

    /// The full retained history of `session_id`, in sequence order.
    #[inline]
    pub fn all_for_session(&self, session_id: &str) -> Vec<Arc<Chunk>> {
        self.chunks_after(-1, session_id)
    }

    pub fn sync_status(&self, session_id: &str) -> SyncStatus {
        let available_chunk_ids: Vec<ChunkId> = self
            .chunks_by_sequence
            .values()
            .filter(|chunk| chunk.session_id == session_id)
            .map(|chunk| chunk.id.clone())
            .collect();

        SyncStatus {
            session_id: session_id.to_owned(),
            total_chunks: available_chunk_ids.len(),
            latest_sequence: self.next_sequence - 1,
            available_chunk_ids,
        }
    }
}
