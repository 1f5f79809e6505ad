use crate::ChunkStore;

// ---

/// Point-in-time snapshot of what the store holds.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkStoreStats {
    pub num_chunks: usize,
    pub num_points: usize,
    pub num_occupied_voxels: usize,
    pub num_pending_points: usize,
    pub next_sequence: i64,
}

impl ChunkStore {
    pub fn stats(&self) -> ChunkStoreStats {
        ChunkStoreStats {
            num_chunks: self.chunks_by_sequence.len(),
            num_points: self
                .chunks_by_sequence
                .values()
                .map(|chunk| chunk.num_points())
                .sum(),
            num_occupied_voxels: self.occupied_voxels.len(),
            num_pending_points: self.pending_points.len(),
            next_sequence: self.next_sequence,
        }
    }
}
