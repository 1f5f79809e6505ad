use crate::ChunkStore;

// ---

impl ChunkStore {
    /// Drops the retained chunk with the lowest sequence number.
    ///
    /// Eviction only ever removes from the low end, so the surviving
    /// sequences stay dense (a contiguous range).
    pub(crate) fn evict_oldest(&mut self) {
        if let Some((sequence, chunk)) = self.chunks_by_sequence.pop_first() {
            self.sequence_by_chunk_id.remove(chunk.id.as_str());
            sr_log::debug!(
                "evicted chunk {} (sequence {sequence}) to stay within {} retained chunks",
                chunk.id,
                self.config.max_chunks
            );
        }
    }

    /// Clears the whole session scope: chunk history, chunk-id index,
    /// occupancy set, pending buffers, and the sequence counter.
    ///
    /// The next session starts from sequence 0 with a blank occupancy set.
    pub fn clear(&mut self) {
        let dropped = self.chunks_by_sequence.len();

        self.chunks_by_sequence.clear();
        self.sequence_by_chunk_id.clear();
        self.occupied_voxels.clear();
        self.pending_points.clear();
        self.pending_poses.clear();
        self.next_sequence = 0;

        sr_log::info!("cleared chunk store ({dropped} chunks dropped)");
    }
}
