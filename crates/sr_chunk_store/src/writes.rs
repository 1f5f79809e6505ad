use std::sync::Arc;

use sr_types::{voxel_filter, Chunk, ChunkId, Point, Pose, VoxelKey};

use crate::{ChunkStore, ChunkStoreError, ChunkStoreResult};

// ---

impl ChunkStore {
    /// Runs a batch of incoming point clouds through the ingestion pipeline.
    ///
    /// Each cloud is reduced by the voxel grid filter, then deduplicated
    /// against the session-global occupancy set; only points landing in a
    /// voxel never seen this session survive. Surviving points accumulate in
    /// the pending buffer, and full chunks of `chunk_size` points are cut and
    /// stored as they fill up.
    ///
    /// Pose binding: the surviving points of cloud `i` are paired with pose
    /// `i`; clouds beyond the pose list reuse the last pose; with no poses at
    /// all, none are recorded. One pose entry is buffered per surviving
    /// point, so downstream alignment is index-for-index.
    ///
    /// Returns the ids of the chunks cut by this call, in sequence order.
    pub fn ingest(
        &mut self,
        session_id: &str,
        clouds: &[Vec<Point>],
        poses: &[Pose],
    ) -> ChunkStoreResult<Vec<ChunkId>> {
        for (i, cloud) in clouds.iter().enumerate() {
            let pose = if i < poses.len() {
                Some(poses[i])
            } else {
                poses.last().copied()
            };

            for point in voxel_filter(cloud, self.config.voxel_size) {
                let key = VoxelKey::for_point(&point, self.config.voxel_size);
                if !self.occupied_voxels.insert(key) {
                    continue; // voxel already represented this session
                }

                self.pending_points.push(point);
                if let Some(pose) = pose {
                    self.pending_poses.push(pose);
                }
            }
        }

        let mut created = Vec::new();
        while self.pending_points.len() >= self.config.chunk_size {
            created.push(self.cut_chunk(session_id, self.config.chunk_size)?);
        }

        if !created.is_empty() {
            sr_log::debug!(
                "cut {} chunk(s), {} point(s) still pending",
                created.len(),
                self.pending_points.len()
            );
        }

        Ok(created)
    }

    /// Forces the pending buffer out as one final, possibly short, chunk.
    ///
    /// No-op on an empty buffer. Called when a producer stream ends and
    /// again during session teardown.
    pub fn flush_pending(&mut self, session_id: &str) -> ChunkStoreResult<Option<ChunkId>> {
        if self.pending_points.is_empty() {
            return Ok(None);
        }

        let count = self.pending_points.len().min(self.config.chunk_size);
        self.cut_chunk(session_id, count).map(Some)
    }

    fn cut_chunk(&mut self, session_id: &str, count: usize) -> ChunkStoreResult<ChunkId> {
        let points: Vec<Point> = self.pending_points.drain(..count).collect();

        // The pose buffer may legitimately be shorter than the point buffer.
        let pose_count = count.min(self.pending_poses.len());
        let poses: Vec<Pose> = self.pending_poses.drain(..pose_count).collect();

        let chunk = Chunk::new(session_id, self.next_sequence, points, poses)?;
        let id = chunk.id.clone();
        self.put(chunk)?;
        Ok(id)
    }

    /// Appends a chunk to the store.
    ///
    /// The chunk's sequence must be exactly the store's next sequence; the
    /// store never re-orders or back-fills. Exceeding `max_chunks` evicts the
    /// oldest chunk.
    pub fn put(&mut self, chunk: Chunk) -> ChunkStoreResult<Arc<Chunk>> {
        if chunk.sequence != self.next_sequence {
            return Err(ChunkStoreError::NonMonotonicSequence {
                id: chunk.id.clone(),
                got: chunk.sequence,
                expected: self.next_sequence,
            });
        }

        let chunk = Arc::new(chunk);
        self.sequence_by_chunk_id
            .insert(chunk.id.clone(), chunk.sequence);
        self.chunks_by_sequence.insert(chunk.sequence, chunk.clone());
        self.next_sequence += 1;

        sr_log::debug!(
            "stored chunk {} (sequence {}, {} points)",
            chunk.id,
            chunk.sequence,
            chunk.num_points()
        );

        if self.chunks_by_sequence.len() > self.config.max_chunks {
            self.evict_oldest();
        }

        Ok(chunk)
    }
}
