use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::{HashMap, HashSet};

use sr_types::{Chunk, ChunkId, Point, Pose, VoxelKey};

// ---

/// Tunables of the chunk store and its ingestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkStoreConfig {
    /// Target number of points per chunk.
    ///
    /// The final chunk of a session may be shorter (see
    /// [`ChunkStore::flush_pending`]).
    pub chunk_size: usize,

    /// Upper bound on retained chunks; exceeding it evicts the oldest.
    pub max_chunks: usize,

    /// Edge length of the deduplication voxel grid, in meters.
    pub voxel_size: f64,
}

impl ChunkStoreConfig {
    pub const DEFAULT: Self = Self {
        chunk_size: 1000,
        max_chunks: 10_000,
        voxel_size: 0.01,
    };
}

impl Default for ChunkStoreConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---

#[derive(thiserror::Error, Debug)]
pub enum ChunkStoreError {
    /// Sequence numbers are assigned densely; a chunk arriving out of order
    /// is a bug in the caller, not a recoverable input condition.
    #[error("chunk {id} has sequence {got}, expected {expected}")]
    NonMonotonicSequence {
        id: ChunkId,
        got: i64,
        expected: i64,
    },

    #[error(transparent)]
    Chunk(#[from] sr_types::ChunkError),
}

pub type ChunkStoreResult<T> = Result<T, ChunkStoreError>;

// ---

/// Memory-resident store of one session's chunk history.
///
/// Chunks are keyed by their dense per-session sequence number; iteration in
/// sequence order is therefore also insertion order. A secondary index maps
/// chunk ids back to sequences for the repair path.
#[derive(Debug)]
pub struct ChunkStore {
    pub(crate) config: ChunkStoreConfig,

    /// Sequence → chunk. Dense within a session, save for eviction at the
    /// low end once `max_chunks` is exceeded.
    pub(crate) chunks_by_sequence: BTreeMap<i64, Arc<Chunk>>,
    pub(crate) sequence_by_chunk_id: HashMap<ChunkId, i64>,
    pub(crate) next_sequence: i64,

    /// Voxel keys already admitted this session. A point whose key is in
    /// here is dropped by ingestion.
    pub(crate) occupied_voxels: HashSet<VoxelKey>,

    /// Deduplicated points (and their poses) waiting to reach `chunk_size`.
    pub(crate) pending_points: Vec<Point>,
    pub(crate) pending_poses: Vec<Pose>,
}

impl ChunkStore {
    pub fn new(config: ChunkStoreConfig) -> Self {
        Self {
            config,
            chunks_by_sequence: BTreeMap::new(),
            sequence_by_chunk_id: HashMap::default(),
            next_sequence: 0,
            occupied_voxels: HashSet::default(),
            pending_points: Vec::new(),
            pending_poses: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ChunkStoreConfig {
        &self.config
    }

    /// Number of retained chunks.
    #[inline]
    pub fn num_chunks(&self) -> usize {
        self.chunks_by_sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks_by_sequence.is_empty()
    }

    /// The sequence number the next stored chunk will receive.
    #[inline]
    pub fn next_sequence(&self) -> i64 {
        self.next_sequence
    }
}

// ---

/// Cheaply clonable handle to a shared [`ChunkStore`].
#[derive(Debug, Clone)]
pub struct ChunkStoreHandle(Arc<parking_lot::RwLock<ChunkStore>>);

impl ChunkStoreHandle {
    #[inline]
    pub fn new(store: ChunkStore) -> Self {
        Self(Arc::new(parking_lot::RwLock::new(store)))
    }

    #[inline]
    pub fn read(&self) -> parking_lot::RwLockReadGuard<'_, ChunkStore> {
        self.0.read()
    }

    #[inline]
    pub fn write(&self) -> parking_lot::RwLockWriteGuard<'_, ChunkStore> {
        self.0.write()
    }
}
