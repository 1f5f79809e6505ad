//! Core data model for the SLAM relay.
//!
//! Everything the relay moves around is built from these types: [`Point`]s
//! with optional [`Color`]s, opaque [`Pose`] transforms, [`VoxelKey`]s for
//! spatial deduplication, and immutable sequence-numbered [`Chunk`]s.

mod chunk;
mod point;
mod pose;
mod voxel;

pub use self::chunk::{Chunk, ChunkError, ChunkId, ChunkResult};
pub use self::point::{Color, Point};
pub use self::pose::Pose;
pub use self::voxel::{voxel_filter, VoxelKey};
