use rand::Rng as _;

use crate::{Point, Pose};

// ---

/// Errors that can occur when assembling a [`Chunk`].
#[derive(thiserror::Error, Debug)]
pub enum ChunkError {
    #[error("chunk carries {poses} poses for {points} points (poses must not exceed points)")]
    MorePosesThanPoints { points: usize, poses: usize },
}

pub type ChunkResult<T> = Result<T, ChunkError>;

// ---

/// Globally unique chunk identifier: `<session_id>_<sequence>_<8 hex>`.
///
/// The random suffix keeps ids unique even across sessions that happen to
/// reuse a session id, so consumer-side deduplication can key on the id
/// alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(String);

impl ChunkId {
    pub fn new(session_id: &str, sequence: i64) -> Self {
        let suffix: u32 = rand::rng().random();
        Self(format!("{session_id}_{sequence}_{suffix:08x}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ChunkId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::borrow::Borrow<str> for ChunkId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ---

/// The atomic unit of relay history: a batch of deduplicated points with
/// their per-point poses.
///
/// Chunks are immutable once stored. Sequence numbers are dense and
/// monotonically increasing within a session, assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub id: ChunkId,
    pub sequence: i64,
    pub session_id: String,

    /// Wall-clock creation time, epoch milliseconds.
    pub timestamp_ms: i64,

    pub points: Vec<Point>,

    /// Aligned by index with `points`; may be shorter when the producer sent
    /// no pose for the tail points, never longer.
    pub poses: Vec<Pose>,
}

impl Chunk {
    pub fn new(
        session_id: impl Into<String>,
        sequence: i64,
        points: Vec<Point>,
        poses: Vec<Pose>,
    ) -> ChunkResult<Self> {
        if poses.len() > points.len() {
            return Err(ChunkError::MorePosesThanPoints {
                points: points.len(),
                poses: poses.len(),
            });
        }

        let session_id = session_id.into();
        Ok(Self {
            id: ChunkId::new(&session_id, sequence),
            sequence,
            session_id,
            timestamp_ms: jiff::Timestamp::now().as_millisecond(),
            points,
            poses,
        })
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn num_poses(&self) -> usize {
        self.poses.len()
    }
}

// ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_id_shape() {
        let id = ChunkId::new("SLAM-123", 7);
        let parts: Vec<&str> = id.as_str().split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "SLAM-123");
        assert_eq!(parts[1], "7");
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn more_poses_than_points_is_rejected() {
        let result = Chunk::new(
            "s",
            0,
            vec![crate::Point::new(0.0, 0.0, 0.0)],
            vec![Pose::IDENTITY, Pose::IDENTITY],
        );
        assert!(result.is_err());
    }

    #[test]
    fn poses_may_fall_short_of_points() {
        let chunk = Chunk::new(
            "s",
            0,
            vec![
                crate::Point::new(0.0, 0.0, 0.0),
                crate::Point::new(1.0, 0.0, 0.0),
            ],
            vec![Pose::IDENTITY],
        )
        .unwrap();
        assert_eq!(chunk.num_points(), 2);
        assert_eq!(chunk.num_poses(), 1);
    }
}
