//! Conversions between the wire types and the native model in [`sr_types`].
//!
//! Color presence is preserved in both directions: a wire point with any
//! channel missing becomes a colorless native point, and a colorless native
//! point goes back out with all three channels unset.

use sr_types::{Chunk, Color, Point, Pose};

use crate::ivm::slam;

// ---

impl From<&slam::Point> for Point {
    fn from(point: &slam::Point) -> Self {
        let color = match (point.r, point.g, point.b) {
            (Some(r), Some(g), Some(b)) => Some(Color { r, g, b }),
            _ => None,
        };
        Self {
            x: point.x,
            y: point.y,
            z: point.z,
            color,
        }
    }
}

impl From<&Point> for slam::Point {
    fn from(point: &Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
            z: point.z,
            r: point.color.map(|c| c.r),
            g: point.color.map(|c| c.g),
            b: point.color.map(|c| c.b),
        }
    }
}

impl From<&slam::Pose> for Pose {
    #[inline]
    fn from(pose: &slam::Pose) -> Self {
        Self::from_slice(&pose.matrix)
    }
}

impl From<&Pose> for slam::Pose {
    #[inline]
    fn from(pose: &Pose) -> Self {
        Self {
            matrix: pose.as_slice().to_vec(),
        }
    }
}

// ---

pub fn points_from_cloud(cloud: &slam::PointCloud) -> Vec<Point> {
    cloud.points.iter().map(Point::from).collect()
}

pub fn cloud_from_points(points: &[Point]) -> slam::PointCloud {
    slam::PointCloud {
        points: points.iter().map(slam::Point::from).collect(),
    }
}

/// Splits a producer message into its point clouds and its pose list.
pub fn clouds_and_poses(data: &slam::SlamData) -> (Vec<Vec<Point>>, Vec<Pose>) {
    let clouds = data
        .pointcloudlist
        .as_ref()
        .map(|list| list.pointclouds.iter().map(points_from_cloud).collect())
        .unwrap_or_default();
    let poses = data
        .poselist
        .as_ref()
        .map(|list| list.poses.iter().map(Pose::from).collect())
        .unwrap_or_default();
    (clouds, poses)
}

// ---

impl From<&Chunk> for slam::SlamData {
    /// A stored chunk on its way out to a subscriber: one cloud carrying all
    /// of the chunk's points, poses aligned by index.
    fn from(chunk: &Chunk) -> Self {
        Self {
            pointcloudlist: Some(slam::PointCloudList {
                pointclouds: vec![cloud_from_points(&chunk.points)],
            }),
            poselist: Some(slam::PoseList {
                poses: chunk.poses.iter().map(slam::Pose::from).collect(),
            }),
            indexlist: Some(slam::Index::default()),
            chunk_id: chunk.id.as_str().to_owned(),
            sequence_number: chunk.sequence as i32,
        }
    }
}

impl From<&Chunk> for slam::DataChunk {
    /// A stored chunk on its way out through the repair path.
    fn from(chunk: &Chunk) -> Self {
        Self {
            chunk_id: chunk.id.as_str().to_owned(),
            sequence_number: chunk.sequence as i32,
            session_id: chunk.session_id.clone(),
            timestamp: chunk.timestamp_ms,
            pointcloud: Some(cloud_from_points(&chunk.points)),
            pose: chunk.poses.first().map(slam::Pose::from),
            is_keyframe: false,
        }
    }
}

// ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_presence_round_trips() {
        let colored = Point::new(1.0, 2.0, 3.0).with_color(Color {
            r: 0.5,
            g: 0.25,
            b: 0.125,
        });
        let colorless = Point::new(4.0, 5.0, 6.0);

        let cloud = cloud_from_points(&[colored, colorless]);
        assert_eq!(cloud.points[0].r, Some(0.5));
        assert_eq!(cloud.points[1].r, None);

        let back = points_from_cloud(&cloud);
        assert_eq!(back, vec![colored, colorless]);
    }

    #[test]
    fn partial_color_is_treated_as_absent() {
        let wire = slam::Point {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            r: Some(1.0),
            g: None,
            b: Some(1.0),
        };
        assert_eq!(Point::from(&wire).color, None);
    }

    #[test]
    fn chunk_to_slam_data_carries_everything() {
        let chunk = Chunk::new(
            "s1",
            3,
            vec![Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)],
            vec![Pose::IDENTITY],
        )
        .unwrap();

        let data = slam::SlamData::from(&chunk);
        assert_eq!(data.chunk_id, chunk.id.as_str());
        assert_eq!(data.sequence_number, 3);
        assert_eq!(data.pointcloudlist.as_ref().unwrap().pointclouds.len(), 1);
        assert_eq!(
            data.pointcloudlist.as_ref().unwrap().pointclouds[0]
                .points
                .len(),
            2
        );
        assert_eq!(data.poselist.as_ref().unwrap().poses.len(), 1);
    }

    #[test]
    fn chunk_to_data_chunk_lifts_first_pose() {
        let chunk = Chunk::new(
            "s1",
            0,
            vec![Point::new(0.0, 0.0, 0.0)],
            vec![Pose::IDENTITY],
        )
        .unwrap();

        let data = slam::DataChunk::from(&chunk);
        assert_eq!(data.session_id, "s1");
        assert_eq!(data.timestamp, chunk.timestamp_ms);
        assert!(data.pose.is_some());
        assert!(!data.is_keyframe);
    }
}
