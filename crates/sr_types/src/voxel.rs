use ahash::HashMap;

use crate::Point;

// ---

/// The integer triple identifying the voxel a point falls into.
///
/// Two points are spatially equivalent iff their keys are equal. Keys use the
/// componentwise floor of `coordinate / voxel_size`, so neighboring negative
/// coordinates do not alias into voxel zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VoxelKey {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl VoxelKey {
    #[inline]
    pub fn from_position(x: f64, y: f64, z: f64, voxel_size: f64) -> Self {
        debug_assert!(voxel_size > 0.0);
        Self {
            x: (x / voxel_size).floor() as i64,
            y: (y / voxel_size).floor() as i64,
            z: (z / voxel_size).floor() as i64,
        }
    }

    #[inline]
    pub fn for_point(point: &Point, voxel_size: f64) -> Self {
        Self::from_position(point.x, point.y, point.z, voxel_size)
    }
}

// ---

/// Reduces a point cloud to one representative point per occupied voxel.
///
/// The representative sits at the centroid of the voxel's points and wears
/// the color of the point nearest (squared Euclidean) to that centroid; on a
/// distance tie the earliest-inserted point wins. A nearest point without a
/// color yields a representative without a color.
///
/// The output holds exactly one point per distinct voxel key, in first-seen
/// voxel order.
///
/// Panics if `voxel_size` is not strictly positive: that is a programmer
/// error, not an input condition.
pub fn voxel_filter(points: &[Point], voxel_size: f64) -> Vec<Point> {
    assert!(
        voxel_size > 0.0,
        "voxel_size must be strictly positive, got {voxel_size}"
    );

    // Bucket by voxel, remembering first-seen order so the output is
    // deterministic for a given input ordering.
    let mut order: Vec<VoxelKey> = Vec::new();
    let mut buckets: HashMap<VoxelKey, Vec<&Point>> = HashMap::default();

    for point in points {
        let key = VoxelKey::for_point(point, voxel_size);
        buckets
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(point);
    }

    order
        .into_iter()
        .map(|key| representative(&buckets[&key]))
        .collect()
}

/// Centroid position, color of the point closest to the centroid.
fn representative(bucket: &[&Point]) -> Point {
    let n = bucket.len() as f64;
    let cx = bucket.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = bucket.iter().map(|p| p.y).sum::<f64>() / n;
    let cz = bucket.iter().map(|p| p.z).sum::<f64>() / n;

    let mut closest = bucket[0];
    let mut closest_d2 = closest.distance_sq(cx, cy, cz);
    for point in &bucket[1..] {
        let d2 = point.distance_sq(cx, cy, cz);
        // Strict comparison: on a tie, the first-inserted point stays.
        if d2 < closest_d2 {
            closest = point;
            closest_d2 = d2;
        }
    }

    Point {
        x: cx,
        y: cy,
        z: cz,
        color: closest.color,
    }
}

// ---
