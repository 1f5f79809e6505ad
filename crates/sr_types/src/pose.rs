/// A raw 4×4 camera transform, 16 scalars, row-major.
///
/// The relay treats poses as opaque payload: they are paired with points,
/// stored, and streamed back out, never interpreted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose(pub [f64; 16]);

impl Pose {
    pub const IDENTITY: Self = {
        let mut m = [0.0; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        Self(m)
    };

    /// Builds a pose from up to 16 scalars; missing entries are zero.
    ///
    /// Producers are expected to send exactly 16, but the wire cannot
    /// enforce that, so short or long matrices are tolerated here.
    pub fn from_slice(values: &[f64]) -> Self {
        let mut m = [0.0; 16];
        for (dst, src) in m.iter_mut().zip(values) {
            *dst = *src;
        }
        Self(m)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Default for Pose {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_pads_and_truncates() {
        assert_eq!(Pose::from_slice(&[]).0, [0.0; 16]);

        let full: Vec<f64> = (0..16).map(|i| i as f64).collect();
        assert_eq!(Pose::from_slice(&full).as_slice(), full.as_slice());

        let long: Vec<f64> = (0..20).map(|i| i as f64).collect();
        assert_eq!(Pose::from_slice(&long).as_slice(), &long[..16]);
    }
}
