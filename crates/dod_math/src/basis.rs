use crate::DVec3;

/// A right-handed orthonormal frame.
///
/// Used to move samples generated around +Z into the frame of a surface
/// normal or a reflection direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoNormalBasis {
    pub x: DVec3,
    pub y: DVec3,
    pub z: DVec3,
}

impl OrthoNormalBasis {
    /// Build a frame whose z axis is `z` (expected unit length).
    pub fn from_z(z: DVec3) -> Self {
        // Cross with whichever world axis is not (nearly) parallel to z
        let x = if z.dot(DVec3::X).abs() > 0.99999 {
            z.cross(DVec3::Y).normalize()
        } else {
            z.cross(DVec3::X).normalize()
        };
        let y = z.cross(x).normalize();
        Self { x, y, z }
    }

    /// Transform a local-space vector into world space.
    #[inline]
    pub fn transform(&self, local: DVec3) -> DVec3 {
        self.x * local.x + self.y * local.y + self.z * local.z
    }
}
