use crate::DVec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is expected to be unit length; intersection distances are
/// measured in multiples of it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray, normalizing the direction first.
    pub fn from_two_points(from: DVec3, to: DVec3) -> Self {
        Self::new(from, (to - from).normalize())
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        assert_eq!(ray.at(0.0), DVec3::ZERO);
        assert_eq!(ray.at(1.0), DVec3::X);
        assert_eq!(ray.at(2.0), DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_from_two_points() {
        let ray = Ray::from_two_points(DVec3::new(0.0, 0.0, 5.0), DVec3::ZERO);

        assert_eq!(ray.origin(), DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(ray.direction(), DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.at(4.0), DVec3::new(0.0, 0.0, 1.0));
    }
}
