//! Sphere geometry.

use dod_math::{DVec3, Ray, EPSILON};

/// A sphere primitive. Materials live alongside it in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub centre: DVec3,
    pub radius: f64,
    pub radius_squared: f64,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(centre: DVec3, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        Self {
            centre,
            radius,
            radius_squared: radius * radius,
        }
    }

    /// Distance along `ray` to the first surface crossing beyond `EPSILON`.
    ///
    /// From outside this is the near root; from inside the near root is
    /// behind the origin so the far root is used instead.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        // Solve t^2*d.d + 2*t*(o-c).d + (o-c).(o-c) - r^2 = 0 with |d| = 1
        let op = self.centre - ray.origin();
        let b = op.dot(ray.direction());
        let determinant = b * b - op.length_squared() + self.radius_squared;
        if determinant < 0.0 {
            return None;
        }

        let determinant = determinant.sqrt();
        let minus_t = b - determinant;
        let plus_t = b + determinant;
        if minus_t < EPSILON && plus_t < EPSILON {
            return None;
        }

        Some(if minus_t > EPSILON { minus_t } else { plus_t })
    }
}
