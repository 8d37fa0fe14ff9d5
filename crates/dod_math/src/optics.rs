//! Reflection and Fresnel reflectance at a smooth dielectric boundary.

use crate::DVec3;

/// Reflect `direction` about `normal`.
#[inline]
pub fn reflect(direction: DVec3, normal: DVec3) -> DVec3 {
    direction - 2.0 * direction.dot(normal) * normal
}

/// Fresnel reflectance of unpolarised light crossing from a medium with
/// index `n1` into one with index `n2`.
///
/// `normal` faces the incoming ray, so `-normal.dot(direction)` is the
/// cosine of the incidence angle. Total internal reflection yields 1.0.
///
/// The result is the average of the squared perpendicular and parallel
/// amplitude coefficients.
pub fn reflectance(normal: DVec3, direction: DVec3, n1: f64, n2: f64) -> f64 {
    let n = n1 / n2;
    let cos_i = -normal.dot(direction);
    let sin_t2 = n * n * (1.0 - cos_i * cos_i);
    if sin_t2 > 1.0 {
        return 1.0;
    }
    let cos_t = (1.0 - sin_t2).sqrt();
    let r_perp = (n1 * cos_i - n2 * cos_t) / (n1 * cos_i + n2 * cos_t);
    let r_par = (n2 * cos_i - n1 * cos_t) / (n2 * cos_i + n1 * cos_t);
    (r_perp * r_perp + r_par * r_par) / 2.0
}
