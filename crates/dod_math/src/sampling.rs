//! Direction samplers driven by a pair of canonical random numbers.
//!
//! The samplers never touch the RNG themselves; callers draw `u` and `v`
//! so that stratification stays in their hands.

use std::f64::consts::PI;

use rand::{Rng, RngCore};

use crate::{DVec3, OrthoNormalBasis, EPSILON};

/// Draw a uniform value in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Sample a direction on the hemisphere around `basis.z`.
///
/// Points are spread uniformly over the unit disk and lifted onto the
/// hemisphere, which distributes directions proportionally to the cosine
/// of their angle with the normal.
pub fn hemisphere_sample(basis: &OrthoNormalBasis, u: f64, v: f64) -> DVec3 {
    let theta = 2.0 * PI * u;
    let radius_squared = v;
    let radius = radius_squared.sqrt();
    basis
        .transform(DVec3::new(
            theta.cos() * radius,
            theta.sin() * radius,
            (1.0 - radius_squared).sqrt(),
        ))
        .normalize()
}

/// Sample a direction within a cone of half-angle `cone_theta` around
/// `direction`. A zero angle returns `direction` unchanged.
pub fn cone_sample(direction: DVec3, cone_theta: f64, u: f64, v: f64) -> DVec3 {
    if cone_theta < EPSILON {
        return direction;
    }
    let theta = cone_theta * (1.0 - (2.0 * u.acos() / PI));
    let radius = theta.sin();
    let z_scale = theta.cos();
    let random_theta = v * 2.0 * PI;
    let basis = OrthoNormalBasis::from_z(direction);
    basis
        .transform(DVec3::new(
            random_theta.cos() * radius,
            random_theta.sin() * radius,
            z_scale,
        ))
        .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gen_f64_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = gen_f64(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_hemisphere_sample_stays_above_surface() {
        let normal = DVec3::new(0.3, -0.4, 0.8).normalize();
        let basis = OrthoNormalBasis::from_z(normal);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let d = hemisphere_sample(&basis, gen_f64(&mut rng), gen_f64(&mut rng));
            assert!((d.length() - 1.0).abs() < 1e-9);
            assert!(d.dot(normal) >= 0.0);
        }
    }

    #[test]
    fn test_hemisphere_sample_centre_is_normal() {
        let basis = OrthoNormalBasis::from_z(DVec3::Y);
        let d = hemisphere_sample(&basis, 0.25, 0.0);
        assert!((d - DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn test_cone_sample_zero_angle_is_identity() {
        let d = DVec3::new(1.0, 1.0, 0.0).normalize();
        assert_eq!(cone_sample(d, 0.0, 0.3, 0.7), d);
    }

    #[test]
    fn test_cone_sample_within_angle() {
        let d = DVec3::new(0.0, 1.0, 1.0).normalize();
        let half_angle = 10f64.to_radians();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..1000 {
            let s = cone_sample(d, half_angle, gen_f64(&mut rng), gen_f64(&mut rng));
            let angle = s.dot(d).clamp(-1.0, 1.0).acos();
            assert!(angle <= half_angle + 1e-9);
        }
    }
}
