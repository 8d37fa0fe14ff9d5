//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive radiance estimation with a hard depth cutoff
//! - Probabilistic choice between specular and diffuse bounces
//! - Stratified sampling of the first bounce
//! - Progressive multi-pass accumulation

use std::time::Instant;

use crate::{ArrayOutput, Camera, Color, Hit, Material, Scene};
use dod_math::{
    cone_sample, gen_f64, hemisphere_sample, reflect, reflectance, DVec3, OrthoNormalBasis, Ray,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of full-image passes, one sample per pixel each
    pub samples_per_pixel: u32,
    /// Stratification grid for the first bounce (columns)
    pub first_bounce_u_samples: u32,
    /// Stratification grid for the first bounce (rows)
    pub first_bounce_v_samples: u32,
    /// Bounces at or beyond this depth contribute nothing
    pub max_depth: u32,
    /// Seed for the single random stream used by the whole render
    pub seed: u64,
    /// Return diffuse colors at the first hit instead of lighting
    pub preview: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            samples_per_pixel: 16,
            first_bounce_u_samples: 2,
            first_bounce_v_samples: 2,
            max_depth: 5,
            seed: 0,
            preview: false,
        }
    }
}

/// Chance that a bounce off `hit` is specular.
///
/// Fresnel materials use the pair of indices for the side the ray arrives
/// from: leaving the medium when `hit.inside`, entering it otherwise.
fn bounce_reflectivity(material: &Material, hit: &Hit, direction: DVec3) -> f64 {
    match material.reflectivity.fixed_value() {
        Some(value) => value,
        None => {
            let (ior_from, ior_to) = if hit.inside {
                (material.index_of_refraction, 1.0)
            } else {
                (1.0, material.index_of_refraction)
            };
            reflectance(hit.normal, direction, ior_from, ior_to)
        }
    }
}

/// Map `xi` in [0, 1) into cell `cell` of `cells` equal cells of [0, 1).
fn stratified(cell: u32, cells: u32, xi: f64) -> f64 {
    (cell as f64 + xi) / cells as f64
}

impl Scene {
    /// Estimate the radiance arriving along `ray`.
    ///
    /// Random numbers are drawn from `rng` in a fixed order (per sample:
    /// u jitter, v jitter, branch choice, then the recursive call), so the
    /// result is reproducible for a given stream state.
    pub fn radiance(
        &self,
        rng: &mut dyn RngCore,
        ray: &Ray,
        depth: u32,
        config: &RenderConfig,
    ) -> Color {
        if depth >= config.max_depth {
            return Color::ZERO;
        }

        let Some(rec) = self.intersect(ray) else {
            return self.environment_color();
        };

        let mat = rec.material;
        let hit = &rec.hit;
        if config.preview {
            return mat.diffuse;
        }

        let reflectivity = bounce_reflectivity(mat, hit, ray.direction());

        // Local frame with z along the normal for diffuse bounces
        let basis = OrthoNormalBasis::from_z(hit.normal);

        let (num_u, num_v) = if depth == 0 {
            (config.first_bounce_u_samples, config.first_bounce_v_samples)
        } else {
            (1, 1)
        };

        let mut result = Color::ZERO;
        for u_sample in 0..num_u {
            for v_sample in 0..num_v {
                let u = stratified(u_sample, num_u, gen_f64(rng));
                let v = stratified(v_sample, num_v, gen_f64(rng));
                let p = gen_f64(rng);

                if p < reflectivity {
                    let direction = cone_sample(
                        reflect(ray.direction(), hit.normal),
                        mat.reflection_cone_angle_radians,
                        u,
                        v,
                    );
                    let new_ray = Ray::new(hit.position, direction);
                    result += mat.emission + self.radiance(rng, &new_ray, depth + 1, config);
                } else {
                    let new_ray = Ray::new(hit.position, hemisphere_sample(&basis, u, v));
                    result += mat.emission
                        + mat.diffuse * self.radiance(rng, &new_ray, depth + 1, config);
                }
            }
        }
        result / (num_u * num_v) as f64
    }

    /// Render the scene progressively.
    ///
    /// Each pass adds one sample to every pixel (rows outer, columns inner)
    /// and then hands the accumulated image to `on_pass`.
    pub fn render<C, F>(&self, camera: &C, config: &RenderConfig, mut on_pass: F) -> ArrayOutput
    where
        C: Camera + ?Sized,
        F: FnMut(&ArrayOutput),
    {
        let mut output = ArrayOutput::new(config.width, config.height);
        let mut rng = StdRng::seed_from_u64(config.seed);

        log::info!(
            "Rendering {}x{} @ {} spp ({} spheres, {} triangles)",
            config.width,
            config.height,
            config.samples_per_pixel,
            self.sphere_count(),
            self.triangle_count()
        );
        let start = Instant::now();

        for sample in 0..config.samples_per_pixel {
            for y in 0..config.height {
                for x in 0..config.width {
                    let ray = camera.random_ray(x, y, &mut rng);
                    let color = self.radiance(&mut rng, &ray, 0, config);
                    output.add_weighted_sample(x, y, color, 1.0);
                }
            }
            log::info!(
                "Pass {}/{} done after {:?}",
                sample + 1,
                config.samples_per_pixel,
                start.elapsed()
            );
            on_pass(&output);
        }

        output
    }
}
