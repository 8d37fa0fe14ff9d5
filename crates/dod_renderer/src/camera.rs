//! Camera for ray generation.

use dod_math::{gen_f64, DVec3, Ray};
use rand::RngCore;

/// Anything that can produce a randomized primary ray for a pixel.
pub trait Camera {
    /// Generate a ray through pixel (x, y), drawing any jitter from `rng`.
    fn random_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray;
}

/// Perspective camera with an optional thin-lens aperture.
#[derive(Debug, Clone)]
pub struct ThinLensCamera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: DVec3,
    look_at: DVec3,
    vup: DVec3,

    // Lens settings
    vfov: f64,          // Vertical field of view in degrees
    defocus_angle: f64, // Variation angle of rays through each pixel
    focus_dist: f64,    // Distance from camera to plane of perfect focus

    // Cached computed values (set by initialize())
    center: DVec3,
    pixel00_loc: DVec3,
    pixel_delta_u: DVec3,
    pixel_delta_v: DVec3,
    w: DVec3,
    defocus_disk_u: DVec3,
    defocus_disk_v: DVec3,
}

impl ThinLensCamera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 256,
            image_height: 256,
            look_from: DVec3::ZERO,
            look_at: DVec3::new(0.0, 0.0, -1.0),
            vup: DVec3::Y,
            vfov: 90.0,
            defocus_angle: 0.0,
            focus_dist: 1.0,
            center: DVec3::ZERO,
            pixel00_loc: DVec3::ZERO,
            pixel_delta_u: DVec3::ZERO,
            pixel_delta_v: DVec3::ZERO,
            w: DVec3::Z,
            defocus_disk_u: DVec3::ZERO,
            defocus_disk_v: DVec3::ZERO,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: DVec3, look_at: DVec3, vup: DVec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, defocus_angle: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        self.center = self.look_from;

        // Calculate viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width =
            viewport_height * (self.image_width as f64 / self.image_height.max(1) as f64);

        // Calculate camera basis vectors
        self.w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(self.w).normalize();
        let v = self.w.cross(u);

        // Viewport vectors; v runs down the image so row 0 is the top
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        self.pixel_delta_u = viewport_u / self.image_width.max(1) as f64;
        self.pixel_delta_v = viewport_v / self.image_height.max(1) as f64;

        let viewport_upper_left =
            self.center - self.focus_dist * self.w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();
        self.defocus_disk_u = u * defocus_radius;
        self.defocus_disk_v = v * defocus_radius;
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> DVec3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }
}

impl Default for ThinLensCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera for ThinLensCamera {
    fn random_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let offset_x = gen_f64(rng) - 0.5;
        let offset_y = gen_f64(rng) - 0.5;

        let pixel_sample = self.pixel00_loc
            + (x as f64 + offset_x) * self.pixel_delta_u
            + (y as f64 + offset_y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::from_two_points(ray_origin, pixel_sample)
    }
}

/// Sample a random point in the unit disk.
fn random_in_unit_disk(rng: &mut dyn RngCore) -> DVec3 {
    loop {
        let p = DVec3::new(gen_f64(rng) * 2.0 - 1.0, gen_f64(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn looking_down_z(width: u32, height: u32) -> ThinLensCamera {
        let mut camera = ThinLensCamera::new()
            .with_resolution(width, height)
            .with_position(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0), DVec3::Y)
            .with_lens(90.0, 0.0, 1.0);
        camera.initialize();
        camera
    }

    #[test]
    fn test_camera_initialize() {
        let camera = looking_down_z(800, 600);
        assert_eq!(camera.center, DVec3::ZERO);
        assert!((camera.w - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_camera_ray_direction() {
        let camera = looking_down_z(100, 100);
        let mut rng = StdRng::seed_from_u64(42);

        // Center ray should point roughly towards -Z
        let ray = camera.random_ray(50, 50, &mut rng);
        assert!(ray.direction().z < 0.0);
        assert!((ray.direction().length() - 1.0).abs() < 1e-12);
        assert_eq!(ray.origin(), DVec3::ZERO);
    }

    #[test]
    fn test_camera_row_zero_is_top() {
        let camera = looking_down_z(10, 10);
        let mut rng = StdRng::seed_from_u64(1);

        let top = camera.random_ray(5, 0, &mut rng);
        let bottom = camera.random_ray(5, 9, &mut rng);
        assert!(top.direction().y > 0.0);
        assert!(bottom.direction().y < 0.0);

        let left = camera.random_ray(0, 5, &mut rng);
        assert!(left.direction().x < 0.0);
    }

    #[test]
    fn test_camera_defocus_moves_origin() {
        let mut camera = ThinLensCamera::new()
            .with_resolution(10, 10)
            .with_position(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0), DVec3::Y)
            .with_lens(60.0, 10.0, 5.0);
        camera.initialize();
        let mut rng = StdRng::seed_from_u64(9);

        let ray = camera.random_ray(5, 5, &mut rng);
        assert!(ray.origin().z.abs() < 1e-12);
        assert!(ray.origin().length() > 0.0);
    }
}
