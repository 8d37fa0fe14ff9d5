//! Built-in demo scenes.
//!
//! Each preset returns a populated `Scene` and a `ThinLensCamera` framed for
//! it at the requested resolution.

use crate::{Color, Material, ThinLensCamera, Scene};
use dod_math::DVec3;

/// Add a parallelogram as two triangles. The front face is on the side of
/// `edge_u x edge_v`.
pub fn add_quad(
    scene: &mut Scene,
    corner: DVec3,
    edge_u: DVec3,
    edge_v: DVec3,
    material: Material,
) {
    let far = corner + edge_u + edge_v;
    scene.add_triangle(corner, corner + edge_u, far, material);
    scene.add_triangle(corner, far, corner + edge_v, material);
}

/// Box open toward the camera, lit by a ceiling panel, with a mirror ball and
/// a glazed ball.
pub fn cornell_box(width: u32, height: u32) -> (Scene, ThinLensCamera) {
    let mut scene = Scene::new();
    let white = Material::diffuse(Color::splat(0.75));
    let red = Material::diffuse(Color::new(0.75, 0.15, 0.15));
    let green = Material::diffuse(Color::new(0.15, 0.75, 0.15));

    // Floor, ceiling, back, left, right; all facing into the box. The front
    // stays open for the camera.
    let walls = [
        ([-1.0, 0.0, 1.0], [2.0, 0.0, 0.0], [0.0, 0.0, -2.0], white),
        ([-1.0, 2.0, -1.0], [2.0, 0.0, 0.0], [0.0, 0.0, 2.0], white),
        ([-1.0, 0.0, -1.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0], white),
        ([-1.0, 0.0, 1.0], [0.0, 0.0, -2.0], [0.0, 2.0, 0.0], red),
        ([1.0, 0.0, -1.0], [0.0, 0.0, 2.0], [0.0, 2.0, 0.0], green),
    ];
    for (corner, edge_u, edge_v, material) in walls {
        add_quad(
            &mut scene,
            DVec3::from_array(corner),
            DVec3::from_array(edge_u),
            DVec3::from_array(edge_v),
            material,
        );
    }

    // Light panel just below the ceiling
    add_quad(
        &mut scene,
        DVec3::new(-0.3, 1.98, -0.3),
        DVec3::new(0.6, 0.0, 0.0),
        DVec3::new(0.0, 0.0, 0.6),
        Material::light(Color::splat(12.0)),
    );

    scene.add_sphere(DVec3::new(-0.45, 0.35, -0.3), 0.35, Material::mirror());
    scene.add_sphere(
        DVec3::new(0.45, 0.35, 0.3),
        0.35,
        Material::glazed(Color::new(0.2, 0.3, 0.8), 1.5),
    );

    let mut camera = ThinLensCamera::new()
        .with_resolution(width, height)
        .with_position(DVec3::new(0.0, 1.0, 3.5), DVec3::new(0.0, 1.0, 0.0), DVec3::Y)
        .with_lens(40.0, 0.0, 1.0);
    camera.initialize();

    log::debug!(
        "Built Cornell box: {} spheres, {} triangles, {} emitters",
        scene.sphere_count(),
        scene.triangle_count(),
        scene.emitter_count()
    );
    (scene, camera)
}

/// Row of spheres on a ground plane under a sky, one per material kind.
pub fn sphere_showcase(width: u32, height: u32) -> (Scene, ThinLensCamera) {
    let mut scene = Scene::new();
    scene.set_environment_color(Color::new(0.5, 0.6, 0.8));

    add_quad(
        &mut scene,
        DVec3::new(-20.0, 0.0, 20.0),
        DVec3::new(40.0, 0.0, 0.0),
        DVec3::new(0.0, 0.0, -40.0),
        Material::diffuse(Color::splat(0.6)),
    );

    let spheres = [
        (-3.0, Material::diffuse(Color::new(0.8, 0.3, 0.2))),
        (
            -1.0,
            Material::diffuse(Color::new(0.9, 0.8, 0.3))
                .with_reflectivity(0.6)
                .with_gloss(15.0),
        ),
        (1.0, Material::mirror()),
        // Negative reflectivity selects the Fresnel term; a water-like coat
        (
            3.0,
            Material::diffuse(Color::new(0.1, 0.5, 0.3))
                .with_reflectivity(-1.0)
                .with_ior(1.33),
        ),
    ];
    for (x, material) in spheres {
        scene.add_sphere(DVec3::new(x, 0.9, 0.0), 0.9, material);
    }

    // Overhead key light
    scene.add_sphere(DVec3::new(0.0, 8.0, 4.0), 2.0, Material::light(Color::splat(6.0)));

    let mut camera = ThinLensCamera::new()
        .with_resolution(width, height)
        .with_position(DVec3::new(0.0, 2.0, 9.0), DVec3::new(0.0, 0.9, 0.0), DVec3::Y)
        .with_lens(40.0, 0.0, 1.0);
    camera.initialize();

    log::debug!(
        "Built sphere showcase: {} spheres, {} triangles, {} emitters",
        scene.sphere_count(),
        scene.triangle_count(),
        scene.emitter_count()
    );
    (scene, camera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, Reflectivity};
    use dod_math::Ray;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_add_quad_faces_cross_product() {
        let mut scene = Scene::new();
        add_quad(&mut scene, DVec3::ZERO, DVec3::X, DVec3::Y, Material::default());
        assert_eq!(scene.triangle_count(), 2);

        // Hitting the +Z side is a front-face hit in both halves
        for origin in [DVec3::new(0.8, 0.1, 1.0), DVec3::new(0.1, 0.8, 1.0)] {
            let rec = scene
                .intersect(&Ray::new(origin, -DVec3::Z))
                .expect("quad should be hit");
            assert!(!rec.hit.inside);
            assert_eq!(rec.hit.normal, DVec3::Z);
        }
    }

    #[test]
    fn test_cornell_box_walls_face_inward() {
        let (scene, _) = cornell_box(4, 4);
        assert_eq!(scene.triangle_count(), 12);
        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.emitter_count(), 2);

        let origin = DVec3::new(0.0, 1.0, 0.0);
        for direction in [DVec3::X, -DVec3::X, DVec3::Y, -DVec3::Y, -DVec3::Z] {
            let rec = scene
                .intersect(&Ray::new(origin, direction))
                .expect("walls should enclose the box");
            assert!(!rec.hit.inside, "wall facing {direction} is wound outward");
        }

        // Nothing closes the side facing the camera
        assert!(scene.intersect(&Ray::new(origin, DVec3::Z)).is_none());
    }

    #[test]
    fn test_sphere_showcase_materials() {
        let (scene, _) = sphere_showcase(4, 4);
        assert_eq!(scene.sphere_count(), 5);
        assert_eq!(scene.emitter_count(), 1);

        // Straight down onto the water-coated sphere at x = 3
        let ray = Ray::new(DVec3::new(3.0, 5.0, 0.0), -DVec3::Y);
        let rec = scene.intersect(&ray).expect("sphere should be hit");
        assert_eq!(rec.material.reflectivity, Reflectivity::FRESNEL);
        assert_eq!(rec.material.index_of_refraction, 1.33);
    }

    #[test]
    fn test_preset_cameras_see_the_scene() {
        for (scene, camera) in [cornell_box(16, 16), sphere_showcase(16, 16)] {
            let mut rng = StdRng::seed_from_u64(0);
            let ray = camera.random_ray(8, 8, &mut rng);
            assert!(scene.intersect(&ray).is_some());
        }
    }
}
