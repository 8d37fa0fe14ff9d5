//! Geometry and material store plus nearest-hit queries.
//!
//! Primitives are kept in index-aligned arrays: `spheres[i]` pairs with
//! `sphere_materials[i]`, and `triangle_vertices[i]`, `triangle_normals[i]`
//! and `triangle_materials[i]` describe the same triangle. Intersection is a
//! linear scan over every primitive.

use crate::{
    hit::{Hit, IntersectionRecord},
    sphere::Sphere,
    triangle::{TriangleHit, TriangleNormals, TriangleVertices},
    Color, Material,
};
use dod_math::{DVec3, Ray};

/// An append-only scene. Build it up front, then render with `&self`.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    sphere_materials: Vec<Material>,
    triangle_vertices: Vec<TriangleVertices>,
    triangle_normals: Vec<TriangleNormals>,
    triangle_materials: Vec<Material>,
    environment: Color,
}

impl Scene {
    /// Create an empty scene with a black environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere.
    pub fn add_sphere(&mut self, centre: DVec3, radius: f64, material: Material) {
        log::debug!("Adding sphere at {centre} radius {radius}");
        self.spheres.push(Sphere::new(centre, radius));
        self.sphere_materials.push(material);
    }

    /// Add a flat-shaded triangle. Vertices wind counter-clockwise around
    /// the front face.
    pub fn add_triangle(&mut self, v0: DVec3, v1: DVec3, v2: DVec3, material: Material) {
        log::debug!("Adding triangle {v0} {v1} {v2}");
        let vertices = TriangleVertices::new(v0, v1, v2);
        self.triangle_normals.push(TriangleNormals::flat(vertices.face_normal()));
        self.triangle_vertices.push(vertices);
        self.triangle_materials.push(material);
    }

    /// Add a triangle with explicit per-vertex shading normals.
    pub fn add_smooth_triangle(
        &mut self,
        vertices: [DVec3; 3],
        normals: [DVec3; 3],
        material: Material,
    ) {
        let [v0, v1, v2] = vertices;
        log::debug!("Adding smooth triangle {v0} {v1} {v2}");
        self.triangle_vertices.push(TriangleVertices::new(v0, v1, v2));
        self.triangle_normals.push(TriangleNormals(normals.map(|n| n.normalize())));
        self.triangle_materials.push(material);
    }

    /// Set the color returned for rays that escape the scene.
    pub fn set_environment_color(&mut self, color: Color) {
        self.environment = color;
    }

    pub fn environment_color(&self) -> Color {
        self.environment
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle_vertices.len()
    }

    /// Number of primitives, spheres and triangles alike, that emit light.
    pub fn emitter_count(&self) -> usize {
        self.sphere_materials
            .iter()
            .chain(&self.triangle_materials)
            .filter(|material| material.is_emissive())
            .count()
    }

    /// Nearest sphere hit strictly closer than `nearer_than`.
    pub fn intersect_spheres(
        &self,
        ray: &Ray,
        nearer_than: f64,
    ) -> Option<IntersectionRecord<'_>> {
        let mut nearest_distance = nearer_than;
        let mut nearest_index = None;
        for (index, sphere) in self.spheres.iter().enumerate() {
            if let Some(t) = sphere.intersect(ray) {
                if t < nearest_distance {
                    nearest_index = Some(index);
                    nearest_distance = t;
                }
            }
        }
        let index = nearest_index?;

        let position = ray.at(nearest_distance);
        let mut normal = (position - self.spheres[index].centre).normalize();
        let inside = normal.dot(ray.direction()) > 0.0;
        if inside {
            normal = -normal;
        }
        Some(IntersectionRecord {
            hit: Hit {
                distance: nearest_distance,
                inside,
                position,
                normal,
            },
            material: &self.sphere_materials[index],
        })
    }

    /// Nearest triangle hit strictly closer than `nearer_than`.
    pub fn intersect_triangles(
        &self,
        ray: &Ray,
        nearer_than: f64,
    ) -> Option<IntersectionRecord<'_>> {
        let mut nearest: Option<(usize, TriangleHit)> = None;
        let mut nearest_distance = nearer_than;
        for (index, triangle) in self.triangle_vertices.iter().enumerate() {
            if let Some(hit) = triangle.intersect(ray) {
                if hit.distance < nearest_distance {
                    nearest_distance = hit.distance;
                    nearest = Some((index, hit));
                }
            }
        }
        let (index, tri_hit) = nearest?;

        let normal = self.triangle_normals[index].shading_normal(
            tri_hit.u,
            tri_hit.v,
            tri_hit.backfacing,
        );
        Some(IntersectionRecord {
            hit: Hit {
                distance: tri_hit.distance,
                inside: tri_hit.backfacing,
                position: ray.at(tri_hit.distance),
                normal,
            },
            material: &self.triangle_materials[index],
        })
    }

    /// Nearest hit across every primitive, or `None` if the ray escapes.
    pub fn intersect(&self, ray: &Ray) -> Option<IntersectionRecord<'_>> {
        let sphere_rec = self.intersect_spheres(ray, f64::INFINITY);
        let bound = sphere_rec.map_or(f64::INFINITY, |rec| rec.hit.distance);
        self.intersect_triangles(ray, bound).or(sphere_rec)
    }
}
