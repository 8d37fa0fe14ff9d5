//! Triangle geometry and per-vertex shading normals.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use dod_math::{DVec3, Ray, EPSILON};

/// Vertices of a triangle plus its two precomputed edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleVertices {
    vertices: [DVec3; 3],
    u_vector: DVec3,
    v_vector: DVec3,
}

/// Raw result of a single ray/triangle test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Distance along the ray
    pub distance: f64,
    /// Barycentric weight of vertex 1
    pub u: f64,
    /// Barycentric weight of vertex 2
    pub v: f64,
    /// The ray struck the side opposite the winding-order normal
    pub backfacing: bool,
}

impl TriangleVertices {
    /// Create a new triangle from three vertices.
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
        Self {
            vertices: [v0, v1, v2],
            u_vector: v1 - v0,
            v_vector: v2 - v0,
        }
    }

    /// Edge from vertex 0 to vertex 1.
    #[inline]
    pub fn u_vector(&self) -> DVec3 {
        self.u_vector
    }

    /// Edge from vertex 0 to vertex 2.
    #[inline]
    pub fn v_vector(&self) -> DVec3 {
        self.v_vector
    }

    /// Unit normal following the counter-clockwise winding of the vertices.
    pub fn face_normal(&self) -> DVec3 {
        self.u_vector.cross(self.v_vector).normalize()
    }

    /// Test `ray` against this triangle.
    ///
    /// Parallel rays (near-zero determinant) and hits closer than `EPSILON`
    /// are misses.
    pub fn intersect(&self, ray: &Ray) -> Option<TriangleHit> {
        let p_vec = ray.direction().cross(self.v_vector);
        let det = self.u_vector.dot(p_vec);
        // Ray and triangle are parallel if det is close to 0
        if det.abs() < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let t_vec = ray.origin() - self.vertices[0];
        let u = t_vec.dot(p_vec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q_vec = t_vec.cross(self.u_vector);
        let v = ray.direction().dot(q_vec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let distance = self.v_vector.dot(q_vec) * inv_det;
        if distance <= EPSILON {
            return None;
        }

        Some(TriangleHit {
            distance,
            u,
            v,
            backfacing: det < 0.0,
        })
    }
}

/// Per-vertex shading normals of a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleNormals(pub [DVec3; 3]);

impl TriangleNormals {
    /// All three vertices share the face normal.
    pub fn flat(face_normal: DVec3) -> Self {
        Self([face_normal; 3])
    }

    /// Shading normal at barycentric `(u, v)`, facing the ray.
    ///
    /// Offsets the vertex 0 normal by the vertex 1 and vertex 2 deltas
    /// scaled by `u` and `v`.
    pub fn shading_normal(&self, u: f64, v: f64, backfacing: bool) -> DVec3 {
        let [n0, n1, n2] = self.0;
        let normal = (u * (n1 - n0) + v * (n2 - n0) + n0).normalize();
        if backfacing {
            -normal
        } else {
            normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> TriangleVertices {
        TriangleVertices::new(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_triangle_edges_and_normal() {
        let tri = unit_triangle();
        assert_eq!(tri.u_vector(), DVec3::X);
        assert_eq!(tri.v_vector(), DVec3::Y);
        assert_eq!(tri.face_normal(), DVec3::Z);
    }

    #[test]
    fn test_triangle_hit_barycentrics() {
        let tri = unit_triangle();
        let ray = Ray::new(DVec3::new(0.25, 0.25, 1.0), DVec3::new(0.0, 0.0, -1.0));

        let hit = tri.intersect(&ray).expect("ray should hit the triangle");
        assert!((hit.distance - 1.0).abs() < 1e-12);
        assert!((hit.u - 0.25).abs() < 1e-12);
        assert!((hit.v - 0.25).abs() < 1e-12);
        assert!(hit.u + hit.v <= 1.0);
        assert!(!hit.backfacing);
    }

    #[test]
    fn test_triangle_hit_from_behind_is_backfacing() {
        let tri = unit_triangle();
        let ray = Ray::new(DVec3::new(0.25, 0.25, -1.0), DVec3::Z);

        let hit = tri.intersect(&ray).expect("ray should hit the back face");
        assert!((hit.distance - 1.0).abs() < 1e-12);
        assert!(hit.backfacing);
    }

    #[test]
    fn test_triangle_miss_outside_edges() {
        let tri = unit_triangle();
        let down = DVec3::new(0.0, 0.0, -1.0);

        assert!(tri.intersect(&Ray::new(DVec3::new(0.75, 0.75, 1.0), down)).is_none());
        assert!(tri.intersect(&Ray::new(DVec3::new(-0.1, 0.5, 1.0), down)).is_none());
        assert!(tri.intersect(&Ray::new(DVec3::new(0.5, -0.1, 1.0), down)).is_none());
    }

    #[test]
    fn test_triangle_parallel_ray_never_hits() {
        let tri = unit_triangle();
        let origins = [
            DVec3::new(-1.0, 0.25, 0.0),
            DVec3::new(-1.0, 0.25, 1.0),
            DVec3::new(0.25, -3.0, 0.0),
            DVec3::new(0.1, 0.1, 0.0),
        ];
        for origin in origins {
            assert!(tri.intersect(&Ray::new(origin, DVec3::X)).is_none());
            assert!(tri.intersect(&Ray::new(origin, DVec3::Y)).is_none());
            let diagonal = DVec3::new(1.0, 1.0, 0.0).normalize();
            assert!(tri.intersect(&Ray::new(origin, diagonal)).is_none());
        }
    }

    #[test]
    fn test_triangle_behind_origin() {
        let tri = unit_triangle();
        let ray = Ray::new(DVec3::new(0.25, 0.25, 1.0), DVec3::Z);
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_flat_normals() {
        let normals = TriangleNormals::flat(DVec3::Z);
        assert_eq!(normals.shading_normal(0.3, 0.3, false), DVec3::Z);
        assert_eq!(normals.shading_normal(0.3, 0.3, true), -DVec3::Z);
    }

    #[test]
    fn test_shading_normal_blend_keeps_vertex_zero_weight() {
        let normals = TriangleNormals([DVec3::Z, DVec3::X, DVec3::Y]);

        // n0 + 0.5*(n1 - n0) + 0.5*(n2 - n0) = (0.5, 0.5, 0) once n0 cancels
        let n = normals.shading_normal(0.5, 0.5, false);
        let expected = DVec3::new(0.5, 0.5, 0.0).normalize();
        assert!((n - expected).length() < 1e-12);

        let n = normals.shading_normal(0.0, 0.0, false);
        assert_eq!(n, DVec3::Z);
    }
}
