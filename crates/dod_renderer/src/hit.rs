//! Hit and IntersectionRecord for ray-surface intersection.

use crate::Material;
use dod_math::DVec3;

/// Geometric description of a ray striking a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray
    pub distance: f64,
    /// The ray arrived from inside (spheres) or behind (triangles) the surface
    pub inside: bool,
    /// Point of intersection
    pub position: DVec3,
    /// Surface normal at intersection (always points against the ray)
    pub normal: DVec3,
}

/// A `Hit` together with the material of the primitive that was struck.
///
/// The material is borrowed from the `Scene`, so a record never outlives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionRecord<'a> {
    pub hit: Hit,
    pub material: &'a Material,
}
