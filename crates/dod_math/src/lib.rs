//! Math primitives for the dod path tracer.
//!
//! Everything is double precision: points, directions and linear colors
//! are all `DVec3`.

// Re-export glam for convenience
pub use glam::*;

mod basis;
mod optics;
mod ray;
mod sampling;

pub use basis::OrthoNormalBasis;
pub use optics::{reflect, reflectance};
pub use ray::Ray;
pub use sampling::{cone_sample, gen_f64, hemisphere_sample};

/// Tolerance used by every surface distance comparison.
///
/// Rays leaving a surface start exactly on it; anything nearer than this
/// is treated as the surface the ray just left.
pub const EPSILON: f64 = 1e-4;
