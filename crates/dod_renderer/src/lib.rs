//! dod - brute-force CPU path tracing
//!
//! A Monte Carlo path tracer over spheres and triangles. Geometry lives in a
//! flat, append-only `Scene`; every query is a linear scan over it. Light
//! transport picks one of a specular or diffuse bounce per sample, and the
//! render loop accumulates one sample per pixel per pass so the image can
//! be inspected while it converges.
//!
//! Everything runs on one thread with one seeded random stream, so a render
//! is bit-for-bit reproducible for a given seed.

mod camera;
mod hit;
mod material;
mod output;
pub mod presets;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use camera::{Camera, ThinLensCamera};
pub use hit::{Hit, IntersectionRecord};
pub use material::{Color, Material, Reflectivity};
pub use output::{color_to_rgba, linear_to_gamma, ArrayOutput, OutputError, OutputResult};
pub use renderer::RenderConfig;
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::{TriangleHit, TriangleNormals, TriangleVertices};

/// Re-export the math types used throughout the public API
pub use dod_math::{DVec3, Ray, EPSILON};
