//! Surface materials.
//!
//! Every primitive carries one flat `Material`. The radiance estimator picks
//! between a specular and a diffuse bounce per sample using the material's
//! reflectivity, so a single struct covers matte, glossy, mirror, glass-like
//! and emissive surfaces.

use dod_math::DVec3;

/// Color type alias (linear RGB)
pub type Color = DVec3;

/// Probability that a bounce off a surface is specular.
///
/// Holds either a fixed probability in [0, 1] or a marker asking for the
/// probability to be computed per bounce from the incidence angle and the
/// index of refraction. The only way to build one is through `fixed`,
/// `from_raw` or `FRESNEL`, so a fixed value is always in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflectivity(f64);

impl Reflectivity {
    /// Raw value reserved for "use the Fresnel term".
    const FRESNEL_SENTINEL: f64 = -1.0;

    /// Reflectance computed per bounce with the Fresnel equations.
    pub const FRESNEL: Self = Self(Self::FRESNEL_SENTINEL);

    /// Fixed probability, clamped to [0, 1]. NaN maps to 0.
    pub fn fixed(value: f64) -> Self {
        Self(value.max(0.0).min(1.0))
    }

    /// Build from a raw authored value: any negative value selects
    /// `FRESNEL`, everything else is clamped to [0, 1].
    pub fn from_raw(value: f64) -> Self {
        if value < 0.0 {
            Self::FRESNEL
        } else {
            Self::fixed(value)
        }
    }

    /// The fixed probability, or `None` when the Fresnel term applies.
    pub fn fixed_value(self) -> Option<f64> {
        (self.0 != Self::FRESNEL_SENTINEL).then_some(self.0)
    }
}

/// Material properties of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse/albedo color (RGB, 0-1)
    pub diffuse: Color,
    /// Emitted radiance
    pub emission: Color,
    /// Chance of a specular bounce
    pub reflectivity: Reflectivity,
    /// Half-angle of the glossy reflection cone; 0 is a perfect mirror
    pub reflection_cone_angle_radians: f64,
    /// Index of refraction, used by `Reflectivity::FRESNEL`
    pub index_of_refraction: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Color::splat(0.5),
            emission: Color::ZERO,
            reflectivity: Reflectivity::fixed(0.0),
            reflection_cone_angle_radians: 0.0,
            index_of_refraction: 1.0,
        }
    }
}

impl Material {
    /// Purely diffuse (Lambertian) material.
    pub fn diffuse(diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Default::default()
        }
    }

    /// Black surface emitting `emission`.
    pub fn light(emission: Color) -> Self {
        Self {
            diffuse: Color::ZERO,
            emission,
            ..Default::default()
        }
    }

    /// Perfect mirror.
    pub fn mirror() -> Self {
        Self {
            diffuse: Color::ZERO,
            reflectivity: Reflectivity::fixed(1.0),
            ..Default::default()
        }
    }

    /// Diffuse base with a Fresnel-weighted specular coat, e.g. glazed
    /// ceramic (`ior` around 1.5).
    pub fn glazed(diffuse: Color, ior: f64) -> Self {
        Self {
            diffuse,
            reflectivity: Reflectivity::FRESNEL,
            index_of_refraction: ior,
            ..Default::default()
        }
    }

    /// Set the reflectivity from a raw value (negative selects Fresnel).
    pub fn with_reflectivity(mut self, value: f64) -> Self {
        self.reflectivity = Reflectivity::from_raw(value);
        self
    }

    /// Set the glossy cone half-angle in degrees.
    pub fn with_gloss(mut self, cone_angle_degrees: f64) -> Self {
        self.reflection_cone_angle_radians = cone_angle_degrees.to_radians();
        self
    }

    /// Set the emission color.
    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    /// Set the index of refraction.
    pub fn with_ior(mut self, ior: f64) -> Self {
        self.index_of_refraction = ior;
        self
    }

    /// Check if this material is emissive.
    pub fn is_emissive(&self) -> bool {
        self.emission.length_squared() > 0.0
    }
}
