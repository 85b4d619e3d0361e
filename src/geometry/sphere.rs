use std::f32::consts::TAU;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::math::Vec3;

/// Solid sphere centered at the origin, used for the scattered formation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereShape {
    pub radius: f32,
}

impl SphereShape {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius.is_finite() && self.radius > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidShape { field: "radius", value: self.radius })
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        sample_sphere_volume(rng, self.radius)
    }
}

/// Random point uniformly distributed by volume inside a sphere.
///
/// The cube root on the radius keeps the density flat; a linear radius
/// would pile points up around the center.
pub fn sample_sphere_volume<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = TAU * rng.random::<f32>();
    let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
    let r = rng.random::<f32>().cbrt() * radius;

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    Vec3::new(
        r * sin_phi * cos_theta,
        r * sin_phi * sin_theta,
        r * cos_phi,
    )
}
