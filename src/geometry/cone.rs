use std::f32::consts::TAU;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::math::Vec3;

/// Tree silhouette: a cone standing on the y axis, base at `y_offset`,
/// apex at `y_offset + height`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeShape {
    pub height: f32,
    pub base_radius: f32,
    #[serde(default)]
    pub y_offset: f32,
}

impl ConeShape {
    pub fn new(height: f32, base_radius: f32, y_offset: f32) -> Self {
        Self { height, base_radius, y_offset }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("height", self.height), ("base_radius", self.base_radius)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidShape { field, value });
            }
        }
        if !self.y_offset.is_finite() {
            return Err(ConfigError::InvalidShape { field: "y_offset", value: self.y_offset });
        }
        Ok(())
    }

    /// Radius of the cross-section at `local_y` above the base
    pub fn radius_at(&self, local_y: f32) -> f32 {
        self.base_radius * (self.height - local_y) / self.height
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        sample_cone_surface(rng, self.height, self.base_radius, self.y_offset)
    }
}

/// Random point inside the tree cone.
///
/// Height is uniform; within each slice the point fills the whole disk
/// (square-root radius), so the foliage reads as a solid volume rather
/// than a hollow shell.
pub fn sample_cone_surface<R: Rng + ?Sized>(
    rng: &mut R,
    height: f32,
    base_radius: f32,
    y_offset: f32,
) -> Vec3 {
    // keep y strictly below the apex even if the product rounds up
    let y = (rng.random::<f32>() * height).min(height * (1.0 - f32::EPSILON));
    let radius_at_height = base_radius * (height - y) / height;

    let angle = rng.random::<f32>() * TAU;
    let r = rng.random::<f32>().sqrt() * radius_at_height;
    let (sin_a, cos_a) = angle.sin_cos();

    Vec3::new(r * cos_a, y + y_offset, r * sin_a)
}
