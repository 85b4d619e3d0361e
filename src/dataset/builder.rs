//! One-time construction of entity datasets
//!
//! Layouts are random on every build; only the ranges below are stable.

use std::f32::consts::{PI, TAU};
use std::ops::Range;
use rand::Rng;
use crate::error::ConfigError;
use crate::math::{Color, Vec3};
use super::config::LayerConfig;
use super::entity::{Ornament, Particle, Targets};

/// Ornament scale range
pub const ORNAMENT_SCALE: Range<f32> = 0.15..0.45;

/// Ornament spin speed range, radians per second
pub const ORNAMENT_ROTATION_SPEED: Range<f32> = 0.2..0.7;

/// Horizontal push applied to ornament tree targets so they sit on the
/// foliage instead of inside it
pub const ORNAMENT_PUSH: f32 = 1.1;

/// Ornaments closer than this to the trunk axis are left where they are
const PUSH_MIN_RADIUS: f32 = 0.1;

pub const EMERALD: Color = Color::rgb(0.0, 66.0 / 255.0, 37.0 / 255.0);
pub const EMERALD_BRIGHT: Color = Color::rgb(0.0, 107.0 / 255.0, 60.0 / 255.0);
pub const GOLD_DUST: Color = Color::rgb(1.0, 215.0 / 255.0, 0.0);

/// Share of default foliage points drawn as gold sparkles
const GOLD_DUST_CHANCE: f32 = 0.1;

/// Build a foliage layer using the thread-local random source
pub fn build_particles(config: &LayerConfig) -> Result<Vec<Particle>, ConfigError> {
    build_particles_with(config, &mut rand::rng())
}

pub fn build_particles_with<R: Rng + ?Sized>(
    config: &LayerConfig,
    rng: &mut R,
) -> Result<Vec<Particle>, ConfigError> {
    config.validate()?;
    let tree = config.tree_shape();
    let scatter = config.scatter_shape();

    let particles = (0..config.count)
        .map(|_| {
            let targets = Targets {
                tree: tree.sample(rng),
                scatter: scatter.sample(rng),
            };
            let color = foliage_color(rng, &config.palette);
            let phase = rng.random_range(0.0..TAU);
            Particle::new(targets, phase, color)
        })
        .collect();

    Ok(particles)
}

/// Build an ornament layer using the thread-local random source
pub fn build_ornaments(config: &LayerConfig) -> Result<Vec<Ornament>, ConfigError> {
    build_ornaments_with(config, &mut rand::rng())
}

pub fn build_ornaments_with<R: Rng + ?Sized>(
    config: &LayerConfig,
    rng: &mut R,
) -> Result<Vec<Ornament>, ConfigError> {
    config.validate()?;
    if config.palette.is_empty() {
        return Err(ConfigError::EmptyPalette);
    }
    let tree = config.tree_shape();
    let scatter = config.scatter_shape();

    let ornaments = (0..config.count)
        .map(|_| {
            let targets = Targets {
                tree: push_outward(tree.sample(rng)),
                scatter: scatter.sample(rng),
            };
            let scale = rng.random_range(ORNAMENT_SCALE);
            let rotation = Vec3::new(rng.random_range(0.0..PI), rng.random_range(0.0..PI), 0.0);
            let color = config.palette[rng.random_range(0..config.palette.len())];
            let rotation_speed = rng.random_range(ORNAMENT_ROTATION_SPEED);
            let phase = rng.random_range(0.0..TAU);
            Ornament::new(targets, phase, rotation, rotation_speed, scale, color)
        })
        .collect();

    Ok(ornaments)
}

fn push_outward(p: Vec3) -> Vec3 {
    if p.horizontal_length() > PUSH_MIN_RADIUS {
        Vec3::new(p.x * ORNAMENT_PUSH, p.y, p.z * ORNAMENT_PUSH)
    } else {
        p
    }
}

fn foliage_color<R: Rng + ?Sized>(rng: &mut R, palette: &[Color]) -> Color {
    if !palette.is_empty() {
        return palette[rng.random_range(0..palette.len())];
    }
    if rng.random::<f32>() < GOLD_DUST_CHANCE {
        GOLD_DUST
    } else if rng.random_bool(0.5) {
        EMERALD
    } else {
        EMERALD_BRIGHT
    }
}
