//! Per-frame motion for every entity in a layer
//!
//! All entities in a layer move in index order within one call. They do not
//! interact, so the order only matters for reproducibility.

use std::f32::consts::TAU;
use crate::dataset::{Ornament, Particle};
use crate::math::Vec3;
use super::damping::{damp_lerp, smooth_damp3};
use super::formation::{Formation, FrameTick};
use super::profile::MotionProfile;

/// Per-axis share of the spin speed applied to ornaments (x, y, z)
const SPIN_AXES: Vec3 = Vec3::new(0.2, 0.5, 0.0);

/// Advance point-cloud particles with the linear-damped lerp.
///
/// Returns `false` and leaves every particle untouched when the tick is
/// unusable.
pub fn advance_particles(
    particles: &mut [Particle],
    profile: &MotionProfile,
    formation: Formation,
    tick: FrameTick,
) -> bool {
    if !tick.is_usable() {
        return false;
    }
    let motion = profile.for_formation(formation);

    for particle in particles.iter_mut() {
        let target = particle
            .targets()
            .select(formation)
            .offset_y(motion.bob(tick.elapsed, particle.phase()));
        particle.position = damp_lerp(particle.position, target, motion.smoothing, tick.delta);
    }
    true
}

/// Advance instanced ornaments with the critically damped spring, and spin them.
pub fn advance_ornaments(
    ornaments: &mut [Ornament],
    profile: &MotionProfile,
    formation: Formation,
    tick: FrameTick,
) -> bool {
    if !tick.is_usable() {
        return false;
    }
    let motion = profile.for_formation(formation);

    for ornament in ornaments.iter_mut() {
        let target = ornament
            .targets()
            .select(formation)
            .offset_y(motion.bob(tick.elapsed, ornament.phase()));
        ornament.position = smooth_damp3(
            ornament.position,
            target,
            &mut ornament.velocity,
            motion.smoothing,
            tick.delta,
        );

        let step = ornament.rotation_speed() * tick.delta;
        let spin = ornament.spin + SPIN_AXES * step;
        ornament.spin = Vec3::new(spin.x.rem_euclid(TAU), spin.y.rem_euclid(TAU), spin.z.rem_euclid(TAU));
    }
    true
}
