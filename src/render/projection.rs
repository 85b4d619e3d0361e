//! Copy entity state into host buffers
//!
//! Colors are written once when buffers are attached. Positions and matrices
//! are rewritten every frame and flagged dirty once, after the whole batch.

use crate::dataset::{Ornament, Particle};
use crate::math::Mat4;
use super::buffers::{InstanceBuffers, PointBuffers};

pub fn write_particle_colors(particles: &[Particle], buffers: &mut PointBuffers) {
    for (chunk, particle) in buffers.colors.chunks_mut().zip(particles) {
        chunk.copy_from_slice(&particle.color().to_array());
    }
    buffers.colors.mark_dirty();
}

pub fn project_particles(particles: &[Particle], buffers: &mut PointBuffers) {
    for (chunk, particle) in buffers.positions.chunks_mut().zip(particles) {
        chunk.copy_from_slice(&particle.position().to_array());
    }
    buffers.positions.mark_dirty();
}

pub fn write_ornament_colors(ornaments: &[Ornament], buffers: &mut InstanceBuffers) {
    for (chunk, ornament) in buffers.colors.chunks_mut().zip(ornaments) {
        chunk.copy_from_slice(&ornament.color().to_array());
    }
    buffers.colors.mark_dirty();
}

pub fn project_ornaments(ornaments: &[Ornament], buffers: &mut InstanceBuffers) {
    for (chunk, ornament) in buffers.matrices.chunks_mut().zip(ornaments) {
        let matrix = Mat4::compose(ornament.position(), ornament.orientation(), ornament.scale());
        chunk.copy_from_slice(matrix.as_slice());
    }
    buffers.matrices.mark_dirty();
}
