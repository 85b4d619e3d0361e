//! Hand-off to the rendering host
//!
//! The host draws; this module only fills the flat arrays it uploads.

pub mod buffers;
pub mod projection;

pub use buffers::{AttributeBuffer, InstanceBuffers, PointBuffers, COLOR_STRIDE, MATRIX_STRIDE, POSITION_STRIDE};
pub use projection::{project_ornaments, project_particles, write_ornament_colors, write_particle_colors};
