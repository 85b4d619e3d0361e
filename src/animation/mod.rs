//! Motion between the tree and scattered formations
//!
//! Target selection flips instantly with the formation; positions follow
//! through one of two smoothing policies:
//! - a clamped lerp for large point clouds
//! - a critically damped spring for small batches of instanced meshes

mod formation;
mod damping;
mod profile;
mod integrator;

pub use formation::{Formation, FrameTick};
pub use damping::{damp_lerp, lerp_factor, smooth_damp, smooth_damp3, SNAP_EPSILON};
pub use profile::{FormationMotion, MotionProfile};
pub use integrator::{advance_ornaments, advance_particles};
