//! Point distributions for the two formations
//!
//! The scattered formation samples a solid sphere, the tree formation samples
//! a cone standing on the y axis. Both samplers are pure apart from the random
//! source handed to them.

mod sphere;
mod cone;

pub use sphere::{SphereShape, sample_sphere_volume};
pub use cone::{ConeShape, sample_cone_surface};
