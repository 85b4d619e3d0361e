pub mod config;
pub mod entity;
pub mod builder;

pub use config::{EntityKind, LayerConfig, SceneConfig, MAX_ENTITIES};
pub use entity::{Ornament, Particle, Targets};
pub use builder::{build_ornaments, build_ornaments_with, build_particles, build_particles_with};
