//! Layers and the per-frame entry point
//!
//! A [`Scene`] is what the render loop talks to: it calls
//! [`Scene::update`] once per frame with the current formation and clock,
//! then uploads whichever buffers came back dirty.

use rand::Rng;
use crate::animation::{advance_ornaments, advance_particles, Formation, FrameTick, MotionProfile};
use crate::dataset::{
    build_ornaments_with, build_particles_with, EntityKind, LayerConfig, Ornament, Particle, SceneConfig,
};
use crate::error::ConfigError;
use crate::render::{
    project_ornaments, project_particles, write_ornament_colors, write_particle_colors, InstanceBuffers,
    PointBuffers,
};

/// Foliage point cloud
#[derive(Debug, Clone)]
pub struct PointLayer {
    particles: Vec<Particle>,
    motion: MotionProfile,
    buffers: Option<PointBuffers>,
}

impl PointLayer {
    pub fn build(config: &LayerConfig) -> Result<Self, ConfigError> {
        Self::build_with(config, &mut rand::rng())
    }

    pub fn build_with<R: Rng + ?Sized>(config: &LayerConfig, rng: &mut R) -> Result<Self, ConfigError> {
        Ok(Self {
            particles: build_particles_with(config, rng)?,
            motion: config.motion_profile(),
            buffers: None,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn motion(&self) -> &MotionProfile {
        &self.motion
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Allocate host buffers and fill them with colors and current positions
    pub fn attach_buffers(&mut self) -> Result<&mut PointBuffers, ConfigError> {
        let mut buffers = PointBuffers::new(self.particles.len())?;
        write_particle_colors(&self.particles, &mut buffers);
        project_particles(&self.particles, &mut buffers);
        Ok(self.buffers.insert(buffers))
    }

    /// Hand the buffers back; updates become no-ops until reattached
    pub fn detach_buffers(&mut self) -> Option<PointBuffers> {
        self.buffers.take()
    }

    pub fn buffers(&self) -> Option<&PointBuffers> {
        self.buffers.as_ref()
    }

    pub fn buffers_mut(&mut self) -> Option<&mut PointBuffers> {
        self.buffers.as_mut()
    }

    /// Advance and project one frame. Returns whether anything moved.
    pub fn update(&mut self, formation: Formation, tick: FrameTick) -> bool {
        let Some(buffers) = self.buffers.as_mut() else {
            log::trace!("point layer not attached, skipping frame");
            return false;
        };
        if !advance_particles(&mut self.particles, &self.motion, formation, tick) {
            return false;
        }
        project_particles(&self.particles, buffers);
        true
    }
}

/// Batch of instanced ornament meshes
#[derive(Debug, Clone)]
pub struct InstanceLayer {
    kind: EntityKind,
    ornaments: Vec<Ornament>,
    motion: MotionProfile,
    buffers: Option<InstanceBuffers>,
}

impl InstanceLayer {
    pub fn build(config: &LayerConfig) -> Result<Self, ConfigError> {
        Self::build_with(config, &mut rand::rng())
    }

    pub fn build_with<R: Rng + ?Sized>(config: &LayerConfig, rng: &mut R) -> Result<Self, ConfigError> {
        Ok(Self {
            kind: config.kind,
            ornaments: build_ornaments_with(config, rng)?,
            motion: config.motion_profile(),
            buffers: None,
        })
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    pub fn motion(&self) -> &MotionProfile {
        &self.motion
    }

    pub fn len(&self) -> usize {
        self.ornaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ornaments.is_empty()
    }

    /// Allocate host buffers and fill them with colors and current transforms
    pub fn attach_buffers(&mut self) -> Result<&mut InstanceBuffers, ConfigError> {
        let mut buffers = InstanceBuffers::new(self.ornaments.len())?;
        write_ornament_colors(&self.ornaments, &mut buffers);
        project_ornaments(&self.ornaments, &mut buffers);
        Ok(self.buffers.insert(buffers))
    }

    pub fn detach_buffers(&mut self) -> Option<InstanceBuffers> {
        self.buffers.take()
    }

    pub fn buffers(&self) -> Option<&InstanceBuffers> {
        self.buffers.as_ref()
    }

    pub fn buffers_mut(&mut self) -> Option<&mut InstanceBuffers> {
        self.buffers.as_mut()
    }

    pub fn update(&mut self, formation: Formation, tick: FrameTick) -> bool {
        let Some(buffers) = self.buffers.as_mut() else {
            log::trace!("{:?} layer not attached, skipping frame", self.kind);
            return false;
        };
        if !advance_ornaments(&mut self.ornaments, &self.motion, formation, tick) {
            return false;
        }
        project_ornaments(&self.ornaments, buffers);
        true
    }
}

/// One entity collection of either flavor
#[derive(Debug, Clone)]
pub enum Layer {
    Points(PointLayer),
    Instances(InstanceLayer),
}

impl Layer {
    pub fn build_with<R: Rng + ?Sized>(config: &LayerConfig, rng: &mut R) -> Result<Self, ConfigError> {
        if config.kind.is_ornament() {
            InstanceLayer::build_with(config, rng).map(Layer::Instances)
        } else {
            PointLayer::build_with(config, rng).map(Layer::Points)
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Layer::Points(_) => EntityKind::Particle,
            Layer::Instances(layer) => layer.kind(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Layer::Points(layer) => layer.len(),
            Layer::Instances(layer) => layer.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn attach_buffers(&mut self) -> Result<(), ConfigError> {
        match self {
            Layer::Points(layer) => layer.attach_buffers().map(|_| ()),
            Layer::Instances(layer) => layer.attach_buffers().map(|_| ()),
        }
    }

    pub fn detach_buffers(&mut self) {
        match self {
            Layer::Points(layer) => {
                layer.detach_buffers();
            }
            Layer::Instances(layer) => {
                layer.detach_buffers();
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        match self {
            Layer::Points(layer) => layer.buffers().is_some(),
            Layer::Instances(layer) => layer.buffers().is_some(),
        }
    }

    pub fn update(&mut self, formation: Formation, tick: FrameTick) -> bool {
        match self {
            Layer::Points(layer) => layer.update(formation, tick),
            Layer::Instances(layer) => layer.update(formation, tick),
        }
    }
}

/// Every layer of the visual, updated together
#[derive(Debug, Clone)]
pub struct Scene {
    layers: Vec<Layer>,
}

impl Scene {
    pub fn from_config(config: &SceneConfig) -> Result<Self, ConfigError> {
        Self::from_config_with(config, &mut rand::rng())
    }

    pub fn from_config_with<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let layers = config
            .layers
            .iter()
            .map(|layer| Layer::build_with(layer, rng))
            .collect::<Result<Vec<_>, _>>()?;

        for layer in &layers {
            log::info!("Built {:?} layer with {} entities", layer.kind(), layer.len());
        }

        Ok(Self { layers })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::from_config(&SceneConfig::from_yaml(yaml)?)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    pub fn attach_all(&mut self) -> Result<(), ConfigError> {
        self.layers.iter_mut().try_for_each(Layer::attach_buffers)
    }

    pub fn detach_all(&mut self) {
        self.layers.iter_mut().for_each(Layer::detach_buffers);
    }

    /// Advance every attached layer by one frame.
    ///
    /// Returns the number of layers that moved; detached layers and unusable
    /// ticks are skipped silently.
    pub fn update(&mut self, formation: Formation, tick: FrameTick) -> usize {
        self.layers
            .iter_mut()
            .map(|layer| layer.update(formation, tick))
            .filter(|&moved| moved)
            .count()
    }
}
