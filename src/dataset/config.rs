use serde::{Deserialize, Serialize};
use crate::animation::MotionProfile;
use crate::error::ConfigError;
use crate::geometry::{ConeShape, SphereShape};
use crate::math::Color;

/// Largest entity count a single layer accepts
pub const MAX_ENTITIES: usize = 100_000;

/// What a layer is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntityKind {
    /// Point-cloud foliage
    #[default]
    #[serde(rename = "PARTICLE")]
    Particle,
    /// Instanced sphere baubles
    #[serde(rename = "SPHERE")]
    SphereOrnament,
    /// Instanced gift boxes
    #[serde(rename = "BOX")]
    BoxOrnament,
}

impl EntityKind {
    pub fn is_ornament(self) -> bool {
        !matches!(self, EntityKind::Particle)
    }

    /// Name used in scene files
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Particle => "PARTICLE",
            EntityKind::SphereOrnament => "SPHERE",
            EntityKind::BoxOrnament => "BOX",
        }
    }
}

/// Configuration for one entity collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    #[serde(default)]
    pub kind: EntityKind,
    pub count: usize,
    /// Required for ornaments; particles fall back to the foliage mix
    #[serde(default)]
    pub palette: Vec<Color>,
    #[serde(default)]
    pub tree: Option<ConeShape>,
    #[serde(default)]
    pub scatter: Option<SphereShape>,
    #[serde(default)]
    pub motion: Option<MotionProfile>,
}

impl LayerConfig {
    pub fn particles(count: usize) -> Self {
        Self {
            kind: EntityKind::Particle,
            count,
            palette: Vec::new(),
            tree: None,
            scatter: None,
            motion: None,
        }
    }

    pub fn ornaments(kind: EntityKind, count: usize, palette: Vec<Color>) -> Self {
        Self {
            kind,
            count,
            palette,
            ..Self::particles(count)
        }
    }

    /// Ornament layer from hex strings, e.g. `["#FFD700", "#800020"]`
    pub fn ornaments_hex(kind: EntityKind, count: usize, palette: &[&str]) -> Result<Self, ConfigError> {
        let palette = palette
            .iter()
            .map(|hex| Color::from_hex(hex))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::ornaments(kind, count, palette))
    }

    pub fn with_tree(mut self, tree: ConeShape) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn with_scatter(mut self, scatter: SphereShape) -> Self {
        self.scatter = Some(scatter);
        self
    }

    pub fn with_motion(mut self, motion: MotionProfile) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Tree cone for this layer; ornaments sit on a slightly smaller cone
    /// than the foliage
    pub fn tree_shape(&self) -> ConeShape {
        self.tree.unwrap_or(if self.kind.is_ornament() {
            ConeShape::new(7.5, 3.2, -4.0)
        } else {
            ConeShape::new(8.0, 3.5, -4.0)
        })
    }

    pub fn scatter_shape(&self) -> SphereShape {
        self.scatter.unwrap_or(if self.kind.is_ornament() {
            SphereShape::new(10.0)
        } else {
            SphereShape::new(12.0)
        })
    }

    pub fn motion_profile(&self) -> MotionProfile {
        self.motion.unwrap_or(if self.kind.is_ornament() {
            MotionProfile::instanced()
        } else {
            MotionProfile::point_cloud()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyDataset);
        }
        if self.count > MAX_ENTITIES {
            return Err(ConfigError::TooManyEntities {
                count: self.count,
                max: MAX_ENTITIES,
            });
        }
        if self.kind.is_ornament() && self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        self.tree_shape().validate()?;
        self.scatter_shape().validate()?;
        self.motion_profile().validate()
    }
}

/// The whole visual: foliage first, then ornament batches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub layers: Vec<LayerConfig>,
}

impl SceneConfig {
    /// Parse and validate a YAML scene description
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layers.iter().try_for_each(LayerConfig::validate)
    }
}

impl Default for SceneConfig {
    /// Emerald foliage, gold baubles and red/green/gold gift boxes
    fn default() -> Self {
        let gold = [
            Color::rgb(1.0, 215.0 / 255.0, 0.0),
            Color::rgb(253.0 / 255.0, 185.0 / 255.0, 49.0 / 255.0),
            Color::rgb(197.0 / 255.0, 160.0 / 255.0, 89.0 / 255.0),
            Color::rgb(229.0 / 255.0, 170.0 / 255.0, 112.0 / 255.0),
        ];
        let gifts = [
            Color::rgb(128.0 / 255.0, 0.0, 32.0 / 255.0),
            Color::rgb(0.0, 66.0 / 255.0, 37.0 / 255.0),
            Color::rgb(1.0, 215.0 / 255.0, 0.0),
        ];

        Self {
            layers: vec![
                LayerConfig::particles(6000),
                LayerConfig::ornaments(EntityKind::SphereOrnament, 150, gold.to_vec()),
                LayerConfig::ornaments(EntityKind::BoxOrnament, 40, gifts.to_vec()),
            ],
        }
    }
}
