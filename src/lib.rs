use wasm_bindgen::prelude::*;
use js_sys::Float32Array;

pub mod animation;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod math;
pub mod render;
pub mod scene;

pub use animation::{Formation, FrameTick, MotionProfile};
pub use dataset::{EntityKind, LayerConfig, SceneConfig};
pub use error::ConfigError;
pub use scene::{InstanceLayer, Layer, PointLayer, Scene};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // a second init (logger already installed by the page) is harmless
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Formation tree exposed to JavaScript.
///
/// The host render loop calls `update` once per frame and then uploads the
/// layer buffers whose dirty flags are set. The UI only flips the formation.
#[wasm_bindgen]
pub struct FormationTree {
    scene: Scene,
    formation: Formation,
}

#[wasm_bindgen]
impl FormationTree {
    /// Build from a YAML scene description, or the default scene when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(config_yaml: Option<String>) -> Result<FormationTree, JsValue> {
        Self::from_yaml(config_yaml.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Select the tree (`true`) or scattered (`false`) formation
    #[wasm_bindgen]
    pub fn set_formed(&mut self, formed: bool) {
        self.formation = Formation::from_formed(formed);
    }

    /// Flip the formation; returns whether the tree is now selected
    #[wasm_bindgen]
    pub fn toggle(&mut self) -> bool {
        self.formation = self.formation.toggled();
        self.formation.is_formed()
    }

    #[wasm_bindgen]
    pub fn is_formed(&self) -> bool {
        self.formation.is_formed()
    }

    /// Advance one frame; returns the number of layers that moved
    #[wasm_bindgen]
    pub fn update(&mut self, elapsed: f32, delta: f32) -> usize {
        self.scene.update(self.formation, FrameTick::new(elapsed, delta))
    }

    /// Allocate host buffers for every layer (the meshes are mounted)
    #[wasm_bindgen]
    pub fn attach(&mut self) -> Result<(), JsValue> {
        self.scene.attach_all().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Drop host buffers (the meshes are unmounted); updates pause
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        self.scene.detach_all();
    }

    #[wasm_bindgen]
    pub fn layer_count(&self) -> usize {
        self.scene.layers().len()
    }

    /// `PARTICLE`, `SPHERE` or `BOX`
    #[wasm_bindgen]
    pub fn layer_kind(&self, index: usize) -> Option<String> {
        self.scene.layer(index).map(|layer| layer.kind().as_str().to_string())
    }

    #[wasm_bindgen]
    pub fn layer_len(&self, index: usize) -> usize {
        self.scene.layer(index).map(Layer::len).unwrap_or(0)
    }

    /// Point positions, 3 floats per particle
    #[wasm_bindgen]
    pub fn positions(&self, index: usize) -> Option<Float32Array> {
        self.motion_slice(index)
            .filter(|_| matches!(self.scene.layer(index), Some(Layer::Points(_))))
            .map(Float32Array::from)
    }

    /// Instance matrices, 16 floats (column-major) per ornament
    #[wasm_bindgen]
    pub fn matrices(&self, index: usize) -> Option<Float32Array> {
        self.motion_slice(index)
            .filter(|_| matches!(self.scene.layer(index), Some(Layer::Instances(_))))
            .map(Float32Array::from)
    }

    /// Static colors, 3 floats per entity
    #[wasm_bindgen]
    pub fn colors(&self, index: usize) -> Option<Float32Array> {
        self.color_slice(index).map(Float32Array::from)
    }

    /// Whether positions/matrices changed since the last call
    #[wasm_bindgen]
    pub fn take_motion_dirty(&mut self, index: usize) -> bool {
        match self.scene.layer_mut(index) {
            Some(Layer::Points(layer)) => layer.buffers_mut().is_some_and(|b| b.positions.take_dirty()),
            Some(Layer::Instances(layer)) => layer.buffers_mut().is_some_and(|b| b.matrices.take_dirty()),
            None => false,
        }
    }

    /// Whether colors changed since the last call (only after attach)
    #[wasm_bindgen]
    pub fn take_colors_dirty(&mut self, index: usize) -> bool {
        match self.scene.layer_mut(index) {
            Some(Layer::Points(layer)) => layer.buffers_mut().is_some_and(|b| b.colors.take_dirty()),
            Some(Layer::Instances(layer)) => layer.buffers_mut().is_some_and(|b| b.colors.take_dirty()),
            None => false,
        }
    }
}

impl FormationTree {
    fn from_yaml(config_yaml: Option<&str>) -> Result<Self, ConfigError> {
        let config = match config_yaml {
            Some(yaml) => SceneConfig::from_yaml(yaml)?,
            None => SceneConfig::default(),
        };
        let mut scene = Scene::from_config(&config)?;
        scene.attach_all()?;

        Ok(Self {
            scene,
            formation: Formation::default(),
        })
    }

    fn motion_slice(&self, index: usize) -> Option<&[f32]> {
        match self.scene.layer(index)? {
            Layer::Points(layer) => layer.buffers().map(|b| b.positions.as_slice()),
            Layer::Instances(layer) => layer.buffers().map(|b| b.matrices.as_slice()),
        }
    }

    fn color_slice(&self, index: usize) -> Option<&[f32]> {
        match self.scene.layer(index)? {
            Layer::Points(layer) => layer.buffers().map(|b| b.colors.as_slice()),
            Layer::Instances(layer) => layer.buffers().map(|b| b.colors.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_default_scene_layout() {
        let tree = FormationTree::from_yaml(None).unwrap();
        assert_eq!(tree.layer_count(), 3);
        assert_eq!(tree.layer_kind(0).as_deref(), Some("PARTICLE"));
        assert_eq!(tree.layer_kind(1).as_deref(), Some("SPHERE"));
        assert_eq!(tree.layer_kind(2).as_deref(), Some("BOX"));
        assert_eq!(tree.layer_len(1), 150);
        assert_eq!(tree.layer_len(9), 0);
        assert!(tree.is_formed());
    }

    #[test]
    fn test_toggle_and_set() {
        let mut tree = FormationTree::from_yaml(Some("layers:\n  - count: 10\n")).unwrap();
        assert!(!tree.toggle());
        assert!(tree.toggle());
        tree.set_formed(false);
        assert!(!tree.is_formed());
    }

    #[test]
    fn test_update_flags_motion_once_colors_once() {
        let mut tree = FormationTree::from_yaml(Some("layers:\n  - count: 10\n")).unwrap();
        assert!(tree.take_colors_dirty(0));
        assert!(tree.take_motion_dirty(0));

        assert_eq!(tree.update(0.0, DT), 1);
        assert!(tree.take_motion_dirty(0));
        assert!(!tree.take_motion_dirty(0));
        assert!(!tree.take_colors_dirty(0));
    }

    #[test]
    fn test_detached_tree_pauses() {
        let mut tree = FormationTree::from_yaml(Some("layers:\n  - count: 10\n")).unwrap();
        tree.detach();
        assert_eq!(tree.update(0.0, DT), 0);
        assert!(tree.motion_slice(0).is_none());
        assert!(!tree.take_motion_dirty(0));

        tree.scene.attach_all().unwrap();
        assert_eq!(tree.motion_slice(0).map(<[f32]>::len), Some(30));
    }

    #[test]
    fn test_bad_yaml_is_config_error() {
        assert!(FormationTree::from_yaml(Some("layers: [{ kind: BOX, count: 2 }]")).is_err());
    }
}
