use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use super::formation::Formation;

/// Motion parameters for one formation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormationMotion {
    /// Lerp rate (per second) for point clouds, smoothing time (seconds)
    /// for instanced meshes
    pub smoothing: f32,
    /// Height of the vertical bob added to the target
    #[serde(default)]
    pub amplitude: f32,
    /// Angular frequency of the bob, radians per second
    #[serde(default)]
    pub frequency: f32,
}

impl FormationMotion {
    pub const fn new(smoothing: f32, amplitude: f32, frequency: f32) -> Self {
        Self { smoothing, amplitude, frequency }
    }

    /// Vertical offset for an entity with the given phase
    pub fn bob(&self, elapsed: f32, phase: f32) -> f32 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        (elapsed * self.frequency + phase).sin() * self.amplitude
    }
}

/// Per-layer motion: one parameter set per formation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionProfile {
    pub formed: FormationMotion,
    pub dispersed: FormationMotion,
}

impl MotionProfile {
    /// Foliage defaults: tight, fast gathering with a faint breathing
    /// vibration; loose, slow drift when scattered
    pub const fn point_cloud() -> Self {
        Self {
            formed: FormationMotion::new(1.5, 0.02, 2.0),
            dispersed: FormationMotion::new(0.8, 0.5, 0.5),
        }
    }

    /// Ornament defaults: settle exactly on the tree, faint float when scattered
    pub const fn instanced() -> Self {
        Self {
            formed: FormationMotion::new(1.2, 0.0, 0.0),
            dispersed: FormationMotion::new(2.5, 0.005, 1.0),
        }
    }

    pub fn for_formation(&self, formation: Formation) -> &FormationMotion {
        match formation {
            Formation::Formed => &self.formed,
            Formation::Dispersed => &self.dispersed,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("formed.smoothing", self.formed.smoothing),
            ("formed.amplitude", self.formed.amplitude),
            ("formed.frequency", self.formed.frequency),
            ("dispersed.smoothing", self.dispersed.smoothing),
            ("dispersed.amplitude", self.dispersed.amplitude),
            ("dispersed.frequency", self.dispersed.frequency),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidMotion { field, value });
            }
        }
        Ok(())
    }

    /// Same profile with the vertical bob switched off in both formations
    pub fn without_bob(mut self) -> Self {
        self.formed.amplitude = 0.0;
        self.dispersed.amplitude = 0.0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formed_is_tighter_for_point_clouds() {
        let p = MotionProfile::point_cloud();
        assert!(p.formed.smoothing > p.dispersed.smoothing);
        assert!(p.formed.amplitude < p.dispersed.amplitude);
        assert!(p.formed.frequency > p.dispersed.frequency);
    }

    #[test]
    fn test_instanced_settles_faster_when_formed() {
        let p = MotionProfile::instanced();
        assert!(p.formed.smoothing < p.dispersed.smoothing);
        assert_eq!(p.formed.bob(3.0, 1.0), 0.0);
    }

    #[test]
    fn test_bob_bounded_by_amplitude() {
        let m = FormationMotion::new(1.0, 0.5, 0.5);
        for i in 0..200 {
            let t = i as f32 * 0.1;
            assert!(m.bob(t, 1.3).abs() <= 0.5 + 1e-6);
        }
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        assert!(MotionProfile::point_cloud().validate().is_ok());
        assert!(MotionProfile::instanced().validate().is_ok());

        let mut p = MotionProfile::point_cloud();
        p.dispersed.smoothing = -1.0;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::InvalidMotion { field: "dispersed.smoothing", .. })
        ));

        let mut p = MotionProfile::instanced();
        p.formed.frequency = f32::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_profile_from_yaml_defaults_missing_bob() {
        let yaml = "formed: { smoothing: 3.0 }\ndispersed: { smoothing: 0.5, amplitude: 0.1, frequency: 1.0 }";
        let p: MotionProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(p.formed, FormationMotion::new(3.0, 0.0, 0.0));
        assert_eq!(p.for_formation(Formation::Dispersed).amplitude, 0.1);
    }
}
