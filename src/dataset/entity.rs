use crate::animation::Formation;
use crate::math::{Color, Vec3};

/// The two fixed destinations of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Targets {
    pub tree: Vec3,
    pub scatter: Vec3,
}

impl Targets {
    pub fn select(&self, formation: Formation) -> Vec3 {
        match formation {
            Formation::Formed => self.tree,
            Formation::Dispersed => self.scatter,
        }
    }
}

/// One foliage point
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    targets: Targets,
    pub(crate) position: Vec3,
    phase: f32,
    color: Color,
}

impl Particle {
    /// New particles start on their scatter target
    pub fn new(targets: Targets, phase: f32, color: Color) -> Self {
        Self {
            targets,
            position: targets.scatter,
            phase,
            color,
        }
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// One instanced ornament mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Ornament {
    targets: Targets,
    pub(crate) position: Vec3,
    /// Spring state, per axis
    pub(crate) velocity: Vec3,
    phase: f32,
    /// Euler XYZ orientation at creation
    rotation: Vec3,
    rotation_speed: f32,
    /// Rotation accumulated since creation
    pub(crate) spin: Vec3,
    scale: f32,
    color: Color,
}

impl Ornament {
    pub fn new(
        targets: Targets,
        phase: f32,
        rotation: Vec3,
        rotation_speed: f32,
        scale: f32,
        color: Color,
    ) -> Self {
        Self {
            targets,
            position: targets.scatter,
            velocity: Vec3::ZERO,
            phase,
            rotation,
            rotation_speed,
            spin: Vec3::ZERO,
            scale,
            color,
        }
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Current orientation: creation rotation plus accumulated spin
    pub fn orientation(&self) -> Vec3 {
        self.rotation + self.spin
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> Targets {
        Targets {
            tree: Vec3::new(0.0, 1.0, 0.0),
            scatter: Vec3::new(5.0, -2.0, 3.0),
        }
    }

    #[test]
    fn test_select_follows_formation() {
        let t = targets();
        assert_eq!(t.select(Formation::Formed), t.tree);
        assert_eq!(t.select(Formation::Dispersed), t.scatter);
    }

    #[test]
    fn test_entities_start_scattered() {
        let p = Particle::new(targets(), 0.5, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(p.position(), targets().scatter);

        let o = Ornament::new(targets(), 0.5, Vec3::new(0.3, 0.2, 0.0), 0.4, 0.2, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(o.position(), targets().scatter);
        assert_eq!(o.orientation(), Vec3::new(0.3, 0.2, 0.0));
    }
}
