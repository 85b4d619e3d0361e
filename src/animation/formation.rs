use serde::{Deserialize, Serialize};

/// Which target shape every entity is currently heading for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Formation {
    /// Gathered into the tree cone
    #[default]
    #[serde(rename = "TREE_SHAPE")]
    Formed,
    /// Drifting through the scatter sphere
    #[serde(rename = "SCATTERED")]
    Dispersed,
}

impl Formation {
    pub fn from_formed(formed: bool) -> Self {
        if formed {
            Formation::Formed
        } else {
            Formation::Dispersed
        }
    }

    pub fn is_formed(self) -> bool {
        self == Formation::Formed
    }

    /// The other formation
    pub fn toggled(self) -> Self {
        match self {
            Formation::Formed => Formation::Dispersed,
            Formation::Dispersed => Formation::Formed,
        }
    }
}

/// Clock reading handed in by the render loop once per frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    /// Seconds since the host clock started
    pub elapsed: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameTick {
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// Frames with non-finite or negative timing are dropped so they can
    /// never poison entity positions
    pub fn is_usable(&self) -> bool {
        self.elapsed.is_finite() && self.delta.is_finite() && self.delta >= 0.0
    }
}
