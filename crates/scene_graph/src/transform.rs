// crates/scene_graph/src/transform.rs

use glam::{Mat3, Vec3};

/// World-space placement of a scene node.
///
/// The engine convention is Y-forward, Z-up: the second column of `rotate`
/// is the node's forward basis vector.
#[derive(Clone, Copy, Debug)]
pub struct WorldTransform {
    pub rotate: Mat3,
    pub translate: Vec3,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self {
            rotate: Mat3::IDENTITY,
            translate: Vec3::ZERO,
        }
    }
}

impl WorldTransform {
    pub fn at(translate: Vec3) -> Self {
        Self {
            rotate: Mat3::IDENTITY,
            translate,
        }
    }

    /// The forward basis vector (second rotation column). Not normalized:
    /// scaled or degenerate rotations return whatever the column holds.
    pub fn forward(&self) -> Vec3 {
        self.rotate.y_axis
    }
}
