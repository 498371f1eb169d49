//! Local transforms held by scene nodes.

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

use crate::Degrees;

/// Position, rotation and scale relative to a node's parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Local translation.
    pub position: Vec3,
    /// Local orientation as a rotation matrix.
    pub rotation: Mat3,
    /// Per-axis local scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Mat3::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Rotate about `axis` expressed in the node's own frame.
    ///
    /// The axis rotation is post-multiplied, so successive calls compose
    /// about the node's local axes rather than the parent's.
    pub fn rotate_local(&mut self, angle: Degrees, axis: Vec3) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        self.rotation = self.rotation * Mat3::from_axis_angle(axis, angle.to_radians());
    }
}
