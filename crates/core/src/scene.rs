//! Scene graph capability traits.
//!
//! These traits describe the slice of a host engine's scene manager that the
//! placement routine relies on. Engines implement [`SceneGraph`] for their
//! manager and [`SceneNode`] for their node type; only the three accessors on
//! [`SceneNode`] are required, the transform setters are provided.

use glam::{Mat3, Vec3};
use thiserror::Error;

use crate::{Degrees, Transform};

/// Errors raised by a scene graph when addressing nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// No node is registered under the requested name.
    #[error("scene node not found: {0}")]
    NodeNotFound(String),
    /// A node with the requested name already exists.
    #[error("scene node already exists: {0}")]
    DuplicateNode(String),
    /// Node names must be non-empty.
    #[error("scene node name must not be empty")]
    EmptyName,
}

/// A named node carrying a local transform.
pub trait SceneNode {
    /// Name the node is registered under.
    fn name(&self) -> &str;

    /// Current local transform.
    fn local_transform(&self) -> &Transform;

    /// Mutable access to the local transform.
    fn local_transform_mut(&mut self) -> &mut Transform;

    /// Replace the local position.
    fn set_local_position(&mut self, position: Vec3) {
        self.local_transform_mut().position = position;
    }

    /// Replace the local rotation.
    fn set_local_rotation(&mut self, rotation: Mat3) {
        self.local_transform_mut().rotation = rotation;
    }

    /// Replace the local scale.
    fn set_local_scale(&mut self, scale: Vec3) {
        self.local_transform_mut().scale = scale;
    }

    /// Rotate about an axis in the node's own frame.
    fn rotate(&mut self, angle: Degrees, axis: Vec3) {
        self.local_transform_mut().rotate_local(angle, axis);
    }

    /// Rotate about the local X axis.
    fn pitch(&mut self, angle: Degrees) {
        self.rotate(angle, Vec3::X);
    }

    /// Rotate about the local Y axis.
    fn yaw(&mut self, angle: Degrees) {
        self.rotate(angle, Vec3::Y);
    }

    /// Rotate about the local Z axis.
    fn roll(&mut self, angle: Degrees) {
        self.rotate(angle, Vec3::Z);
    }
}

/// Name-addressable collection of scene nodes.
pub trait SceneGraph {
    /// Node type stored by this graph.
    type Node: SceneNode;

    /// Look up a node by name.
    fn scene_node(&self, name: &str) -> Result<&Self::Node, SceneError>;

    /// Look up a node by name for mutation.
    fn scene_node_mut(&mut self, name: &str) -> Result<&mut Self::Node, SceneError>;

    /// Register a new node with an identity transform.
    fn create_scene_node(&mut self, name: &str) -> Result<&mut Self::Node, SceneError>;

    /// Number of registered nodes.
    fn scene_node_count(&self) -> usize;
}
