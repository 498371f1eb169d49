#![warn(missing_docs)]
//! Scene capability surface shared across the workspace.
//!
//! The placement routine never owns a scene graph; it talks to whatever the
//! host engine hands it through the [`SceneGraph`] and [`SceneNode`] traits.

pub mod angle;
pub mod scene;
pub mod transform;

pub use angle::Degrees;
pub use scene::{SceneError, SceneGraph, SceneNode};
pub use transform::Transform;
