//! Flat in-memory scene graph.
//!
//! Stands in for a host engine's scene manager in tests and in the headless
//! runner. Nodes are kept in name order and every lookup is recorded so tests
//! can assert which nodes a routine touched.

use std::cell::RefCell;
use std::collections::BTreeMap;

use grove_core::{SceneError, SceneGraph, SceneNode, Transform};
use serde::Serialize;

/// Node stored by [`MemoryScene`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNode {
    name: String,
    transform: Transform,
}

impl MemoryNode {
    /// Create a node with an identity transform.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
        }
    }
}

impl SceneNode for MemoryNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn local_transform(&self) -> &Transform {
        &self.transform
    }

    fn local_transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

/// Scene graph backed by an ordered map.
#[derive(Debug, Default)]
pub struct MemoryScene {
    nodes: BTreeMap<String, MemoryNode>,
    lookups: RefCell<Vec<String>>,
}

impl MemoryScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene holding identity nodes with the given names.
    pub fn with_nodes<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let nodes = names
            .into_iter()
            .map(|name| {
                let node = MemoryNode::new(name);
                (node.name.clone(), node)
            })
            .collect();
        Self {
            nodes,
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Names passed to `scene_node`/`scene_node_mut`, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    /// Forget recorded lookups.
    pub fn clear_lookups(&self) {
        self.lookups.borrow_mut().clear();
    }

    /// Transform of `name` without recording a lookup.
    pub fn transform_of(&self, name: &str) -> Option<Transform> {
        self.nodes.get(name).map(|node| node.transform)
    }

    /// Serializable view of every node's transform, in name order.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.nodes.values().map(NodeSnapshot::from_node).collect()
    }

    fn record_lookup(&self, name: &str) {
        self.lookups.borrow_mut().push(name.to_string());
    }
}

impl SceneGraph for MemoryScene {
    type Node = MemoryNode;

    fn scene_node(&self, name: &str) -> Result<&MemoryNode, SceneError> {
        self.record_lookup(name);
        self.nodes
            .get(name)
            .ok_or_else(|| SceneError::NodeNotFound(name.to_string()))
    }

    fn scene_node_mut(&mut self, name: &str) -> Result<&mut MemoryNode, SceneError> {
        self.record_lookup(name);
        self.nodes
            .get_mut(name)
            .ok_or_else(|| SceneError::NodeNotFound(name.to_string()))
    }

    fn create_scene_node(&mut self, name: &str) -> Result<&mut MemoryNode, SceneError> {
        if name.is_empty() {
            return Err(SceneError::EmptyName);
        }
        if self.nodes.contains_key(name) {
            return Err(SceneError::DuplicateNode(name.to_string()));
        }
        tracing::trace!(node = name, "created scene node");
        Ok(self
            .nodes
            .entry(name.to_string())
            .or_insert_with(|| MemoryNode::new(name)))
    }

    fn scene_node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Plain-array transform record for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    /// Node name.
    pub name: String,
    /// Local position `[x, y, z]`.
    pub position: [f32; 3],
    /// Local rotation matrix in column-major order.
    pub rotation: [f32; 9],
    /// Local scale `[x, y, z]`.
    pub scale: [f32; 3],
}

impl NodeSnapshot {
    fn from_node(node: &MemoryNode) -> Self {
        let t = node.local_transform();
        Self {
            name: node.name.clone(),
            position: t.position.to_array(),
            rotation: t.rotation.to_cols_array(),
            scale: t.scale.to_array(),
        }
    }
}
