use glam::Mat3;
use grove_core::{SceneError, SceneGraph, SceneNode};
use tracing::{debug, info};

use crate::{PlacementRecord, PlacementTable};

/// What a placement run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// No scene graph was supplied, so nothing was touched.
    Skipped,
    /// Every record was written to its node.
    Applied {
        /// Number of nodes updated.
        nodes: usize,
    },
}

/// Write every record of `table` into the scene.
///
/// An absent scene is not an error. A missing node stops the run at that
/// record and the scene's error is returned unchanged; earlier records stay
/// applied.
pub fn apply_placements<S>(
    scene: Option<&mut S>,
    table: &PlacementTable,
) -> Result<PlacementOutcome, SceneError>
where
    S: SceneGraph + ?Sized,
{
    let Some(scene) = scene else {
        debug!("no scene graph supplied; skipping placement");
        return Ok(PlacementOutcome::Skipped);
    };

    for (name, record) in table.named_records() {
        let node = scene.scene_node_mut(&name)?;
        apply_record(node, record);
        debug!(node = %name, x = record.x, y = record.y, z = record.z, "placed node");
    }

    info!(nodes = table.len(), prefix = %table.node_prefix, "placement applied");
    Ok(PlacementOutcome::Applied { nodes: table.len() })
}

/// Write one record into a node.
///
/// Rotation is reset before pitching and rolling, so repeated application
/// never accumulates.
pub fn apply_record<N>(node: &mut N, record: &PlacementRecord)
where
    N: SceneNode + ?Sized,
{
    node.set_local_position(record.position());
    node.set_local_rotation(Mat3::IDENTITY);
    node.pitch(record.pitch());
    node.roll(record.roll());
    node.set_local_scale(record.scale_vector());
}
