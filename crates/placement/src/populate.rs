use grove_core::{SceneError, SceneGraph};
use tracing::debug;

/// Create identity nodes `{prefix}0 .. {prefix}{count-1}`.
///
/// Returns the number of nodes created. Stops at the first name the scene
/// rejects.
pub fn populate_nodes<S>(scene: &mut S, prefix: &str, count: usize) -> Result<usize, SceneError>
where
    S: SceneGraph + ?Sized,
{
    for index in 0..count {
        scene.create_scene_node(&format!("{prefix}{index}"))?;
    }
    debug!(prefix, count, "populated scene nodes");
    Ok(count)
}
