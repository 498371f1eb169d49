#![warn(missing_docs)]
//! Headless scene surfaces for tests and the command-line runner.

mod memory_scene;
mod snapshot;

pub use memory_scene::*;
pub use snapshot::*;

/// Names `prefix0 .. prefix{count-1}` in index order.
pub fn indexed_names(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}{i}")).collect()
}

/// Scene holding `count` identity nodes named `prefix0 .. prefix{count-1}`.
pub fn indexed_scene(prefix: &str, count: usize) -> MemoryScene {
    MemoryScene::with_nodes(indexed_names(prefix, count))
}
