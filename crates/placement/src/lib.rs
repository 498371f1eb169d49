#![warn(missing_docs)]
//! Tree placement routine.
//!
//! A [`PlacementTable`] is an ordered list of [`PlacementRecord`]s; record `i`
//! targets the node named `{prefix}{i}`. [`apply_placements`] writes each
//! record into an externally owned scene graph, and [`ScriptReloader`]
//! re-executes a table file whenever it changes on disk.

mod apply;
mod error;
mod populate;
mod record;
mod reload;
mod table;

pub use apply::{apply_placements, apply_record, PlacementOutcome};
pub use error::PlacementError;
pub use populate::populate_nodes;
pub use record::PlacementRecord;
pub use reload::{apply_file, execute_file, execute_table, ScriptReloader, ScriptRun};
pub use table::{PlacementTable, DEFAULT_NODE_PREFIX};

/// Line written to the output channel after a successful run.
pub const COMPLETION_MESSAGE: &str = "Script has executed";
