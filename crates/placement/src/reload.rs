//! Executing placement files and re-executing them when they change.
//!
//! Failures here are logged and reported, never propagated: an edit that
//! breaks the table file must not take the host down.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use grove_core::SceneGraph;
use tracing::{debug, info, warn};

use crate::{
    apply_placements, PlacementError, PlacementOutcome, PlacementTable, COMPLETION_MESSAGE,
};

/// Result of one execution of a placement table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptRun {
    /// The table was applied (or skipped for lack of a scene).
    Applied(PlacementOutcome),
    /// Loading or applying failed; the message says why.
    Failed(String),
}

impl ScriptRun {
    /// True when the run completed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Apply `table` and write the completion message to `out` on success.
pub fn execute_table<S, W>(table: &PlacementTable, scene: Option<&mut S>, out: &mut W) -> ScriptRun
where
    S: SceneGraph + ?Sized,
    W: Write + ?Sized,
{
    finish(apply_placements(scene, table).map_err(PlacementError::from), out)
}

/// Load the table at `path` and apply it, writing the completion message to
/// `out` on success.
pub fn execute_file<S, W>(path: &Path, scene: Option<&mut S>, out: &mut W) -> ScriptRun
where
    S: SceneGraph + ?Sized,
    W: Write + ?Sized,
{
    match finish(apply_file(path, scene), out) {
        ScriptRun::Failed(reason) => ScriptRun::Failed(format!("{}: {reason}", path.display())),
        run => run,
    }
}

/// Load the table at `path` and apply it, returning any failure.
pub fn apply_file<S>(path: &Path, scene: Option<&mut S>) -> Result<PlacementOutcome, PlacementError>
where
    S: SceneGraph + ?Sized,
{
    let table = PlacementTable::from_path(path)?;
    info!(path = %path.display(), records = table.len(), "executing placement table");
    Ok(apply_placements(scene, &table)?)
}

fn finish<W>(result: Result<PlacementOutcome, PlacementError>, out: &mut W) -> ScriptRun
where
    W: Write + ?Sized,
{
    match result {
        Ok(outcome) => {
            if let Err(err) = writeln!(out, "{COMPLETION_MESSAGE}") {
                warn!("failed to write completion message: {err}");
            }
            ScriptRun::Applied(outcome)
        }
        Err(err) => {
            warn!("placement failed: {err}");
            ScriptRun::Failed(err.to_string())
        }
    }
}

/// Re-executes a placement file whenever its modification time advances.
#[derive(Debug)]
pub struct ScriptReloader {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl ScriptReloader {
    /// Watch `path`. The first successful poll always executes the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_modified: None,
        }
    }

    /// File being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Modification time seen by the last execution.
    pub fn last_modified(&self) -> Option<SystemTime> {
        self.last_modified
    }

    /// Execute the file if it changed since the last execution.
    ///
    /// Returns `None` when the file is unchanged or cannot be stat'ed.
    pub fn poll<S, W>(&mut self, scene: Option<&mut S>, out: &mut W) -> Option<ScriptRun>
    where
        S: SceneGraph + ?Sized,
        W: Write + ?Sized,
    {
        let modified = match fs::metadata(&self.path).and_then(|meta| meta.modified()) {
            Ok(modified) => modified,
            Err(err) => {
                debug!(path = %self.path.display(), "cannot stat placement file: {err}");
                return None;
            }
        };

        if self.last_modified.is_some_and(|seen| modified <= seen) {
            return None;
        }
        self.last_modified = Some(modified);
        Some(execute_file(&self.path, scene, out))
    }
}
