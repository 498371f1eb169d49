use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{PlacementError, PlacementRecord};

/// Prefix used when a table does not name one.
pub const DEFAULT_NODE_PREFIX: &str = "tree";

const GROVE_RECORDS: [PlacementRecord; 10] = [
    PlacementRecord::new(-65.37, -3.0, -40.38, -90.0, -45.0, 1.0),
    PlacementRecord::new(-60.37, -3.0, -27.38, -90.0, -45.0, 1.0),
    PlacementRecord::new(-68.37, -3.0, 10.38, -90.0, -45.0, 1.0),
    PlacementRecord::new(-65.37, -3.0, 20.38, -90.0, -45.0, 1.0),
    PlacementRecord::new(-40.37, -3.0, 10.38, -90.0, -45.0, 1.0),
    PlacementRecord::new(45.37, -3.0, -67.38, -90.0, -45.0, 1.0),
    PlacementRecord::new(50.37, -3.0, -67.38, -90.0, -45.0, 1.0),
    PlacementRecord::new(68.37, -3.0, -67.38, -90.0, -45.0, 1.0),
    PlacementRecord::new(10.37, -6.0, -67.38, -90.0, 45.0, 2.0),
    PlacementRecord::new(5.37, -6.0, -47.38, -90.0, 45.0, 2.0),
];

/// Ordered placement records plus the prefix used to name their nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementTable {
    /// Node names are `{node_prefix}{index}`.
    #[serde(default = "default_node_prefix")]
    pub node_prefix: String,
    /// Records in node-index order.
    pub records: Vec<PlacementRecord>,
}

fn default_node_prefix() -> String {
    DEFAULT_NODE_PREFIX.to_string()
}

impl Default for PlacementTable {
    fn default() -> Self {
        Self::grove()
    }
}

impl PlacementTable {
    /// Build a table with the default prefix.
    pub fn new(records: Vec<PlacementRecord>) -> Self {
        Self {
            node_prefix: default_node_prefix(),
            records,
        }
    }

    /// The built-in ten-tree grove.
    pub fn grove() -> Self {
        Self::new(GROVE_RECORDS.to_vec())
    }

    /// Load a table from disk, picking the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, PlacementError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            Some("toml") => Self::from_toml_str(&fs::read_to_string(path)?),
            _ => Err(PlacementError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse and validate a JSON table.
    pub fn from_json_str(input: &str) -> Result<Self, PlacementError> {
        let table: Self = serde_json::from_str(input)?;
        table.validate()?;
        Ok(table)
    }

    /// Parse and validate a TOML table.
    pub fn from_toml_str(input: &str) -> Result<Self, PlacementError> {
        let table: Self = toml::from_str(input)?;
        table.validate()?;
        Ok(table)
    }

    /// Reject tables the routine cannot apply meaningfully.
    pub fn validate(&self) -> Result<(), PlacementError> {
        if self.node_prefix.is_empty() {
            return Err(PlacementError::Invalid(
                "node_prefix must not be empty".into(),
            ));
        }
        if self.records.is_empty() {
            return Err(PlacementError::Invalid(
                "placement table contains no records".into(),
            ));
        }
        for (index, record) in self.records.iter().enumerate() {
            if let Some(field) = record.non_finite_field() {
                return Err(PlacementError::Invalid(format!(
                    "record {index} ({}) has a non-finite {field}",
                    self.node_name(index)
                )));
            }
        }
        Ok(())
    }

    /// Name of the node targeted by record `index`.
    pub fn node_name(&self, index: usize) -> String {
        format!("{}{index}", self.node_prefix)
    }

    /// Records paired with the node names they target.
    pub fn named_records(&self) -> impl Iterator<Item = (String, &PlacementRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (self.node_name(index), record))
    }

    /// Number of records (and therefore nodes addressed).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize as pretty JSON.
    pub fn to_json_string(&self) -> Result<String, PlacementError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize as TOML with one `[[records]]` block per record.
    pub fn to_toml_string(&self) -> Result<String, PlacementError> {
        toml::to_string_pretty(self)
            .map_err(|err| PlacementError::Invalid(format!("cannot encode table as TOML: {err}")))
    }
}
