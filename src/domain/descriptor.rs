//! Board descriptor and inventory files.

use std::fs;
use std::path::Path;

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{BoardError, Grid, Item};

/// Static description of a board, as shipped in the board JSON file
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardDescriptor {
    pub width: usize,
    pub height: usize,
    pub board_id: String,
    /// Row-major slots, `width * height` long; `null` is an empty cell
    pub items: Vec<Option<Item>>,
}

impl BoardDescriptor {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading board file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing board file {}", path.display()))
    }

    pub fn into_grid(self) -> Result<Grid, BoardError> {
        Grid::build(self.width, self.height, self.items)
    }
}

/// Read an inventory file: a JSON array of items
pub fn load_inventory(path: &Path) -> anyhow::Result<Vec<Item>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading inventory file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing inventory file {}", path.display()))
}

/// JSON schema of the board file
pub fn board_schema() -> schemars::Schema {
    schemars::schema_for!(BoardDescriptor)
}
