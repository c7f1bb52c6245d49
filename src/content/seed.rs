use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::memory::MemoryContentStore;
use super::model::{FileEntity, Node};

/// Seed document accepted by the `import` command
///
/// ```json
/// { "files": [{ "id": 1, "uri": "public://cafe.jpg" }],
///   "nodes": [{ "id": 10, "type": "showcase", "title": "Cafe", "fields": {} }] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSeed {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub files: Vec<FileEntity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub nodes: usize,
    pub files: usize,
}

impl ContentSeed {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Build an in-memory store holding this seed
    pub fn into_memory_store(self) -> Result<MemoryContentStore> {
        let store = MemoryContentStore::new();
        for file in self.files {
            store.insert_file(file)?;
        }
        for node in self.nodes {
            store.insert_node(node)?;
        }
        Ok(store)
    }
}
