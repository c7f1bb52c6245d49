use std::path::Path;

use async_trait::async_trait;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle};
use tracing::{debug, info};

use super::error::{ContentError, Result};
use super::keys::{decode_node_key, encode_file_key, encode_node_key};
use super::model::{FileEntity, FileId, Node, NodeId};
use super::seed::{ContentSeed, ImportStats};
use super::store::{ContentStore, NodeQuery};

/// Fjall-backed content store holding nodes and file entities
#[derive(Clone)]
pub struct FjallContentStore {
    keyspace: Keyspace,
    nodes: PartitionHandle,
    files: PartitionHandle,
}

impl FjallContentStore {
    /// Open or create a content store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening content store at: {}", path.display());

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let keyspace = Config::new(path).open()?;
        let nodes = keyspace.open_partition("nodes", PartitionCreateOptions::default())?;
        let files = keyspace.open_partition("files", PartitionCreateOptions::default())?;

        info!("Content store opened successfully");
        Ok(Self {
            keyspace,
            nodes,
            files,
        })
    }

    /// Store or replace a node
    pub fn upsert_node(&self, node: &Node) -> Result<()> {
        let value = serde_json::to_vec(node)?;
        self.nodes.insert(encode_node_key(node.id), value)?;
        debug!(node_id = node.id, node_type = %node.node_type, "Upserted node");
        Ok(())
    }

    /// Store or replace a file entity
    pub fn upsert_file(&self, file: &FileEntity) -> Result<()> {
        let value = serde_json::to_vec(file)?;
        self.files.insert(encode_file_key(file.id), value)?;
        debug!(file_id = file.id, uri = %file.uri, "Upserted file");
        Ok(())
    }

    /// Write every node and file of a seed document, then flush to disk
    pub fn import(&self, seed: &ContentSeed) -> Result<ImportStats> {
        for file in &seed.files {
            self.upsert_file(file)?;
        }
        for node in &seed.nodes {
            self.upsert_node(node)?;
        }
        self.persist()?;

        let stats = ImportStats {
            nodes: seed.nodes.len(),
            files: seed.files.len(),
        };
        info!(nodes = stats.nodes, files = stats.files, "Content imported");
        Ok(stats)
    }

    /// Persist all pending writes to disk
    pub fn persist(&self) -> Result<()> {
        self.keyspace.persist(fjall::PersistMode::SyncAll)?;
        Ok(())
    }
}

#[async_trait]
impl ContentStore for FjallContentStore {
    async fn load_node(&self, id: NodeId) -> Result<Option<Node>> {
        match self.nodes.get(encode_node_key(id))? {
            Some(value) => Ok(Some(serde_json::from_slice(&value)?)),
            None => Ok(None),
        }
    }

    async fn query_nodes(&self, query: &NodeQuery) -> Result<Vec<NodeId>> {
        let mut ids = Vec::new();
        for item in self.nodes.prefix("node:") {
            let (key, value) = item?;
            let id = decode_node_key(&key).ok_or_else(|| {
                ContentError::InvalidKey(String::from_utf8_lossy(&key).into_owned())
            })?;
            let node: Node = serde_json::from_slice(&value)?;
            if query.matches(&node) {
                ids.push(id);
            }
        }
        debug!(node_type = %query.node_type, matched = ids.len(), "Node query scanned");
        Ok(query.finish(ids))
    }

    async fn load_file(&self, id: FileId) -> Result<Option<FileEntity>> {
        match self.files.get(encode_file_key(id))? {
            Some(value) => Ok(Some(serde_json::from_slice(&value)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{FieldItem, SHOWCASE_TYPE};
    use tempfile::TempDir;

    fn create_test_store() -> (FjallContentStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FjallContentStore::open(temp_dir.path().join("content")).unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_upsert_and_load_node() {
        let (store, _temp) = create_test_store();
        let node = Node::new(12, SHOWCASE_TYPE, "Harbour Cafe").with_alias("showcase/harbour");

        store.upsert_node(&node).unwrap();

        let loaded = store.load_node(12).await.unwrap().unwrap();
        assert_eq!(loaded, node);
        assert!(store.load_node(13).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_query_nodes_filters_and_limits() {
        let (store, _temp) = create_test_store();
        for id in 1..=8 {
            let node = Node::new(id, SHOWCASE_TYPE, format!("S{id}")).with_field(
                "field_featured",
                vec![FieldItem::Boolean { value: id <= 5 }],
            );
            store.upsert_node(&node).unwrap();
        }
        store.upsert_node(&Node::new(20, "article", "Post")).unwrap();

        let featured = NodeQuery::new(SHOWCASE_TYPE)
            .condition_flag("field_featured", true)
            .range(3);
        assert_eq!(store.query_nodes(&featured).await.unwrap(), vec![1, 2, 3]);

        let plain = NodeQuery::new(SHOWCASE_TYPE).condition_flag("field_featured", false);
        assert_eq!(store.query_nodes(&plain).await.unwrap(), vec![6, 7, 8]);
    }

    #[tokio::test]
    async fn test_import_seed() {
        let (store, _temp) = create_test_store();
        let seed = ContentSeed {
            nodes: vec![Node::new(1, SHOWCASE_TYPE, "One")],
            files: vec![FileEntity {
                id: 5,
                uri: "public://logo.png".to_string(),
                mime: Some("image/png".to_string()),
            }],
        };

        let stats = store.import(&seed).unwrap();
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.files, 1);

        let file = store.load_file(5).await.unwrap().unwrap();
        assert_eq!(file.uri, "public://logo.png");
    }

    #[tokio::test]
    async fn test_reopen_keeps_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("content");
        {
            let store = FjallContentStore::open(&path).unwrap();
            store.upsert_node(&Node::new(3, SHOWCASE_TYPE, "Kept")).unwrap();
            store.persist().unwrap();
        }

        let store = FjallContentStore::open(&path).unwrap();
        let node = store.load_node(3).await.unwrap().unwrap();
        assert_eq!(node.title, "Kept");
    }
}
