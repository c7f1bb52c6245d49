use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::error::{ContentError, Result};
use super::model::{FileEntity, FileId, Node, NodeId};
use super::store::{ContentStore, NodeQuery};

/// In-memory content store for tests and local development
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    nodes: RwLock<BTreeMap<NodeId, Node>>,
    files: RwLock<BTreeMap<FileId, FileEntity>>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_node(&self, node: Node) -> Result<()> {
        self.nodes
            .write()
            .map_err(|_| ContentError::Unavailable("node map poisoned".into()))?
            .insert(node.id, node);
        Ok(())
    }

    pub fn insert_file(&self, file: FileEntity) -> Result<()> {
        self.files
            .write()
            .map_err(|_| ContentError::Unavailable("file map poisoned".into()))?
            .insert(file.id, file);
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn load_node(&self, id: NodeId) -> Result<Option<Node>> {
        let nodes = self
            .nodes
            .read()
            .map_err(|_| ContentError::Unavailable("node map poisoned".into()))?;
        Ok(nodes.get(&id).cloned())
    }

    async fn query_nodes(&self, query: &NodeQuery) -> Result<Vec<NodeId>> {
        let ids = {
            let nodes = self
                .nodes
                .read()
                .map_err(|_| ContentError::Unavailable("node map poisoned".into()))?;
            nodes
                .values()
                .filter(|node| query.matches(node))
                .map(|node| node.id)
                .collect()
        };
        Ok(query.finish(ids))
    }

    async fn load_file(&self, id: FileId) -> Result<Option<FileEntity>> {
        let files = self
            .files
            .read()
            .map_err(|_| ContentError::Unavailable("file map poisoned".into()))?;
        Ok(files.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{FieldItem, SHOWCASE_TYPE};

    #[tokio::test]
    async fn load_missing_node_returns_none() {
        let store = MemoryContentStore::new();
        assert!(store.load_node(1).await.unwrap().is_none());
        assert!(store.load_file(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn load_nodes_skips_unknown_ids() {
        let store = MemoryContentStore::new();
        store.insert_node(Node::new(1, SHOWCASE_TYPE, "One")).unwrap();
        store.insert_node(Node::new(2, SHOWCASE_TYPE, "Two")).unwrap();

        let nodes = store.load_nodes(&[2, 5, 1]).await.unwrap();
        let ids: Vec<_> = nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn query_filters_by_flag() {
        let store = MemoryContentStore::new();
        for id in 1..=6 {
            let node = Node::new(id, SHOWCASE_TYPE, format!("S{id}")).with_field(
                "field_featured",
                vec![FieldItem::Boolean { value: id % 2 == 0 }],
            );
            store.insert_node(node).unwrap();
        }

        let query = NodeQuery::new(SHOWCASE_TYPE)
            .condition_flag("field_featured", true)
            .random()
            .range(3);
        let ids = store.query_nodes(&query).await.unwrap();

        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| id % 2 == 0));
    }
}
