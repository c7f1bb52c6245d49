use async_trait::async_trait;

use super::error::Result;
use super::model::{FileEntity, FileId, Node, NodeId};

/// Read access to the content store
///
/// Handlers and the field projector only ever read through this trait, so a
/// backend can be swapped (embedded fjall, in-memory fixtures) without touching
/// the HTTP layer.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Load a single node; `Ok(None)` when no node has this id
    async fn load_node(&self, id: NodeId) -> Result<Option<Node>>;

    /// Run a node query and return the matching ids
    async fn query_nodes(&self, query: &NodeQuery) -> Result<Vec<NodeId>>;

    /// Load several nodes, preserving the order of `ids` and skipping unknown ids
    async fn load_nodes(&self, ids: &[NodeId]) -> Result<Vec<Node>> {
        let mut nodes = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(node) = self.load_node(*id).await? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    /// Load a managed file entity
    async fn load_file(&self, id: FileId) -> Result<Option<FileEntity>>;
}

/// Entity query over nodes: bundle filter, flag conditions, ordering and range
#[derive(Debug, Clone, PartialEq)]
pub struct NodeQuery {
    pub node_type: String,
    pub flag_conditions: Vec<(String, bool)>,
    pub random: bool,
    pub limit: Option<usize>,
}

impl NodeQuery {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            flag_conditions: Vec::new(),
            random: false,
            limit: None,
        }
    }

    /// Require a boolean field to hold `value`
    pub fn condition_flag(mut self, field: impl Into<String>, value: bool) -> Self {
        self.flag_conditions.push((field.into(), value));
        self
    }

    /// Return matches in random order
    pub fn random(mut self) -> Self {
        self.random = true;
        self
    }

    pub fn range(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, node: &Node) -> bool {
        node.is_type(&self.node_type)
            && self
                .flag_conditions
                .iter()
                .all(|(field, value)| node.flag(field) == *value)
    }

    /// Apply ordering and range to the ids of all matching nodes
    pub fn finish(&self, mut ids: Vec<NodeId>) -> Vec<NodeId> {
        if self.random {
            fastrand::shuffle(&mut ids);
        }
        if let Some(limit) = self.limit {
            ids.truncate(limit);
        }
        ids
    }
}
