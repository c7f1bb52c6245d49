//! Key layout for the content partitions
//!
//! Partition structure:
//! - `nodes`: node:{id:020} -> Node (JSON)
//! - `files`: file:{id:020} -> FileEntity (JSON)
//!
//! Ids are zero-padded so that lexicographic key order matches numeric order.

use super::model::{FileId, NodeId};

/// Encode a node key: node:{id:020}
pub fn encode_node_key(id: NodeId) -> Vec<u8> {
    format!("node:{:020}", id).into_bytes()
}

/// Decode a node key: node:{id:020} -> id
pub fn decode_node_key(key: &[u8]) -> Option<NodeId> {
    let key_str = std::str::from_utf8(key).ok()?;
    key_str.strip_prefix("node:")?.parse().ok()
}

/// Encode a file key: file:{id:020}
pub fn encode_file_key(id: FileId) -> Vec<u8> {
    format!("file:{:020}", id).into_bytes()
}
