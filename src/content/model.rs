//! Entity model of the content store.
//!
//! A [`Node`] carries a bundle (`type`), a title, an optional path alias and a
//! map of field name to field item list. Field items mirror the storage shapes
//! the store knows about: text, links, booleans, image and node references.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type NodeId = u64;
pub type FileId = u64;

/// Content bundle for showcase listings
pub const SHOWCASE_TYPE: &str = "showcase";
/// Content bundle for editorial posts
pub const ARTICLE_TYPE: &str = "article";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_alias: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, Vec<FieldItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldItem {
    Text {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
    Link {
        uri: String,
    },
    Boolean {
        value: bool,
    },
    Image(ImageItem),
    Reference {
        #[serde(default)]
        target_id: Option<NodeId>,
    },
}

/// Image field item: file reference plus alternative text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    #[serde(default)]
    pub target_id: Option<FileId>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Managed file entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntity {
    pub id: FileId,
    /// Stream-wrapper URI, e.g. `public://2021-03/cafe.jpg`
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

impl Node {
    pub fn new(id: NodeId, node_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            node_type: node_type.into(),
            title: title.into(),
            path_alias: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.path_alias = Some(alias.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, items: Vec<FieldItem>) -> Self {
        self.fields.insert(name.into(), items);
        self
    }

    pub fn is_type(&self, node_type: &str) -> bool {
        self.node_type == node_type
    }

    /// Canonical URL path: the alias when one is set, `/node/{id}` otherwise
    pub fn canonical_path(&self) -> String {
        match &self.path_alias {
            Some(alias) if !alias.is_empty() => {
                if alias.starts_with('/') {
                    alias.clone()
                } else {
                    format!("/{alias}")
                }
            }
            _ => format!("/node/{}", self.id),
        }
    }

    pub fn items(&self, field: &str) -> &[FieldItem] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// First text or link value of a field
    pub fn first_string(&self, field: &str) -> Option<&str> {
        self.items(field).iter().find_map(|item| match item {
            FieldItem::Text { value, .. } => Some(value.as_str()),
            FieldItem::Link { uri } => Some(uri.as_str()),
            _ => None,
        })
    }

    /// First image item of a field
    pub fn first_image(&self, field: &str) -> Option<&ImageItem> {
        self.items(field).iter().find_map(|item| match item {
            FieldItem::Image(image) => Some(image),
            _ => None,
        })
    }

    /// Target of the first reference item; `None` for an empty list or an unset target
    pub fn first_reference(&self, field: &str) -> Option<NodeId> {
        match self.items(field).first()? {
            FieldItem::Reference { target_id } => *target_id,
            _ => None,
        }
    }

    /// Boolean field value; integer-like text `"1"` counts as set
    pub fn flag(&self, field: &str) -> bool {
        match self.items(field).first() {
            Some(FieldItem::Boolean { value }) => *value,
            Some(FieldItem::Text { value, .. }) => value.trim() == "1",
            _ => false,
        }
    }
}
