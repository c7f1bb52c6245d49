//! API models for the showcase endpoints.
//!
//! These are the response shapes the front-end consumes:
//! - `GET /showcase?showcase={id}` returns a [`ShowcaseDetail`] or a [`NoticeResponse`]
//! - `GET /showcases?featured={0|1}` returns a list of [`ShowcaseSummary`]
//!
//! # Detail Structure
//!
//! ```json
//! {
//!   "title": "Harbour Cafe",
//!   "short_description": "Coffee by the water",
//!   "description": "<p>Open daily.</p>",
//!   "address": "1 Quay Street",
//!   "featured_image": { "path": "http://localhost:8080/sites/default/files/cafe.jpg", "alt": "Terrace" },
//!   "logo_image": null,
//!   "facebook": "https://facebook.com/harbour",
//!   "twitter": null,
//!   "linked_article": { "title": "Opening week", "path": "/news/opening-week" },
//!   "featured": true
//! }
//! ```
//!
//! Unset text fields and unresolvable images serialize as `null`; a missing
//! article serializes as `{}`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::content::NodeId;

pub const NOTICE_NOT_EXIST: &str = "Node is not exist";
pub const NOTICE_NOT_SHOWCASE: &str = "Node is not showcase type";

/// Resolved image: public URL plus alternative text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub path: String,
    pub alt: String,
}

/// Referenced article, or `{}` when the reference does not resolve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleLink {
    Resolved { title: String, path: String },
    Missing {},
}

impl ArticleLink {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ArticleLink::Resolved { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseDetail {
    pub title: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub featured_image: Option<ImageRef>,
    pub logo_image: Option<ImageRef>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linked_article: ArticleLink,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseSummary {
    pub id: NodeId,
    pub title: String,
    pub featured_image: Option<ImageRef>,
    pub linked_post: ArticleLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeResponse {
    pub notice: String,
}

impl NoticeResponse {
    pub fn new(notice: impl Into<String>) -> Self {
        Self {
            notice: notice.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub err: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub components: HashMap<String, String>,
    pub counters: HashMap<String, u64>,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_article_serializes_as_empty_object() {
        let value = serde_json::to_value(ArticleLink::Missing {}).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn resolved_article_serializes_title_and_path() {
        let link = ArticleLink::Resolved {
            title: "Opening week".to_string(),
            path: "/news/opening-week".to_string(),
        };
        assert_eq!(
            serde_json::to_value(link).unwrap(),
            json!({"title": "Opening week", "path": "/news/opening-week"})
        );
    }

    #[test]
    fn article_link_deserializes_both_shapes() {
        let resolved: ArticleLink =
            serde_json::from_value(json!({"title": "T", "path": "/p"})).unwrap();
        assert!(resolved.is_resolved());

        let missing: ArticleLink = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing, ArticleLink::Missing {});
    }
}
