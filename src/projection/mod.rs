//! Field projection from content-store nodes to API response shapes
//!
//! [`FieldProjector`] is shared by both showcase endpoints. It owns the two
//! nested lookups every projection needs:
//!
//! - [`FieldProjector::resolve_image`]: image item -> file entity -> public URL
//! - [`FieldProjector::resolve_article`]: node id -> `{title, path}` or `{}`
//!
//! Malformed reference data (empty reference lists, unset file ids, files that
//! no longer exist, file URIs with no servable URL) projects to `null` / `{}`
//! instead of failing the request. Only content-store faults propagate.

mod error;
mod files;

pub use error::ProjectionError;
pub use files::FileUrlResolver;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::models::{ArticleLink, ImageRef, ShowcaseDetail, ShowcaseSummary};
use crate::content::{ContentError, ContentStore, ImageItem, Node, NodeId};

pub const FIELD_SHORT_DESCRIPTION: &str = "field_short_description";
pub const FIELD_DESCRIPTION: &str = "field_description";
pub const FIELD_ADDRESS: &str = "field_address";
pub const FIELD_FEATURED_IMAGE: &str = "field_featured_image";
pub const FIELD_LOGO_IMAGE: &str = "field_logo_image";
pub const FIELD_FACEBOOK_URL: &str = "field_facebook_url";
pub const FIELD_TWITTER_URL: &str = "field_twitter_url";
pub const FIELD_REFERENCED_ARTICLE: &str = "field_referenced_article";
pub const FIELD_FEATURED: &str = "field_featured";

#[derive(Clone)]
pub struct FieldProjector {
    store: Arc<dyn ContentStore>,
    files: FileUrlResolver,
}

impl FieldProjector {
    pub fn new(store: Arc<dyn ContentStore>, files: FileUrlResolver) -> Self {
        Self { store, files }
    }

    /// Resolve an image field item into `{path, alt}`
    ///
    /// Returns `Ok(None)` when the item or its file id is absent, when the file
    /// entity does not exist, or when its URI has no servable URL.
    pub async fn resolve_image(
        &self,
        item: Option<&ImageItem>,
    ) -> Result<Option<ImageRef>, ContentError> {
        let Some(file_id) = item.and_then(|image| image.target_id) else {
            debug!("Image field has no file reference");
            return Ok(None);
        };

        let Some(file) = self.store.load_file(file_id).await? else {
            warn!(file_id, "Referenced image file does not exist");
            return Ok(None);
        };

        let path = match self.files.resolve(&file.uri) {
            Ok(path) => path,
            Err(err) => {
                warn!(file_id, uri = %file.uri, error = %err, "Image file has no servable URL");
                return Ok(None);
            }
        };

        let alt = item.and_then(|image| image.alt.clone()).unwrap_or_default();
        Ok(Some(ImageRef { path, alt }))
    }

    /// Resolve a referenced node into `{title, path}`, or `{}` if it does not exist
    pub async fn resolve_article(&self, id: NodeId) -> Result<ArticleLink, ContentError> {
        match self.store.load_node(id).await? {
            Some(node) => Ok(ArticleLink::Resolved {
                path: node.canonical_path(),
                title: node.title,
            }),
            None => {
                debug!(node_id = id, "Referenced article does not exist");
                Ok(ArticleLink::Missing {})
            }
        }
    }

    async fn linked_article(&self, node: &Node) -> Result<ArticleLink, ContentError> {
        match node.first_reference(FIELD_REFERENCED_ARTICLE) {
            Some(id) => self.resolve_article(id).await,
            None => Ok(ArticleLink::Missing {}),
        }
    }

    /// Full detail projection of a showcase node
    pub async fn project_showcase(&self, node: &Node) -> Result<ShowcaseDetail, ContentError> {
        let featured_image = self
            .resolve_image(node.first_image(FIELD_FEATURED_IMAGE))
            .await?;
        let logo_image = self.resolve_image(node.first_image(FIELD_LOGO_IMAGE)).await?;
        let linked_article = self.linked_article(node).await?;

        Ok(ShowcaseDetail {
            title: node.title.clone(),
            short_description: owned(node.first_string(FIELD_SHORT_DESCRIPTION)),
            description: owned(node.first_string(FIELD_DESCRIPTION)),
            address: owned(node.first_string(FIELD_ADDRESS)),
            featured_image,
            logo_image,
            facebook: owned(node.first_string(FIELD_FACEBOOK_URL)),
            twitter: owned(node.first_string(FIELD_TWITTER_URL)),
            linked_article,
            featured: node.flag(FIELD_FEATURED),
        })
    }

    /// List-item projection of a showcase node
    pub async fn project_summary(&self, node: &Node) -> Result<ShowcaseSummary, ContentError> {
        let featured_image = self
            .resolve_image(node.first_image(FIELD_FEATURED_IMAGE))
            .await?;
        let linked_post = self.linked_article(node).await?;

        Ok(ShowcaseSummary {
            id: node.id,
            title: node.title.clone(),
            featured_image,
            linked_post,
        })
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilesConfig;
    use crate::content::{
        ARTICLE_TYPE, FieldItem, FileEntity, MemoryContentStore, SHOWCASE_TYPE,
    };

    fn projector(store: MemoryContentStore) -> FieldProjector {
        let files = FileUrlResolver::new(&FilesConfig::default()).unwrap();
        FieldProjector::new(Arc::new(store), files)
    }

    fn image(target_id: Option<u64>, alt: &str) -> ImageItem {
        ImageItem {
            target_id,
            alt: Some(alt.to_string()),
        }
    }

    #[tokio::test]
    async fn resolve_image_returns_public_path() {
        let store = MemoryContentStore::new();
        store
            .insert_file(FileEntity {
                id: 1,
                uri: "public://cafe.jpg".to_string(),
                mime: None,
            })
            .unwrap();

        let resolved = projector(store)
            .resolve_image(Some(&image(Some(1), "Terrace")))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(resolved.path, "http://localhost:8080/sites/default/files/cafe.jpg");
        assert_eq!(resolved.alt, "Terrace");
    }

    #[tokio::test]
    async fn resolve_image_without_file_id_is_none() {
        let projector = projector(MemoryContentStore::new());

        assert!(projector.resolve_image(None).await.unwrap().is_none());
        assert!(
            projector
                .resolve_image(Some(&image(None, "orphan")))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn resolve_image_with_missing_file_is_none() {
        let projector = projector(MemoryContentStore::new());
        let resolved = projector.resolve_image(Some(&image(Some(99), "gone"))).await;
        assert!(resolved.unwrap().is_none());
    }

    #[tokio::test]
    async fn resolve_image_with_private_file_uses_system_path() {
        let store = MemoryContentStore::new();
        store
            .insert_file(FileEntity {
                id: 2,
                uri: "private://menu.jpg".to_string(),
                mime: None,
            })
            .unwrap();

        let resolved = projector(store)
            .resolve_image(Some(&image(Some(2), "menu")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.path, "http://localhost:8080/system/files/menu.jpg");
    }

    #[tokio::test]
    async fn resolve_image_with_unservable_uri_is_none() {
        let store = MemoryContentStore::new();
        for (id, uri) in [(3, "temporary://upload.tmp"), (4, "public://../escape.jpg")] {
            store
                .insert_file(FileEntity {
                    id,
                    uri: uri.to_string(),
                    mime: None,
                })
                .unwrap();
        }
        let projector = projector(store);

        for id in [3, 4] {
            let resolved = projector
                .resolve_image(Some(&image(Some(id), "broken")))
                .await
                .unwrap();
            assert!(resolved.is_none(), "file {id}");
        }
    }

    #[tokio::test]
    async fn resolve_article_on_missing_node_is_empty() {
        let link = projector(MemoryContentStore::new())
            .resolve_article(404)
            .await
            .unwrap();
        assert_eq!(link, ArticleLink::Missing {});
    }

    #[tokio::test]
    async fn resolve_article_skips_type_check() {
        let store = MemoryContentStore::new();
        store
            .insert_node(Node::new(5, SHOWCASE_TYPE, "Another showcase"))
            .unwrap();

        let link = projector(store).resolve_article(5).await.unwrap();
        assert_eq!(
            link,
            ArticleLink::Resolved {
                title: "Another showcase".to_string(),
                path: "/node/5".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn project_showcase_guards_empty_reference_list() {
        let store = MemoryContentStore::new();
        let node = Node::new(1, SHOWCASE_TYPE, "Cafe")
            .with_field(FIELD_REFERENCED_ARTICLE, vec![])
            .with_field(
                FIELD_SHORT_DESCRIPTION,
                vec![FieldItem::Text {
                    value: "Coffee".to_string(),
                    format: None,
                }],
            );

        let detail = projector(store).project_showcase(&node).await.unwrap();

        assert_eq!(detail.title, "Cafe");
        assert_eq!(detail.short_description.as_deref(), Some("Coffee"));
        assert_eq!(detail.description, None);
        assert_eq!(detail.linked_article, ArticleLink::Missing {});
        assert!(detail.featured_image.is_none());
        assert!(!detail.featured);
    }

    #[tokio::test]
    async fn project_summary_resolves_article() {
        let store = MemoryContentStore::new();
        store
            .insert_node(Node::new(8, ARTICLE_TYPE, "Opening week").with_alias("news/opening"))
            .unwrap();
        let node = Node::new(2, SHOWCASE_TYPE, "Bakery").with_field(
            FIELD_REFERENCED_ARTICLE,
            vec![FieldItem::Reference { target_id: Some(8) }],
        );

        let summary = projector(store).project_summary(&node).await.unwrap();

        assert_eq!(summary.id, 2);
        assert_eq!(
            summary.linked_post,
            ArticleLink::Resolved {
                title: "Opening week".to_string(),
                path: "/news/opening".to_string(),
            }
        );
    }
}
