//! Content store: nodes, file entities and the read interface the API uses
//!
//! Two backends implement [`ContentStore`]:
//!
//! - [`FjallContentStore`] keeps nodes and files in an embedded Fjall keyspace
//!   (`nodes` and `files` partitions, JSON values). Content is written only by
//!   the `import` command.
//! - [`MemoryContentStore`] keeps everything in `BTreeMap`s; used by tests and
//!   the `memory` backend.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use showcase_api::content::{ContentStore, FjallContentStore, NodeQuery};
//!
//! let store = FjallContentStore::open("data/content")?;
//! let node = store.load_node(42).await?;
//! let ids = store.query_nodes(&NodeQuery::new("showcase").range(3)).await?;
//! ```

pub mod error;
mod fjall_store;
pub mod keys;
mod memory;
pub mod model;
mod seed;
mod store;

pub use error::{ContentError, Result};
pub use fjall_store::FjallContentStore;
pub use memory::MemoryContentStore;
pub use model::{
    ARTICLE_TYPE, FieldItem, FileEntity, FileId, ImageItem, Node, NodeId, SHOWCASE_TYPE,
};
pub use seed::{ContentSeed, ImportStats};
pub use store::{ContentStore, NodeQuery};
