use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;
use crate::observability::Metrics;
use crate::projection::{FieldProjector, FileUrlResolver, ProjectionError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn ContentStore>,
    pub projector: FieldProjector,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ContentStore>) -> Result<Self, ProjectionError> {
        let files = FileUrlResolver::new(&config.files)?;
        let projector = FieldProjector::new(store.clone(), files);

        Ok(Self {
            config: Arc::new(config),
            store,
            projector,
            metrics: Arc::new(Metrics::new()),
        })
    }
}
