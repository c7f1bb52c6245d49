use std::path::Path;

use tracing::info;

use showcase_api::config::Config;
use showcase_api::content::{ContentSeed, FjallContentStore};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Load a seed document and write it into the configured Fjall store
pub fn run(config: &Config, file: &Path) -> Result<(), AnyError> {
    info!(file = %file.display(), "Reading content seed");
    let seed = ContentSeed::from_path(file)
        .map_err(|e| format!("Failed to read seed {}: {}", file.display(), e))?;

    let store = FjallContentStore::open(&config.store.path)
        .map_err(|e| format!("Failed to open content store: {}", e))?;
    let stats = store
        .import(&seed)
        .map_err(|e| format!("Failed to import content: {}", e))?;

    info!(
        nodes = stats.nodes,
        files = stats.files,
        path = %config.store.path.display(),
        "Import finished"
    );
    Ok(())
}
