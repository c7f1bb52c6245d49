use super::models::{Config, StoreBackend};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("public_base_url '{value}' is not a valid URL: {reason}")]
    InvalidPublicBaseUrl { value: String, reason: String },

    #[error("public_base_url must use http or https, got '{scheme}'")]
    UnsupportedBaseUrlScheme { scheme: String },

    #[error("{field} must be relative, got '{value}'")]
    AbsoluteFilesPath { field: &'static str, value: String },

    #[error("Fjall store backend requires a non-empty store.path")]
    MissingStorePath,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_files(config)?;
    validate_store(config)?;
    Ok(())
}

fn validate_files(config: &Config) -> Result<(), ValidationError> {
    let base = Url::parse(&config.files.public_base_url).map_err(|e| {
        ValidationError::InvalidPublicBaseUrl {
            value: config.files.public_base_url.clone(),
            reason: e.to_string(),
        }
    })?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ValidationError::UnsupportedBaseUrlScheme {
            scheme: base.scheme().to_string(),
        });
    }

    for (field, value) in [
        ("public_files_path", &config.files.public_files_path),
        ("private_files_path", &config.files.private_files_path),
    ] {
        if value.starts_with('/') {
            return Err(ValidationError::AbsoluteFilesPath {
                field,
                value: value.clone(),
            });
        }
    }

    Ok(())
}

fn validate_store(config: &Config) -> Result<(), ValidationError> {
    if config.store.backend == StoreBackend::Fjall && config.store.path.as_os_str().is_empty() {
        return Err(ValidationError::MissingStorePath);
    }
    Ok(())
}
