use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("unsupported file URI scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid file path: {0}")]
    InvalidPath(String),

    #[error("invalid file URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
