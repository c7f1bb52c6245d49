//! Stream-wrapper URI to public URL resolution
//!
//! Stored files carry URIs like `public://2021-03/cafe.jpg`. The public scheme
//! maps onto `{public_base_url}/{public_files_path}/`, the private scheme onto
//! `{public_base_url}/{private_files_path}/` (served through access-checked
//! routes). Absolute http(s) URIs are already servable and pass through.
//!
//! Every path segment of the stored URI is percent-encoded on its own, so `#`,
//! `?` and `%` stay part of the file name. `.` and `..` segments are rejected.

use url::Url;

use super::error::ProjectionError;
use crate::config::FilesConfig;

const PUBLIC_SCHEME: &str = "public://";
const PRIVATE_SCHEME: &str = "private://";

#[derive(Debug, Clone)]
pub struct FileUrlResolver {
    base: Url,
    public_prefix: Vec<String>,
    private_prefix: Vec<String>,
}

impl FileUrlResolver {
    pub fn new(config: &FilesConfig) -> Result<Self, ProjectionError> {
        let base = Url::parse(&config.public_base_url)?;
        if base.cannot_be_a_base() {
            return Err(ProjectionError::InvalidPath(config.public_base_url.clone()));
        }

        Ok(Self {
            base,
            public_prefix: prefix_segments(&config.public_files_path),
            private_prefix: prefix_segments(&config.private_files_path),
        })
    }

    /// Resolve a stored file URI into a servable URL
    pub fn resolve(&self, uri: &str) -> Result<String, ProjectionError> {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            return Ok(uri.to_string());
        }

        if let Some(relative) = uri.strip_prefix(PUBLIC_SCHEME) {
            return self.build(&self.public_prefix, relative, uri);
        }
        if let Some(relative) = uri.strip_prefix(PRIVATE_SCHEME) {
            return self.build(&self.private_prefix, relative, uri);
        }

        let scheme = uri.split_once("://").map_or(uri, |(scheme, _)| scheme);
        Err(ProjectionError::UnsupportedScheme(scheme.to_string()))
    }

    fn build(&self, prefix: &[String], relative: &str, uri: &str) -> Result<String, ProjectionError> {
        let file_segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        if file_segments.is_empty() || file_segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(ProjectionError::InvalidPath(uri.to_string()));
        }

        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ProjectionError::InvalidPath(uri.to_string()))?;
            segments.pop_if_empty();
            segments.extend(prefix.iter().map(String::as_str));
            segments.extend(file_segments);
        }

        Ok(url.to_string())
    }
}

fn prefix_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
