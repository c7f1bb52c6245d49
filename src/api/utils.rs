//! API utility functions
//!
//! Pure, stateless helpers for query-string processing, kept apart from the
//! handlers so they can be unit tested.

use crate::api::error::ApiError;
use crate::content::NodeId;

/// Rejects any query key outside `allowed`
pub fn ensure_allowed_keys<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    allowed: &[&str],
) -> Result<(), ApiError> {
    for key in keys {
        if !allowed.contains(&key) {
            return Err(ApiError::InvalidParameter(key.to_string()));
        }
    }
    Ok(())
}

/// Parses a node id; anything that is not a plain unsigned integer yields `None`
pub fn parse_node_id(value: Option<&str>) -> Option<NodeId> {
    value?.trim().parse().ok()
}

/// Interprets the `featured` flag: any numeric string equal to 1 (`1`, `01`,
/// `1.0`, `1e0`) is featured, everything else is not
pub fn parse_featured_flag(value: Option<&str>) -> bool {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .is_some_and(|v| v == 1.0)
}
