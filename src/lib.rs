pub mod api;
pub mod config;
pub mod content;
pub mod observability;
pub mod projection;
