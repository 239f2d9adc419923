//! Pastebin Core Library
//!
//! This crate provides the I/O-free half of the pastebin client:
//! - Form parameter building for every API operation
//! - Classification of raw response bodies into typed results or errors
//! - Parsing of the root-less paste list format
//! - Configuration and shared data types

pub mod config;
pub mod error;
pub mod fragment;
pub mod models;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use config::Config;
pub use error::ApiError;
pub use models::*;
pub use request::FormParams;
pub use url::Url;
