//! Chatbot CMS Content Layer
//!
//! This crate provides the content model delivered by the CMS to the
//! chatbot and the tools to post-process it before rendering.
//!
//! # Modules
//!
//! - [`models`] - Content tree (Text, StartUp, Image, Carousel) with shared follow ups
//! - [`filter`] - Recursive, per-kind asynchronous content transforms
//! - [`config`] - CMS connection and filter settings
//! - [`test_helpers`] - Random content builders and fixtures for tests

pub mod config;
pub mod filter;
pub mod models;
pub mod test_helpers;

// Re-export commonly used types
pub use config::{CmsConfig, ConfigError, FilterConfig, SupportedLocale};
pub use filter::{ContentTransform, FilterError, MessageContentFilters, RecursiveContentFilter};
pub use models::*;
