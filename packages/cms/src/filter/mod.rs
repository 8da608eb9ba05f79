//! Message Content Filtering
//!
//! - [`RecursiveContentFilter`] - Walks a content tree and runs per-kind transforms
//! - [`MessageContentFilters`] - Optional transform per content kind
//! - [`ContentTransform`] - Async transform seam, implemented by closures
//! - [`FilterError`] - Failures surfaced by a filtering call

pub mod error;
pub mod recursive;
pub mod transform;

pub use error::FilterError;
pub use recursive::RecursiveContentFilter;
pub use transform::{ContentTransform, MessageContentFilters, SharedTransform};
