//! Content Filter Error Types

use crate::models::ContentKind;
use thiserror::Error;

/// Errors raised while filtering a content tree
///
/// A single failure anywhere in the tree aborts the whole call; no
/// partially filtered tree is handed back.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A caller-supplied transform returned an error
    #[error("Transform for {kind} content '{content_id}' failed")]
    TransformFailed {
        kind: ContentKind,
        content_id: String,
        #[source]
        source: anyhow::Error,
    },

    /// The tree holds a content type the filter cannot dispatch
    #[error("Unsupported content type '{content_type}' for content '{content_id}'")]
    UnsupportedContent {
        content_type: String,
        content_id: String,
    },

    /// Filter configuration rejected at construction
    #[error("Invalid filter configuration: {0}")]
    InvalidConfig(String),
}

impl FilterError {
    /// Create a transform failed error
    pub fn transform_failed(
        kind: ContentKind,
        content_id: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        Self::TransformFailed {
            kind,
            content_id: content_id.into(),
            source,
        }
    }

    /// Create an unsupported content error
    pub fn unsupported_content(
        content_type: impl Into<String>,
        content_id: impl Into<String>,
    ) -> Self {
        Self::UnsupportedContent {
            content_type: content_type.into(),
            content_id: content_id.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
