//! Image Content

use crate::models::{CommonFields, ContentNode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An image referenced by URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub common: CommonFields,
    pub url: String,
}

impl Image {
    pub fn new(common: CommonFields, url: impl Into<String>) -> Self {
        Self {
            common,
            url: url.into(),
        }
    }

    pub fn clone_with_url(&self, url: impl Into<String>) -> Self {
        Self {
            common: self.common.clone(),
            url: url.into(),
        }
    }

    pub fn into_node(self) -> Arc<ContentNode> {
        Arc::new(ContentNode::Image(self))
    }
}
