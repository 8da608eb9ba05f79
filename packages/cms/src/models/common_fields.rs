//! Fields shared by every content node
//!
//! `CommonFields` carries the CMS identity of a node and its optional
//! `follow_up` successor. The successor is held behind an `Arc` so that
//! cloning a node (or its common fields) shares the successor instead of
//! copying the whole chain.

use crate::models::ContentNode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Metadata present on all content nodes
///
/// # Examples
///
/// ```rust
/// use chatbot_cms::models::{CommonFields, Image};
///
/// let image = Image::new(CommonFields::new("img-1", "logo"), "http://img").into_node();
/// let common = CommonFields::new("txt-1", "welcome").with_follow_up(image.clone());
///
/// assert!(std::sync::Arc::ptr_eq(common.follow_up().unwrap(), &image));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonFields {
    /// CMS identifier of the content
    pub id: String,

    /// Human readable content name, unique per content type
    pub name: String,

    /// Short description shown in menus and buttons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,

    /// Keywords used to reach this content from user input
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Content displayed right after this one (singly-linked chain)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<Arc<ContentNode>>,
}

impl CommonFields {
    /// Create common fields with no short text, keywords or follow up
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_text: None,
            keywords: Vec::new(),
            follow_up: None,
        }
    }

    pub fn with_short_text(mut self, short_text: impl Into<String>) -> Self {
        self.short_text = Some(short_text.into());
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_follow_up(mut self, follow_up: Arc<ContentNode>) -> Self {
        self.follow_up = Some(follow_up);
        self
    }

    pub fn follow_up(&self) -> Option<&Arc<ContentNode>> {
        self.follow_up.as_ref()
    }

    /// Copy of these fields pointing at a different successor
    ///
    /// Everything except `follow_up` is cloned; the new successor is shared,
    /// not copied.
    pub fn clone_with_follow_up(&self, follow_up: Option<Arc<ContentNode>>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            short_text: self.short_text.clone(),
            keywords: self.keywords.clone(),
            follow_up,
        }
    }
}

impl Drop for CommonFields {
    /// Unlink uniquely owned successors one by one, so that dropping a long
    /// chain does not recurse once per link
    fn drop(&mut self) {
        let mut next = self.follow_up.take();
        while let Some(node) = next {
            next = match Arc::try_unwrap(node) {
                Ok(mut content) => content.common_mut().follow_up.take(),
                Err(_) => None,
            };
        }
    }
}
