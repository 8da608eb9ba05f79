//! Carousel Content
//!
//! A carousel displays an ordered list of child contents side by side.
//! Elements are shared `Arc` handles, so cloning a carousel never copies
//! its children.

use crate::models::{CommonFields, ContentNode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Ordered collection of child contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carousel {
    pub common: CommonFields,

    #[serde(default)]
    pub elements: Vec<Arc<ContentNode>>,
}

impl Carousel {
    pub fn new(common: CommonFields, elements: Vec<Arc<ContentNode>>) -> Self {
        Self { common, elements }
    }

    /// Same common fields (and follow up handle), different elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chatbot_cms::models::{Carousel, CommonFields, Image};
    ///
    /// let image = Image::new(CommonFields::new("i1", "pic"), "http://img").into_node();
    /// let carousel = Carousel::new(CommonFields::new("c1", "offers"), vec![image]);
    ///
    /// let empty = carousel.clone_with_elements(Vec::new());
    /// assert!(empty.elements.is_empty());
    /// assert_eq!(empty.common, carousel.common);
    /// ```
    pub fn clone_with_elements(&self, elements: Vec<Arc<ContentNode>>) -> Self {
        Self {
            common: self.common.clone(),
            elements,
        }
    }

    pub fn into_node(self) -> Arc<ContentNode> {
        Arc::new(ContentNode::Carousel(self))
    }
}
