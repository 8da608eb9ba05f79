//! Content Node Sum Type
//!
//! A `ContentNode` is one piece of CMS content. All variants share
//! [`CommonFields`]; the variant decides the payload.
//!
//! # Examples
//!
//! ```rust
//! use chatbot_cms::models::{CommonFields, ContentKind, ContentNode, Text};
//!
//! let node = Text::new(CommonFields::new("t1", "greeting"), "Hello!").into_node();
//! assert_eq!(node.kind(), ContentKind::Text);
//! assert_eq!(node.id(), "t1");
//! ```

use crate::models::{Carousel, CommonFields, Image, StartUp, Text};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Discriminant of a [`ContentNode`], used in logs and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    Text,
    StartUp,
    Image,
    Carousel,
    Unsupported,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::StartUp => "startUp",
            ContentKind::Image => "image",
            ContentKind::Carousel => "carousel",
            ContentKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content delivered by the CMS whose type this crate does not model
///
/// Kept so that decoders can hand over the whole tree; the content filter
/// refuses to process it rather than silently skipping it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsupportedContent {
    pub common: CommonFields,

    /// Content type name as reported by the CMS
    pub content_type: String,
}

impl UnsupportedContent {
    pub fn new(common: CommonFields, content_type: impl Into<String>) -> Self {
        Self {
            common,
            content_type: content_type.into(),
        }
    }
}

/// A node in a CMS content tree
///
/// Nodes are immutable values. Trees are built from `Arc<ContentNode>`
/// handles so that unchanged branches can be shared between an input tree
/// and a filtered output tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentNode {
    Text(Text),
    StartUp(StartUp),
    Image(Image),
    Carousel(Carousel),
    Unsupported(UnsupportedContent),
}

impl ContentNode {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentNode::Text(_) => ContentKind::Text,
            ContentNode::StartUp(_) => ContentKind::StartUp,
            ContentNode::Image(_) => ContentKind::Image,
            ContentNode::Carousel(_) => ContentKind::Carousel,
            ContentNode::Unsupported(_) => ContentKind::Unsupported,
        }
    }

    pub fn common(&self) -> &CommonFields {
        match self {
            ContentNode::Text(text) => &text.common,
            ContentNode::StartUp(start_up) => &start_up.common,
            ContentNode::Image(image) => &image.common,
            ContentNode::Carousel(carousel) => &carousel.common,
            ContentNode::Unsupported(content) => &content.common,
        }
    }

    pub fn id(&self) -> &str {
        &self.common().id
    }

    pub fn name(&self) -> &str {
        &self.common().name
    }

    pub fn follow_up(&self) -> Option<&Arc<ContentNode>> {
        self.common().follow_up()
    }

    /// Copy of this node with a different successor
    ///
    /// The variant payload is cloned; carousel elements are shared handles.
    pub fn with_follow_up(&self, follow_up: Option<Arc<ContentNode>>) -> ContentNode {
        let common = self.common().clone_with_follow_up(follow_up);
        match self {
            ContentNode::Text(text) => ContentNode::Text(Text {
                common,
                text: text.text.clone(),
            }),
            ContentNode::StartUp(start_up) => ContentNode::StartUp(StartUp {
                common,
                text: start_up.text.clone(),
            }),
            ContentNode::Image(image) => ContentNode::Image(Image {
                common,
                url: image.url.clone(),
            }),
            ContentNode::Carousel(carousel) => ContentNode::Carousel(Carousel {
                common,
                elements: carousel.elements.clone(),
            }),
            ContentNode::Unsupported(content) => ContentNode::Unsupported(UnsupportedContent {
                common,
                content_type: content.content_type.clone(),
            }),
        }
    }

    pub(crate) fn common_mut(&mut self) -> &mut CommonFields {
        match self {
            ContentNode::Text(text) => &mut text.common,
            ContentNode::StartUp(start_up) => &mut start_up.common,
            ContentNode::Image(image) => &mut image.common,
            ContentNode::Carousel(carousel) => &mut carousel.common,
            ContentNode::Unsupported(content) => &mut content.common,
        }
    }

    /// Number of nodes reachable from this one, through elements and follow ups
    ///
    /// Follow ups are walked in a loop; only carousel elements recurse.
    pub fn tree_size(&self) -> usize {
        let mut size = 0;
        let mut current = Some(self);
        while let Some(node) = current {
            size += 1;
            if let ContentNode::Carousel(carousel) = node {
                size += carousel
                    .elements
                    .iter()
                    .map(|element| element.tree_size())
                    .sum::<usize>();
            }
            current = node.follow_up().map(|next| next.as_ref());
        }
        size
    }
}

impl From<Text> for ContentNode {
    fn from(text: Text) -> Self {
        ContentNode::Text(text)
    }
}

impl From<StartUp> for ContentNode {
    fn from(start_up: StartUp) -> Self {
        ContentNode::StartUp(start_up)
    }
}

impl From<Image> for ContentNode {
    fn from(image: Image) -> Self {
        ContentNode::Image(image)
    }
}

impl From<Carousel> for ContentNode {
    fn from(carousel: Carousel) -> Self {
        ContentNode::Carousel(carousel)
    }
}

impl From<UnsupportedContent> for ContentNode {
    fn from(content: UnsupportedContent) -> Self {
        ContentNode::Unsupported(content)
    }
}

// Include tests
#[cfg(test)]
#[path = "content_node_test.rs"]
mod content_node_test;
