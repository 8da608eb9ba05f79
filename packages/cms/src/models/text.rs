//! Text-Bearing Content
//!
//! `Text` is a plain chat message; `StartUp` is the first message a bot
//! sends when a conversation opens. Both only carry a text payload.
//!
//! # Examples
//!
//! ```rust
//! use chatbot_cms::models::{CommonFields, Text};
//!
//! let text = Text::new(CommonFields::new("t1", "greeting"), "Hello");
//! let louder = text.clone_with_text("HELLO");
//!
//! assert_eq!(louder.text, "HELLO");
//! assert_eq!(louder.common, text.common);
//! ```

use crate::models::{CommonFields, ContentNode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A chat text message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub common: CommonFields,
    pub text: String,
}

impl Text {
    pub fn new(common: CommonFields, text: impl Into<String>) -> Self {
        Self {
            common,
            text: text.into(),
        }
    }

    /// Same common fields (and follow up handle), different text
    pub fn clone_with_text(&self, text: impl Into<String>) -> Self {
        Self {
            common: self.common.clone(),
            text: text.into(),
        }
    }

    /// Wrap into a shareable tree node
    pub fn into_node(self) -> Arc<ContentNode> {
        Arc::new(ContentNode::Text(self))
    }
}

/// Message sent when a conversation starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartUp {
    pub common: CommonFields,
    pub text: String,
}

impl StartUp {
    pub fn new(common: CommonFields, text: impl Into<String>) -> Self {
        Self {
            common,
            text: text.into(),
        }
    }

    pub fn clone_with_text(&self, text: impl Into<String>) -> Self {
        Self {
            common: self.common.clone(),
            text: text.into(),
        }
    }

    pub fn into_node(self) -> Arc<ContentNode> {
        Arc::new(ContentNode::StartUp(self))
    }
}
