//! Content Models
//!
//! This module contains the CMS content tree:
//!
//! - `ContentNode` - Sum type over every supported content variant
//! - `CommonFields` - Identity and `follow_up` successor shared by all variants
//! - Variant payloads (`Text`, `StartUp`, `Image`, `Carousel`)
//!
//! Trees are made of `Arc<ContentNode>` handles. Cloning a node shares its
//! follow up and its carousel elements.

mod carousel;
mod common_fields;
mod content_node;
mod image;
mod text;

pub use carousel::Carousel;
pub use common_fields::CommonFields;
pub use content_node::{ContentKind, ContentNode, UnsupportedContent};
pub use image::Image;
pub use text::{StartUp, Text};
