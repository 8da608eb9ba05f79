//! Per-Kind Content Transforms
//!
//! A transform receives one content value of a given variant and resolves to
//! a replacement of the same variant. Transforms may suspend on I/O (for
//! example enrichment lookups); the filter only awaits them.
//!
//! Any `Fn(T) -> impl Future<Output = anyhow::Result<T>>` is a transform, as
//! is any type implementing [`ContentTransform`] directly.

use crate::models::{Carousel, Image, StartUp, Text};
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Asynchronous replacement of a content value by another of the same type
#[async_trait]
pub trait ContentTransform<T: Send + 'static>: Send + Sync {
    async fn apply(&self, content: T) -> anyhow::Result<T>;
}

#[async_trait]
impl<T, F, Fut> ContentTransform<T> for F
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
{
    async fn apply(&self, content: T) -> anyhow::Result<T> {
        (self)(content).await
    }
}

/// Shared handle to a transform for content of type `T`
pub type SharedTransform<T> = Arc<dyn ContentTransform<T>>;

/// Optional transform per content kind
///
/// Kinds without a transform are left untouched by the filter.
///
/// # Examples
///
/// ```rust
/// use chatbot_cms::filter::MessageContentFilters;
/// use chatbot_cms::models::Text;
///
/// let filters = MessageContentFilters::new()
///     .with_text(|text: Text| async move { anyhow::Ok(text.clone_with_text(text.text.trim())) });
///
/// assert!(filters.has_text());
/// assert!(!filters.has_carousel());
/// ```
#[derive(Clone, Default)]
pub struct MessageContentFilters {
    pub(crate) text: Option<SharedTransform<Text>>,
    pub(crate) start_up: Option<SharedTransform<StartUp>>,
    pub(crate) image: Option<SharedTransform<Image>>,
    pub(crate) carousel: Option<SharedTransform<Carousel>>,
}

impl MessageContentFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, transform: impl ContentTransform<Text> + 'static) -> Self {
        self.text = Some(Arc::new(transform));
        self
    }

    pub fn with_start_up(mut self, transform: impl ContentTransform<StartUp> + 'static) -> Self {
        self.start_up = Some(Arc::new(transform));
        self
    }

    pub fn with_image(mut self, transform: impl ContentTransform<Image> + 'static) -> Self {
        self.image = Some(Arc::new(transform));
        self
    }

    /// Transform applied to carousels after their elements have been filtered
    pub fn with_carousel(mut self, transform: impl ContentTransform<Carousel> + 'static) -> Self {
        self.carousel = Some(Arc::new(transform));
        self
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    pub fn has_start_up(&self) -> bool {
        self.start_up.is_some()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn has_carousel(&self) -> bool {
        self.carousel.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !(self.has_text() || self.has_start_up() || self.has_image() || self.has_carousel())
    }
}

impl fmt::Debug for MessageContentFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageContentFilters")
            .field("text", &self.has_text())
            .field("start_up", &self.has_start_up())
            .field("image", &self.has_image())
            .field("carousel", &self.has_carousel())
            .finish()
    }
}
