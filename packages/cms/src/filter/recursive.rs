//! Recursive Message Content Filter
//!
//! Rebuilds a content tree by running the configured per-kind transforms.
//!
//! # Traversal
//!
//! For every node, in this order:
//!
//! 1. The `follow_up` successor is filtered.
//! 2. Carousel elements are filtered, keeping their original order.
//! 3. The node's own transform (if any) runs on a copy that already holds
//!    the filtered successor and elements.
//!
//! A node whose kind has no transform, and whose successor and elements came
//! back unchanged, is returned as the very same `Arc`. Untouched branches are
//! therefore shared between the input and the output tree.

use crate::config::FilterConfig;
use crate::filter::{FilterError, MessageContentFilters, SharedTransform};
use crate::models::ContentNode;
use futures::future::BoxFuture;
use futures::stream::{self, StreamExt, TryStreamExt};
use futures::FutureExt;
use std::sync::Arc;

/// Outcome of running the per-kind transform on one node
enum Transformed {
    /// A transform produced a replacement
    Replaced(ContentNode),
    /// No transform configured for this kind
    Untouched(ContentNode),
}

/// Filters content trees with a fixed set of per-kind transforms
///
/// The filter keeps no state between calls; one instance can be shared and
/// used for any number of trees.
///
/// # Examples
///
/// ```rust
/// use chatbot_cms::filter::{MessageContentFilters, RecursiveContentFilter};
/// use chatbot_cms::models::{CommonFields, ContentNode, Text};
///
/// # tokio_test::block_on(async {
/// let filter = RecursiveContentFilter::new(
///     MessageContentFilters::new()
///         .with_text(|text: Text| async move { anyhow::Ok(text.clone_with_text("hidden")) }),
/// );
///
/// let input = Text::new(CommonFields::new("t1", "secret"), "password").into_node();
/// let output = filter.filter_content(input).await.unwrap();
///
/// match output.as_ref() {
///     ContentNode::Text(text) => assert_eq!(text.text, "hidden"),
///     _ => unreachable!(),
/// }
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveContentFilter {
    filters: MessageContentFilters,
    config: FilterConfig,
}

impl RecursiveContentFilter {
    /// Create a filter with the default configuration
    pub fn new(filters: MessageContentFilters) -> Self {
        Self {
            filters,
            config: FilterConfig::default(),
        }
    }

    /// Create a filter with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidConfig` if the configuration does not
    /// validate.
    pub fn with_config(
        filters: MessageContentFilters,
        config: FilterConfig,
    ) -> Result<Self, FilterError> {
        config.validate().map_err(FilterError::invalid_config)?;
        Ok(Self { filters, config })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter a whole content tree
    ///
    /// Resolves to the filtered root, which is the input `Arc` itself when
    /// nothing in the tree was transformed.
    ///
    /// # Errors
    ///
    /// - `FilterError::TransformFailed` if any transform fails
    /// - `FilterError::UnsupportedContent` if the tree holds unsupported content
    pub async fn filter_content(
        &self,
        content: Arc<ContentNode>,
    ) -> Result<Arc<ContentNode>, FilterError> {
        tracing::debug!(
            "Filtering content '{}' ({} nodes reachable) with {:?}",
            content.id(),
            content.tree_size(),
            self.filters
        );

        let filtered = self.filter_node(Arc::clone(&content)).await.map_err(|e| {
            tracing::warn!("Content filtering of '{}' failed: {}", content.id(), e);
            e
        })?;

        if Arc::ptr_eq(&filtered, &content) {
            tracing::debug!("Content '{}' passed through unchanged", content.id());
        }
        Ok(filtered)
    }

    /// Filter a node and its whole `follow_up` chain
    ///
    /// The chain is walked in a loop, tail first, so its length does not
    /// grow the stack. Only carousel nesting recurses.
    fn filter_node(
        &self,
        node: Arc<ContentNode>,
    ) -> BoxFuture<'_, Result<Arc<ContentNode>, FilterError>> {
        async move {
            let mut predecessors = Vec::new();
            let mut tail = node;
            while let Some(next) = tail.follow_up().cloned() {
                predecessors.push(tail);
                tail = next;
            }

            let mut filtered = self.filter_link(tail, None).await?;
            while let Some(original) = predecessors.pop() {
                filtered = self.filter_link(original, Some(filtered)).await?;
            }
            Ok(filtered)
        }
        .boxed()
    }

    /// Filter one chain link whose successor has already been filtered
    async fn filter_link(
        &self,
        node: Arc<ContentNode>,
        follow_up: Option<Arc<ContentNode>>,
    ) -> Result<Arc<ContentNode>, FilterError> {
        let mut changed = !same_follow_up(node.follow_up(), follow_up.as_ref());
        let mut current = if changed {
            node.with_follow_up(follow_up)
        } else {
            node.as_ref().clone()
        };

        if let ContentNode::Carousel(carousel) = &current {
            let elements = self.filter_elements(&carousel.elements).await?;
            if !same_elements(&carousel.elements, &elements) {
                current = ContentNode::Carousel(carousel.clone_with_elements(elements));
                changed = true;
            }
        }

        match self.transform(current).await? {
            Transformed::Replaced(content) => Ok(Arc::new(content)),
            Transformed::Untouched(content) if changed => Ok(Arc::new(content)),
            Transformed::Untouched(_) => Ok(node),
        }
    }

    /// Filter sibling elements, at most `max_concurrent_elements` at a time,
    /// collecting results in the original order
    async fn filter_elements(
        &self,
        elements: &[Arc<ContentNode>],
    ) -> Result<Vec<Arc<ContentNode>>, FilterError> {
        let pending: Vec<_> = elements
            .iter()
            .map(|element| self.filter_node(Arc::clone(element)))
            .collect();

        stream::iter(pending)
            .buffered(self.config.max_concurrent_elements)
            .try_collect()
            .await
    }

    async fn transform(&self, content: ContentNode) -> Result<Transformed, FilterError> {
        let kind = content.kind();
        let content_id = content.id().to_string();

        let result = match content {
            ContentNode::Text(text) => {
                apply(self.filters.text.as_ref(), text, ContentNode::Text).await
            }
            ContentNode::StartUp(start_up) => {
                apply(self.filters.start_up.as_ref(), start_up, ContentNode::StartUp).await
            }
            ContentNode::Image(image) => {
                apply(self.filters.image.as_ref(), image, ContentNode::Image).await
            }
            ContentNode::Carousel(carousel) => {
                apply(self.filters.carousel.as_ref(), carousel, ContentNode::Carousel).await
            }
            ContentNode::Unsupported(content) => {
                return Err(FilterError::unsupported_content(
                    content.content_type,
                    content_id,
                ));
            }
        };

        if let Ok(Transformed::Replaced(_)) = &result {
            tracing::trace!("Transformed {} content '{}'", kind, content_id);
        }
        result.map_err(|source| FilterError::transform_failed(kind, content_id, source))
    }
}

async fn apply<T: Send + 'static>(
    transform: Option<&SharedTransform<T>>,
    content: T,
    wrap: fn(T) -> ContentNode,
) -> anyhow::Result<Transformed> {
    match transform {
        Some(transform) => Ok(Transformed::Replaced(wrap(transform.apply(content).await?))),
        None => Ok(Transformed::Untouched(wrap(content))),
    }
}

fn same_follow_up(before: Option<&Arc<ContentNode>>, after: Option<&Arc<ContentNode>>) -> bool {
    match (before, after) {
        (Some(before), Some(after)) => Arc::ptr_eq(before, after),
        (None, None) => true,
        _ => false,
    }
}

fn same_elements(before: &[Arc<ContentNode>], after: &[Arc<ContentNode>]) -> bool {
    before.len() == after.len()
        && before
            .iter()
            .zip(after)
            .all(|(before, after)| Arc::ptr_eq(before, after))
}

// Include tests
#[cfg(test)]
#[path = "recursive_test.rs"]
mod recursive_test;
