//! Message Content Filter Tests
//!
//! End-to-end filtering of a content chain the way a bot would receive it
//! from the CMS: a start-up message followed by a text, a carousel and an
//! image.

#[cfg(test)]
mod message_content_filter_tests {
    use anyhow::Result;
    use chatbot_cms::filter::{MessageContentFilters, RecursiveContentFilter};
    use chatbot_cms::models::{Carousel, CommonFields, ContentNode, Image, StartUp, Text};
    use chatbot_cms::test_helpers::{
        test_cms_config, RndCarouselBuilder, RndStartUpBuilder, RndTextBuilder,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::EnvFilter;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Filters that append an increasing counter to texts and empty carousels
    fn counting_filters(counter: Arc<AtomicUsize>) -> MessageContentFilters {
        let text_counter = counter.clone();
        let carousel_counter = counter.clone();
        let start_up_counter = counter;

        MessageContentFilters::new()
            .with_text(move |text: Text| {
                let order = text_counter.fetch_add(1, Ordering::SeqCst) + 1;
                async move { anyhow::Ok(text.clone_with_text(format!("{}{}", text.text, order))) }
            })
            .with_carousel(move |carousel: Carousel| {
                carousel_counter.fetch_add(1, Ordering::SeqCst);
                async move { anyhow::Ok(carousel.clone_with_elements(Vec::new())) }
            })
            .with_start_up(move |start_up: StartUp| {
                let order = start_up_counter.fetch_add(1, Ordering::SeqCst) + 1;
                async move { anyhow::Ok(start_up.clone_with_text(format!("{}{}", start_up.text, order))) }
            })
    }

    #[tokio::test]
    async fn test_filtering_all_types_except_image() -> Result<()> {
        init_tracing();
        let sut = RecursiveContentFilter::new(counting_filters(Arc::new(AtomicUsize::new(0))));

        let image_in = Image::new(CommonFields::new("Id", "name"), "http://img").into_node();
        let carousel_in = RndCarouselBuilder::new()
            .with_follow_up(image_in.clone())
            .add_element()
            .build()
            .into_node();
        let text_in = RndTextBuilder::new()
            .with_text("b")
            .with_follow_up(carousel_in)
            .build()
            .into_node();
        let start_up_in = RndStartUpBuilder::new()
            .with_text("a")
            .with_follow_up(text_in)
            .build()
            .into_node();

        let output = sut.filter_content(start_up_in).await?;

        let ContentNode::StartUp(start_up_out) = output.as_ref() else {
            panic!("Expected start up, got {}", output.kind());
        };
        assert_eq!(start_up_out.text, "a3");

        let text_node = start_up_out.common.follow_up().expect("text follow up");
        let ContentNode::Text(text_out) = text_node.as_ref() else {
            panic!("Expected text, got {}", text_node.kind());
        };
        assert_eq!(text_out.text, "b2");

        let carousel_node = text_out.common.follow_up().expect("carousel follow up");
        let ContentNode::Carousel(carousel_out) = carousel_node.as_ref() else {
            panic!("Expected carousel, got {}", carousel_node.kind());
        };
        assert_eq!(carousel_out.elements.len(), 0);

        let image_out = carousel_out.common.follow_up().expect("image follow up");
        assert!(Arc::ptr_eq(image_out, &image_in));
        Ok(())
    }

    #[tokio::test]
    async fn test_filter_built_from_cms_config() -> Result<()> {
        init_tracing();
        let mut config = test_cms_config();
        config.filter.max_concurrent_elements = 3;
        config.validate().map_err(anyhow::Error::msg)?;

        let counter = Arc::new(AtomicUsize::new(0));
        let sut = RecursiveContentFilter::with_config(
            counting_filters(counter.clone()),
            config.filter.clone(),
        )?;

        let input = RndCarouselBuilder::new()
            .with_element(RndTextBuilder::new().with_text("one").build().into_node())
            .with_element(RndTextBuilder::new().with_text("two").build().into_node())
            .build()
            .into_node();

        let output = sut.filter_content(input).await?;

        let ContentNode::Carousel(carousel) = output.as_ref() else {
            panic!("Expected carousel, got {}", output.kind());
        };
        assert!(carousel.elements.is_empty());
        assert_eq!(sut.config().max_concurrent_elements, 3);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_same_filter_reused_across_trees() -> Result<()> {
        let counter = Arc::new(AtomicUsize::new(0));
        let sut = RecursiveContentFilter::new(counting_filters(counter.clone()));

        let first = sut
            .filter_content(RndTextBuilder::new().with_text("x").build().into_node())
            .await?;
        let second = sut
            .filter_content(RndTextBuilder::new().with_text("x").build().into_node())
            .await?;

        match (first.as_ref(), second.as_ref()) {
            (ContentNode::Text(first), ContentNode::Text(second)) => {
                assert_eq!(first.text, "x1");
                assert_eq!(second.text, "x2");
            }
            other => panic!("Expected texts, got {:?}", other),
        }
        Ok(())
    }
}
