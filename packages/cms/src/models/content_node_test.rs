//! Tests for the content node model

#[cfg(test)]
mod tests {
    use crate::models::{
        Carousel, CommonFields, ContentKind, ContentNode, Image, StartUp, Text,
        UnsupportedContent,
    };
    use serde_json::json;
    use std::sync::Arc;

    fn image(id: &str) -> Arc<ContentNode> {
        Image::new(CommonFields::new(id, "image"), "http://img").into_node()
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            Text::new(CommonFields::new("1", "t"), "hi").into_node().kind(),
            ContentKind::Text
        );
        assert_eq!(
            StartUp::new(CommonFields::new("2", "s"), "hi")
                .into_node()
                .kind(),
            ContentKind::StartUp
        );
        assert_eq!(image("3").kind(), ContentKind::Image);
        assert_eq!(
            Carousel::new(CommonFields::new("4", "c"), vec![])
                .into_node()
                .kind(),
            ContentKind::Carousel
        );
        assert_eq!(ContentKind::StartUp.to_string(), "startUp");
    }

    #[test]
    fn test_clone_with_text_shares_follow_up() {
        let next = image("img");
        let text = Text::new(
            CommonFields::new("t1", "greeting").with_follow_up(next.clone()),
            "Hello",
        );

        let cloned = text.clone_with_text("Bye");

        assert_eq!(cloned.text, "Bye");
        assert_eq!(cloned.common.id, "t1");
        assert!(Arc::ptr_eq(cloned.common.follow_up().unwrap(), &next));
    }

    #[test]
    fn test_clone_with_elements_shares_follow_up() {
        let next = image("after");
        let carousel = Carousel::new(
            CommonFields::new("c1", "offers").with_follow_up(next.clone()),
            vec![image("e1"), image("e2")],
        );

        let emptied = carousel.clone_with_elements(vec![]);

        assert!(emptied.elements.is_empty());
        assert!(Arc::ptr_eq(emptied.common.follow_up().unwrap(), &next));
        assert_eq!(carousel.elements.len(), 2);
    }

    #[test]
    fn test_with_follow_up_replaces_only_successor() {
        let first = image("first");
        let second = image("second");
        let element = image("element");
        let node = Carousel::new(
            CommonFields::new("c1", "offers")
                .with_short_text("Offers")
                .with_follow_up(first),
            vec![element.clone()],
        )
        .into_node();

        let moved = node.with_follow_up(Some(second.clone()));

        assert!(Arc::ptr_eq(moved.follow_up().unwrap(), &second));
        assert_eq!(moved.common().short_text.as_deref(), Some("Offers"));
        match moved {
            ContentNode::Carousel(carousel) => {
                assert!(Arc::ptr_eq(&carousel.elements[0], &element));
            }
            other => panic!("Expected carousel, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_tree_size_counts_elements_and_follow_ups() {
        let carousel = Carousel::new(
            CommonFields::new("c1", "offers").with_follow_up(image("tail")),
            vec![image("e1"), image("e2")],
        )
        .into_node();
        let root = Text::new(
            CommonFields::new("t1", "intro").with_follow_up(carousel),
            "Look",
        )
        .into_node();

        assert_eq!(root.tree_size(), 5);
    }

    #[test]
    fn test_tree_size_and_drop_of_long_chain() {
        let root = (0..50_000).fold(image("tail"), |next, i| {
            Text::new(
                CommonFields::new(format!("t{}", i), "step").with_follow_up(next),
                "next",
            )
            .into_node()
        });

        assert_eq!(root.tree_size(), 50_001);
        drop(root);
    }

    #[test]
    fn test_drop_keeps_shared_successors() {
        let tail = image("tail");
        let head = Text::new(
            CommonFields::new("t1", "intro").with_follow_up(Arc::clone(&tail)),
            "Look",
        )
        .into_node();

        drop(head);

        assert_eq!(Arc::strong_count(&tail), 1);
        assert_eq!(tail.id(), "tail");
    }

    #[test]
    fn test_serialized_shape_uses_type_tag() {
        let node = Text::new(
            CommonFields::new("t1", "greeting").with_follow_up(image("img")),
            "Hello",
        )
        .into_node();

        let value = serde_json::to_value(node.as_ref()).unwrap();

        assert_eq!(value["type"], "text");
        assert_eq!(value["text"], "Hello");
        assert_eq!(value["common"]["id"], "t1");
        assert_eq!(value["common"]["followUp"]["type"], "image");
        assert_eq!(value["common"]["followUp"]["url"], "http://img");
    }

    #[test]
    fn test_deserialize_carousel_from_cms_payload() {
        let payload = json!({
            "type": "carousel",
            "common": { "id": "c1", "name": "offers", "keywords": ["deals"] },
            "elements": [
                { "type": "image", "common": { "id": "i1", "name": "pic" }, "url": "http://a" },
                { "type": "unsupported", "common": { "id": "q1", "name": "queue" }, "contentType": "queue" }
            ]
        });

        let node: ContentNode = serde_json::from_value(payload).unwrap();

        let ContentNode::Carousel(carousel) = node else {
            panic!("Expected carousel");
        };
        assert_eq!(carousel.common.keywords, vec!["deals".to_string()]);
        assert_eq!(carousel.elements.len(), 2);
        assert_eq!(
            carousel.elements[1].as_ref(),
            &ContentNode::Unsupported(UnsupportedContent::new(
                CommonFields::new("q1", "queue"),
                "queue"
            ))
        );
    }
}
