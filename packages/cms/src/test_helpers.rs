//! Test Helpers
//!
//! Builders that fill every field with random values so that tests only
//! spell out what they assert on.
//!
//! ```rust
//! use chatbot_cms::test_helpers::{RndCarouselBuilder, RndTextBuilder};
//!
//! let carousel = RndCarouselBuilder::new().add_element().build().into_node();
//! let text = RndTextBuilder::new().with_follow_up(carousel).build();
//!
//! assert!(text.common.follow_up().is_some());
//! ```

use crate::config::{CmsConfig, CmsCredentials, FilterConfig, SupportedLocale};
use crate::models::{Carousel, CommonFields, ContentNode, Image, StartUp, Text};
use std::sync::Arc;
use uuid::Uuid;

/// Random string with a readable prefix, e.g. `text-6f1c...`
pub fn rnd_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Common fields with random id and name
pub fn rnd_common_fields() -> CommonFields {
    CommonFields::new(rnd_str("id"), rnd_str("name"))
}

pub struct RndTextBuilder {
    common: CommonFields,
    text: String,
}

impl RndTextBuilder {
    pub fn new() -> Self {
        Self {
            common: rnd_common_fields(),
            text: rnd_str("text"),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_follow_up(mut self, follow_up: Arc<ContentNode>) -> Self {
        self.common = self.common.with_follow_up(follow_up);
        self
    }

    pub fn build(self) -> Text {
        Text::new(self.common, self.text)
    }
}

impl Default for RndTextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RndStartUpBuilder {
    common: CommonFields,
    text: String,
}

impl RndStartUpBuilder {
    pub fn new() -> Self {
        Self {
            common: rnd_common_fields(),
            text: rnd_str("startUp"),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_follow_up(mut self, follow_up: Arc<ContentNode>) -> Self {
        self.common = self.common.with_follow_up(follow_up);
        self
    }

    pub fn build(self) -> StartUp {
        StartUp::new(self.common, self.text)
    }
}

impl Default for RndStartUpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RndImageBuilder {
    common: CommonFields,
    url: String,
}

impl RndImageBuilder {
    pub fn new() -> Self {
        Self {
            common: rnd_common_fields(),
            url: format!("https://{}.example.com/image.png", rnd_str("img")),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_follow_up(mut self, follow_up: Arc<ContentNode>) -> Self {
        self.common = self.common.with_follow_up(follow_up);
        self
    }

    pub fn build(self) -> Image {
        Image::new(self.common, self.url)
    }
}

impl Default for RndImageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RndCarouselBuilder {
    common: CommonFields,
    elements: Vec<Arc<ContentNode>>,
}

impl RndCarouselBuilder {
    pub fn new() -> Self {
        Self {
            common: rnd_common_fields(),
            elements: Vec::new(),
        }
    }

    /// Append a random image element
    pub fn add_element(mut self) -> Self {
        self.elements.push(RndImageBuilder::new().build().into_node());
        self
    }

    pub fn with_element(mut self, element: Arc<ContentNode>) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_follow_up(mut self, follow_up: Arc<ContentNode>) -> Self {
        self.common = self.common.with_follow_up(follow_up);
        self
    }

    pub fn build(self) -> Carousel {
        Carousel::new(self.common, self.elements)
    }
}

impl Default for RndCarouselBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Valid CMS configuration pointing at a local test backend
pub fn test_cms_config() -> CmsConfig {
    CmsConfig {
        credentials: CmsCredentials {
            token: rnd_str("token"),
            api_endpoint: "http://localhost:8055/".to_string(),
        },
        locale: SupportedLocale::English,
        filter: FilterConfig::default(),
    }
}
