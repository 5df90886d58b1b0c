//! Builder for constructing slides.

use crate::builder::error::BuildError;
use crate::core::{Background, ContentElement, Slide};

/// Builder for constructing slides with a fluent API.
///
/// Element ids given here are kept as is, so fixtures can name their elements.
#[derive(Default)]
pub struct SlideBuilder {
    id: Option<String>,
    background: Option<Background>,
    content: Option<Vec<ContentElement>>,
}

impl SlideBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide id (required).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the background. Defaults to solid white.
    pub fn background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    /// Allocate an empty content list without adding elements.
    pub fn empty_content(mut self) -> Self {
        self.content.get_or_insert_with(Vec::new);
        self
    }

    /// Append an element to the content list, allocating it if needed.
    pub fn element(mut self, element: ContentElement) -> Self {
        self.content.get_or_insert_with(Vec::new).push(element);
        self
    }

    pub fn build(self) -> Result<Slide, BuildError> {
        let id = self.id.ok_or(BuildError::MissingSlideId)?;

        Ok(Slide {
            id,
            background: self.background.unwrap_or_default(),
            content: self.content,
        })
    }
}
