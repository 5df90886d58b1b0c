//! Content lifecycle: adding and removing elements on a slide.

use super::element::ContentElement;
use super::ids::{IdGenerator, UuidGenerator};
use super::model::{Presentation, Slide};

impl Presentation {
    /// Append `element` to a slide, giving it a fresh UUID id.
    ///
    /// Any id already on `element` is discarded. Unknown `slide_id` leaves
    /// the presentation unchanged.
    pub fn add_content(&self, slide_id: &str, element: ContentElement) -> Self {
        self.add_content_with(slide_id, element, &UuidGenerator)
    }

    /// Append `element` to a slide, taking its id from `ids`.
    ///
    /// A slide without a content list gets one allocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slidestore::core::{
    ///     ContentElement, Position, Presentation, SequentialIdGenerator, Size,
    /// };
    ///
    /// let ids = SequentialIdGenerator::new("el");
    /// let image = ContentElement::image("cat.png", Position::new(0.0, 0.0), Size::new(64.0, 64.0))
    ///     .with_id("image-1");
    ///
    /// let doc = Presentation::new("Deck")
    ///     .add_slide()
    ///     .add_content_with("slide1", image, &ids);
    ///
    /// assert_eq!(doc.slides[0].elements()[0].id(), "el-1");
    /// ```
    pub fn add_content_with(
        &self,
        slide_id: &str,
        element: ContentElement,
        ids: &dyn IdGenerator,
    ) -> Self {
        self.or_unchanged("add_content", self.try_add_content(slide_id, element, ids))
    }

    /// Remove the first element with `element_id` from a slide.
    ///
    /// A slide with no content list keeps having none.
    pub fn remove_content(&self, slide_id: &str, element_id: &str) -> Self {
        self.or_unchanged(
            "remove_content",
            self.try_remove_content(slide_id, element_id),
        )
    }

    pub(crate) fn try_add_content(
        &self,
        slide_id: &str,
        element: ContentElement,
        ids: &dyn IdGenerator,
    ) -> Option<Self> {
        // Only draw an id once the slide is known to exist
        let slide = self.slide(slide_id)?;
        let element = element.with_id(fresh_element_id(slide, ids));

        self.map_slide(slide_id, move |slide| {
            let mut content = slide.content.clone().unwrap_or_default();
            content.push(element);
            Slide {
                content: Some(content),
                ..slide.clone()
            }
        })
    }

    pub(crate) fn try_remove_content(&self, slide_id: &str, element_id: &str) -> Option<Self> {
        let slide = self.slide(slide_id)?;
        let index = slide.elements().iter().position(|e| e.id() == element_id)?;

        self.map_slide(slide_id, |slide| {
            let mut content = slide.elements().to_vec();
            content.remove(index);
            Slide {
                content: Some(content),
                ..slide.clone()
            }
        })
    }
}

/// Draw ids until one is not already used on `slide`.
fn fresh_element_id(slide: &Slide, ids: &dyn IdGenerator) -> String {
    loop {
        let candidate = ids.generate_id();
        if slide.element(&candidate).is_none() {
            return candidate;
        }
        tracing::debug!(
            slide_id = %slide.id,
            id = %candidate,
            "generated element id taken, redrawing"
        );
    }
}
