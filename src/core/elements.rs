//! Element mutation: position, size, text value and font family.
//!
//! Every mutation replaces the element in place, so its z-order is kept.
//! Unknown slide or element ids leave the presentation unchanged.

use super::element::{ContentElement, Position, Size, TextElement};
use super::error::EditError;
use super::model::{Presentation, Slide};

impl Presentation {
    pub fn move_element(&self, slide_id: &str, element_id: &str, position: Position) -> Self {
        self.or_unchanged(
            "move_element",
            self.try_move_element(slide_id, element_id, position),
        )
    }

    pub fn resize_element(&self, slide_id: &str, element_id: &str, size: Size) -> Self {
        self.or_unchanged(
            "resize_element",
            self.try_resize_element(slide_id, element_id, size),
        )
    }

    /// Replace the `value` of a text element.
    ///
    /// Targeting an image element is rejected with
    /// [`EditError::NotTextElement`].
    pub fn set_text(
        &self,
        slide_id: &str,
        element_id: &str,
        value: impl Into<String>,
    ) -> Result<Self, EditError> {
        let edited = self.try_set_text(slide_id, element_id, value.into())?;
        Ok(self.or_unchanged("set_text", edited))
    }

    /// Replace the `font_family` of a text element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slidestore::core::{ContentElement, Position, Presentation, SequentialIdGenerator, Size};
    ///
    /// let ids = SequentialIdGenerator::new("el");
    /// let text = ContentElement::text("Hello", "Arial", Position::default(), Size::default());
    /// let doc = Presentation::new("Deck").add_slide().add_content_with("slide1", text, &ids);
    ///
    /// let doc = doc.set_font_family("slide1", "el-1", "Oxygen").unwrap();
    /// let text = doc.slides[0].elements()[0].as_text().unwrap();
    /// assert_eq!(text.font_family, "Oxygen");
    /// assert_eq!(text.value, "Hello");
    /// ```
    pub fn set_font_family(
        &self,
        slide_id: &str,
        element_id: &str,
        font_family: impl Into<String>,
    ) -> Result<Self, EditError> {
        let edited = self.try_set_font_family(slide_id, element_id, font_family.into())?;
        Ok(self.or_unchanged("set_font_family", edited))
    }

    pub(crate) fn try_move_element(
        &self,
        slide_id: &str,
        element_id: &str,
        position: Position,
    ) -> Option<Self> {
        self.try_update_element(slide_id, element_id, |element| {
            Ok(element.with_position(position))
        })
        .ok()
        .flatten()
    }

    pub(crate) fn try_resize_element(
        &self,
        slide_id: &str,
        element_id: &str,
        size: Size,
    ) -> Option<Self> {
        self.try_update_element(slide_id, element_id, |element| Ok(element.with_size(size)))
            .ok()
            .flatten()
    }

    pub(crate) fn try_set_text(
        &self,
        slide_id: &str,
        element_id: &str,
        value: String,
    ) -> Result<Option<Self>, EditError> {
        self.try_update_text(slide_id, element_id, |text| TextElement {
            value,
            ..text.clone()
        })
    }

    pub(crate) fn try_set_font_family(
        &self,
        slide_id: &str,
        element_id: &str,
        font_family: String,
    ) -> Result<Option<Self>, EditError> {
        self.try_update_text(slide_id, element_id, |text| TextElement {
            font_family,
            ..text.clone()
        })
    }

    fn try_update_text<F>(
        &self,
        slide_id: &str,
        element_id: &str,
        edit: F,
    ) -> Result<Option<Self>, EditError>
    where
        F: FnOnce(&TextElement) -> TextElement,
    {
        self.try_update_element(slide_id, element_id, |element| match element {
            ContentElement::Text(text) => Ok(ContentElement::Text(edit(text))),
            ContentElement::Image(_) => {
                tracing::warn!(slide_id, element_id, "text edit targets an image element");
                Err(EditError::NotTextElement {
                    slide_id: slide_id.to_string(),
                    element_id: element_id.to_string(),
                    kind: element.kind(),
                })
            }
        })
    }

    /// Replace one element of one slide with `edit(element)`.
    ///
    /// `Ok(None)` when the slide or element does not exist.
    fn try_update_element<F>(
        &self,
        slide_id: &str,
        element_id: &str,
        edit: F,
    ) -> Result<Option<Self>, EditError>
    where
        F: FnOnce(&ContentElement) -> Result<ContentElement, EditError>,
    {
        let Some(slide) = self.slide(slide_id) else {
            return Ok(None);
        };
        let Some(index) = slide.elements().iter().position(|e| e.id() == element_id) else {
            return Ok(None);
        };

        let updated = edit(&slide.elements()[index])?;
        Ok(self.map_slide(slide_id, move |slide| {
            let mut content = slide.elements().to_vec();
            content[index] = updated;
            Slide {
                content: Some(content),
                ..slide.clone()
            }
        }))
    }
}
