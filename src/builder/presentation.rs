//! Builder for constructing presentations.

use crate::builder::error::BuildError;
use crate::core::{check_invariants, Presentation, Selection, Slide};
use stillwater::validation::Validation;

/// Builder for constructing validated presentations.
///
/// `build()` rejects documents whose slide ids, or element ids within a
/// slide, are not unique. The selection is not checked against the slides.
#[derive(Default)]
pub struct PresentationBuilder {
    title: String,
    slides: Vec<Slide>,
    selected: Option<String>,
}

impl PresentationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append a slide.
    pub fn slide(mut self, slide: Slide) -> Self {
        self.slides.push(slide);
        self
    }

    /// Append multiple slides at once.
    pub fn slides(mut self, slides: Vec<Slide>) -> Self {
        self.slides.extend(slides);
        self
    }

    /// Select a slide by id. Defaults to the first slide.
    pub fn select(mut self, slide_id: impl Into<String>) -> Self {
        self.selected = Some(slide_id.into());
        self
    }

    pub fn build(self) -> Result<Presentation, BuildError> {
        let selected = self
            .selected
            .or_else(|| self.slides.first().map(|s| s.id.clone()))
            .unwrap_or_default();

        let presentation = Presentation {
            title: self.title,
            slides: self.slides,
            selection: Selection::new(selected),
        };

        match check_invariants(&presentation) {
            Validation::Success(_) => Ok(presentation),
            Validation::Failure(violations) => Err(BuildError::InvalidPresentation(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SlideBuilder;
    use crate::core::{Background, ContentElement, InvariantViolation, Position, Size};

    fn slide(id: &str) -> Slide {
        SlideBuilder::new().id(id).build().unwrap()
    }

    #[test]
    fn selection_defaults_to_first_slide() {
        let doc = PresentationBuilder::new()
            .title("Deck")
            .slide(slide("slide1"))
            .slide(slide("slide2"))
            .build()
            .unwrap();

        assert_eq!(doc.selection.selected_slide_id, "slide1");
        assert_eq!(doc.slide_ids(), vec!["slide1", "slide2"]);
    }

    #[test]
    fn empty_presentation_has_empty_selection() {
        let doc = PresentationBuilder::new().title("Empty").build().unwrap();
        assert!(doc.slides.is_empty());
        assert_eq!(doc.selection, Selection::default());
    }

    #[test]
    fn explicit_selection_is_not_validated() {
        let doc = PresentationBuilder::new()
            .slide(slide("slide1"))
            .select("ghost")
            .build()
            .unwrap();

        assert_eq!(doc.selection.selected_slide_id, "ghost");
    }

    #[test]
    fn duplicate_ids_are_all_reported() {
        let element = |src: &str| {
            ContentElement::image(src, Position::default(), Size::default()).with_id("x")
        };
        let duplicated = SlideBuilder::new()
            .id("slide2")
            .background(Background::solid("#000000"))
            .element(element("a.png"))
            .element(element("b.png"))
            .build()
            .unwrap();

        let result = PresentationBuilder::new()
            .slides(vec![slide("slide1"), slide("slide1"), duplicated])
            .build();

        match result {
            Err(BuildError::InvalidPresentation(violations)) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&InvariantViolation::DuplicateSlideId {
                    slide_id: "slide1".to_string()
                }));
            }
            other => panic!("Expected invalid presentation, got {other:?}"),
        }
    }
}
