//! Slide background replacement.

use super::model::{Background, Presentation, Slide};

impl Presentation {
    /// Replace a slide's background wholesale.
    ///
    /// The value is not checked against the kind.
    pub fn set_background(&self, slide_id: &str, background: Background) -> Self {
        self.or_unchanged(
            "set_background",
            self.try_set_background(slide_id, background),
        )
    }

    pub(crate) fn try_set_background(
        &self,
        slide_id: &str,
        background: Background,
    ) -> Option<Self> {
        self.map_slide(slide_id, move |slide| Slide {
            background,
            ..slide.clone()
        })
    }
}
