//! Slide lifecycle: title rename, insertion, deletion and reordering.

use super::error::EditError;
use super::model::{Presentation, Slide};
use crate::config::EditorConfig;

impl Presentation {
    /// Return a copy with `title` replaced. Empty titles are allowed.
    pub fn rename_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// Append a new slide with the default configuration.
    ///
    /// The new id is `slide<k>` where `k` starts at `slides.len() + 1` and
    /// counts up until it collides with no existing slide id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slidestore::core::Presentation;
    ///
    /// let doc = Presentation::new("Deck").add_slide().add_slide();
    /// assert_eq!(doc.slide_ids(), vec!["slide1", "slide2"]);
    /// ```
    pub fn add_slide(&self) -> Self {
        self.add_slide_with(&EditorConfig::default())
    }

    /// Append a new slide using `config` for its id prefix and background.
    ///
    /// The new slide gets an allocated, empty content list.
    pub fn add_slide_with(&self, config: &EditorConfig) -> Self {
        let id = self.next_slide_id(config);
        let slide = Slide {
            id,
            background: config.default_background().clone(),
            content: Some(Vec::new()),
        };

        let mut slides = self.slides.clone();
        slides.push(slide);
        Self {
            slides,
            ..self.clone()
        }
    }

    /// Remove the first slide with `slide_id`.
    ///
    /// The selection is left as is, even when it names the deleted slide.
    pub fn delete_slide(&self, slide_id: &str) -> Self {
        self.or_unchanged("delete_slide", self.try_delete_slide(slide_id))
    }

    /// Move the selected slide to `new_index`.
    ///
    /// Returns [`EditError::InvalidIndex`] when `new_index` is past the end of
    /// the slide list. An unknown selected slide is not an error: the
    /// presentation comes back unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slidestore::core::{EditError, Presentation, Selection};
    ///
    /// let mut doc = Presentation::new("Deck").add_slide().add_slide();
    /// doc.selection = Selection::new("slide1");
    ///
    /// let moved = doc.change_slide_position(1).unwrap();
    /// assert_eq!(moved.slide_ids(), vec!["slide2", "slide1"]);
    ///
    /// assert!(matches!(
    ///     doc.change_slide_position(2),
    ///     Err(EditError::InvalidIndex { index: 2, len: 2 })
    /// ));
    /// ```
    pub fn change_slide_position(&self, new_index: usize) -> Result<Self, EditError> {
        let moved = self.try_change_slide_position(new_index)?;
        Ok(self.or_unchanged("change_slide_position", moved))
    }

    pub(crate) fn try_delete_slide(&self, slide_id: &str) -> Option<Self> {
        let index = self.slide_index(slide_id)?;
        let mut slides = self.slides.clone();
        slides.remove(index);
        Some(Self {
            slides,
            ..self.clone()
        })
    }

    pub(crate) fn try_change_slide_position(
        &self,
        new_index: usize,
    ) -> Result<Option<Self>, EditError> {
        let len = self.slides.len();
        if new_index >= len {
            tracing::warn!(index = new_index, len, "invalid slide index");
            return Err(EditError::InvalidIndex {
                index: new_index,
                len,
            });
        }

        let Some(current) = self.slide_index(&self.selection.selected_slide_id) else {
            return Ok(None);
        };

        let mut slides = self.slides.clone();
        let slide = slides.remove(current);
        slides.insert(new_index, slide);
        Ok(Some(Self {
            slides,
            ..self.clone()
        }))
    }

    fn next_slide_id(&self, config: &EditorConfig) -> String {
        let mut k = self.slides.len() + 1;
        loop {
            let candidate = config.slide_id(k);
            if self.slide(&candidate).is_none() {
                return candidate;
            }
            k += 1;
        }
    }
}
