//! Presentation document model.
//!
//! A [`Presentation`] is an immutable snapshot. Every edit operation takes
//! `&self` and returns a new `Presentation`; untouched slides and elements are
//! copied over unchanged, so older snapshots stay valid indefinitely.

use super::element::ContentElement;
use serde::{Deserialize, Serialize};

/// Background fill of a slide.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// `value` is a color code
    Solid,
    /// `value` is a path or URL
    Image,
}

/// Slide background descriptor. `value` is not checked against `kind`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Background {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
}

impl Background {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            value: color.into(),
            kind: BackgroundKind::Solid,
        }
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self {
            value: src.into(),
            kind: BackgroundKind::Image,
        }
    }
}

impl Default for Background {
    /// Solid white.
    fn default() -> Self {
        Self::solid("#FFFFFF")
    }
}

/// A single slide.
///
/// `content: None` means no content list has been allocated yet, which is
/// distinct from an allocated but empty list.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub background: Background,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentElement>>,
}

impl Slide {
    /// Create a slide with the given background and no content list.
    pub fn new(id: impl Into<String>, background: Background) -> Self {
        Self {
            id: id.into(),
            background,
            content: None,
        }
    }

    /// Elements in z-order; empty when no content list exists.
    pub fn elements(&self) -> &[ContentElement] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Find the first element with `element_id`.
    pub fn element(&self, element_id: &str) -> Option<&ContentElement> {
        self.elements().iter().find(|e| e.id() == element_id)
    }
}

/// Which slide the editor currently has selected.
///
/// The id is not guaranteed to name an existing slide; deleting the selected
/// slide leaves it dangling.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub selected_slide_id: String,
}

impl Selection {
    pub fn new(slide_id: impl Into<String>) -> Self {
        Self {
            selected_slide_id: slide_id.into(),
        }
    }
}

/// Root aggregate of the document model.
///
/// # Example
///
/// ```rust
/// use slidestore::core::{Background, Presentation, Selection, Slide};
///
/// let doc = Presentation {
///     title: "Quarterly review".to_string(),
///     slides: vec![
///         Slide::new("slide1", Background::default()),
///         Slide::new("slide2", Background::default()),
///     ],
///     selection: Selection::new("slide1"),
/// };
///
/// let renamed = doc.rename_title("Annual review");
/// assert_eq!(renamed.title, "Annual review");
/// assert_eq!(doc.title, "Quarterly review"); // Original unchanged
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Presentation {
    pub title: String,
    pub slides: Vec<Slide>,
    pub selection: Selection,
}

impl Presentation {
    /// Create a presentation with no slides and an empty selection.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slides: Vec::new(),
            selection: Selection::default(),
        }
    }

    pub fn slide(&self, slide_id: &str) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == slide_id)
    }

    pub fn slide_index(&self, slide_id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == slide_id)
    }

    /// The slide named by the selection, if it still exists.
    pub fn selected_slide(&self) -> Option<&Slide> {
        self.slide(&self.selection.selected_slide_id)
    }

    /// Slide ids in display order.
    pub fn slide_ids(&self) -> Vec<&str> {
        self.slides.iter().map(|s| s.id.as_str()).collect()
    }

    /// Replace the first slide matching `slide_id` with `edit(slide)`.
    ///
    /// Returns `None` when no slide matches.
    pub(crate) fn map_slide<F>(&self, slide_id: &str, edit: F) -> Option<Self>
    where
        F: FnOnce(&Slide) -> Slide,
    {
        let index = self.slide_index(slide_id)?;
        let mut slides = self.slides.clone();
        slides[index] = edit(&self.slides[index]);
        Some(Self {
            slides,
            ..self.clone()
        })
    }

    /// Fall back to an unchanged copy when an edit found nothing to apply.
    pub(crate) fn or_unchanged(&self, operation: &'static str, edited: Option<Self>) -> Self {
        edited.unwrap_or_else(|| {
            tracing::debug!(operation, "no matching target, presentation unchanged");
            self.clone()
        })
    }
}
