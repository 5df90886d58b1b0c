//! Content elements placed on a slide.
//!
//! Elements are a closed sum type: every element is either an image or a
//! text box. Both kinds share an id, a position and a size; text-only fields
//! live on [`TextElement`] so text edits can never reach an image.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-left corner of an element in slide coordinates.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of an element. Not bounds-checked.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An image placed on a slide.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ImageElement {
    pub id: String,
    pub position: Position,
    pub size: Size,
    /// Path or URL of the image source
    pub src: String,
}

/// A text box placed on a slide.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub id: String,
    pub position: Position,
    pub size: Size,
    pub value: String,
    pub font_family: String,
}

/// Discriminator of a [`ContentElement`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Image,
    Text,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => f.write_str("image"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Any element that can live in a slide's content list.
///
/// The list order is the z-order: later elements are drawn on top.
///
/// # Example
///
/// ```rust
/// use slidestore::core::{ContentElement, ElementKind, Position, Size};
///
/// let text = ContentElement::text(
///     "Hello",
///     "Arial",
///     Position::new(10.0, 20.0),
///     Size::new(300.0, 50.0),
/// );
/// assert_eq!(text.kind(), ElementKind::Text);
/// assert_eq!(text.position(), Position::new(10.0, 20.0));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentElement {
    Image(ImageElement),
    Text(TextElement),
}

impl ContentElement {
    /// Create an image element with an empty id.
    ///
    /// Ids are assigned when the element is added to a slide.
    pub fn image(src: impl Into<String>, position: Position, size: Size) -> Self {
        Self::Image(ImageElement {
            id: String::new(),
            position,
            size,
            src: src.into(),
        })
    }

    /// Create a text element with an empty id.
    pub fn text(
        value: impl Into<String>,
        font_family: impl Into<String>,
        position: Position,
        size: Size,
    ) -> Self {
        Self::Text(TextElement {
            id: String::new(),
            position,
            size,
            value: value.into(),
            font_family: font_family.into(),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Image(image) => &image.id,
            Self::Text(text) => &text.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Image(_) => ElementKind::Image,
            Self::Text(_) => ElementKind::Text,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Image(image) => image.position,
            Self::Text(text) => text.position,
        }
    }

    pub fn size(&self) -> Size {
        match self {
            Self::Image(image) => image.size,
            Self::Text(text) => text.size,
        }
    }

    /// Return the text variant, if this is one.
    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) => None,
        }
    }

    /// Return a copy of this element carrying `id`.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        let id = id.into();
        match self {
            Self::Image(image) => Self::Image(ImageElement { id, ..image.clone() }),
            Self::Text(text) => Self::Text(TextElement { id, ..text.clone() }),
        }
    }

    /// Return a copy of this element at `position`.
    pub fn with_position(&self, position: Position) -> Self {
        match self {
            Self::Image(image) => Self::Image(ImageElement {
                position,
                ..image.clone()
            }),
            Self::Text(text) => Self::Text(TextElement {
                position,
                ..text.clone()
            }),
        }
    }

    /// Return a copy of this element with `size`.
    pub fn with_size(&self, size: Size) -> Self {
        match self {
            Self::Image(image) => Self::Image(ImageElement {
                size,
                ..image.clone()
            }),
            Self::Text(text) => Self::Text(TextElement {
                size,
                ..text.clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> ContentElement {
        ContentElement::image(
            "path/to/image.jpg",
            Position::new(100.0, 100.0),
            Size::new(200.0, 150.0),
        )
    }

    #[test]
    fn accessors_cover_both_variants() {
        let image = sample_image().with_id("image-1");
        assert_eq!(image.id(), "image-1");
        assert_eq!(image.kind(), ElementKind::Image);
        assert_eq!(image.size(), Size::new(200.0, 150.0));
        assert!(image.as_text().is_none());

        let text = ContentElement::text(
            "This is some text",
            "Arial",
            Position::new(300.0, 200.0),
            Size::new(300.0, 50.0),
        );
        assert_eq!(text.kind(), ElementKind::Text);
        assert_eq!(text.as_text().map(|t| t.font_family.as_str()), Some("Arial"));
    }

    #[test]
    fn with_position_leaves_other_fields() {
        let image = sample_image().with_id("a");
        let moved = image.with_position(Position::new(1.0, 2.0));

        assert_eq!(moved.position(), Position::new(1.0, 2.0));
        assert_eq!(moved.size(), image.size());
        assert_eq!(moved.id(), "a");
        assert_eq!(image.position(), Position::new(100.0, 100.0));
    }

    #[test]
    fn element_serializes_with_type_tag() {
        let text = ContentElement::text("Hi", "Oxygen", Position::default(), Size::default())
            .with_id("t1");
        let json = serde_json::to_value(&text).unwrap();

        assert_eq!(json["type"], "text");
        assert_eq!(json["fontFamily"], "Oxygen");
        assert_eq!(json["id"], "t1");

        let back: ContentElement = serde_json::from_value(json).unwrap();
        assert_eq!(back, text);
    }

    #[test]
    fn kind_displays_lowercase() {
        assert_eq!(ElementKind::Image.to_string(), "image");
        assert_eq!(ElementKind::Text.to_string(), "text");
    }
}
