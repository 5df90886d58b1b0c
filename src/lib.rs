//! Slidestore: an immutable document model for slide presentations.
//!
//! A presentation is a plain value. Every edit (renaming, adding, deleting
//! or reordering slides, adding and removing content, moving, resizing or
//! retexting an element, changing a background) is a pure function from one
//! snapshot to the next. The input snapshot is never modified, so callers
//! can keep older snapshots around freely.
//!
//! # Core Concepts
//!
//! - **Document model**: `Presentation`, `Slide`, `Background` and the
//!   `ContentElement` sum type of image and text elements
//! - **Edit operations**: `&self -> Self` methods on `Presentation`
//! - **Identifiers**: element ids come from an injectable `IdGenerator`
//! - **Edits as values**: `Edit` with an explicit applied/no-match/rejected
//!   `EditOutcome`
//!
//! # Example
//!
//! ```rust
//! use slidestore::core::{Background, ContentElement, Position, Presentation, Size};
//!
//! let doc = Presentation::new("Quarterly review").add_slide().add_slide();
//!
//! let doc = doc.add_content(
//!     "slide2",
//!     ContentElement::image("chart.png", Position::new(100.0, 100.0), Size::new(200.0, 150.0)),
//! );
//! let doc = doc.set_background("slide1", Background::solid("#FF0000"));
//!
//! assert_eq!(doc.slides[1].elements().len(), 1);
//! assert_eq!(doc.slides[0].background.value, "#FF0000");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod edit;

// Re-export commonly used types
pub use crate::config::EditorConfig;
pub use crate::core::{
    Background, ContentElement, EditError, IdGenerator, Presentation, Selection, Slide,
};
pub use edit::{Edit, EditOutcome};
