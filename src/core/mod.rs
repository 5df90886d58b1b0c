//! Document model and edit operations.
//!
//! This module contains the pure core of the presentation store:
//! - The document model (`Presentation`, `Slide`, `ContentElement`, ...)
//! - Identifier generation for content elements
//! - Immutable edit operations, implemented as `&self -> Self` methods
//!   on `Presentation`
//! - Invariant checks for externally constructed documents
//!
//! No operation mutates its input. Apart from drawing element ids, all logic
//! here is free of side effects.

mod background;
mod content;
mod element;
mod elements;
mod error;
mod ids;
mod invariants;
mod model;
mod slides;

pub use element::{ContentElement, ElementKind, ImageElement, Position, Size, TextElement};
pub use error::EditError;
pub use ids::{generate_id, IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use invariants::{check_invariants, InvariantViolation};
pub use model::{Background, BackgroundKind, Presentation, Selection, Slide};
