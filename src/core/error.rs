//! Edit errors.

use super::element::ElementKind;
use thiserror::Error;

/// Reasons an edit is rejected.
///
/// Unknown slide or element ids are not errors; those edits return the
/// presentation unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EditError {
    #[error("Invalid slide index {index} (presentation has {len} slides)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Element '{element_id}' on slide '{slide_id}' is an {kind} element, not text")]
    NotTextElement {
        slide_id: String,
        element_id: String,
        kind: ElementKind,
    },
}
