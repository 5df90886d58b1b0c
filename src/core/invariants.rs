//! Structural invariant checks.
//!
//! The edit operations preserve id uniqueness by construction. Documents
//! built or loaded elsewhere are checked here, accumulating every violation
//! instead of stopping at the first.

use super::model::Presentation;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("Duplicate slide id '{slide_id}'")]
    DuplicateSlideId { slide_id: String },

    #[error("Duplicate element id '{element_id}' on slide '{slide_id}'")]
    DuplicateElementId {
        slide_id: String,
        element_id: String,
    },
}

/// Check slide-id and per-slide element-id uniqueness.
///
/// Element ids only need to be unique within their own slide. Each repeated
/// id is reported once per extra occurrence.
///
/// # Example
///
/// ```rust
/// use slidestore::core::{check_invariants, Background, Presentation, Slide};
///
/// let mut doc = Presentation::new("Deck").add_slide();
/// assert!(check_invariants(&doc).is_success());
///
/// doc.slides.push(Slide::new("slide1", Background::default()));
/// assert!(check_invariants(&doc).is_failure());
/// ```
pub fn check_invariants(doc: &Presentation) -> Validation<(), NonEmptyVec<InvariantViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<InvariantViolation>>> = Vec::new();

    let mut slide_ids = HashSet::new();
    for slide in &doc.slides {
        if !slide_ids.insert(slide.id.as_str()) {
            checks.push(Validation::fail(InvariantViolation::DuplicateSlideId {
                slide_id: slide.id.clone(),
            }));
        }

        let mut element_ids = HashSet::new();
        for element in slide.elements() {
            if !element_ids.insert(element.id()) {
                checks.push(Validation::fail(InvariantViolation::DuplicateElementId {
                    slide_id: slide.id.clone(),
                    element_id: element.id().to_string(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
