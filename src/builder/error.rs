//! Build errors for presentation and slide builders.

use crate::core::InvariantViolation;
use thiserror::Error;

/// Errors that can occur when building presentations and slides.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Slide id not specified. Call .id(id) before .build()")]
    MissingSlideId,

    #[error("Presentation has {} invariant violation(s): {}", .0.len(), describe(.0))]
    InvalidPresentation(Vec<InvariantViolation>),
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
