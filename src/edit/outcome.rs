//! Result of applying an edit.

use crate::core::{EditError, Presentation};

/// Outcome of [`Edit::apply`](super::Edit::apply).
///
/// Every variant carries a presentation. For `NoMatch` and `Rejected` it is
/// equal to the input.
#[derive(Clone, Debug, PartialEq)]
pub enum EditOutcome {
    /// The edit changed the targeted slide or element
    Applied(Presentation),

    /// No slide or element matched the edit's ids
    NoMatch(Presentation),

    /// The edit was refused
    Rejected {
        presentation: Presentation,
        error: EditError,
    },
}

impl EditOutcome {
    pub fn presentation(&self) -> &Presentation {
        match self {
            Self::Applied(presentation) | Self::NoMatch(presentation) => presentation,
            Self::Rejected { presentation, .. } => presentation,
        }
    }

    pub fn into_presentation(self) -> Presentation {
        match self {
            Self::Applied(presentation) | Self::NoMatch(presentation) => presentation,
            Self::Rejected { presentation, .. } => presentation,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn error(&self) -> Option<&EditError> {
        match self {
            Self::Rejected { error, .. } => Some(error),
            _ => None,
        }
    }
}
