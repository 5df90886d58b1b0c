//! Edits as values.

use crate::config::EditorConfig;
use crate::core::{
    Background, ContentElement, EditError, IdGenerator, Position, Presentation, Size,
};
use crate::edit::outcome::EditOutcome;
use serde::{Deserialize, Serialize};

/// A single edit to a presentation, one variant per operation.
///
/// Edits are plain data, so a UI layer can queue, log or serialize them
/// before applying.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    RenameTitle {
        title: String,
    },
    AddSlide,
    DeleteSlide {
        slide_id: String,
    },
    ChangeSlidePosition {
        new_index: usize,
    },
    AddContent {
        slide_id: String,
        element: ContentElement,
    },
    RemoveContent {
        slide_id: String,
        element_id: String,
    },
    MoveElement {
        slide_id: String,
        element_id: String,
        position: Position,
    },
    ResizeElement {
        slide_id: String,
        element_id: String,
        size: Size,
    },
    SetText {
        slide_id: String,
        element_id: String,
        value: String,
    },
    SetFontFamily {
        slide_id: String,
        element_id: String,
        font_family: String,
    },
    SetBackground {
        slide_id: String,
        background: Background,
    },
}

impl Edit {
    /// Operation name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RenameTitle { .. } => "rename_title",
            Self::AddSlide => "add_slide",
            Self::DeleteSlide { .. } => "delete_slide",
            Self::ChangeSlidePosition { .. } => "change_slide_position",
            Self::AddContent { .. } => "add_content",
            Self::RemoveContent { .. } => "remove_content",
            Self::MoveElement { .. } => "move_element",
            Self::ResizeElement { .. } => "resize_element",
            Self::SetText { .. } => "set_text",
            Self::SetFontFamily { .. } => "set_font_family",
            Self::SetBackground { .. } => "set_background",
        }
    }

    /// Apply this edit to `doc`, reporting whether it took effect.
    ///
    /// `doc` is never modified. `ids` is only consulted by `AddContent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slidestore::core::{Presentation, UuidGenerator};
    /// use slidestore::edit::{Edit, EditOutcome};
    ///
    /// let doc = Presentation::new("Deck").add_slide();
    ///
    /// let edit = Edit::DeleteSlide {
    ///     slide_id: "slide9".to_string(),
    /// };
    /// let outcome = edit.apply(&doc, &UuidGenerator);
    /// assert!(matches!(outcome, EditOutcome::NoMatch(_)));
    /// assert_eq!(outcome.presentation(), &doc);
    /// ```
    pub fn apply(&self, doc: &Presentation, ids: &dyn IdGenerator) -> EditOutcome {
        self.apply_with(doc, ids, &EditorConfig::default())
    }

    /// Apply this edit, creating slides from `config` for `AddSlide`.
    pub fn apply_with(
        &self,
        doc: &Presentation,
        ids: &dyn IdGenerator,
        config: &EditorConfig,
    ) -> EditOutcome {
        let result: Result<Option<Presentation>, EditError> = match self {
            Self::RenameTitle { title } => Ok(Some(doc.rename_title(title.as_str()))),
            Self::AddSlide => Ok(Some(doc.add_slide_with(config))),
            Self::DeleteSlide { slide_id } => Ok(doc.try_delete_slide(slide_id)),
            Self::ChangeSlidePosition { new_index } => doc.try_change_slide_position(*new_index),
            Self::AddContent { slide_id, element } => {
                Ok(doc.try_add_content(slide_id, element.clone(), ids))
            }
            Self::RemoveContent {
                slide_id,
                element_id,
            } => Ok(doc.try_remove_content(slide_id, element_id)),
            Self::MoveElement {
                slide_id,
                element_id,
                position,
            } => Ok(doc.try_move_element(slide_id, element_id, *position)),
            Self::ResizeElement {
                slide_id,
                element_id,
                size,
            } => Ok(doc.try_resize_element(slide_id, element_id, *size)),
            Self::SetText {
                slide_id,
                element_id,
                value,
            } => doc.try_set_text(slide_id, element_id, value.clone()),
            Self::SetFontFamily {
                slide_id,
                element_id,
                font_family,
            } => doc.try_set_font_family(slide_id, element_id, font_family.clone()),
            Self::SetBackground {
                slide_id,
                background,
            } => Ok(doc.try_set_background(slide_id, background.clone())),
        };

        match result {
            Ok(Some(presentation)) => {
                tracing::debug!(edit = self.name(), "edit applied");
                EditOutcome::Applied(presentation)
            }
            Ok(None) => {
                tracing::debug!(edit = self.name(), "edit matched nothing");
                EditOutcome::NoMatch(doc.clone())
            }
            Err(error) => EditOutcome::Rejected {
                presentation: doc.clone(),
                error,
            },
        }
    }
}
