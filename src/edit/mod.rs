//! Edits as values with explicit outcomes.
//!
//! The methods on [`Presentation`](crate::core::Presentation) return an
//! unchanged copy when their target does not exist. [`Edit::apply`] runs the
//! same operations but says which of three things happened:
//!
//! - **Applied**: the document changed
//! - **NoMatch**: an id matched nothing; the document is unchanged
//! - **Rejected**: the edit was refused (out-of-range index, text edit on an
//!   image); the document is unchanged and the error is attached

mod command;
mod outcome;

pub use command::Edit;
pub use outcome::EditOutcome;
