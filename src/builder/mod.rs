//! Builder API for constructing initial documents.
//!
//! Edits never need a builder; they always start from an existing
//! `Presentation`. Builders are for fixtures and loaders that assemble a
//! document from parts and want the id-uniqueness invariants checked.
//!
//! # Example
//!
//! ```
//! use slidestore::builder::{PresentationBuilder, SlideBuilder};
//!
//! let doc = PresentationBuilder::new()
//!     .title("Quarterly review")
//!     .slide(SlideBuilder::new().id("slide1").build()?)
//!     .slide(SlideBuilder::new().id("slide2").build()?)
//!     .build()?;
//!
//! assert_eq!(doc.selection.selected_slide_id, "slide1");
//! # Ok::<(), slidestore::builder::BuildError>(())
//! ```

pub mod error;
pub mod presentation;
pub mod slide;

pub use error::BuildError;
pub use presentation::PresentationBuilder;
pub use slide::SlideBuilder;
