//! Core building blocks shared by the tagwright crates.
//!
//! - [`escape`]: the four-character HTML escaper used for both element
//!   text and quoted attribute values
//! - [`error`]: the [`RenderError`] type returned by every render operation

pub mod error;
pub mod escape;

pub use error::{RenderError, RenderResult};
pub use escape::{escape, escape_into, neutralize_script};
