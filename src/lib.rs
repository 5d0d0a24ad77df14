//! # tagwright
//!
//! A fluent, server-side HTML builder.
//!
//! Markup is written by calling methods on a render context from nested
//! closures. Start tags stay open for attributes and CSS classes until
//! content arrives, form field names compose from nested scopes, and
//! typed values bind to form controls with locale-aware formatting.
//!
//! ## Feature Flags
//!
//! - `render` (default) - the tag engine, form binding and entry points
//! - `format` - money and date/time formatting only
//!
//! ## Quick Example
//!
//! ```rust
//! use tagwright::prelude::*;
//!
//! let html = render_to_string(&RenderOptions::new().compact(), |r| {
//!     r.form(Some("/search"), Some("get"), |r| {
//!         r.input(|r| {
//!             r.type_attr("search")?;
//!             r.name("q")?;
//!             r.class("wide")
//!         })
//!     })
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     html,
//!     "<FORM action=\"/search\" method=\"get\"><INPUT type=\"search\" name=\"q\" class=\"wide\"/></FORM>"
//! );
//! ```
//!
//! ## Crates
//!
//! - `tagwright-core`: escaping and the error type
//! - [`format`]: money, date/time and ISO formatting
//! - [`render`]: everything needed to produce markup

pub use tagwright_core::{RenderError, RenderResult, escape};

#[cfg(feature = "format")]
pub use tagwright_format as format;

#[cfg(feature = "format")]
pub use tagwright_format::{DateTimeFormatter, DateTimeLocale, MoneyFormatter, MoneyLocale, Number};

#[cfg(feature = "render")]
pub use tagwright_render as render;

#[cfg(feature = "render")]
pub use tagwright_render::{
	CsrfField, Field, FormValue, PrefixMode, RenderContext, RenderOptions, ambient, render, render_to_string,
};

/// Everything a template module usually needs.
pub mod prelude {
	pub use crate::{RenderError, RenderResult};

	#[cfg(feature = "format")]
	pub use crate::{DateTimeFormatter, DateTimeLocale, MoneyFormatter, MoneyLocale, Number};

	#[cfg(feature = "render")]
	pub use crate::{
		CsrfField, Field, FormValue, PrefixMode, RenderContext, RenderOptions, ambient, render_to_string,
	};
}
