//! Fluent server-side HTML builder.
//!
//! Markup is produced by calling methods on a [`RenderContext`] from nested
//! closures. A start tag stays open for attributes until content or a child
//! element is written, so attributes and class tokens can be added from
//! anywhere inside the element's body:
//!
//! ```
//! use tagwright_render::{Field, RenderOptions, render_to_string};
//!
//! struct Order { qty: i32, note: Option<String> }
//! let order = Order { qty: 3, note: None };
//!
//! let html = render_to_string(&RenderOptions::new().compact(), |r| {
//!     r.with_object("order", |r| {
//!         r.input(|r| r.bind_input("number", Field::required("qty", &order.qty)))?;
//!         r.textarea_for(Field::optional("note", order.note.as_ref()), |_| Ok(()))
//!     })
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     html,
//!     "<INPUT type=\"number\" name=\"order.qty\" value=\"3\" required/>\
//!      <TEXTAREA name=\"order.note\"></TEXTAREA>"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: the deferred-attribute tag protocol and text output
//! - [`names`]: hierarchical field names
//! - [`binding`], [`select`], [`form`]: form controls bound to typed fields
//! - [`tags`], [`attrs`]: element and attribute shortcuts
//! - [`session`], [`ambient`]: entry points, explicit or thread-bound

pub mod ambient;
pub mod attrs;
pub mod binding;
pub mod context;
pub mod engine;
pub mod field;
pub mod form;
pub mod names;
pub mod options;
pub mod patterns;
pub mod select;
pub mod session;
pub mod tags;
pub mod value;

pub use context::RenderContext;
pub use field::Field;
pub use form::{CSRF_FORM_FIELD, CsrfField, CsrfProvider};
pub use names::{NamePath, NameScope, PrefixMode};
pub use options::RenderOptions;
pub use select::{TypedMultiSelect, TypedSelect};
pub use session::{render, render_to_string};
pub use tagwright_core::{RenderError, RenderResult};
pub use value::FormValue;
