//! `<FORM>` rendering with CSRF protection.

use crate::context::RenderContext;
use std::fmt;
use std::sync::Arc;
use tagwright_core::RenderResult;

/// The form field name under which the CSRF token is submitted.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// A hidden field carrying the anti-forgery token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfField {
	pub name: String,
	pub value: String,
}

impl CsrfField {
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}

	/// A token submitted under [`CSRF_FORM_FIELD`].
	pub fn token(value: impl Into<String>) -> Self {
		Self::new(CSRF_FORM_FIELD, value)
	}
}

/// Supplies the CSRF field for the current request, if any.
pub type CsrfProvider = Arc<dyn Fn() -> Option<CsrfField> + Send + Sync>;

/// `GET` forms carry no token; a missing method means `POST`.
fn needs_csrf(method: Option<&str>) -> bool {
	method.is_none_or(|m| m.eq_ignore_ascii_case("post") || m.eq_ignore_ascii_case("delete"))
}

impl<W: fmt::Write> RenderContext<W> {
	/// Renders `<FORM action method>` around `body`.
	///
	/// For state-changing methods the CSRF provider is consulted and its
	/// field, if any, is appended as a hidden input after the body. The
	/// token name is used verbatim, never resolved against a name prefix.
	pub fn form<F>(&mut self, action: Option<&str>, method: Option<&str>, body: F) -> RenderResult<()>
	where
		F: FnOnce(&mut Self) -> RenderResult<()>,
	{
		self.element("FORM", |r| {
			r.attr_opt("action", action)?;
			r.attr_opt("method", method)?;
			body(r)?;
			if needs_csrf(method) {
				if let Some(field) = r.csrf_field() {
					tracing::trace!(field = %field.name, "appending CSRF field");
					r.void_element("INPUT", |r| {
						r.attr("type", "hidden")?;
						r.attr("name", &field.name)?;
						r.attr("value", &field.value)
					})?;
				}
			}
			Ok(())
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::RenderOptions;
	use rstest::rstest;

	fn with_token() -> RenderContext<String> {
		RenderContext::new(String::new(), RenderOptions::new().compact())
			.with_csrf(|| Some(CsrfField::token("t0k")))
	}

	#[rstest]
	#[case(None, true)]
	#[case(Some("post"), true)]
	#[case(Some("POST"), true)]
	#[case(Some("Delete"), true)]
	#[case(Some("get"), false)]
	#[case(Some("put"), false)]
	fn test_needs_csrf(#[case] method: Option<&str>, #[case] expected: bool) {
		assert_eq!(needs_csrf(method), expected);
	}

	#[rstest]
	fn test_post_form_appends_token_after_body() {
		let mut r = with_token();
		r.form(Some("/save"), Some("post"), |r| r.text("x")).unwrap();
		assert_eq!(
			r.finish().unwrap(),
			"<FORM action=\"/save\" method=\"post\">x\
			 <INPUT type=\"hidden\" name=\"csrfmiddlewaretoken\" value=\"t0k\"/></FORM>"
		);
	}

	#[rstest]
	fn test_get_form_has_no_token() {
		let mut r = with_token();
		r.form(Some("/find"), Some("get"), |_| Ok(())).unwrap();
		assert_eq!(
			r.finish().unwrap(),
			"<FORM action=\"/find\" method=\"get\"></FORM>"
		);
	}

	#[rstest]
	fn test_token_ignores_name_prefix() {
		let mut r = with_token();
		r.with_object("order", |r| r.form(None, None, |_| Ok(()))).unwrap();
		assert!(r.finish().unwrap().contains("name=\"csrfmiddlewaretoken\""));
	}

	#[rstest]
	fn test_no_provider_no_token() {
		let mut r = RenderContext::new(String::new(), RenderOptions::new().compact());
		r.form(None, None, |_| Ok(())).unwrap();
		assert_eq!(r.finish().unwrap(), "<FORM></FORM>");
	}

	#[rstest]
	fn test_provider_without_token() {
		let mut r = RenderContext::new(String::new(), RenderOptions::new().compact())
			.with_csrf(|| None);
		r.form(None, Some("delete"), |_| Ok(())).unwrap();
		assert_eq!(r.finish().unwrap(), "<FORM method=\"delete\"></FORM>");
	}
}
