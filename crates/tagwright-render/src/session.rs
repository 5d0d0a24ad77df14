//! Render entry points.

use crate::context::RenderContext;
use crate::options::RenderOptions;
use std::fmt;
use tagwright_core::RenderResult;

/// Renders `body` into `out` with a fresh context.
///
/// The context lives exactly as long as this call. On error the partial
/// output already written to `out` must be discarded by the caller; no
/// end tags are emitted for elements left open.
pub fn render<W, F>(out: W, options: &RenderOptions, body: F) -> RenderResult<W>
where
	W: fmt::Write,
	F: FnOnce(&mut RenderContext<W>) -> RenderResult<()>,
{
	tracing::trace!(?options, "render session started");
	let result = RenderContext::new(out, options.clone()).render(body);
	if let Err(err) = &result {
		tracing::debug!(error = %err, "render session failed");
	}
	result
}

/// Renders `body` to a new `String`.
///
/// ```
/// use tagwright_render::{RenderOptions, render_to_string};
///
/// let html = render_to_string(&RenderOptions::default(), |r| {
///     r.div(None, |r| {
///         r.class("a")?;
///         r.class("b")
///     })
/// })
/// .unwrap();
/// assert_eq!(html, "<DIV class=\"a b\"></DIV>\n");
/// ```
pub fn render_to_string<F>(options: &RenderOptions, body: F) -> RenderResult<String>
where
	F: FnOnce(&mut RenderContext<String>) -> RenderResult<()>,
{
	render(String::new(), options, body)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tagwright_core::RenderError;

	#[rstest]
	fn test_render_into_borrowed_sink() {
		let mut page = String::from("<!DOCTYPE html>");
		render(&mut page, &RenderOptions::new().compact(), |r| r.br()).unwrap();
		assert_eq!(page, "<!DOCTYPE html><BR/>");
	}

	#[rstest]
	fn test_error_propagates() {
		let err = render_to_string(&RenderOptions::default(), |r| r.attr("id", "x")).unwrap_err();
		assert!(matches!(err, RenderError::StrayAttribute { .. }));
	}

	#[rstest]
	fn test_sessions_are_independent() {
		let options = RenderOptions::new().compact();
		let first = render_to_string(&options, |r| {
			r.open_tag("DIV")?;
			r.class("left-over")
		})
		.unwrap();
		let second = render_to_string(&options, |r| r.span(None, |_| Ok(()))).unwrap();
		assert_eq!(first, "<DIV class=\"left-over\">");
		assert_eq!(second, "<SPAN></SPAN>");
	}
}
