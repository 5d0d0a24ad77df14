//! The deferred-attribute tag protocol.
//!
//! Opening a tag only buffers `<TAG`. Attributes and classes are appended to
//! that buffer until the first of: a text write, a nested open, or the close.
//! At that point the buffer is flushed: the text, the merged `class="…"`
//! attribute and `>` (or `/>` for a void element closed without content).

use crate::context::RenderContext;
use chrono::NaiveDate;
use std::fmt::{self, Write};
use tagwright_core::{RenderError, RenderResult, escape_into, neutralize_script};

/// Escapes everything written through it.
struct Escaping<'a, W: ?Sized>(&'a mut W);

impl<W: fmt::Write + ?Sized> fmt::Write for Escaping<'_, W> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		escape_into(s, self.0)
	}
}

impl<W: fmt::Write> RenderContext<W> {
	/// Writes the pending start tag, if any.
	pub fn flush(&mut self) -> RenderResult<()> {
		self.flush_pending(false)
	}

	fn flush_pending(&mut self, self_closing: bool) -> RenderResult<()> {
		if self.pending.is_empty() {
			return Ok(());
		}

		self.out.write_str(&self.pending)?;
		if !self.classes.is_empty() {
			self.out.write_str(" class=\"")?;
			for (index, class) in self.classes.iter().enumerate() {
				if index > 0 {
					self.out.write_char(' ')?;
				}
				escape_into(class, &mut self.out)?;
			}
			self.out.write_char('"')?;
		}
		self.out.write_str(if self_closing { "/>" } else { ">" })?;

		self.pending.clear();
		self.classes.clear();
		Ok(())
	}

	/// Starts a pending tag, flushing the enclosing one first.
	pub fn open_tag(&mut self, tag: &str) -> RenderResult<()> {
		self.flush()?;
		self.pending.push('<');
		self.pending.push_str(tag);
		Ok(())
	}

	/// Closes `tag`.
	///
	/// A `self_closing` tag that is still pending is flushed as `<TAG …/>`
	/// with no separate end tag. Otherwise the start tag is flushed (if
	/// needed) and `</TAG>` is written.
	pub fn close_tag(&mut self, tag: &str, self_closing: bool) -> RenderResult<()> {
		if self_closing && self.is_pending() {
			self.flush_pending(true)?;
		} else {
			self.flush()?;
			self.out.write_str("</")?;
			self.out.write_str(tag)?;
			self.out.write_char('>')?;
		}
		if self.options.trailing_newline {
			self.out.write_char('\n')?;
		}
		Ok(())
	}

	/// Opens `tag`, runs `body`, closes `tag`.
	pub fn element<F>(&mut self, tag: &str, body: F) -> RenderResult<()>
	where
		F: FnOnce(&mut Self) -> RenderResult<()>,
	{
		self.open_tag(tag)?;
		body(self)?;
		self.close_tag(tag, false)
	}

	/// Like [`RenderContext::element`], but self-closes when `body` wrote no content.
	pub fn void_element<F>(&mut self, tag: &str, body: F) -> RenderResult<()>
	where
		F: FnOnce(&mut Self) -> RenderResult<()>,
	{
		self.open_tag(tag)?;
		body(self)?;
		self.close_tag(tag, true)
	}

	fn check_pending(&self, name: &str) -> RenderResult<bool> {
		if self.is_pending() {
			return Ok(true);
		}
		if self.options.strict_attributes {
			return Err(RenderError::stray(name));
		}
		tracing::debug!(attribute = name, "dropping attribute outside tag brackets");
		Ok(false)
	}

	/// Adds `name="value"` to the pending tag.
	///
	/// With no pending tag this fails with [`RenderError::StrayAttribute`]
	/// in strict mode and does nothing otherwise.
	pub fn attr(&mut self, name: &str, value: &str) -> RenderResult<()> {
		if !self.check_pending(name)? {
			return Ok(());
		}
		self.pending.push(' ');
		self.pending.push_str(name);
		self.pending.push_str("=\"");
		escape_into(value, &mut self.pending)?;
		self.pending.push('"');
		Ok(())
	}

	/// Adds `name="value"` when `value` is present.
	pub fn attr_opt(&mut self, name: &str, value: Option<&str>) -> RenderResult<()> {
		match value {
			Some(value) => self.attr(name, value),
			None => Ok(()),
		}
	}

	/// Adds a valueless attribute such as `required`.
	pub fn attr_flag(&mut self, name: &str) -> RenderResult<()> {
		if self.check_pending(name)? {
			self.pending.push(' ');
			self.pending.push_str(name);
		}
		Ok(())
	}

	/// Adds a class token to the pending tag. Tokens are merged into one
	/// `class` attribute, in call order, when the tag is flushed.
	pub fn class(&mut self, token: &str) -> RenderResult<()> {
		if self.check_pending("class")? {
			self.classes.push(token.to_string());
		}
		Ok(())
	}

	/// Adds a class token when present.
	pub fn class_opt(&mut self, token: Option<&str>) -> RenderResult<()> {
		match token {
			Some(token) => self.class(token),
			None => Ok(()),
		}
	}

	/// Writes an escaped text node.
	pub fn text(&mut self, value: &str) -> RenderResult<()> {
		self.flush()?;
		escape_into(value, &mut self.out)?;
		Ok(())
	}

	/// Writes an escaped text node; `None` writes nothing and leaves any
	/// pending tag open.
	pub fn text_opt(&mut self, value: Option<&str>) -> RenderResult<()> {
		match value {
			Some(value) => self.text(value),
			None => Ok(()),
		}
	}

	/// Writes any `Display` value as an escaped text node.
	pub fn text_display<T: fmt::Display + ?Sized>(&mut self, value: &T) -> RenderResult<()> {
		self.flush()?;
		write!(Escaping(&mut self.out), "{value}")?;
		Ok(())
	}

	/// Writes a date with the session's date format.
	pub fn text_date(&mut self, value: Option<&NaiveDate>) -> RenderResult<()> {
		match value {
			Some(date) => {
				let text = self.format_date(date);
				self.text(&text)
			}
			None => Ok(()),
		}
	}

	/// Writes `html` unescaped. Only for trusted fragments.
	pub fn raw_html(&mut self, html: &str) -> RenderResult<()> {
		self.flush()?;
		self.out.write_str(html)?;
		Ok(())
	}

	/// Inline `<SCRIPT>`; any `</script>` inside `code` is neutralized.
	pub fn script(&mut self, code: &str, script_type: Option<&str>) -> RenderResult<()> {
		self.element("SCRIPT", |r| {
			r.attr_opt("type", script_type)?;
			r.raw_html(&neutralize_script(code))
		})
	}

	/// External `<SCRIPT src="…">`.
	pub fn script_src(&mut self, src: &str) -> RenderResult<()> {
		self.element("SCRIPT", |r| r.attr("src", src))
	}

	/// Inline `<STYLE>`, written raw.
	pub fn style_block(&mut self, css: &str) -> RenderResult<()> {
		self.element("STYLE", |r| r.raw_html(css))
	}
}
