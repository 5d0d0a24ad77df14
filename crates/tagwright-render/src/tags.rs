//! Element shortcuts.
//!
//! Container elements take an optional class token and a body:
//!
//! ```
//! use tagwright_render::{RenderOptions, render_to_string};
//!
//! let html = render_to_string(&RenderOptions::new().compact(), |r| {
//!     r.div("card", |r| r.h1(None, |r| r.text("Hi")))
//! })
//! .unwrap();
//! assert_eq!(html, "<DIV class=\"card\"><H1>Hi</H1></DIV>");
//! ```

use crate::context::RenderContext;
use std::fmt;
use tagwright_core::RenderResult;

macro_rules! container_tags {
	($($method:ident => $tag:literal),* $(,)?) => {
		impl<W: fmt::Write> RenderContext<W> {
			$(
				#[doc = concat!("`<", $tag, ">`")]
				pub fn $method<'c, F>(&mut self, classes: impl Into<Option<&'c str>>, body: F) -> RenderResult<()>
				where
					F: FnOnce(&mut Self) -> RenderResult<()>,
				{
					let classes = classes.into();
					self.element($tag, |r| {
						r.class_opt(classes)?;
						body(r)
					})
				}
			)*
		}
	};
}

macro_rules! document_tags {
	($($method:ident => $tag:literal),* $(,)?) => {
		impl<W: fmt::Write> RenderContext<W> {
			$(
				#[doc = concat!("`<", $tag, ">`")]
				pub fn $method<F>(&mut self, body: F) -> RenderResult<()>
				where
					F: FnOnce(&mut Self) -> RenderResult<()>,
				{
					self.element($tag, body)
				}
			)*
		}
	};
}

container_tags! {
	div => "DIV",
	span => "SPAN",
	p => "P",
	a => "A",
	b => "B",
	i => "I",
	u => "U",
	s => "S",
	q => "Q",
	small => "SMALL",
	strong => "STRONG",
	strike => "STRIKE",
	sub => "SUB",
	sup => "SUP",
	center => "CENTER",
	nobr => "NOBR",
	pre => "PRE",
	tt => "TT",
	ul => "UL",
	ol => "OL",
	li => "LI",
	table => "TABLE",
	thead => "THEAD",
	tbody => "TBODY",
	tfoot => "TFOOT",
	tr => "TR",
	th => "TH",
	td => "TD",
	h1 => "H1",
	h2 => "H2",
	h3 => "H3",
	h4 => "H4",
	h5 => "H5",
	h6 => "H6",
	label => "LABEL",
	button => "BUTTON",
}

document_tags! {
	html => "HTML",
	head => "HEAD",
	body => "BODY",
	svg => "SVG",
}

impl<W: fmt::Write> RenderContext<W> {
	/// `<BR/>`
	pub fn br(&mut self) -> RenderResult<()> {
		self.void_element("BR", |_| Ok(()))
	}

	/// `<LINK rel href/>`
	pub fn link(&mut self, rel: &str, href: &str) -> RenderResult<()> {
		self.void_element("LINK", |r| {
			r.attr("rel", rel)?;
			r.attr("href", href)
		})
	}

	/// `<IMG src [width] [height]/>`; `body` may add attributes.
	pub fn img<F>(&mut self, src: &str, width: Option<u32>, height: Option<u32>, body: F) -> RenderResult<()>
	where
		F: FnOnce(&mut Self) -> RenderResult<()>,
	{
		self.void_element("IMG", |r| {
			r.attr("src", src)?;
			if let Some(width) = width {
				r.width(width)?;
			}
			if let Some(height) = height {
				r.height(height)?;
			}
			body(r)
		})
	}

	/// SVG `<path d/>`, written in lower case as SVG requires.
	pub fn svg_path(&mut self, d: &str) -> RenderResult<()> {
		self.void_element("path", |r| r.attr("d", d))
	}
}
