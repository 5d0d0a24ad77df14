//! Attribute shortcuts.

use crate::context::RenderContext;
use crate::value::FormValue;
use chrono::NaiveDate;
use std::fmt;
use tagwright_core::RenderResult;
use tagwright_format::iso;

macro_rules! text_attrs {
	($($(#[$meta:meta])* $method:ident => $name:literal),* $(,)?) => {
		impl<W: fmt::Write> RenderContext<W> {
			$(
				$(#[$meta])*
				pub fn $method(&mut self, value: &str) -> RenderResult<()> {
					self.attr($name, value)
				}
			)*
		}
	};
}

macro_rules! number_attrs {
	($($method:ident => $name:literal),* $(,)?) => {
		impl<W: fmt::Write> RenderContext<W> {
			$(
				pub fn $method(&mut self, value: u32) -> RenderResult<()> {
					self.attr($name, &value.to_string())
				}
			)*
		}
	};
}

macro_rules! flag_attrs {
	($($method:ident => $name:literal),* $(,)?) => {
		impl<W: fmt::Write> RenderContext<W> {
			$(
				#[doc = concat!("Writes `", $name, "` when `on` is set.")]
				pub fn $method(&mut self, on: bool) -> RenderResult<()> {
					if on { self.attr_flag($name) } else { Ok(()) }
				}
			)*
		}
	};
}

text_attrs! {
	id => "id",
	href => "href",
	src => "src",
	rel => "rel",
	/// `type`
	type_attr => "type",
	/// `for`, on `<LABEL>`
	for_attr => "for",
	style => "style",
	title => "title",
	alt => "alt",
	placeholder => "placeholder",
	pattern => "pattern",
	step => "step",
	min => "min",
	max => "max",
	action => "action",
	method => "method",
	enctype => "enctype",
	target => "target",
	accept => "accept",
	autocomplete => "autocomplete",
	role => "role",
	scope => "scope",
	lang => "lang",
	on_click => "onclick",
	on_change => "onchange",
	on_input => "oninput",
	on_submit => "onsubmit",
	on_blur => "onblur",
	on_focus => "onfocus",
	on_paste => "onpaste",
	on_keydown => "onkeydown",
}

number_attrs! {
	width => "width",
	height => "height",
	colspan => "colspan",
	rowspan => "rowspan",
	maxlength => "maxlength",
	rows => "rows",
	cols => "cols",
}

flag_attrs! {
	required => "required",
	checked => "checked",
	selected => "selected",
	multiple => "multiple",
	disabled => "disabled",
	readonly => "readonly",
	autofocus => "autofocus",
}

impl<W: fmt::Write> RenderContext<W> {
	/// `data-{name}="value"`; omitted when the value has no textual form.
	pub fn data<V: FormValue + ?Sized>(&mut self, name: &str, value: &V) -> RenderResult<()> {
		match value.form_value() {
			Some(text) => self.attr(&format!("data-{name}"), &text),
			None => Ok(()),
		}
	}

	/// `min` as an ISO date, for `<input type="date">`.
	pub fn min_date(&mut self, date: &NaiveDate) -> RenderResult<()> {
		self.attr("min", &iso::date(date))
	}

	/// `max` as an ISO date, for `<input type="date">`.
	pub fn max_date(&mut self, date: &NaiveDate) -> RenderResult<()> {
		self.attr("max", &iso::date(date))
	}
}
