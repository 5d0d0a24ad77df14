//! `<SELECT>` controls.

use crate::context::RenderContext;
use crate::field::Field;
use crate::value::FormValue;
use std::fmt;
use std::ops::{Deref, DerefMut};
use tagwright_core::RenderResult;

/// Body context of a single-value select bound to a field. Options are
/// selected when equal to the field's value.
pub struct TypedSelect<'r, 'v, W, T: ?Sized> {
	ctx: &'r mut RenderContext<W>,
	current: Option<&'v T>,
}

/// Body context of a multi-value select bound to a collection field.
/// Options are selected when the collection contains them.
pub struct TypedMultiSelect<'r, 'v, W, T> {
	ctx: &'r mut RenderContext<W>,
	current: Option<&'v [T]>,
}

impl<W: fmt::Write, T: FormValue + PartialEq + ?Sized> TypedSelect<'_, '_, W, T> {
	/// `<OPTION value>` labelled `text`.
	pub fn option(&mut self, value: &T, text: &str) -> RenderResult<()> {
		let selected = self.current == Some(value);
		self.ctx.option(value, text, selected)
	}
}

impl<W: fmt::Write, T: FormValue + PartialEq> TypedMultiSelect<'_, '_, W, T> {
	/// `<OPTION value>` labelled `text`.
	pub fn option(&mut self, value: &T, text: &str) -> RenderResult<()> {
		let selected = self.current.is_some_and(|items| items.contains(value));
		self.ctx.option(value, text, selected)
	}
}

impl<W, T: ?Sized> Deref for TypedSelect<'_, '_, W, T> {
	type Target = RenderContext<W>;

	fn deref(&self) -> &Self::Target {
		self.ctx
	}
}

impl<W, T: ?Sized> DerefMut for TypedSelect<'_, '_, W, T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.ctx
	}
}

impl<W, T> Deref for TypedMultiSelect<'_, '_, W, T> {
	type Target = RenderContext<W>;

	fn deref(&self) -> &Self::Target {
		self.ctx
	}
}

impl<W, T> DerefMut for TypedMultiSelect<'_, '_, W, T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.ctx
	}
}

impl<W: fmt::Write> RenderContext<W> {
	/// An untyped `<SELECT>`; `body` writes the options.
	pub fn select<F>(&mut self, classes: Option<&str>, body: F) -> RenderResult<()>
	where
		F: FnOnce(&mut Self) -> RenderResult<()>,
	{
		self.element("SELECT", |r| {
			r.class_opt(classes)?;
			body(r)
		})
	}

	/// `<OPTION value [selected]>text</OPTION>`
	pub fn option<V: FormValue + ?Sized>(&mut self, value: &V, text: &str, selected: bool) -> RenderResult<()> {
		self.element("OPTION", |r| {
			r.attr("value", &value.form_value().unwrap_or_default())?;
			r.selected(selected)?;
			r.text(text)
		})
	}

	/// An option with an empty value, typically the "none" choice.
	pub fn option_empty(&mut self, text: Option<&str>) -> RenderResult<()> {
		self.element("OPTION", |r| {
			r.attr("value", "")?;
			r.text_opt(text)
		})
	}

	/// A `<SELECT name>` bound to a single-value field.
	pub fn select_for<T, F>(&mut self, field: Field<'_, T>, body: F) -> RenderResult<()>
	where
		T: FormValue + PartialEq + ?Sized,
		F: FnOnce(&mut TypedSelect<'_, '_, W, T>) -> RenderResult<()>,
	{
		self.element("SELECT", |r| {
			r.name(field.name())?;
			let mut select = TypedSelect {
				ctx: r,
				current: field.value(),
			};
			body(&mut select)
		})
	}

	/// A `<SELECT name multiple>` bound to a collection field.
	pub fn multiselect_for<T, F>(&mut self, field: Field<'_, [T]>, body: F) -> RenderResult<()>
	where
		T: FormValue + PartialEq,
		F: FnOnce(&mut TypedMultiSelect<'_, '_, W, T>) -> RenderResult<()>,
	{
		self.element("SELECT", |r| {
			r.name(field.name())?;
			r.multiple(true)?;
			let mut select = TypedMultiSelect {
				ctx: r,
				current: field.value(),
			};
			body(&mut select)
		})
	}
}
