//! Binding of typed fields to form controls.
//!
//! `bind_*` methods write attributes onto the pending `<INPUT>`; the other
//! helpers here render a complete element.

use crate::context::RenderContext;
use crate::field::Field;
use crate::patterns::{COMMON_NUMBER_PATTERN, DECIMAL_INPUT_PATTERN};
use crate::value::FormValue;
use chrono::{NaiveDate, NaiveDateTime};
use std::borrow::Cow;
use std::fmt;
use tagwright_core::RenderResult;
use tagwright_format::{MoneyFormatter, Number, money::DOT_COMMA};

impl<W: fmt::Write> RenderContext<W> {
	/// Renders `<INPUT …/>` with attributes from `body`.
	pub fn input<F>(&mut self, body: F) -> RenderResult<()>
	where
		F: FnOnce(&mut Self) -> RenderResult<()>,
	{
		self.void_element("INPUT", body)
	}

	/// Writes `value="…"`; values without a textual form are omitted.
	pub fn value<V: FormValue + ?Sized>(&mut self, value: &V) -> RenderResult<()> {
		match value.form_value() {
			Some(text) => self.attr("value", &text),
			None => Ok(()),
		}
	}

	/// Writes the resolved name, the value (when present) and `required`
	/// for a non-nullable field.
	pub fn name_value<T: FormValue + ?Sized>(&mut self, field: Field<'_, T>) -> RenderResult<()> {
		self.name(field.name())?;
		if let Some(value) = field.value() {
			self.value(value)?;
		}
		self.required(field.is_required())
	}

	/// `type`, then [`RenderContext::name_value`].
	pub fn bind_input<T: FormValue + ?Sized>(&mut self, input_type: &str, field: Field<'_, T>) -> RenderResult<()> {
		self.attr("type", input_type)?;
		self.name_value(field)
	}

	/// Free-text decimal entry guarded by [`DECIMAL_INPUT_PATTERN`].
	pub fn bind_number<T: FormValue + ?Sized>(&mut self, field: Field<'_, T>) -> RenderResult<()> {
		self.attr("pattern", DECIMAL_INPUT_PATTERN)?;
		self.bind_input("text", field)
	}

	/// `<input type="date">` with an ISO `yyyy-MM-dd` value.
	pub fn bind_date(&mut self, field: Field<'_, NaiveDate>) -> RenderResult<()> {
		self.bind_input("date", field)
	}

	/// `<input type="datetime-local">` with an ISO `yyyy-MM-ddTHH:mm` value.
	pub fn bind_date_time(&mut self, field: Field<'_, NaiveDateTime>) -> RenderResult<()> {
		self.bind_input("datetime-local", field)
	}

	/// Money entry for a bound field. See [`RenderContext::type_money`].
	pub fn bind_money<T>(&mut self, field: Field<'_, T>) -> RenderResult<()>
	where
		T: Into<Number> + Copy,
	{
		let value = field.value().map(|v| (*v).into());
		self.type_money(field.name(), value, field.is_required())
	}

	/// `type="number" step="0.01"` with the amount rounded to cents.
	///
	/// The value always uses `.` as separator. Whole amounts keep their
	/// `.00` unless [`RenderOptions::strip_whole_money_cents`] is set;
	/// non-finite amounts are omitted.
	///
	/// [`RenderOptions::strip_whole_money_cents`]: crate::RenderOptions::strip_whole_money_cents
	pub fn type_money(&mut self, local: &str, value: Option<Number>, required: bool) -> RenderResult<()> {
		self.attr("type", "number")?;
		self.attr("step", "0.01")?;
		self.name(local)?;
		if let Some(text) = value.and_then(|n| self.money_input_value(local, n)) {
			self.attr("value", &text)?;
		}
		self.required(required)
	}

	fn money_input_value(&self, local: &str, n: Number) -> Option<String> {
		let Some(text) = DOT_COMMA.format_money2(n) else {
			tracing::debug!(field = local, "omitting non-finite money value");
			return None;
		};
		if self.options.strip_whole_money_cents {
			if let Some(whole) = text.strip_suffix(".00") {
				return Some(whole.to_string());
			}
		}
		Some(text)
	}

	/// Free-text number entry accepting US and European notations.
	pub fn type_number(&mut self, local: &str, value: Option<f64>) -> RenderResult<()> {
		self.attr("type", "text")?;
		self.name(local)?;
		self.attr("pattern", COMMON_NUMBER_PATTERN)?;
		self.value(&value)
	}

	pub fn type_date(&mut self, local: &str, value: Option<&NaiveDate>, required: bool) -> RenderResult<()> {
		self.attr("type", "date")?;
		self.name(local)?;
		self.required(required)?;
		self.value(&value)
	}

	pub fn type_submit(&mut self, classes: Option<&str>) -> RenderResult<()> {
		self.attr("type", "submit")?;
		self.class_opt(classes)
	}

	/// `type="checkbox" value="true"`, checked when the field holds `true`.
	pub fn bind_checkbox(&mut self, field: Field<'_, bool>) -> RenderResult<()> {
		self.attr("type", "checkbox")?;
		self.name(field.name())?;
		self.attr("value", "true")?;
		self.checked(field.value() == Some(&true))
	}

	/// A complete checkbox for a boolean field. With `with_id` the field
	/// name doubles as the element id.
	pub fn checkbox(
		&mut self,
		classes: Option<&str>,
		field: Field<'_, bool>,
		with_id: bool,
		disabled: bool,
	) -> RenderResult<()> {
		self.input(|r| {
			r.bind_checkbox(field)?;
			r.class_opt(classes)?;
			if with_id {
				r.id(field.name())?;
			}
			r.disabled(disabled)
		})
	}

	/// A checkbox for one candidate `value` of a collection field; checked
	/// when the collection contains it.
	///
	/// Returns the generated id `name-value` when `with_id` is set, so a
	/// `<LABEL for>` can refer to it.
	pub fn checkbox_member<T, C>(
		&mut self,
		classes: Option<&str>,
		field: Field<'_, C>,
		value: &T,
		with_id: bool,
		disabled: bool,
	) -> RenderResult<Option<String>>
	where
		T: FormValue + PartialEq,
		C: AsRef<[T]> + ?Sized,
	{
		let text = value.form_value().unwrap_or(Cow::Borrowed(""));
		let id = with_id.then(|| format!("{}-{}", field.name(), text));
		let checked = field.value().is_some_and(|items| items.as_ref().contains(value));
		self.input(|r| {
			r.class_opt(classes)?;
			r.attr("type", "checkbox")?;
			r.attr_opt("id", id.as_deref())?;
			r.name(field.name())?;
			r.attr("value", &text)?;
			r.checked(checked)?;
			r.disabled(disabled)
		})?;
		Ok(id)
	}

	/// A radio button for one candidate `value`; checked when the field
	/// holds an equal value.
	pub fn radio<T>(&mut self, classes: Option<&str>, field: Field<'_, T>, value: &T) -> RenderResult<()>
	where
		T: FormValue + PartialEq + ?Sized,
	{
		self.input(|r| {
			r.class_opt(classes)?;
			r.attr("type", "radio")?;
			r.name(field.name())?;
			r.value(value)?;
			r.checked(field.value() == Some(value))?;
			r.required(field.is_required())
		})
	}

	/// `<INPUT type="hidden">` with a prefix-resolved name.
	pub fn hidden<V: FormValue + ?Sized>(&mut self, local: &str, value: &V) -> RenderResult<()> {
		self.input(|r| {
			r.attr("type", "hidden")?;
			r.name(local)?;
			r.value(value)
		})
	}

	pub fn hidden_field<T: FormValue + ?Sized>(&mut self, field: Field<'_, T>) -> RenderResult<()> {
		self.hidden(field.name(), &field.value())
	}

	/// One hidden input holding the comma-joined items of a collection
	/// field. Items without a textual form are skipped; nothing is written
	/// when no item remains.
	pub fn hidden_list<T: FormValue>(&mut self, field: Field<'_, [T]>) -> RenderResult<()> {
		let Some(items) = field.value() else {
			return Ok(());
		};
		let joined = join_values(items);
		if joined.is_empty() {
			return Ok(());
		}
		self.hidden(field.name(), joined.as_str())
	}

	/// One hidden input per map entry, named `local[key]`, each holding the
	/// comma-joined items of that entry. Empty entries are skipped.
	pub fn hidden_map_lists<K, I, V>(&mut self, local: &str, entries: impl IntoIterator<Item = (K, I)>) -> RenderResult<()>
	where
		K: fmt::Display,
		I: IntoIterator<Item = V>,
		V: FormValue,
	{
		for (key, items) in entries {
			let joined = join_values(items);
			if !joined.is_empty() {
				self.hidden(&format!("{local}[{key}]"), joined.as_str())?;
			}
		}
		Ok(())
	}

	/// `<TEXTAREA>` for a text field; `body` may add attributes before the
	/// current value is written as content.
	pub fn textarea_for<T, F>(&mut self, field: Field<'_, T>, body: F) -> RenderResult<()>
	where
		T: AsRef<str> + ?Sized,
		F: FnOnce(&mut Self) -> RenderResult<()>,
	{
		self.element("TEXTAREA", |r| {
			r.name(field.name())?;
			r.required(field.is_required())?;
			body(r)?;
			r.text_opt(field.value().map(AsRef::as_ref))
		})
	}

	pub fn textarea(
		&mut self,
		local: &str,
		value: Option<&str>,
		required: bool,
		classes: Option<&str>,
		style: Option<&str>,
	) -> RenderResult<()> {
		self.element("TEXTAREA", |r| {
			r.class_opt(classes)?;
			r.name(local)?;
			r.required(required)?;
			r.attr_opt("style", style)?;
			r.text_opt(value)
		})
	}

	/// `<INPUT type="submit">` labelled `text`.
	pub fn submit(&mut self, classes: Option<&str>, text: Option<&str>) -> RenderResult<()> {
		self.submit_with(classes, text, |_| Ok(()))
	}

	pub fn submit_with<F>(&mut self, classes: Option<&str>, text: Option<&str>, body: F) -> RenderResult<()>
	where
		F: FnOnce(&mut Self) -> RenderResult<()>,
	{
		self.input(|r| {
			r.type_submit(classes)?;
			r.attr_opt("value", text)?;
			body(r)
		})
	}
}

fn join_values<V: FormValue>(items: impl IntoIterator<Item = V>) -> String {
	let mut joined = String::new();
	for item in items {
		if let Some(text) = item.form_value() {
			if !joined.is_empty() {
				joined.push(',');
			}
			joined.push_str(&text);
		}
	}
	joined
}
