//! Bound form fields.

use std::fmt;

/// A field bound to a form control: its local name, current value, and
/// whether the control is required.
///
/// `required` is normally derived from the field's type: a plain value is
/// required, an `Option` is not.
///
/// ```
/// use tagwright_render::Field;
///
/// struct Order { qty: i32, note: Option<String> }
///
/// let order = Order { qty: 3, note: None };
/// let qty = Field::required("qty", &order.qty);
/// let note = Field::optional("note", order.note.as_ref());
/// assert!(qty.is_required());
/// assert_eq!(note.value(), None);
/// ```
pub struct Field<'a, T: ?Sized> {
	name: &'a str,
	value: Option<&'a T>,
	required: bool,
}

impl<'a, T: ?Sized> Field<'a, T> {
	/// A field with an explicit `required` flag.
	pub fn new(name: &'a str, value: Option<&'a T>, required: bool) -> Self {
		Self { name, value, required }
	}

	/// A non-nullable field.
	pub fn required(name: &'a str, value: &'a T) -> Self {
		Self::new(name, Some(value), true)
	}

	/// A nullable field.
	pub fn optional(name: &'a str, value: Option<&'a T>) -> Self {
		Self::new(name, value, false)
	}

	/// Local field name, before prefix resolution.
	pub fn name(&self) -> &'a str {
		self.name
	}

	/// Current value; `None` for an empty nullable field.
	pub fn value(&self) -> Option<&'a T> {
		self.value
	}

	/// Whether the control gets the `required` attribute.
	pub fn is_required(&self) -> bool {
		self.required
	}
}

impl<T: ?Sized> Clone for Field<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: ?Sized> Copy for Field<'_, T> {}

impl<T: fmt::Debug + ?Sized> fmt::Debug for Field<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Field")
			.field("name", &self.name)
			.field("value", &self.value)
			.field("required", &self.required)
			.finish()
	}
}
