//! Conversion of field values to `value="…"` attribute text.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::borrow::Cow;
use tagwright_format::{MoneyFormatter, iso, money::DOT_COMMA};
use uuid::Uuid;

/// A value that can be written into a form control.
///
/// Attribute text is locale-independent: numbers always use `.` and dates
/// use the ISO forms understood by `<input type="date">` and
/// `<input type="datetime-local">`. Returning `None` omits the attribute.
///
/// Enumerations are written by their symbolic name:
///
/// ```
/// use std::borrow::Cow;
/// use tagwright_render::FormValue;
///
/// #[derive(PartialEq)]
/// enum Status { Open, Closed }
///
/// impl FormValue for Status {
///     fn form_value(&self) -> Option<Cow<'_, str>> {
///         Some(Cow::Borrowed(match self {
///             Status::Open => "OPEN",
///             Status::Closed => "CLOSED",
///         }))
///     }
/// }
///
/// assert_eq!(Status::Closed.form_value().as_deref(), Some("CLOSED"));
/// ```
pub trait FormValue {
	fn form_value(&self) -> Option<Cow<'_, str>>;
}

impl FormValue for str {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(self))
	}
}

impl FormValue for String {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(self.as_str()))
	}
}

impl FormValue for Cow<'_, str> {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(self.as_ref()))
	}
}

impl FormValue for char {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Owned(self.to_string()))
	}
}

impl FormValue for bool {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(if *self { "true" } else { "false" }))
	}
}

macro_rules! impl_form_value_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl FormValue for $ty {
				fn form_value(&self) -> Option<Cow<'_, str>> {
					Some(Cow::Owned(self.to_string()))
				}
			}
		)*
	};
}

impl_form_value_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FormValue for f64 {
	/// Up to 20 decimals, trailing zeros trimmed; non-finite values are omitted.
	fn form_value(&self) -> Option<Cow<'_, str>> {
		DOT_COMMA.format_double((*self).into(), 20, true).map(Cow::Owned)
	}
}

impl FormValue for f32 {
	/// Same as `f64`, starting from the `f32`'s shortest decimal form.
	fn form_value(&self) -> Option<Cow<'_, str>> {
		DOT_COMMA.format_double((*self).into(), 20, true).map(Cow::Owned)
	}
}

impl FormValue for Decimal {
	/// Plain notation without trailing zeros: `1.50` is written as `1.5`.
	fn form_value(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Owned(self.normalize().to_string()))
	}
}

impl FormValue for Uuid {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Owned(self.hyphenated().to_string()))
	}
}

impl FormValue for NaiveDate {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Owned(iso::date(self)))
	}
}

impl FormValue for NaiveDateTime {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Owned(iso::date_time(self)))
	}
}

impl<T: FormValue> FormValue for Option<T> {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		self.as_ref().and_then(FormValue::form_value)
	}
}

impl<T: FormValue + ?Sized> FormValue for &T {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		(**self).form_value()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::str::FromStr;

	#[rstest]
	#[case(1.0, "1.0")]
	#[case(0.1, "0.1")]
	#[case(1234.5678, "1234.5678")]
	#[case(-2.25, "-2.25")]
	fn test_float_values(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(value.form_value().as_deref(), Some(expected));
	}

	#[rstest]
	#[case(0.1_f32, "0.1")]
	#[case(3.3_f32, "3.3")]
	#[case(-1.5_f32, "-1.5")]
	fn test_f32_values_use_their_own_digits(#[case] value: f32, #[case] expected: &str) {
		assert_eq!(value.form_value().as_deref(), Some(expected));
	}

	#[rstest]
	fn test_nan_is_omitted() {
		assert_eq!(f64::NAN.form_value(), None);
	}

	#[rstest]
	#[case("1.50", "1.5")]
	#[case("100", "100")]
	#[case("0.000", "0")]
	fn test_decimal_values(#[case] value: &str, #[case] expected: &str) {
		let value = Decimal::from_str(value).unwrap();
		assert_eq!(value.form_value().as_deref(), Some(expected));
	}

	#[rstest]
	fn test_dates_use_iso_forms() {
		let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
		let time = date.and_hms_opt(22, 33, 44).unwrap();
		assert_eq!(date.form_value().as_deref(), Some("2020-01-02"));
		assert_eq!(time.form_value().as_deref(), Some("2020-01-02T22:33"));
	}

	#[rstest]
	fn test_option_and_reference() {
		let none: Option<i32> = None;
		assert_eq!(none.form_value(), None);
		assert_eq!(Some(42).form_value().as_deref(), Some("42"));
		let text = "abc";
		assert_eq!((&text).form_value().as_deref(), Some("abc"));
		assert_eq!(true.form_value().as_deref(), Some("true"));
	}
}
