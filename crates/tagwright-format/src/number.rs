//! Numeric input accepted by the money formatters.

use rust_decimal::{Decimal, RoundingStrategy};

/// Amounts below one cent in absolute value are formatted as zero.
pub const ONE_CENT: f64 = 0.01;

/// A number to be formatted.
///
/// Integer inputs are always rendered without a fractional part. Float
/// and decimal inputs take the rounding path, even when whole-valued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Any primitive integer.
	Integer(i128),
	/// A binary floating point value.
	Float(f64),
	/// An exact decimal value.
	Decimal(Decimal),
}

macro_rules! integer_from {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Number {
				fn from(value: $ty) -> Self {
					Self::Integer(value as i128)
				}
			}
		)*
	};
}

integer_from!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f32> for Number {
	/// Keeps the `f32`'s own shortest decimal form, so `0.1_f32` becomes
	/// `0.1` rather than its widened binary value.
	fn from(value: f32) -> Self {
		let widened = value.to_string().parse().unwrap_or(f64::from(value));
		Self::Float(widened)
	}
}

impl From<f64> for Number {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<Decimal> for Number {
	fn from(value: Decimal) -> Self {
		Self::Decimal(value)
	}
}

impl Number {
	/// Returns `true` for integer inputs.
	pub fn is_integer(&self) -> bool {
		matches!(self, Self::Integer(_))
	}

	/// Rounds to whole cents, ties away from zero.
	///
	/// Values below [`ONE_CENT`] in absolute value give `0`, so sub-cent
	/// noise never renders as a signed zero. Floats too large for a cent
	/// count are integral and come back as [`Rounded::Whole`]. Returns
	/// `None` only for non-finite input.
	pub fn round_to_cents(&self) -> Option<Rounded> {
		match self {
			Self::Integer(value) => Some(match value.checked_mul(100) {
				Some(cents) => Rounded::Cents(cents),
				None => Rounded::Whole {
					negative: *value < 0,
					digits: value.unsigned_abs().to_string(),
				},
			}),
			Self::Float(value) => {
				if !value.is_finite() {
					return None;
				}
				if value.abs() < ONE_CENT {
					return Some(Rounded::Cents(0));
				}
				let cents = (value * 100.0).round();
				if cents.abs() >= i128::MAX as f64 {
					return Some(Rounded::Whole {
						negative: *value < 0.0,
						digits: format!("{:.0}", value.abs()),
					});
				}
				Some(Rounded::Cents(cents as i128))
			}
			Self::Decimal(value) => {
				if value.abs() < Decimal::new(1, 2) {
					return Some(Rounded::Cents(0));
				}
				let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
				// The mantissa is below 2^96, so scaling to cents fits in an i128.
				let scale = 10_i128.pow(2 - rounded.scale().min(2));
				Some(Rounded::Cents(rounded.mantissa() * scale))
			}
		}
	}
}

/// An amount rounded to the cent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rounded {
	/// A signed count of cents.
	Cents(i128),
	/// A whole amount beyond the cent range, as sign and decimal digits.
	Whole { negative: bool, digits: String },
}
