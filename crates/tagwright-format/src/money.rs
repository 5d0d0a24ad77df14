//! Money and decimal number formatting.
//!
//! Two presentations are offered for amounts:
//!
//! - [`MoneyFormatter::format_money`]: grouped, whole amounts without decimals,
//!   everything else with exactly two decimals
//! - [`MoneyFormatter::format_money2`]: ungrouped, always two decimals
//!
//! Non-finite input yields `None` so callers can omit the value.

use crate::number::{Number, Rounded};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats numbers for display.
pub trait MoneyFormatter: Send + Sync {
	/// Integers render grouped without decimals. Other inputs round to the
	/// cent and render as a whole number when the cents are zero, otherwise
	/// with exactly two decimals.
	fn format_money(&self, n: Number) -> Option<String>;

	/// Always two decimals, never grouped.
	fn format_money2(&self, n: Number) -> Option<String>;

	/// Integers render as-is; other inputs with `digits` decimals. With
	/// `trim_zeros`, trailing zeros after the separator are dropped down to
	/// a single digit.
	fn format_double(&self, n: Number, digits: usize, trim_zeros: bool) -> Option<String>;
}

/// Separator characters for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFormat {
	decimal_separator: char,
	grouping_separator: char,
}

/// `1,234,567.89`
pub static DOT_COMMA: MoneyFormat = MoneyFormat::new('.', ',');

/// `1 234 567,89`, grouped with U+00A0 NO-BREAK SPACE.
pub static COMMA_SPACE: MoneyFormat = MoneyFormat::new(',', '\u{a0}');

impl MoneyFormat {
	/// Creates a format from its decimal and grouping separators.
	pub const fn new(decimal_separator: char, grouping_separator: char) -> Self {
		Self {
			decimal_separator,
			grouping_separator,
		}
	}

	/// The decimal separator.
	pub fn decimal_separator(&self) -> char {
		self.decimal_separator
	}

	/// The digit-grouping separator.
	pub fn grouping_separator(&self) -> char {
		self.grouping_separator
	}

	fn grouped(&self, value: i128) -> String {
		self.group_digits(value < 0, &value.unsigned_abs().to_string())
	}

	fn group_digits(&self, negative: bool, digits: &str) -> String {
		let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
		if negative {
			result.push('-');
		}
		for (index, ch) in digits.chars().enumerate() {
			if index > 0 && (digits.len() - index) % 3 == 0 {
				result.push(self.grouping_separator);
			}
			result.push(ch);
		}
		result
	}

	fn cents_with_decimals(&self, cents: i128, grouped: bool) -> String {
		let whole = cents.unsigned_abs() / 100;
		let fraction = cents.unsigned_abs() % 100;
		let whole = if grouped {
			self.grouped(whole as i128)
		} else {
			whole.to_string()
		};
		let sign = if cents < 0 { "-" } else { "" };
		format!("{sign}{whole}{}{fraction:02}", self.decimal_separator)
	}
}

impl MoneyFormatter for MoneyFormat {
	fn format_money(&self, n: Number) -> Option<String> {
		if let Number::Integer(value) = n {
			return Some(self.grouped(value));
		}
		match n.round_to_cents()? {
			Rounded::Cents(cents) if cents % 100 == 0 => Some(self.grouped(cents / 100)),
			Rounded::Cents(cents) => Some(self.cents_with_decimals(cents, true)),
			Rounded::Whole { negative, digits } => Some(self.group_digits(negative, &digits)),
		}
	}

	fn format_money2(&self, n: Number) -> Option<String> {
		if let Number::Integer(value) = n {
			return Some(format!("{value}{}00", self.decimal_separator));
		}
		match n.round_to_cents()? {
			Rounded::Cents(cents) => Some(self.cents_with_decimals(cents, false)),
			Rounded::Whole { negative, digits } => {
				let sign = if negative { "-" } else { "" };
				Some(format!("{sign}{digits}{}00", self.decimal_separator))
			}
		}
	}

	fn format_double(&self, n: Number, digits: usize, trim_zeros: bool) -> Option<String> {
		let fixed = match n {
			Number::Integer(value) => return Some(value.to_string()),
			Number::Float(value) if !value.is_finite() => return None,
			Number::Float(value) => fixed_point(value, digits),
			Number::Decimal(value) => decimal_fixed_point(value, digits),
		};
		let mut text = fixed.replace('.', &self.decimal_separator.to_string());
		if trim_zeros {
			trim_fraction_zeros(&mut text, self.decimal_separator);
		}
		Some(text)
	}
}

/// Renders `value` with exactly `digits` decimals.
///
/// Rounding works on the shortest round-trip representation (half up on
/// the decimal digits), so `0.1` with 20 digits stays `0.1000…`.
fn fixed_point(value: f64, digits: usize) -> String {
	let repr = value.abs().to_string();
	let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

	let mut buf: Vec<u8> = int_part.bytes().collect();
	buf.extend(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits));
	let mut int_len = int_part.len();

	if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
		let mut carry = true;
		for byte in buf.iter_mut().rev() {
			if *byte == b'9' {
				*byte = b'0';
			} else {
				*byte += 1;
				carry = false;
				break;
			}
		}
		if carry {
			buf.insert(0, b'1');
			int_len += 1;
		}
	}

	let negative = value.is_sign_negative() && buf.iter().any(|d| *d != b'0');
	let mut result = String::with_capacity(buf.len() + 2);
	if negative {
		result.push('-');
	}
	result.extend(buf[..int_len].iter().map(|d| char::from(*d)));
	if digits > 0 {
		result.push('.');
		result.extend(buf[int_len..].iter().map(|d| char::from(*d)));
	}
	result
}

fn decimal_fixed_point(value: Decimal, digits: usize) -> String {
	let scale = u32::try_from(digits).unwrap_or(u32::MAX);
	let rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
	let text = rounded.to_string();
	let current = text.split_once('.').map_or(0, |(_, frac)| frac.len());
	if current >= digits {
		return text;
	}
	let mut padded = text;
	if current == 0 {
		padded.push('.');
	}
	padded.extend(std::iter::repeat_n('0', digits - current));
	padded
}

/// `1.2300` → `1.23`, `1.000` → `1.0`; text without a separator is left alone.
fn trim_fraction_zeros(text: &mut String, separator: char) {
	let Some(sep_index) = text.rfind(separator) else {
		return;
	};
	let keep_from = sep_index + separator.len_utf8() + 1;
	while text.len() > keep_from && text.ends_with('0') {
		text.pop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::str::FromStr;

	#[rstest]
	#[case(0, "0")]
	#[case(999, "999")]
	#[case(1_000, "1,000")]
	#[case(-1_234_567, "-1,234,567")]
	#[case(100_000, "100,000")]
	fn test_grouped(#[case] value: i128, #[case] expected: &str) {
		assert_eq!(DOT_COMMA.grouped(value), expected);
	}

	#[rstest]
	#[case(1234.56789, 8, "1234.56789000")]
	#[case(0.1, 20, "0.10000000000000000000")]
	#[case(2.5, 0, "3")]
	#[case(1.005, 2, "1.01")]
	#[case(9.999, 2, "10.00")]
	#[case(-0.001, 2, "0.00")]
	#[case(-1.25, 1, "-1.3")]
	#[case(1e21, 1, "1000000000000000000000.0")]
	fn test_fixed_point(#[case] value: f64, #[case] digits: usize, #[case] expected: &str) {
		assert_eq!(fixed_point(value, digits), expected);
	}

	#[rstest]
	#[case("1.50", 4, "1.5000")]
	#[case("1.23456", 2, "1.23")]
	#[case("7", 2, "7.00")]
	#[case("1.005", 2, "1.01")]
	fn test_decimal_fixed_point(#[case] value: &str, #[case] digits: usize, #[case] expected: &str) {
		let value = Decimal::from_str(value).unwrap();
		assert_eq!(decimal_fixed_point(value, digits), expected);
	}

	#[rstest]
	#[case("1.2300", '.', "1.23")]
	#[case("1.000", '.', "1.0")]
	#[case("1,500", ',', "1,5")]
	#[case("100", '.', "100")]
	fn test_trim_fraction_zeros(#[case] input: &str, #[case] separator: char, #[case] expected: &str) {
		let mut text = input.to_string();
		trim_fraction_zeros(&mut text, separator);
		assert_eq!(text, expected);
	}

	#[rstest]
	fn test_non_finite_is_omitted() {
		assert_eq!(DOT_COMMA.format_money(f64::NAN.into()), None);
		assert_eq!(DOT_COMMA.format_money2(f64::INFINITY.into()), None);
		assert_eq!(DOT_COMMA.format_double(f64::NEG_INFINITY.into(), 2, false), None);
	}

	#[rstest]
	fn test_amounts_beyond_cent_range_render_whole() {
		let digits = format!("{:.0}", 1e37_f64);
		let grouped = DOT_COMMA.format_money(1e37.into()).unwrap();
		assert_eq!(grouped.replace(',', ""), digits);
		assert_eq!(grouped.matches(',').count(), (digits.len() - 1) / 3);
		assert_eq!(
			DOT_COMMA.format_money2((-1e37).into()),
			Some(format!("-{digits}.00"))
		);
	}

	#[rstest]
	#[case(0.125, "0.13")]
	#[case(-0.125, "-0.13")]
	#[case(0.375, "0.38")]
	fn test_cent_ties_round_away_from_zero(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(DOT_COMMA.format_money(value.into()).as_deref(), Some(expected));
	}

	#[rstest]
	fn test_f32_formats_without_widening_noise() {
		assert_eq!(DOT_COMMA.format_double(0.1_f32.into(), 20, true).as_deref(), Some("0.1"));
		assert_eq!(DOT_COMMA.format_money2(0.1_f32.into()).as_deref(), Some("0.10"));
	}

	#[rstest]
	fn test_negative_fraction_below_one() {
		assert_eq!(DOT_COMMA.format_money((-0.5).into()).as_deref(), Some("-0.50"));
		assert_eq!(DOT_COMMA.format_money2((-0.5).into()).as_deref(), Some("-0.50"));
	}
}
