//! Client-side `pattern` expressions for free-text number inputs.

macro_rules! number_simple {
	() => {
		r"[+-]?[0-9]+(\.[0-9]+)?"
	};
}

macro_rules! us_number {
	() => {
		r"[+-]?[0-9]{1,3}(,[0-9]{3})*(\.[0-9]+)?"
	};
}

macro_rules! eu_number {
	() => {
		r"[+-]?[0-9]{1,3}( [0-9]{3})*(,[0-9]+)?"
	};
}

macro_rules! eu_number_simple {
	() => {
		r"[+-]?[0-9]+(,[0-9]+)?"
	};
}

/// `12`, `-3.25`
pub const NUMBER_PATTERN_SIMPLE: &str = number_simple!();

/// `1,234,567.89`
pub const US_NUMBER_PATTERN: &str = us_number!();

/// `1 234 567,89`
pub const EU_NUMBER_PATTERN: &str = eu_number!();

/// `1234567,89`
pub const EU_NUMBER_PATTERN_SIMPLE: &str = eu_number_simple!();

/// Any of the four number forms, surrounding whitespace allowed.
pub const COMMON_NUMBER_PATTERN: &str = concat!(
	r"^\s*((",
	us_number!(),
	")|(",
	eu_number!(),
	")|(",
	number_simple!(),
	")|(",
	eu_number_simple!(),
	r"))\s*$"
);

/// A plain decimal, surrounding whitespace allowed.
pub const DECIMAL_INPUT_PATTERN: &str = concat!(r"^\s*", number_simple!(), r"\s*$");
