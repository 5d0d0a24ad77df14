//! Render session configuration.

use serde::{Deserialize, Serialize};
use tagwright_format::{DateTimeLocale, MoneyLocale};

/// Options for a render session.
///
/// Deserializable from settings; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Date/time presentation for display text.
	pub date_time: DateTimeLocale,
	/// Number presentation for display text.
	pub money: MoneyLocale,
	/// Whether an attribute written outside a pending tag is an error
	/// (`true`) or silently dropped (`false`).
	pub strict_attributes: bool,
	/// Whether a newline follows every closed tag.
	pub trailing_newline: bool,
	/// Whether money inputs drop a `.00` suffix from whole amounts.
	pub strip_whole_money_cents: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			date_time: DateTimeLocale::Europe,
			money: MoneyLocale::DotComma,
			strict_attributes: true,
			trailing_newline: true,
			strip_whole_money_cents: false,
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the date/time locale.
	pub fn date_time(mut self, locale: DateTimeLocale) -> Self {
		self.date_time = locale;
		self
	}

	/// Sets the money locale.
	pub fn money(mut self, locale: MoneyLocale) -> Self {
		self.money = locale;
		self
	}

	/// Drops stray attributes instead of failing.
	pub fn lenient(mut self) -> Self {
		self.strict_attributes = false;
		self
	}

	/// Sets whether a newline follows every closed tag.
	pub fn trailing_newline(mut self, enable: bool) -> Self {
		self.trailing_newline = enable;
		self
	}

	/// Disables the newline after closed tags.
	pub fn compact(self) -> Self {
		self.trailing_newline(false)
	}

	/// Sets whether money inputs drop a `.00` suffix from whole amounts.
	pub fn strip_whole_money_cents(mut self, enable: bool) -> Self {
		self.strip_whole_money_cents = enable;
		self
	}
}
