//! Named locale selections, usable from settings files.

use crate::datetime::{self, DateTimeFormatter};
use crate::money::{self, MoneyFormatter};
use serde::{Deserialize, Serialize};

/// Built-in date/time presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeLocale {
	/// 24-hour clock, `yyyy-MM-dd`.
	#[default]
	Europe,
	/// 12-hour clock with am/pm, `MM/dd/yyyy`.
	Usa,
}

impl DateTimeLocale {
	/// The shared formatter for this locale.
	pub fn formatter(self) -> &'static dyn DateTimeFormatter {
		match self {
			Self::Europe => &datetime::EUROPE,
			Self::Usa => &datetime::USA,
		}
	}
}

/// Built-in number presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoneyLocale {
	/// `.` decimals, `,` grouping.
	#[default]
	DotComma,
	/// `,` decimals, no-break space grouping.
	CommaSpace,
}

impl MoneyLocale {
	/// The shared formatter for this locale.
	pub fn formatter(self) -> &'static dyn MoneyFormatter {
		match self {
			Self::DotComma => &money::DOT_COMMA,
			Self::CommaSpace => &money::COMMA_SPACE,
		}
	}
}
