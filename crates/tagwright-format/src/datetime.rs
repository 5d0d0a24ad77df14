//! Locale date and time presentation.

use crate::dateformat;
use chrono::{NaiveDate, NaiveDateTime};

/// Formats dates and times for display.
///
/// Date-time and time outputs are lower-cased, so 12-hour locales render
/// `10:33pm`. Date-only output keeps the pattern's case.
pub trait DateTimeFormatter: Send + Sync {
	/// Date and time to the minute.
	fn format_date_time(&self, t: &NaiveDateTime) -> String;
	/// Date and time to the second.
	fn format_date_time_sec(&self, t: &NaiveDateTime) -> String;
	/// Date and time to the millisecond.
	fn format_date_time_millis(&self, t: &NaiveDateTime) -> String;
	/// Date only.
	fn format_date(&self, d: &NaiveDate) -> String;
	/// Time of day to the minute.
	fn format_time(&self, t: &NaiveDateTime) -> String;
	/// Time of day to the second.
	fn format_time_sec(&self, t: &NaiveDateTime) -> String;
}

/// A set of [`dateformat`] patterns for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFormat {
	pub date_time: &'static str,
	pub date_time_sec: &'static str,
	pub date_time_millis: &'static str,
	pub date: &'static str,
	pub time: &'static str,
	pub time_sec: &'static str,
}

/// 24-hour clock, ISO-like ordering: `2020-01-02 22:33`.
pub static EUROPE: DateTimeFormat = DateTimeFormat {
	date_time: "Y-m-d H:i",
	date_time_sec: "Y-m-d H:i:s",
	date_time_millis: "Y-m-d H:i:s.v",
	date: "Y-m-d",
	time: "H:i",
	time_sec: "H:i:s",
};

/// 12-hour clock with am/pm suffix: `01/02/2020 10:33pm`.
pub static USA: DateTimeFormat = DateTimeFormat {
	date_time: "m/d/Y g:ia",
	date_time_sec: "m/d/Y g:i:sa",
	date_time_millis: "m/d/Y g:i:sa.v",
	date: "m/d/Y",
	time: "g:ia",
	time_sec: "g:i:sa",
};

impl DateTimeFormatter for DateTimeFormat {
	fn format_date_time(&self, t: &NaiveDateTime) -> String {
		dateformat::format(t, self.date_time).to_lowercase()
	}

	fn format_date_time_sec(&self, t: &NaiveDateTime) -> String {
		dateformat::format(t, self.date_time_sec).to_lowercase()
	}

	fn format_date_time_millis(&self, t: &NaiveDateTime) -> String {
		dateformat::format(t, self.date_time_millis).to_lowercase()
	}

	fn format_date(&self, d: &NaiveDate) -> String {
		dateformat::format_date(d, self.date)
	}

	fn format_time(&self, t: &NaiveDateTime) -> String {
		dateformat::format(t, self.time).to_lowercase()
	}

	fn format_time_sec(&self, t: &NaiveDateTime) -> String {
		dateformat::format(t, self.time_sec).to_lowercase()
	}
}
