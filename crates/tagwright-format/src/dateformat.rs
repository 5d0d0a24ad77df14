//! Date pattern engine.
//!
//! Patterns use Django/PHP style single-letter codes:
//! - Y: 4-digit year (e.g., 2025)
//! - y: 2-digit year (e.g., 25)
//! - m: Month with leading zero (01-12)
//! - n: Month without leading zero (1-12)
//! - F / M: Full / abbreviated month name
//! - d: Day with leading zero (01-31)
//! - j: Day without leading zero (1-31)
//! - l / D: Full / abbreviated weekday name
//! - H / G: Hour 00-23 with / without leading zero
//! - h / g: Hour 01-12 with / without leading zero
//! - i: Minutes with leading zero (00-59)
//! - s: Seconds with leading zero (00-59)
//! - v: Milliseconds (000-999)
//! - A / a: AM/PM, am/pm
//!
//! A backslash outputs the next character literally; any other character
//! is copied as-is.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use std::fmt::Write;

/// Formats a date-time with a pattern.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tagwright_format::dateformat::format;
///
/// let dt = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_milli_opt(14, 30, 45, 7).unwrap();
/// assert_eq!(format(&dt, "Y-m-d"), "2025-01-15");
/// assert_eq!(format(&dt, "H:i:s.v"), "14:30:45.007");
/// assert_eq!(format(&dt, "l, F j, Y g:ia"), "Wednesday, January 15, 2025 2:30pm");
/// ```
pub fn format(dt: &NaiveDateTime, pattern: &str) -> String {
	let mut result = String::with_capacity(pattern.len() + 8);
	let mut chars = pattern.chars();

	while let Some(c) = chars.next() {
		// Writing into a String cannot fail.
		let _ = match c {
			'\\' => {
				if let Some(next) = chars.next() {
					result.push(next);
				}
				Ok(())
			}

			// Year
			'Y' => write!(result, "{:04}", dt.year()),
			'y' => write!(result, "{:02}", dt.year().rem_euclid(100)),

			// Month
			'm' => write!(result, "{:02}", dt.month()),
			'n' => write!(result, "{}", dt.month()),
			'F' => result.write_str(month_name(dt.month())),
			'M' => result.write_str(&month_name(dt.month())[..3]),

			// Day
			'd' => write!(result, "{:02}", dt.day()),
			'j' => write!(result, "{}", dt.day()),
			'l' => result.write_str(weekday_name(dt.weekday())),
			'D' => result.write_str(&weekday_name(dt.weekday())[..3]),

			// Hour
			'H' => write!(result, "{:02}", dt.hour()),
			'G' => write!(result, "{}", dt.hour()),
			'h' => write!(result, "{:02}", hour12(dt.hour())),
			'g' => write!(result, "{}", hour12(dt.hour())),

			// Minute, second, fraction
			'i' => write!(result, "{:02}", dt.minute()),
			's' => write!(result, "{:02}", dt.second()),
			'v' => write!(result, "{:03}", dt.nanosecond() % 1_000_000_000 / 1_000_000),

			// AM/PM
			'A' => result.write_str(if dt.hour() < 12 { "AM" } else { "PM" }),
			'a' => result.write_str(if dt.hour() < 12 { "am" } else { "pm" }),

			_ => {
				result.push(c);
				Ok(())
			}
		};
	}

	result
}

/// Formats a date with a pattern. Time codes read as midnight.
pub fn format_date(date: &NaiveDate, pattern: &str) -> String {
	format(&date.and_time(NaiveTime::MIN), pattern)
}

fn hour12(hour: u32) -> u32 {
	match hour % 12 {
		0 => 12,
		h => h,
	}
}

fn month_name(month: u32) -> &'static str {
	match month {
		1 => "January",
		2 => "February",
		3 => "March",
		4 => "April",
		5 => "May",
		6 => "June",
		7 => "July",
		8 => "August",
		9 => "September",
		10 => "October",
		11 => "November",
		_ => "December",
	}
}

fn weekday_name(weekday: Weekday) -> &'static str {
	match weekday {
		Weekday::Mon => "Monday",
		Weekday::Tue => "Tuesday",
		Weekday::Wed => "Wednesday",
		Weekday::Thu => "Thursday",
		Weekday::Fri => "Friday",
		Weekday::Sat => "Saturday",
		Weekday::Sun => "Sunday",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn afternoon() -> NaiveDateTime {
		NaiveDate::from_ymd_opt(2025, 1, 15)
			.unwrap()
			.and_hms_milli_opt(14, 5, 9, 42)
			.unwrap()
	}

	#[rstest]
	#[case("Y", "2025")]
	#[case("y", "25")]
	#[case("m", "01")]
	#[case("n", "1")]
	#[case("F", "January")]
	#[case("M", "Jan")]
	#[case("d", "15")]
	#[case("j", "15")]
	#[case("l", "Wednesday")]
	#[case("D", "Wed")]
	#[case("H:i:s", "14:05:09")]
	#[case("g:i:s A", "2:05:09 PM")]
	#[case("h", "02")]
	#[case("G", "14")]
	#[case("v", "042")]
	#[case("a", "pm")]
	fn test_codes(afternoon: NaiveDateTime, #[case] pattern: &str, #[case] expected: &str) {
		assert_eq!(format(&afternoon, pattern), expected);
	}

	#[rstest]
	#[case(0, "12", "am")]
	#[case(11, "11", "am")]
	#[case(12, "12", "pm")]
	#[case(23, "11", "pm")]
	fn test_12_hour_clock(#[case] hour: u32, #[case] g: &str, #[case] a: &str) {
		let dt = NaiveDate::from_ymd_opt(2025, 1, 15)
			.unwrap()
			.and_hms_opt(hour, 0, 0)
			.unwrap();
		assert_eq!(format(&dt, "g"), g);
		assert_eq!(format(&dt, "a"), a);
	}

	#[rstest]
	fn test_escape_character(afternoon: NaiveDateTime) {
		assert_eq!(format(&afternoon, "Y\\Y"), "2025Y");
		assert_eq!(format(&afternoon, "Y-m-d\\TH:i"), "2025-01-15T14:05");
	}

	#[rstest]
	fn test_format_date_reads_midnight() {
		let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
		assert_eq!(format_date(&date, "d.m.Y H:i"), "29.02.2020 00:00");
	}
}
