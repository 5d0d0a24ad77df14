//! Fixed, locale-independent forms for machine-readable attribute values
//! such as `<input type="date" value="…">`.

use crate::dateformat;
use chrono::{NaiveDate, NaiveDateTime};

/// `yyyy-MM-ddTHH:mm`
pub fn date_time(t: &NaiveDateTime) -> String {
	dateformat::format(t, "Y-m-d\\TH:i")
}

/// `yyyy-MM-ddTHH:mm:ss`
pub fn date_time_sec(t: &NaiveDateTime) -> String {
	dateformat::format(t, "Y-m-d\\TH:i:s")
}

/// `yyyy-MM-dd`
pub fn date(d: &NaiveDate) -> String {
	dateformat::format_date(d, "Y-m-d")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_iso_forms() {
		let t = NaiveDate::from_ymd_opt(2020, 1, 2)
			.unwrap()
			.and_hms_milli_opt(22, 33, 44, 555)
			.unwrap();
		assert_eq!(date_time(&t), "2020-01-02T22:33");
		assert_eq!(date_time_sec(&t), "2020-01-02T22:33:44");
		assert_eq!(date(&t.date()), "2020-01-02");
	}
}
