//! Forms built from typed fields.

use chrono::NaiveDate;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;
use tagwright_render::{CsrfField, Field, FormValue, RenderContext, RenderOptions};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Status {
	Draft,
	Sent,
}

impl FormValue for Status {
	fn form_value(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(match self {
			Status::Draft => "DRAFT",
			Status::Sent => "SENT",
		}))
	}
}

struct Line {
	qty: i32,
	price: f64,
}

struct Order {
	id: Uuid,
	status: Status,
	due: NaiveDate,
	discount: Option<Decimal>,
	lines: Vec<Line>,
	limits: BTreeMap<String, i64>,
	tags: Vec<String>,
}

#[fixture]
fn order() -> Order {
	Order {
		id: Uuid::nil(),
		status: Status::Sent,
		due: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
		discount: Some(Decimal::from_str("2.50").unwrap()),
		lines: vec![Line { qty: 2, price: 9.99 }, Line { qty: 1, price: 100.0 }],
		limits: BTreeMap::from([("eu".to_string(), 5), ("us".to_string(), 7)]),
		tags: vec!["rush".to_string()],
	}
}

fn context() -> RenderContext<String> {
	RenderContext::new(String::new(), RenderOptions::new().compact())
		.with_csrf(|| Some(CsrfField::token("abc123")))
}

#[rstest]
fn test_nested_line_items(order: Order) {
	let mut r = context();
	r.with_object("order", |r| {
		for (index, line) in order.lines.iter().enumerate() {
			r.with_entry("lines", index, |r| {
				r.input(|r| r.bind_input("number", Field::required("qty", &line.qty)))?;
				r.input(|r| r.bind_money(Field::required("price", &line.price)))
			})?;
		}
		Ok(())
	})
	.unwrap();

	assert_eq!(
		r.finish().unwrap(),
		"<INPUT type=\"number\" name=\"order.lines[0].qty\" value=\"2\" required/>\
		 <INPUT type=\"number\" step=\"0.01\" name=\"order.lines[0].price\" value=\"9.99\" required/>\
		 <INPUT type=\"number\" name=\"order.lines[1].qty\" value=\"1\" required/>\
		 <INPUT type=\"number\" step=\"0.01\" name=\"order.lines[1].price\" value=\"100.00\" required/>"
	);
}

#[rstest]
fn test_map_key_inputs(order: Order) {
	let mut r = context();
	r.with_map_keys("limits", |r| {
		for (region, limit) in &order.limits {
			r.input(|r| r.bind_input("number", Field::required(region.as_str(), limit)))?;
		}
		Ok(())
	})
	.unwrap();

	assert_eq!(
		r.finish().unwrap(),
		"<INPUT type=\"number\" name=\"limits[eu]\" value=\"5\" required/>\
		 <INPUT type=\"number\" name=\"limits[us]\" value=\"7\" required/>"
	);
}

#[rstest]
fn test_full_form(order: Order) {
	let mut r = context();
	r.form(Some("/orders"), Some("POST"), |r| {
		r.hidden_field(Field::required("id", &order.id))?;
		r.select_for(Field::required("status", &order.status), |s| {
			s.option(&Status::Draft, "Draft")?;
			s.option(&Status::Sent, "Sent")
		})?;
		r.input(|r| r.bind_date(Field::required("due", &order.due)))?;
		r.input(|r| r.bind_number(Field::optional("discount", order.discount.as_ref())))?;
		let id = r.checkbox_member(None, Field::required("tags", order.tags.as_slice()), &"rush".to_string(), true, false)?;
		if let Some(id) = id {
			r.label(None, |r| {
				r.for_attr(&id)?;
				r.text("Rush")
			})?;
		}
		r.submit(None, Some("Save"))
	})
	.unwrap();

	let html = r.finish().unwrap();
	assert!(html.starts_with("<FORM action=\"/orders\" method=\"POST\">"));
	assert!(html.contains("<INPUT type=\"hidden\" name=\"id\" value=\"00000000-0000-0000-0000-000000000000\"/>"));
	assert!(html.contains("<OPTION value=\"SENT\" selected>Sent</OPTION>"));
	assert!(html.contains("<INPUT type=\"date\" name=\"due\" value=\"2024-03-09\" required/>"));
	assert!(html.contains("name=\"discount\" value=\"2.5\"/>"));
	assert!(html.contains("id=\"tags-rush\""));
	assert!(html.contains("<LABEL for=\"tags-rush\">Rush</LABEL>"));
	assert!(html.ends_with(
		"<INPUT type=\"submit\" value=\"Save\"/>\
		 <INPUT type=\"hidden\" name=\"csrfmiddlewaretoken\" value=\"abc123\"/></FORM>"
	));
}

#[rstest]
#[case(Some("get"), false)]
#[case(Some("GET"), false)]
#[case(None, true)]
#[case(Some("Post"), true)]
#[case(Some("DELETE"), true)]
fn test_csrf_by_method(#[case] method: Option<&str>, #[case] has_token: bool) {
	let mut r = context();
	r.form(None, method, |_| Ok(())).unwrap();
	assert_eq!(r.finish().unwrap().contains("csrfmiddlewaretoken"), has_token);
}

#[rstest]
fn test_csrf_provider_called_once_per_form() {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let mut r = RenderContext::new(String::new(), RenderOptions::new().compact()).with_csrf(move || {
		counter.fetch_add(1, Ordering::SeqCst);
		Some(CsrfField::token("t"))
	});
	r.form(None, None, |_| Ok(())).unwrap();
	r.form(None, Some("get"), |_| Ok(())).unwrap();
	r.form(None, Some("delete"), |_| Ok(())).unwrap();
	assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
fn test_money_input_in_comma_locale_keeps_dot() {
	let mut r = RenderContext::new(
		String::new(),
		RenderOptions::new()
			.compact()
			.money(tagwright_format::MoneyLocale::CommaSpace),
	);
	let price = 1234.5;
	r.input(|r| r.bind_money(Field::required("price", &price))).unwrap();
	assert!(r.finish().unwrap().contains("value=\"1234.50\""));
}

#[rstest]
fn test_date_time_local_input() {
	let mut r = context();
	let at = NaiveDate::from_ymd_opt(2020, 1, 2)
		.unwrap()
		.and_hms_opt(22, 33, 44)
		.unwrap();
	r.input(|r| r.bind_date_time(Field::optional("at", Some(&at)))).unwrap();
	assert_eq!(
		r.finish().unwrap(),
		"<INPUT type=\"datetime-local\" name=\"at\" value=\"2020-01-02T22:33\"/>"
	);
}
