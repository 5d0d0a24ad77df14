//! Per-session render state.

use crate::form::{CsrfField, CsrfProvider};
use crate::names::NamePath;
use crate::options::RenderOptions;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::sync::Arc;
use tagwright_core::RenderResult;
use tagwright_format::{DateTimeFormatter, MoneyFormatter, Number};

/// State of one render session.
///
/// Owns the output sink, the pending start tag with its classes, and the
/// current name prefix. A context belongs to exactly one session and is
/// never shared; concurrent renders each build their own.
///
/// All builder operations are methods on this type; see the `engine`,
/// `names`, `binding`, `select`, `form`, `tags` and `attrs` modules.
pub struct RenderContext<W> {
	pub(crate) out: W,
	/// Start tag text not yet written, e.g. `<DIV id="x"`. Empty when no
	/// tag is pending.
	pub(crate) pending: String,
	pub(crate) classes: Vec<String>,
	pub(crate) names: NamePath,
	pub(crate) options: RenderOptions,
	date_time: &'static dyn DateTimeFormatter,
	money: &'static dyn MoneyFormatter,
	csrf: Option<CsrfProvider>,
}

impl<W: fmt::Write> RenderContext<W> {
	/// Creates a context writing to `out`.
	pub fn new(out: W, options: RenderOptions) -> Self {
		Self {
			out,
			pending: String::new(),
			classes: Vec::new(),
			names: NamePath::new(),
			date_time: options.date_time.formatter(),
			money: options.money.formatter(),
			options,
			csrf: None,
		}
	}

	/// Replaces the date/time formatter chosen by the options.
	pub fn with_date_time_formatter(mut self, formatter: &'static dyn DateTimeFormatter) -> Self {
		self.date_time = formatter;
		self
	}

	/// Replaces the money formatter chosen by the options.
	pub fn with_money_formatter(mut self, formatter: &'static dyn MoneyFormatter) -> Self {
		self.money = formatter;
		self
	}

	/// Installs the CSRF collaborator consulted by [`RenderContext::form`].
	pub fn with_csrf<F>(mut self, provider: F) -> Self
	where
		F: Fn() -> Option<CsrfField> + Send + Sync + 'static,
	{
		self.csrf = Some(Arc::new(provider));
		self
	}

	/// Installs an already shared CSRF collaborator.
	pub fn with_csrf_provider(mut self, provider: CsrfProvider) -> Self {
		self.csrf = Some(provider);
		self
	}

	/// Runs `body` against this context and returns the sink once the
	/// body succeeds. Any still-pending start tag is flushed first.
	pub fn render<F>(mut self, body: F) -> RenderResult<W>
	where
		F: FnOnce(&mut Self) -> RenderResult<()>,
	{
		body(&mut self)?;
		self.finish()
	}

	/// Flushes any pending start tag and returns the sink.
	pub fn finish(mut self) -> RenderResult<W> {
		self.flush()?;
		Ok(self.out)
	}

	/// Session options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Current name-prefix state.
	pub fn names(&self) -> &NamePath {
		&self.names
	}

	/// Returns `true` while a start tag is buffered and still accepts attributes.
	pub fn is_pending(&self) -> bool {
		!self.pending.is_empty()
	}

	/// Active date/time formatter.
	pub fn date_time_formatter(&self) -> &'static dyn DateTimeFormatter {
		self.date_time
	}

	/// Active money formatter.
	pub fn money_formatter(&self) -> &'static dyn MoneyFormatter {
		self.money
	}

	pub(crate) fn csrf_field(&self) -> Option<CsrfField> {
		self.csrf.as_ref().and_then(|provider| provider())
	}

	/// Grouped money with the session's money formatter; `None` for NaN or infinity.
	pub fn format_money(&self, n: impl Into<Number>) -> Option<String> {
		self.money.format_money(n.into())
	}

	/// Ungrouped money with exactly two decimals.
	pub fn format_money2(&self, n: impl Into<Number>) -> Option<String> {
		self.money.format_money2(n.into())
	}

	/// `digits` decimals, optionally trimmed of trailing zeros.
	pub fn format_double(&self, n: impl Into<Number>, digits: usize, trim_zeros: bool) -> Option<String> {
		self.money.format_double(n.into(), digits, trim_zeros)
	}

	/// Date and time to the minute, in the session's locale.
	pub fn format_date_time(&self, t: &NaiveDateTime) -> String {
		self.date_time.format_date_time(t)
	}

	/// Date and time to the second.
	pub fn format_date_time_sec(&self, t: &NaiveDateTime) -> String {
		self.date_time.format_date_time_sec(t)
	}

	/// Date and time to the millisecond.
	pub fn format_date_time_millis(&self, t: &NaiveDateTime) -> String {
		self.date_time.format_date_time_millis(t)
	}

	/// Date only.
	pub fn format_date(&self, d: &NaiveDate) -> String {
		self.date_time.format_date(d)
	}

	/// Time of day to the minute, lower case.
	pub fn format_time(&self, t: &NaiveDateTime) -> String {
		self.date_time.format_time(t)
	}

	/// Time of day to the second.
	pub fn format_time_sec(&self, t: &NaiveDateTime) -> String {
		self.date_time.format_time_sec(t)
	}
}

impl<W> fmt::Debug for RenderContext<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RenderContext")
			.field("pending", &self.pending)
			.field("classes", &self.classes)
			.field("names", &self.names)
			.field("options", &self.options)
			.field("csrf", &self.csrf.is_some())
			.finish_non_exhaustive()
	}
}
