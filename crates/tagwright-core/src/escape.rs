//! HTML escaping.
//!
//! Exactly four characters are replaced: `<`, `>`, `&` and `"`. The same
//! set is used for element text and for double-quoted attribute values.

use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

static SCRIPT_CLOSE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)</script>").expect("valid script-close pattern"));

const SCRIPT_CLOSE_REPLACEMENT: &str = r#"</scr"+"ipt>"#;

fn entity(ch: char) -> Option<&'static str> {
	match ch {
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		'&' => Some("&amp;"),
		'"' => Some("&quot;"),
		_ => None,
	}
}

/// Escapes `text`, borrowing it when nothing needs replacing.
///
/// # Examples
///
/// ```
/// use tagwright_core::escape;
///
/// assert_eq!(escape("Hello"), "Hello");
/// assert_eq!(escape(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// assert_eq!(escape("it's"), "it's");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
	let Some(first) = text.find(['<', '>', '&', '"']) else {
		return Cow::Borrowed(text);
	};

	let mut result = String::with_capacity(text.len() + 16);
	result.push_str(&text[..first]);
	for ch in text[first..].chars() {
		match entity(ch) {
			Some(replacement) => result.push_str(replacement),
			None => result.push(ch),
		}
	}
	Cow::Owned(result)
}

/// Escapes `text` straight into `out` in a single left-to-right pass.
pub fn escape_into<W: fmt::Write + ?Sized>(text: &str, out: &mut W) -> fmt::Result {
	let mut start = 0;
	for (index, ch) in text.char_indices() {
		if let Some(replacement) = entity(ch) {
			out.write_str(&text[start..index])?;
			out.write_str(replacement)?;
			start = index + ch.len_utf8();
		}
	}
	out.write_str(&text[start..])
}

/// Rewrites every `</script>` (any case) in inline script code so it
/// cannot terminate the surrounding `<script>` element.
///
/// # Examples
///
/// ```
/// use tagwright_core::neutralize_script;
///
/// assert_eq!(
///     neutralize_script(r#"document.write("</SCRIPT>")"#),
///     r#"document.write("</scr"+"ipt>")"#
/// );
/// ```
pub fn neutralize_script(code: &str) -> Cow<'_, str> {
	SCRIPT_CLOSE.replace_all(code, NoExpand(SCRIPT_CLOSE_REPLACEMENT))
}
