//! Hierarchical form field names.
//!
//! A name prefix is active for the duration of a scope and is restored when
//! the scope ends, including when its body fails. Inside a scope, local
//! field names resolve against the prefix:
//!
//! | mode           | prefix      | local | name            |
//! |----------------|-------------|-------|-----------------|
//! | none           |             | `qty` | `qty`           |
//! | [`PrefixMode::Path`]   | `order.`    | `qty` | `order.qty`     |
//! | [`PrefixMode::Path`]   | `order[7].` | `qty` | `order[7].qty`  |
//! | [`PrefixMode::MapKey`] | `limits`    | `eu`  | `limits[eu]`    |

use crate::context::RenderContext;
use std::borrow::Cow;
use std::fmt;
use std::ops::{Deref, DerefMut};
use tagwright_core::RenderResult;

/// How a local name joins the active prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrefixMode {
	/// Plain concatenation: `prefix` + `local`.
	#[default]
	Path,
	/// Map key access: `prefix[local]`.
	MapKey,
}

/// The name-prefix stack of a render session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePath {
	prefix: Option<String>,
	mode: PrefixMode,
	saved: Vec<(Option<String>, PrefixMode)>,
}

impl NamePath {
	/// Creates an empty path with no prefix.
	pub fn new() -> Self {
		Self::default()
	}

	/// The active prefix, if any.
	pub fn prefix(&self) -> Option<&str> {
		self.prefix.as_deref()
	}

	/// The active join mode.
	pub fn mode(&self) -> PrefixMode {
		self.mode
	}

	/// Number of scopes currently entered.
	pub fn depth(&self) -> usize {
		self.saved.len()
	}

	/// Appends `segment` to the active prefix.
	pub fn enter(&mut self, segment: &str, mode: PrefixMode) {
		self.push(segment, mode, false);
	}

	/// Replaces the active prefix with `segment`.
	pub fn enter_reset(&mut self, segment: &str, mode: PrefixMode) {
		self.push(segment, mode, true);
	}

	fn push(&mut self, segment: &str, mode: PrefixMode, reset: bool) {
		self.saved.push((self.prefix.clone(), self.mode));
		let base = if reset { None } else { self.prefix.take() };
		self.prefix = Some(match base {
			Some(mut prefix) => {
				prefix.push_str(segment);
				prefix
			}
			None => segment.to_string(),
		});
		self.mode = mode;
	}

	/// Restores the state before the most recent `enter`. Returns `false`
	/// when no scope is open.
	pub fn exit(&mut self) -> bool {
		match self.saved.pop() {
			Some((prefix, mode)) => {
				self.prefix = prefix;
				self.mode = mode;
				true
			}
			None => false,
		}
	}

	/// Resolves a local field name against the active prefix.
	pub fn resolve<'a>(&self, local: &'a str) -> Cow<'a, str> {
		match (self.mode, self.prefix.as_deref()) {
			(PrefixMode::MapKey, Some(prefix)) => Cow::Owned(format!("{prefix}[{local}]")),
			(PrefixMode::MapKey, None) => Cow::Owned(format!("[{local}]")),
			(PrefixMode::Path, Some(prefix)) => Cow::Owned(format!("{prefix}{local}")),
			(PrefixMode::Path, None) => Cow::Borrowed(local),
		}
	}
}

/// Prefix segment for a nested object: `field.`
pub fn object_segment(field: &str) -> String {
	format!("{field}.")
}

/// Prefix segment for one entry of an indexed or keyed collection: `field[key].`
pub fn entry_segment(field: &str, key: impl fmt::Display) -> String {
	format!("{field}[{key}].")
}

/// An open name scope. Dereferences to the render context and restores the
/// previous prefix when dropped.
pub struct NameScope<'r, W: fmt::Write> {
	ctx: &'r mut RenderContext<W>,
}

impl<W: fmt::Write> Deref for NameScope<'_, W> {
	type Target = RenderContext<W>;

	fn deref(&self) -> &Self::Target {
		self.ctx
	}
}

impl<W: fmt::Write> DerefMut for NameScope<'_, W> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.ctx
	}
}

impl<W: fmt::Write> Drop for NameScope<'_, W> {
	fn drop(&mut self) {
		self.ctx.names.exit();
	}
}

impl<W: fmt::Write> RenderContext<W> {
	/// Opens a scope that appends `segment` to the active prefix.
	pub fn name_scope(&mut self, segment: &str, mode: PrefixMode) -> NameScope<'_, W> {
		self.names.enter(segment, mode);
		NameScope { ctx: self }
	}

	/// Opens a scope whose prefix is exactly `segment`.
	pub fn name_scope_reset(&mut self, segment: &str, mode: PrefixMode) -> NameScope<'_, W> {
		self.names.enter_reset(segment, mode);
		NameScope { ctx: self }
	}

	/// Runs `body` with `segment` appended to the name prefix.
	pub fn with_name_prefix<R, F>(&mut self, segment: &str, body: F) -> RenderResult<R>
	where
		F: FnOnce(&mut Self) -> RenderResult<R>,
	{
		let mut scope = self.name_scope(segment, PrefixMode::Path);
		body(&mut *scope)
	}

	/// Runs `body` with names resolving as `segment[local]`.
	pub fn with_map_keys<R, F>(&mut self, segment: &str, body: F) -> RenderResult<R>
	where
		F: FnOnce(&mut Self) -> RenderResult<R>,
	{
		let mut scope = self.name_scope(segment, PrefixMode::MapKey);
		body(&mut *scope)
	}

	/// Runs `body` for the fields of a nested object named `field`.
	pub fn with_object<R, F>(&mut self, field: &str, body: F) -> RenderResult<R>
	where
		F: FnOnce(&mut Self) -> RenderResult<R>,
	{
		self.with_name_prefix(&object_segment(field), body)
	}

	/// Runs `body` for the fields of entry `key` of collection `field`.
	pub fn with_entry<R, F>(&mut self, field: &str, key: impl fmt::Display, body: F) -> RenderResult<R>
	where
		F: FnOnce(&mut Self) -> RenderResult<R>,
	{
		self.with_name_prefix(&entry_segment(field, key), body)
	}

	/// Resolves a local field name against the active prefix.
	pub fn resolve_name<'a>(&self, local: &'a str) -> Cow<'a, str> {
		self.names.resolve(local)
	}

	/// Writes `name="…"` with the resolved field name.
	pub fn name(&mut self, local: &str) -> RenderResult<()> {
		let name = self.names.resolve(local);
		self.attr("name", &name)
	}
}
