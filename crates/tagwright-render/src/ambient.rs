//! Thread-bound render sessions.
//!
//! For template code that cannot thread a `&mut RenderContext` through its
//! call chain, [`scope`] binds a context to the current thread and [`with`]
//! reaches it from anywhere below. Each thread has its own binding, so
//! concurrent renders on different threads never observe each other.
//!
//! ```
//! use tagwright_render::{RenderOptions, ambient};
//!
//! fn footer() -> tagwright_render::RenderResult<()> {
//!     ambient::with(|r| r.p(None, |r| r.text("bye")))
//! }
//!
//! let html = ambient::scope_with(&RenderOptions::new().compact(), footer).unwrap();
//! assert_eq!(html, "<P>bye</P>");
//! ```

use crate::context::RenderContext;
use crate::options::RenderOptions;
use std::cell::RefCell;
use tagwright_core::{RenderError, RenderResult};

thread_local! {
	static CURRENT: RefCell<Option<RenderContext<String>>> = const { RefCell::new(None) };
}

/// Restores the previously bound context when dropped.
struct Binding {
	previous: Option<Option<RenderContext<String>>>,
}

impl Binding {
	fn bind(context: RenderContext<String>) -> RenderResult<Self> {
		let previous = CURRENT
			.with(|slot| {
				slot.try_borrow_mut()
					.map(|mut current| current.replace(context))
			})
			.map_err(|_| RenderError::SessionInUse)?;
		tracing::trace!(nested = previous.is_some(), "render session bound");
		Ok(Self {
			previous: Some(previous),
		})
	}

	/// Reinstates the previous context and returns the one this binding
	/// installed. Does nothing on a second call.
	fn restore(&mut self) -> Option<RenderContext<String>> {
		let previous = self.previous.take()?;
		CURRENT.with(|slot| match slot.try_borrow_mut() {
			Ok(mut current) => std::mem::replace(&mut *current, previous),
			Err(_) => None,
		})
	}
}

impl Drop for Binding {
	fn drop(&mut self) {
		if self.restore().is_some() {
			tracing::trace!("render session unbound");
		}
	}
}

/// Binds `context` to the current thread while `body` runs and returns the
/// rendered output.
///
/// The previous binding, if any, is restored afterwards, also when `body`
/// fails or panics.
pub fn scope<F>(context: RenderContext<String>, body: F) -> RenderResult<String>
where
	F: FnOnce() -> RenderResult<()>,
{
	let mut binding = Binding::bind(context)?;
	body()?;
	binding
		.restore()
		.ok_or(RenderError::ContextMissing)?
		.finish()
}

/// [`scope`] with a fresh context built from `options`.
pub fn scope_with<F>(options: &RenderOptions, body: F) -> RenderResult<String>
where
	F: FnOnce() -> RenderResult<()>,
{
	scope(RenderContext::new(String::new(), options.clone()), body)
}

/// Runs `f` against the context bound to the current thread.
///
/// Fails with [`RenderError::ContextMissing`] outside [`scope`] and with
/// [`RenderError::SessionInUse`] when called from inside another `with`.
pub fn with<R, F>(f: F) -> RenderResult<R>
where
	F: FnOnce(&mut RenderContext<String>) -> RenderResult<R>,
{
	CURRENT.with(|slot| {
		let mut current = slot.try_borrow_mut().map_err(|_| RenderError::SessionInUse)?;
		let ctx = current.as_mut().ok_or(RenderError::ContextMissing)?;
		f(ctx)
	})
}

/// Returns `true` when a context is bound to the current thread.
pub fn is_bound() -> bool {
	CURRENT.with(|slot| slot.try_borrow().map(|current| current.is_some()).unwrap_or(true))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn compact() -> RenderOptions {
		RenderOptions::new().compact()
	}

	#[rstest]
	fn test_with_outside_scope_fails() {
		assert!(!is_bound());
		let err = with(|r| r.text("x")).unwrap_err();
		assert!(matches!(err, RenderError::ContextMissing));
	}

	#[rstest]
	fn test_scope_collects_output() {
		let html = scope_with(&compact(), || {
			with(|r| r.open_tag("B"))?;
			with(|r| r.text("bold"))?;
			with(|r| r.close_tag("B", false))
		})
		.unwrap();
		assert_eq!(html, "<B>bold</B>");
		assert!(!is_bound());
	}

	#[rstest]
	fn test_nested_scope_restores_outer() {
		let outer = scope_with(&compact(), || {
			with(|r| r.text("a"))?;
			let inner = scope_with(&compact(), || with(|r| r.text("b")))?;
			assert_eq!(inner, "b");
			with(|r| r.text("c"))
		})
		.unwrap();
		assert_eq!(outer, "ac");
	}

	#[rstest]
	fn test_binding_released_after_error() {
		let err = scope_with(&compact(), || with(|r| r.attr("id", "x"))).unwrap_err();
		assert!(matches!(err, RenderError::StrayAttribute { .. }));
		assert!(!is_bound());
	}

	#[rstest]
	fn test_reentrant_with_fails() {
		let result = scope_with(&compact(), || {
			with(|_| {
				let err = with(|r| r.text("x")).unwrap_err();
				assert!(matches!(err, RenderError::SessionInUse));
				Ok(())
			})
		});
		assert_eq!(result.unwrap(), "");
	}

	#[rstest]
	fn test_threads_render_independently() {
		let outputs: Vec<String> = std::thread::scope(|s| {
			let handles: Vec<_> = (0..4)
				.map(|n| {
					s.spawn(move || {
						scope_with(&RenderOptions::new().compact(), || {
							for _ in 0..50 {
								with(|r| r.span(None, |r| r.text_display(&n)))?;
								std::thread::yield_now();
							}
							Ok(())
						})
					})
				})
				.collect();
			handles
				.into_iter()
				.map(|h| h.join().unwrap().unwrap())
				.collect()
		});
		for (n, html) in outputs.iter().enumerate() {
			assert_eq!(*html, format!("<SPAN>{n}</SPAN>").repeat(50));
		}
	}
}
