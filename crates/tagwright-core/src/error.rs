//! Errors raised while rendering.

use thiserror::Error;

/// Result alias used across the render API.
pub type RenderResult<T> = Result<T, RenderError>;

/// Failure of a render operation.
///
/// All of these abort the current render. Output already written to the
/// sink is left as-is and must be discarded by the caller.
#[derive(Debug, Error)]
pub enum RenderError {
	/// An ambient render API was called with no session bound to the current thread.
	#[error("no render session is bound to the current thread")]
	ContextMissing,

	/// The ambient session is already borrowed by an enclosing ambient call.
	#[error("the bound render session is already in use by an enclosing call")]
	SessionInUse,

	/// An attribute or class was written while no start tag was pending.
	#[error("attribute `{name}` is not inside tag brackets")]
	StrayAttribute {
		/// Attribute name, or `class` for class tokens.
		name: String,
	},

	/// The output sink rejected a write.
	#[error("output sink failed: {0}")]
	Sink(#[from] std::fmt::Error),
}

impl RenderError {
	/// Builds a [`RenderError::StrayAttribute`].
	pub fn stray(name: impl Into<String>) -> Self {
		Self::StrayAttribute { name: name.into() }
	}

	/// Returns `true` for errors caused by misuse of the builder API.
	pub fn is_usage_error(&self) -> bool {
		matches!(
			self,
			Self::ContextMissing | Self::SessionInUse | Self::StrayAttribute { .. }
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_stray_attribute_message() {
		let err = RenderError::stray("href");
		assert_eq!(err.to_string(), "attribute `href` is not inside tag brackets");
		assert!(err.is_usage_error());
	}

	#[rstest]
	fn test_sink_error_from_fmt() {
		let err: RenderError = std::fmt::Error.into();
		assert!(matches!(err, RenderError::Sink(_)));
		assert!(!err.is_usage_error());
	}
}
