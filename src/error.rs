//! Error types for fusion-components

use thiserror::Error;

/// Error type for component operations
///
/// Rendering itself is infallible; errors arise only when converting external
/// input (a library label, a raw pixel count) into the closed enums.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComponentError {
	/// Unrecognized icon library label
	#[error("Unknown icon library: {0}")]
	UnknownLibrary(String),

	/// Pixel count outside the supported icon size set
	#[error("Unsupported icon size: {0}px")]
	UnsupportedSize(i32),
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
