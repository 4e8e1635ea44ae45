//! Core component trait

/// Component trait - base interface for all renderable components
///
/// Every component renders to the markup string of one HTML custom element.
/// Rendering is pure: it reads the component's current state and has no side
/// effects, so calling it repeatedly yields identical output.
pub trait Component: Send + Sync {
	/// Returns the component's tag name (for debugging)
	fn name(&self) -> &'static str;

	/// Renders the component to its HTML markup string
	fn render(&self) -> String;
}
