//! MaxWidth component rendering the `<fusion-max-width>` custom element

use crate::component::Component;

/// MaxWidth component
///
/// Holds a single maximum-width value and renders it as a
/// `<fusion-max-width>` element. The width is unconstrained: any `i32` is
/// accepted and formatted as-is, negatives included. Interpreting the value
/// is left to the client-side element.
///
/// # Example
///
/// ```
/// use fusion_components::MaxWidth;
///
/// let wrapper = MaxWidth::with_width(960);
/// assert_eq!(
/// 	wrapper.html(),
/// 	r#"<fusion-max-width width="960"></fusion-max-width>"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxWidth {
	width: i32,
}

impl MaxWidth {
	/// Create a wrapper with width 0
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a wrapper with the given width
	pub fn with_width(width: i32) -> Self {
		Self { width }
	}

	/// Get the current width
	pub fn width(&self) -> i32 {
		self.width
	}

	/// Replace the stored width
	pub fn set_width(&mut self, width: i32) {
		self.width = width;
	}

	/// Render the wrapper to its markup string
	pub fn html(&self) -> String {
		format!(r#"<fusion-max-width width="{}"></fusion-max-width>"#, self.width)
	}
}

impl Component for MaxWidth {
	fn name(&self) -> &'static str {
		"fusion-max-width"
	}

	fn render(&self) -> String {
		self.html()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_defaults_to_zero_width() {
		let wrapper = MaxWidth::new();
		assert_eq!(wrapper.width(), 0);
		assert_eq!(
			wrapper.html(),
			r#"<fusion-max-width width="0"></fusion-max-width>"#
		);
	}

	#[test]
	fn test_with_width() {
		assert_eq!(
			MaxWidth::with_width(320).html(),
			r#"<fusion-max-width width="320"></fusion-max-width>"#
		);
	}

	#[test]
	fn test_set_width_round_trip() {
		let mut wrapper = MaxWidth::with_width(10);
		wrapper.set_width(1024);
		assert_eq!(wrapper.width(), 1024);
	}

	#[test]
	fn test_negative_width_passes_through() {
		let mut wrapper = MaxWidth::with_width(10);
		wrapper.set_width(-5);
		assert_eq!(
			wrapper.html(),
			r#"<fusion-max-width width="-5"></fusion-max-width>"#
		);
	}

	#[test]
	fn test_html_is_idempotent() {
		let wrapper = MaxWidth::with_width(640);
		assert_eq!(wrapper.html(), wrapper.html());
	}
}
