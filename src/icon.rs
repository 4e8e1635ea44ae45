//! Icon component rendering the `<zn-icon>` custom element

use std::fmt;
use std::str::FromStr;

use crate::component::Component;
use crate::error::ComponentError;

/// Icon library (style/family) rendering variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Library {
	/// Material Symbols, filled style
	Material,
	/// Material Symbols, outlined style (default)
	MaterialOutlined,
	/// Material Symbols, rounded style
	MaterialRound,
	/// Material Symbols, sharp style
	MaterialSharp,
	/// Material Symbols, two-tone style
	MaterialTwoTone,
	/// Gravatar avatar service
	Gravatar,
}

impl Library {
	/// Every library variant, in declaration order
	pub const ALL: [Library; 6] = [
		Self::Material,
		Self::MaterialOutlined,
		Self::MaterialRound,
		Self::MaterialSharp,
		Self::MaterialTwoTone,
		Self::Gravatar,
	];

	/// Convert library to its `library` attribute label
	///
	/// Labels are part of the markup contract; the dotted and hyphenated
	/// forms are consumed verbatim by the client-side element.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Material => "material",
			Self::MaterialOutlined => "material.outlined",
			Self::MaterialRound => "material.round",
			Self::MaterialSharp => "material.sharp",
			Self::MaterialTwoTone => "material.two-tone",
			Self::Gravatar => "gravatar",
		}
	}
}

impl fmt::Display for Library {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Library {
	type Err = ComponentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"material" => Ok(Self::Material),
			"material.outlined" => Ok(Self::MaterialOutlined),
			"material.round" => Ok(Self::MaterialRound),
			"material.sharp" => Ok(Self::MaterialSharp),
			"material.two-tone" => Ok(Self::MaterialTwoTone),
			"gravatar" => Ok(Self::Gravatar),
			other => Err(ComponentError::UnknownLibrary(other.to_string())),
		}
	}
}

/// Icon pixel size
///
/// The client-side element ships assets for this fixed set of sizes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
	/// 16px
	Px16,
	/// 24px (default)
	#[default]
	Px24,
	/// 32px
	Px32,
	/// 40px
	Px40,
	/// 48px
	Px48,
	/// 56px
	Px56,
	/// 64px
	Px64,
	/// 80px
	Px80,
	/// 96px
	Px96,
	/// 120px
	Px120,
	/// 144px
	Px144,
	/// 160px
	Px160,
	/// 200px
	Px200,
	/// 240px
	Px240,
	/// 280px
	Px280,
	/// 320px
	Px320,
}

impl IconSize {
	/// Every size variant, smallest to largest
	pub const ALL: [IconSize; 16] = [
		Self::Px16,
		Self::Px24,
		Self::Px32,
		Self::Px40,
		Self::Px48,
		Self::Px56,
		Self::Px64,
		Self::Px80,
		Self::Px96,
		Self::Px120,
		Self::Px144,
		Self::Px160,
		Self::Px200,
		Self::Px240,
		Self::Px280,
		Self::Px320,
	];

	/// Get the size in pixels
	pub fn as_px(&self) -> i32 {
		match self {
			Self::Px16 => 16,
			Self::Px24 => 24,
			Self::Px32 => 32,
			Self::Px40 => 40,
			Self::Px48 => 48,
			Self::Px56 => 56,
			Self::Px64 => 64,
			Self::Px80 => 80,
			Self::Px96 => 96,
			Self::Px120 => 120,
			Self::Px144 => 144,
			Self::Px160 => 160,
			Self::Px200 => 200,
			Self::Px240 => 240,
			Self::Px280 => 280,
			Self::Px320 => 320,
		}
	}
}

impl fmt::Display for IconSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_px())
	}
}

impl TryFrom<i32> for IconSize {
	type Error = ComponentError;

	fn try_from(px: i32) -> Result<Self, Self::Error> {
		Self::ALL
			.into_iter()
			.find(|size| size.as_px() == px)
			.ok_or(ComponentError::UnsupportedSize(px))
	}
}

/// Icon component
///
/// Holds a configured icon reference and renders it as a `<zn-icon>` element.
/// The source and library are fixed for the life of the instance; only the
/// size may change after construction.
///
/// The source string is interpolated into the markup as-is, with no escaping:
/// the output is trusted markup for direct embedding.
///
/// # Example
///
/// ```
/// use fusion_components::{Icon, IconSize};
///
/// let mut icon = Icon::new("settings");
/// icon.set_size(IconSize::Px32);
/// assert_eq!(
/// 	icon.html(),
/// 	r#"<zn-icon src="settings" library="material.outlined" size="32"></zn-icon>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
	src: String,
	library: Library,
	size: IconSize,
}

impl Icon {
	/// Create an icon with the default library (`material.outlined`)
	pub fn new(src: impl Into<String>) -> Self {
		Self::with_library(src, Library::MaterialOutlined)
	}

	/// Create an icon with an explicitly chosen library
	pub fn with_library(src: impl Into<String>, library: Library) -> Self {
		Self {
			src: src.into(),
			library,
			size: IconSize::default(),
		}
	}

	/// Get the icon source
	pub fn src(&self) -> &str {
		&self.src
	}

	/// Get the icon library
	pub fn library(&self) -> Library {
		self.library
	}

	/// Get the current size
	pub fn size(&self) -> IconSize {
		self.size
	}

	/// Replace the stored size
	pub fn set_size(&mut self, size: IconSize) {
		self.size = size;
	}

	/// Render the icon to its markup string
	pub fn html(&self) -> String {
		format!(
			r#"<zn-icon src="{}" library="{}" size="{}"></zn-icon>"#,
			self.src, self.library, self.size
		)
	}
}

impl Component for Icon {
	fn name(&self) -> &'static str {
		"zn-icon"
	}

	fn render(&self) -> String {
		self.html()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Library::Material, "material")]
	#[case(Library::MaterialOutlined, "material.outlined")]
	#[case(Library::MaterialRound, "material.round")]
	#[case(Library::MaterialSharp, "material.sharp")]
	#[case(Library::MaterialTwoTone, "material.two-tone")]
	#[case(Library::Gravatar, "gravatar")]
	fn test_library_labels(#[case] library: Library, #[case] label: &str) {
		assert_eq!(library.as_str(), label);
		assert_eq!(label.parse::<Library>(), Ok(library));

		let icon = Icon::with_library("user", library);
		assert_eq!(
			icon.html(),
			format!(r#"<zn-icon src="user" library="{label}" size="24"></zn-icon>"#)
		);
	}

	#[test]
	fn test_library_parse_rejects_unknown_label() {
		assert_eq!(
			"material.rounded".parse::<Library>(),
			Err(ComponentError::UnknownLibrary("material.rounded".to_string()))
		);
	}

	#[test]
	fn test_default_library_is_material_outlined() {
		let icon = Icon::new("home");
		assert_eq!(icon.library(), Library::MaterialOutlined);
		assert_eq!(
			icon.html(),
			Icon::with_library("home", Library::MaterialOutlined).html()
		);
	}

	#[test]
	fn test_size_defaults_to_24() {
		assert_eq!(Icon::new("home").size(), IconSize::Px24);
		assert!(Icon::new("home").html().contains(r#"size="24""#));
	}

	#[rstest]
	#[case(IconSize::Px16, 16)]
	#[case(IconSize::Px56, 56)]
	#[case(IconSize::Px120, 120)]
	#[case(IconSize::Px320, 320)]
	fn test_set_size_changes_only_the_size_attribute(#[case] size: IconSize, #[case] px: i32) {
		let mut icon = Icon::with_library("avatar", Library::Gravatar);
		icon.set_size(size);

		assert_eq!(icon.size(), size);
		assert_eq!(
			icon.html(),
			format!(r#"<zn-icon src="avatar" library="gravatar" size="{px}"></zn-icon>"#)
		);
	}

	#[test]
	fn test_icon_size_from_pixels() {
		for size in IconSize::ALL {
			assert_eq!(IconSize::try_from(size.as_px()), Ok(size));
		}
		assert_eq!(
			IconSize::try_from(25),
			Err(ComponentError::UnsupportedSize(25))
		);
	}

	#[test]
	fn test_source_is_not_escaped() {
		let icon = Icon::new(r#"a"b<c>"#);
		assert_eq!(
			icon.html(),
			r#"<zn-icon src="a"b<c>" library="material.outlined" size="24"></zn-icon>"#
		);
	}

	#[test]
	fn test_html_is_idempotent() {
		let icon = Icon::with_library("mail", Library::MaterialSharp);
		assert_eq!(icon.html(), icon.html());
	}
}
