//! Fusion Components - server-side builders for Fusion/Zinc custom elements
//!
//! Small value-object components that build the HTML custom-element markup
//! consumed by the Fusion templating pipeline. Each component holds its
//! configuration, exposes accessors and a setter for its mutable field, and
//! renders to a `String` that the pipeline embeds verbatim.
//!
//! The rendered markup is trusted: attribute values are interpolated without
//! escaping, so callers are responsible for the content they pass in.
//!
//! ## Components
//!
//! - [`Icon`]: `<zn-icon>` icon reference with a source, an icon [`Library`]
//!   and a pixel [`IconSize`]
//! - [`MaxWidth`]: `<fusion-max-width>` wrapper with a single width
//!
//! ## Example
//!
//! ```
//! use fusion_components::{Icon, IconSize, Library, MaxWidth};
//!
//! let mut icon = Icon::with_library("alarm", Library::MaterialRound);
//! icon.set_size(IconSize::Px48);
//! assert_eq!(
//! 	icon.html(),
//! 	r#"<zn-icon src="alarm" library="material.round" size="48"></zn-icon>"#
//! );
//!
//! let wrapper = MaxWidth::with_width(1024);
//! assert_eq!(
//! 	wrapper.html(),
//! 	r#"<fusion-max-width width="1024"></fusion-max-width>"#
//! );
//! ```

pub mod component;
pub mod error;
pub mod icon;
pub mod max_width;

pub use component::Component;
pub use error::{ComponentError, Result};
pub use icon::{Icon, IconSize, Library};
pub use max_width::MaxWidth;
