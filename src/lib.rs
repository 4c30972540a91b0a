//! hueweave: wallpaper-driven theme rendering library
//!
//! This crate turns a resolved perceptual color palette and a wallpaper
//! image into per-application configuration text, and derives adaptive
//! visual parameters (terminal transparency) from image statistics.
//! Palette extraction itself and desktop-environment plumbing live in the
//! embedding application; the crate receives a palette and an image path
//! and returns rendered files and numbers.
//!
//! # Example
//!
//! ```
//! use hueweave::{ColorRole, Palette, substitute};
//! use std::path::Path;
//!
//! let palette = Palette::from_hex_entries([
//!     (ColorRole::Primary, "#6750a4"),
//!     (ColorRole::Surface, "#1a1c1e"),
//! ]).unwrap();
//!
//! let css = substitute(
//!     "color: @{primary.hex}; bg: rgba(@{surface.rgb},0.9);",
//!     &palette,
//!     Path::new("/walls/forest.png"),
//! );
//! assert_eq!(css, "color: #6750a4; bg: rgba(rgb(26,28,30),0.9);");
//! ```
//!
//! # Render passes
//!
//! A full pass loads a [`DescriptorList`] and [`Preferences`], then calls
//! [`render_templates`], which reports per-descriptor outcomes instead of
//! failing wholesale:
//!
//! ```no_run
//! use hueweave::{
//!     render_templates, ColorRole, DescriptorList, LogSink, Palette,
//!     Preferences, ThemeMode,
//! };
//! use std::path::Path;
//!
//! # fn main() -> Result<(), hueweave::Error> {
//! let palette = Palette::from_hex_entries([(ColorRole::Primary, "#6750a4")])?;
//! let descriptors = DescriptorList::load(Path::new("templates.json"))?;
//! let prefs = Preferences::load(Path::new("prefs.conf"))?;
//!
//! let report = render_templates(
//!     &palette,
//!     Path::new("/walls/forest.png"),
//!     ThemeMode::Dark,
//!     &descriptors,
//!     &prefs,
//!     Path::new("."),
//!     &LogSink,
//! );
//! println!("{} templates rendered", report.rendered_count());
//! # Ok(())
//! # }
//! ```

mod color;
mod contrast;
mod descriptor;
mod diag;
mod error;
mod prefs;
mod role;
mod stats;
mod template;
mod transparency;

pub use color::{HexColor, Hls, Rgb};
pub use contrast::{contrast_ratio, relative_luminance, FALLBACK_CONTRAST};
pub use descriptor::{DescriptorList, TemplateDescriptor, ThemeMode};
pub use diag::{DiagnosticSink, LogSink, NullSink};
pub use error::Error;
pub use prefs::{blocking_feature, Preferences, OPTIONAL_FEATURES};
pub use role::{ColorRole, Palette};
pub use stats::{analyze, average_color, ImageStats};
pub use template::{
    render_templates, substitute, RenderEntry, RenderReport, RenderStatus, SkipReason,
};
pub use transparency::compute_transparency;
