//! Adaptive terminal transparency.
//!
//! Combines wallpaper statistics and a WCAG contrast ratio into a bounded
//! transparency percentage, with separate curves for light and dark mode:
//!
//! - higher contrast between the terminal surface and the wallpaper allows
//!   more transparency;
//! - busy (high-variance) wallpapers get less transparency because detail
//!   behind text is distracting;
//! - colorful (high-saturation) wallpapers get slightly less;
//! - mode-specific brightness corrections keep a light terminal readable
//!   over a dark wallpaper and vice versa.
//!
//! All constants are empirically tuned and preserved verbatim; do not
//! re-derive them.

use std::path::Path;

use crate::contrast::contrast_ratio;
use crate::descriptor::ThemeMode;
use crate::diag::DiagnosticSink;
use crate::stats::{self, ImageStats};

/// Surface color assumed for dark mode when the palette is unavailable.
const DARK_SURFACE_FALLBACK: &str = "#1a1c1a";

/// Surface color assumed for light mode when the palette is unavailable.
const LIGHT_SURFACE_FALLBACK: &str = "#fdfdf5";

/// Computes the transparency percentage for a wallpaper and mode.
///
/// `surface_color` is the palette's actual surface hex when available;
/// otherwise a mode-specific estimate is used. The result is an integer
/// percentage clamped to `[0, 40]` in light mode and `[15, 70]` in dark
/// mode. Deterministic: same inputs, same output, no retained state.
pub fn compute_transparency(
    wallpaper_path: &Path,
    mode: ThemeMode,
    surface_color: Option<&str>,
    sink: &dyn DiagnosticSink,
) -> u8 {
    let stats = stats::analyze(wallpaper_path, sink);
    let wallpaper_avg = stats::average_color(wallpaper_path, sink);

    let surface = surface_color.unwrap_or(match mode {
        ThemeMode::Dark => DARK_SURFACE_FALLBACK,
        ThemeMode::Light => LIGHT_SURFACE_FALLBACK,
    });
    let contrast = contrast_ratio(surface, wallpaper_avg);

    let transparency = from_factors(&stats, contrast, mode);
    sink.info(&format!(
        "transparency: brightness={:.0} variance={:.2} saturation={:.2} contrast={:.1} -> {}%",
        stats.brightness, stats.variance, stats.saturation, contrast, transparency
    ));
    transparency
}

/// The pure heuristic over pre-computed factors.
pub fn from_factors(stats: &ImageStats, contrast: f64, mode: ThemeMode) -> u8 {
    let normalized_brightness = stats.brightness / 255.0;
    let contrast_factor = (contrast / 21.0).min(1.0);

    let mut base = match mode {
        ThemeMode::Light => {
            // Light mode generally needs less transparency.
            let mut base = 5.0 + contrast_factor * (35.0 - 5.0) * 0.6;
            // Dark wallpaper under a light terminal: more transparency.
            if normalized_brightness < 0.4 {
                base += 10.0;
            }
            base
        }
        ThemeMode::Dark => {
            let mut base = 20.0 + contrast_factor * (65.0 - 20.0) * 0.7;
            // Bright wallpaper under a dark terminal: pull back for
            // readability.
            if normalized_brightness > 0.6 {
                base -= 15.0;
            }
            base
        }
    };

    // Busyness penalty: up to -20 for very busy images.
    base -= stats.variance * 20.0;
    // Colorfulness penalty: up to -8 for very colorful images.
    base -= stats.saturation * 8.0;

    let clamped = match mode {
        ThemeMode::Light => (base as i32).clamp(0, 40),
        ThemeMode::Dark => (base as i32).clamp(15, 70),
    };
    clamped as u8
}

// ============================================================================
// Tests
// ============================================================================
