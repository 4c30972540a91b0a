//! Wallpaper image statistics.
//!
//! The transparency heuristic needs three aggregate measures of a
//! wallpaper: how bright it is, how busy it is, and how colorful it is.
//! All three come from a single 64×64 Lanczos3 downsample so large images
//! stay cheap to analyze while resampling keeps aliasing from skewing the
//! averages.

use std::path::Path;

use image::imageops::FilterType;

use crate::color::Rgb;
use crate::diag::DiagnosticSink;

/// Empirical ceiling used to normalize brightness variance to `[0, 1]`.
///
/// Tuned against real wallpapers; the theoretical maximum (~16256) is never
/// approached in practice. Kept verbatim for behavioral compatibility.
const VARIANCE_CEILING: f64 = 5000.0;

/// Aggregate statistics of a wallpaper image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageStats {
    /// Average perceived brightness, `[0, 255]`.
    pub brightness: f64,
    /// Normalized brightness variance, `[0, 1]`. High values mean a busy,
    /// high-detail image.
    pub variance: f64,
    /// Average saturation, `[0, 1]`.
    pub saturation: f64,
}

impl ImageStats {
    /// The neutral default reported when an image cannot be decoded.
    pub fn neutral() -> Self {
        Self {
            brightness: 128.0,
            variance: 0.5,
            saturation: 0.5,
        }
    }
}

/// Analyzes a wallpaper, returning brightness, busyness, and saturation.
///
/// Decode failure is a graceful-degradation path, not an error: the caller
/// gets [`ImageStats::neutral`] and a warning goes to the sink, so a broken
/// wallpaper never aborts a render pass.
pub fn analyze(image_path: &Path, sink: &dyn DiagnosticSink) -> ImageStats {
    let img = match image::open(image_path) {
        Ok(img) => img,
        Err(err) => {
            sink.warn(&format!(
                "could not analyze image {}: {err}",
                image_path.display()
            ));
            return ImageStats::neutral();
        }
    };

    let small = img.resize_exact(64, 64, FilterType::Lanczos3).to_rgb8();

    let mut brightnesses = Vec::with_capacity((small.width() * small.height()) as usize);
    let mut saturation_sum = 0.0_f64;

    for pixel in small.pixels() {
        let [r, g, b] = pixel.0;
        // Luminosity-weighted perceived brightness.
        let brightness =
            0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
        brightnesses.push(brightness);

        // Saturation as (max - min) / max, 0 for black.
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        if max_c > 0 {
            saturation_sum += f64::from(max_c - min_c) / f64::from(max_c);
        }
    }

    let count = brightnesses.len() as f64;
    let brightness = brightnesses.iter().sum::<f64>() / count;
    let variance = brightnesses
        .iter()
        .map(|b| (b - brightness).powi(2))
        .sum::<f64>()
        / count;

    ImageStats {
        brightness,
        variance: (variance / VARIANCE_CEILING).min(1.0),
        saturation: saturation_sum / count,
    }
}

/// Average color of a wallpaper from a 32×32 downsample.
///
/// Used as the background side of the contrast comparison. Decode failure
/// falls back to mid gray.
pub fn average_color(image_path: &Path, sink: &dyn DiagnosticSink) -> Rgb {
    let img = match image::open(image_path) {
        Ok(img) => img,
        Err(err) => {
            sink.warn(&format!(
                "could not average image {}: {err}",
                image_path.display()
            ));
            return Rgb::new(128, 128, 128);
        }
    };

    let small = img.resize_exact(32, 32, FilterType::Lanczos3).to_rgb8();
    let count = u64::from(small.width()) * u64::from(small.height());
    let (mut r_sum, mut g_sum, mut b_sum) = (0u64, 0u64, 0u64);

    for pixel in small.pixels() {
        r_sum += u64::from(pixel.0[0]);
        g_sum += u64::from(pixel.0[1]);
        b_sum += u64::from(pixel.0[2]);
    }

    Rgb::new(
        (r_sum / count) as u8,
        (g_sum / count) as u8,
        (b_sum / count) as u8,
    )
}

// ============================================================================
// Tests
// ============================================================================
