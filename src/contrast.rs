//! WCAG contrast evaluation between a theme color and a wallpaper average.

use crate::color::Rgb;

/// Mid-range ratio returned when the foreground color cannot be parsed.
///
/// Contrast is an advisory input to the transparency heuristic, so a bad
/// value degrades to "decent contrast" instead of failing the pass.
pub const FALLBACK_CONTRAST: f64 = 10.0;

/// WCAG relative luminance of a color, `[0, 1]`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(rgb.r) + 0.7152 * channel(rgb.g) + 0.0722 * channel(rgb.b)
}

/// WCAG contrast ratio between a hex color and an RGB background.
///
/// Ranges from 1.0 (identical) to 21.0 (black on white). A malformed hex
/// string yields [`FALLBACK_CONTRAST`].
pub fn contrast_ratio(foreground_hex: &str, background: Rgb) -> f64 {
    let Ok(foreground) = Rgb::from_hex(foreground_hex) else {
        return FALLBACK_CONTRAST;
    };

    let lum1 = relative_luminance(foreground);
    let lum2 = relative_luminance(background);
    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);
    (lighter + 0.05) / (darker + 0.05)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_colors_have_unit_contrast() {
        let ratio = contrast_ratio("#6750a4", Rgb::new(0x67, 0x50, 0xa4));
        assert!((ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn black_on_white_is_max_contrast() {
        let ratio = contrast_ratio("#000000", Rgb::new(255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn malformed_hex_yields_fallback() {
        assert_eq!(contrast_ratio("oops", Rgb::new(0, 0, 0)), FALLBACK_CONTRAST);
    }

    #[test]
    fn luminance_endpoints() {
        assert!(relative_luminance(Rgb::new(0, 0, 0)).abs() < 1e-9);
        assert!((relative_luminance(Rgb::new(255, 255, 255)) - 1.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn ratio_is_bounded(fr: u8, fg: u8, fb: u8, br: u8, bg: u8, bb: u8) {
            let fore = Rgb::new(fr, fg, fb).to_hex();
            let ratio = contrast_ratio(&fore, Rgb::new(br, bg, bb));
            prop_assert!(ratio >= 1.0);
            prop_assert!(ratio <= 21.01);
        }

        #[test]
        fn ratio_is_symmetric_in_luminance(r: u8, g: u8, b: u8) {
            // A color against itself is always 1.
            let rgb = Rgb::new(r, g, b);
            let ratio = contrast_ratio(&rgb.to_hex(), rgb);
            prop_assert!((ratio - 1.0).abs() < 1e-9);
        }
    }
}
