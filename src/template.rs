//! Template rendering engine.
//!
//! Given a resolved palette, a wallpaper path, and an ordered descriptor
//! list, the engine substitutes color placeholders into each template and
//! writes the result to the descriptor's output path. Placeholders come in
//! seven role-qualified forms plus one global wallpaper form:
//!
//! | Placeholder         | Substitution                     |
//! |---------------------|----------------------------------|
//! | `@{role}`           | `rrggbb` (hex digits, no `#`)    |
//! | `@{role.hex}`       | `#rrggbb`                        |
//! | `@{role.rgb}`       | `rgb(R,G,B)`                     |
//! | `@{role.rgba50}`    | `rgba(R,G,B,0.5)`                |
//! | `@{role.hue}`       | hue in degrees                   |
//! | `@{role.sat}`       | saturation, 0–1                  |
//! | `@{role.light}`     | lightness, 0–1                   |
//! | `@{wallpaper}`      | absolute wallpaper path          |
//!
//! One bad descriptor never aborts the pass: read failures skip that
//! descriptor, write failures mark it failed, and the returned
//! [`RenderReport`] says what happened to each.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::descriptor::{DescriptorList, ThemeMode};
use crate::diag::DiagnosticSink;
use crate::prefs::{self, Preferences};
use crate::role::{ColorRole, Palette};

// ============================================================================
// RenderReport
// ============================================================================

/// Why a descriptor was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The descriptor's mode affinity disagrees with the requested mode.
    ModeMismatch,
    /// The descriptor is feature-gated and the feature is not enabled.
    FeatureDisabled,
    /// The template source could not be read.
    MissingSource,
}

/// Outcome for a single descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "status")]
pub enum RenderStatus {
    Rendered,
    Skipped { reason: SkipReason },
    Failed { reason: String },
}

/// One descriptor's entry in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEntry {
    pub name: String,
    #[serde(flatten)]
    pub status: RenderStatus,
}

/// Per-descriptor outcomes of a render pass.
///
/// Partial success is the normal case: some descriptors render, some are
/// skipped for their mode or a disabled feature, and the occasional one
/// fails. Serializable so the embedding application can surface it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RenderReport {
    pub entries: Vec<RenderEntry>,
}

impl RenderReport {
    fn push(&mut self, name: &str, status: RenderStatus) {
        self.entries.push(RenderEntry {
            name: name.to_owned(),
            status,
        });
    }

    /// The entry for a descriptor name, if it was part of the pass.
    pub fn status_of(&self, name: &str) -> Option<&RenderStatus> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.status)
    }

    /// How many descriptors rendered successfully.
    pub fn rendered_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.status == RenderStatus::Rendered)
            .count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// Placeholder substitution
// ============================================================================

/// Formats an HLS component as a short decimal literal.
///
/// Rounded to four decimal places with trailing zeros dropped, so whole
/// degrees come out as `258` and fractions as `0.5833`.
fn format_component(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}")
}

/// Substitutes every placeholder form for one role.
///
/// The suffixed forms are replaced before the bare form. The pattern list
/// is ordered longest-suffix-first on purpose: a bare pattern must never
/// get a chance to match inside a longer one, and keeping the order
/// explicit here makes that contract testable.
fn substitute_role(text: String, role: ColorRole, color: &HexColor) -> String {
    let key = role.as_str();
    let rgb = color.rgb();
    let hls = rgb.to_hls();

    let replacements = [
        (format!("@{{{key}.hex}}"), color.as_str().to_owned()),
        (
            format!("@{{{key}.rgb}}"),
            format!("rgb({},{},{})", rgb.r, rgb.g, rgb.b),
        ),
        (
            format!("@{{{key}.rgba50}}"),
            format!("rgba({},{},{},0.5)", rgb.r, rgb.g, rgb.b),
        ),
        (format!("@{{{key}.hue}}"), format_component(hls.hue)),
        (format!("@{{{key}.sat}}"), format_component(hls.saturation)),
        (format!("@{{{key}.light}}"), format_component(hls.lightness)),
        // Bare form last.
        (format!("@{{{key}}}"), color.stripped().to_owned()),
    ];

    let mut out = text;
    for (pattern, value) in &replacements {
        if out.contains(pattern.as_str()) {
            out = out.replace(pattern.as_str(), value);
        }
    }
    out
}

/// Renders template text against a palette and wallpaper path.
pub fn substitute(text: &str, palette: &Palette, wallpaper_path: &Path) -> String {
    let mut out = text.to_owned();
    for (role, color) in palette.iter() {
        out = substitute_role(out, role, color);
    }

    let wallpaper = std::path::absolute(wallpaper_path)
        .unwrap_or_else(|_| wallpaper_path.to_owned());
    out.replace("@{wallpaper}", &wallpaper.to_string_lossy())
}

// ============================================================================
// Render pass
// ============================================================================

/// Renders every descriptor in declaration order.
///
/// For each descriptor the engine applies the optional-feature gate, the
/// mode filter, reads the template (relative paths resolved against
/// `base_dir`), substitutes placeholders, and writes the output file,
/// creating parent directories as needed. Failures are confined to the
/// descriptor they occur in; systemic problems (unreadable descriptor
/// list or preference store) are the caller's to surface before invoking
/// this.
pub fn render_templates(
    palette: &Palette,
    wallpaper_path: &Path,
    mode: ThemeMode,
    descriptors: &DescriptorList,
    preferences: &Preferences,
    base_dir: &Path,
    sink: &dyn DiagnosticSink,
) -> RenderReport {
    let mut report = RenderReport::default();

    for descriptor in descriptors {
        if let Some(pref_key) = prefs::blocking_feature(&descriptor.name, preferences) {
            sink.info(&format!(
                "skipping {} ({pref_key} not enabled)",
                descriptor.name
            ));
            report.push(
                &descriptor.name,
                RenderStatus::Skipped {
                    reason: SkipReason::FeatureDisabled,
                },
            );
            continue;
        }

        if descriptor.mode_affinity() != mode {
            report.push(
                &descriptor.name,
                RenderStatus::Skipped {
                    reason: SkipReason::ModeMismatch,
                },
            );
            continue;
        }

        let template_path = descriptor.resolved_template_path(base_dir);
        let text = match fs::read_to_string(&template_path) {
            Ok(text) => text,
            Err(err) => {
                sink.warn(&format!(
                    "could not open {}, skipping: {err}",
                    template_path.display()
                ));
                report.push(
                    &descriptor.name,
                    RenderStatus::Skipped {
                        reason: SkipReason::MissingSource,
                    },
                );
                continue;
            }
        };

        let rendered = substitute(&text, palette, wallpaper_path);

        let write_result = (|| {
            match descriptor.output_path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)?,
                _ => {}
            }
            fs::write(&descriptor.output_path, rendered)
        })();

        match write_result {
            Ok(()) => {
                sink.info(&format!(
                    "exported {} to {}",
                    descriptor.name,
                    descriptor.output_path.display()
                ));
                report.push(&descriptor.name, RenderStatus::Rendered);
            }
            Err(err) => {
                sink.warn(&format!(
                    "could not write {} to {}: {err}",
                    descriptor.name,
                    descriptor.output_path.display()
                ));
                report.push(
                    &descriptor.name,
                    RenderStatus::Failed {
                        reason: err.to_string(),
                    },
                );
            }
        }
    }

    report
}

// ============================================================================
// Tests
// ============================================================================
