//! Template descriptors and the declarative list they are loaded from.
//!
//! A descriptor names a template, where its source text lives, and where
//! the rendered output goes. Descriptors are declared externally as a JSON
//! list; the engine only consumes them. Which light/dark variant a
//! descriptor applies to is inferred from its name: a name ending in
//! `dark` (case-insensitive) binds it to dark-mode renders, anything else
//! to light mode.
//!
//! # JSON Format
//!
//! ```json
//! [
//!   {
//!     "name": "gtk-dark",
//!     "templatePath": "./templates/gtk.css",
//!     "outputPath": "/home/user/.config/gtk-3.0/gtk-dark.css"
//!   }
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// ThemeMode
// ============================================================================

/// Light or dark rendering variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

// ============================================================================
// TemplateDescriptor
// ============================================================================

/// A named template with source and output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    /// Display name, also used for mode affinity and feature gating.
    pub name: String,

    /// Template source; relative paths are resolved against the base
    /// directory supplied to the render pass.
    pub template_path: PathBuf,

    /// Destination for the rendered text.
    pub output_path: PathBuf,
}

impl TemplateDescriptor {
    pub fn new(
        name: impl Into<String>,
        template_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            template_path: template_path.into(),
            output_path: output_path.into(),
        }
    }

    /// The mode this descriptor is bound to, per the name-suffix convention.
    pub fn mode_affinity(&self) -> ThemeMode {
        if self.name.to_uppercase().ends_with("DARK") {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Resolves the template path against `base_dir` when it is relative.
    pub fn resolved_template_path(&self, base_dir: &Path) -> PathBuf {
        if self.template_path.is_absolute() {
            self.template_path.clone()
        } else {
            base_dir.join(&self.template_path)
        }
    }
}

// ============================================================================
// DescriptorList
// ============================================================================

/// The ordered, externally-declared set of templates for a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DescriptorList {
    pub descriptors: Vec<TemplateDescriptor>,
}

impl DescriptorList {
    /// Parses a descriptor list from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the list back to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Loads a descriptor list from a JSON file.
    ///
    /// An unreadable or unparsable list is a systemic failure: without it
    /// no template can be filtered, so the whole pass is refused.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::DescriptorRead {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| Error::DescriptorParse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a DescriptorList {
    type Item = &'a TemplateDescriptor;
    type IntoIter = std::slice::Iter<'a, TemplateDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_suffix_binds_to_dark_mode() {
        let dark = TemplateDescriptor::new("spotify-dark", "t.css", "o.css");
        assert_eq!(dark.mode_affinity(), ThemeMode::Dark);

        let shouty = TemplateDescriptor::new("GTK-DARK", "t.css", "o.css");
        assert_eq!(shouty.mode_affinity(), ThemeMode::Dark);

        let light = TemplateDescriptor::new("spotify", "t.css", "o.css");
        assert_eq!(light.mode_affinity(), ThemeMode::Light);

        // "dark" in the middle of a name does not count.
        let middle = TemplateDescriptor::new("darkroom-light", "t.css", "o.css");
        assert_eq!(middle.mode_affinity(), ThemeMode::Light);
    }

    #[test]
    fn relative_paths_resolve_against_base_dir() {
        let descriptor = TemplateDescriptor::new("gtk", "templates/gtk.css", "/out/gtk.css");
        assert_eq!(
            descriptor.resolved_template_path(Path::new("/base")),
            Path::new("/base/templates/gtk.css")
        );

        let absolute = TemplateDescriptor::new("gtk", "/abs/gtk.css", "/out/gtk.css");
        assert_eq!(
            absolute.resolved_template_path(Path::new("/base")),
            Path::new("/abs/gtk.css")
        );
    }

    #[test]
    fn json_round_trip() {
        let json = r#"[
            {"name": "gtk-dark", "templatePath": "./gtk.css", "outputPath": "/tmp/gtk.css"},
            {"name": "kitty", "templatePath": "kitty.conf", "outputPath": "/tmp/kitty.conf"}
        ]"#;

        let list = DescriptorList::from_json(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.descriptors[0].name, "gtk-dark");

        let restored = DescriptorList::from_json(&list.to_json().unwrap()).unwrap();
        assert_eq!(restored, list);
    }

    #[test]
    fn load_missing_list_is_systemic_error() {
        let err = DescriptorList::load(Path::new("/nonexistent/list.json")).unwrap_err();
        assert!(matches!(err, Error::DescriptorRead { .. }));
    }

    #[test]
    fn theme_mode_serde() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<ThemeMode>("\"light\"").unwrap(),
            ThemeMode::Light
        );
    }
}
