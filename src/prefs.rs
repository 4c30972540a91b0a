//! User preferences and optional-feature gating.
//!
//! Preferences are simple `KEY=true` lines persisted by the surrounding
//! application. The engine only consults them to decide whether optional
//! app templates render; a missing key means disabled.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Error;

/// Optional app templates and the preference key that enables each.
///
/// Matching is a case-insensitive substring check against the descriptor
/// name, so `spotify-dark` and `Spotify` both gate on `THEME_SPOTIFY`.
pub const OPTIONAL_FEATURES: &[(&str, &str)] = &[
    ("SPOTIFY", "THEME_SPOTIFY"),
    ("DISCORD", "THEME_DISCORD"),
    ("VSCODE", "THEME_VSCODE"),
    ("OBSIDIAN", "THEME_OBSIDIAN"),
    ("VIVALDI", "THEME_VIVALDI"),
];

/// A loaded key → enabled map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    flags: HashMap<String, bool>,
}

impl Preferences {
    /// An empty store: every optional feature disabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(flags: HashMap<String, bool>) -> Self {
        Self { flags }
    }

    /// Parses `KEY=value` lines. Blank lines and `#` comments are ignored;
    /// any value other than `true` (case-insensitive) counts as disabled.
    pub fn from_conf_str(text: &str) -> Self {
        let mut flags = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                flags.insert(
                    key.trim().to_owned(),
                    value.trim().eq_ignore_ascii_case("true"),
                );
            }
        }
        Self { flags }
    }

    /// Loads the preference store from disk.
    ///
    /// A missing file is the normal first-run state and yields an empty
    /// store; a file that exists but cannot be read is a systemic failure.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let text = std::fs::read_to_string(path).map_err(|source| Error::PrefsRead {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self::from_conf_str(&text))
    }

    /// Whether a flag is set to true. Missing keys are disabled.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, enabled: bool) {
        self.flags.insert(key.into(), enabled);
    }
}

/// Returns the preference key blocking this template name, if any.
///
/// `None` means the template is not feature-gated or its feature is
/// enabled; `Some(key)` means the descriptor must be skipped.
pub fn blocking_feature(template_name: &str, prefs: &Preferences) -> Option<&'static str> {
    let upper = template_name.to_uppercase();
    for (marker, pref_key) in OPTIONAL_FEATURES {
        if upper.contains(marker) && !prefs.is_enabled(pref_key) {
            return Some(pref_key);
        }
    }
    None
}

// ============================================================================
// Tests
// ============================================================================
