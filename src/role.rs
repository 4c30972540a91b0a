//! Semantic color roles and the palette that maps them to colors.
//!
//! The role set mirrors the perceptual theme generator's scheme output and
//! is identical between light and dark variants; switching variants means
//! asking the generator for the other scheme, never mutating an existing
//! palette. A [`Palette`] is validated when it is built and treated as
//! immutable for the duration of a render pass.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::Error;

// ============================================================================
// ColorRole
// ============================================================================

/// The closed set of semantic color roles a palette assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    Outline,
    Shadow,
    InverseSurface,
    InverseOnSurface,
    InversePrimary,
}

impl ColorRole {
    /// All roles, in scheme declaration order.
    pub const ALL: [ColorRole; 27] = [
        Self::Primary,
        Self::OnPrimary,
        Self::PrimaryContainer,
        Self::OnPrimaryContainer,
        Self::Secondary,
        Self::OnSecondary,
        Self::SecondaryContainer,
        Self::OnSecondaryContainer,
        Self::Tertiary,
        Self::OnTertiary,
        Self::TertiaryContainer,
        Self::OnTertiaryContainer,
        Self::Error,
        Self::OnError,
        Self::ErrorContainer,
        Self::OnErrorContainer,
        Self::Background,
        Self::OnBackground,
        Self::Surface,
        Self::OnSurface,
        Self::SurfaceVariant,
        Self::OnSurfaceVariant,
        Self::Outline,
        Self::Shadow,
        Self::InverseSurface,
        Self::InverseOnSurface,
        Self::InversePrimary,
    ];

    /// The camelCase placeholder key for this role (`onPrimary`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::OnPrimary => "onPrimary",
            Self::PrimaryContainer => "primaryContainer",
            Self::OnPrimaryContainer => "onPrimaryContainer",
            Self::Secondary => "secondary",
            Self::OnSecondary => "onSecondary",
            Self::SecondaryContainer => "secondaryContainer",
            Self::OnSecondaryContainer => "onSecondaryContainer",
            Self::Tertiary => "tertiary",
            Self::OnTertiary => "onTertiary",
            Self::TertiaryContainer => "tertiaryContainer",
            Self::OnTertiaryContainer => "onTertiaryContainer",
            Self::Error => "error",
            Self::OnError => "onError",
            Self::ErrorContainer => "errorContainer",
            Self::OnErrorContainer => "onErrorContainer",
            Self::Background => "background",
            Self::OnBackground => "onBackground",
            Self::Surface => "surface",
            Self::OnSurface => "onSurface",
            Self::SurfaceVariant => "surfaceVariant",
            Self::OnSurfaceVariant => "onSurfaceVariant",
            Self::Outline => "outline",
            Self::Shadow => "shadow",
            Self::InverseSurface => "inverseSurface",
            Self::InverseOnSurface => "inverseOnSurface",
            Self::InversePrimary => "inversePrimary",
        }
    }
}

impl std::str::FromStr for ColorRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::UnknownRole(s.to_owned()))
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Palette
// ============================================================================

/// An ordered mapping from [`ColorRole`] to a resolved color.
///
/// Iteration order is insertion order, which keeps render passes
/// deterministic and reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    entries: Vec<(ColorRole, HexColor)>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a palette from hex strings, validating each at the boundary.
    ///
    /// Fails fast on the first malformed value; the theme generator is
    /// responsible for well-formed output.
    pub fn from_hex_entries<'a, I>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (ColorRole, &'a str)>,
    {
        let mut palette = Self::new();
        for (role, hex) in entries {
            palette.insert(role, HexColor::parse(hex)?);
        }
        Ok(palette)
    }

    /// Builds a palette from the generator's packed `0xAARRGGBB` integers.
    pub fn from_argb_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ColorRole, u32)>,
    {
        let mut palette = Self::new();
        for (role, argb) in entries {
            palette.insert(role, HexColor::from_argb(argb));
        }
        palette
    }

    /// Inserts or replaces a role's color, preserving its position when
    /// the role is already present.
    pub fn insert(&mut self, role: ColorRole, color: HexColor) {
        match self.entries.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((role, color)),
        }
    }

    /// Looks up a role's color.
    pub fn get(&self, role: ColorRole) -> Option<&HexColor> {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, color)| color)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &HexColor)> {
        self.entries.iter().map(|(role, color)| (*role, color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a (ColorRole, HexColor);
    type IntoIter = std::slice::Iter<'a, (ColorRole, HexColor)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
