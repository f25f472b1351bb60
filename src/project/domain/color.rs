//! Project colour palette.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named colours offered when creating a project, as `(name, hex)` pairs.
pub const PROJECT_PALETTE: [(&str, &str); 6] = [
    ("Blue", "#3498db"),
    ("Green", "#2ecc71"),
    ("Purple", "#9b59b6"),
    ("Orange", "#e67e22"),
    ("Red", "#e74c3c"),
    ("Teal", "#1abc9c"),
];

/// Palette colour stored as a lower-case `#rrggbb` hex code.
///
/// # Examples
///
///     use taskzen::project::domain::ProjectColor;
///
///     let color = ProjectColor::new("#3498DB").expect("palette colour");
///     assert_eq!(color.as_str(), "#3498db");
///     assert_eq!(color.name(), "Blue");
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectColor(String);

impl ProjectColor {
    /// Parses a palette colour.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidColor`] when the value is not a
    /// `#rrggbb` hex code, and [`ProjectDomainError::ColorNotInPalette`] when
    /// it is well formed but not one of [`PROJECT_PALETTE`].
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let digits = normalized.strip_prefix('#').unwrap_or_default();
        let is_hex = digits.len() == 6 && digits.chars().all(|ch| ch.is_ascii_hexdigit());
        if !is_hex {
            return Err(ProjectDomainError::InvalidColor(raw));
        }
        if !PROJECT_PALETTE.iter().any(|(_, hex)| *hex == normalized) {
            return Err(ProjectDomainError::ColorNotInPalette(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the hex code as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the palette name of the colour.
    #[must_use]
    pub fn name(&self) -> &'static str {
        PROJECT_PALETTE
            .iter()
            .find(|(_, hex)| *hex == self.0)
            .map_or("Custom", |(name, _)| *name)
    }
}

impl Default for ProjectColor {
    fn default() -> Self {
        Self("#3498db".to_owned())
    }
}

impl TryFrom<String> for ProjectColor {
    type Error = ProjectDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectColor> for String {
    fn from(value: ProjectColor) -> Self {
        value.0
    }
}

impl fmt::Display for ProjectColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
