//! Validated generation settings shared by the composers.
//!
//! Every public item documents its purpose with a minimal usage example so
//! downstream crates stay declarative and avoid scattering literals.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_RELIEF_DEPTH, DEFAULT_SEGMENTS, MAX_SEGMENTS, MIN_SEGMENTS, TEXT_MAX_WRAP_FRACTION,
};

/// Selects whether lettering is added to the tube walls and in which
/// direction it is displaced.
///
/// # Examples
/// ```
/// use config::settings::TextMode;
/// let mode: TextMode = "engrave".parse().unwrap();
/// assert_eq!(mode, TextMode::Engrave);
/// assert!(mode.is_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextMode {
    /// No lettering at all.
    None,
    /// Lettering stands proud of the wall, into free space.
    #[default]
    Emboss,
    /// Lettering is sunk into the wall material.
    Engrave,
}

impl TextMode {
    /// Returns true unless the mode is [`TextMode::None`].
    pub fn is_enabled(self) -> bool {
        !matches!(self, TextMode::None)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            TextMode::None => "none",
            TextMode::Emboss => "emboss",
            TextMode::Engrave => "engrave",
        }
    }
}

impl FromStr for TextMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(TextMode::None),
            "emboss" => Ok(TextMode::Emboss),
            "engrave" => Ok(TextMode::Engrave),
            _ => Err(ConfigError::UnknownTextMode(value.to_string())),
        }
    }
}

impl fmt::Display for TextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of the tunable generation settings.
///
/// # Examples
/// ```
/// use config::settings::GenerationSettings;
/// let settings = GenerationSettings::default();
/// assert!(settings.relief_depth > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationSettings {
    /// Points per ring of the adapter body.
    pub segments: u32,
    /// Radial depth of embossed or engraved lettering.
    pub relief_depth: f64,
    /// Largest fraction of a circumference a line of text may cover.
    pub max_wrap_fraction: f64,
    /// Lettering selection.
    pub text_mode: TextMode,
}

impl GenerationSettings {
    /// Builds settings enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::settings::{GenerationSettings, TextMode};
    /// let settings = GenerationSettings::new(128, 0.8, 0.95, TextMode::Engrave).expect("valid settings");
    /// assert_eq!(settings.segments, 128);
    /// assert!(GenerationSettings::new(2, 0.8, 0.95, TextMode::None).is_err());
    /// ```
    pub fn new(
        segments: u32,
        relief_depth: f64,
        max_wrap_fraction: f64,
        text_mode: TextMode,
    ) -> Result<Self, ConfigError> {
        let settings = Self {
            segments,
            relief_depth,
            max_wrap_fraction,
            text_mode,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Re-checks the invariants, for values that arrived through
    /// deserialization rather than [`GenerationSettings::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.segments) {
            return Err(ConfigError::InvalidSegments(self.segments));
        }
        if !(self.relief_depth.is_finite() && self.relief_depth > 0.0) {
            return Err(ConfigError::InvalidReliefDepth(self.relief_depth));
        }
        if !(self.max_wrap_fraction > 0.0 && self.max_wrap_fraction <= 1.0) {
            return Err(ConfigError::InvalidWrapFraction(self.max_wrap_fraction));
        }
        Ok(())
    }

    /// Returns a copy with a different segment count, validated.
    pub fn with_segments(self, segments: u32) -> Result<Self, ConfigError> {
        Self::new(segments, self.relief_depth, self.max_wrap_fraction, self.text_mode)
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            relief_depth: DEFAULT_RELIEF_DEPTH,
            max_wrap_fraction: TEXT_MAX_WRAP_FRACTION,
            text_mode: TextMode::default(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the segment count is outside `MIN_SEGMENTS..=MAX_SEGMENTS`.
    InvalidSegments(u32),
    /// Raised when the relief depth is zero, negative or not finite.
    InvalidReliefDepth(f64),
    /// Raised when the wrap fraction is outside `(0, 1]`.
    InvalidWrapFraction(f64),
    /// Raised when a text mode name is not recognised.
    UnknownTextMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => {
                write!(
                    f,
                    "segments must be within {MIN_SEGMENTS}..={MAX_SEGMENTS}: {value}"
                )
            }
            ConfigError::InvalidReliefDepth(value) => {
                write!(f, "relief depth must be positive: {value}")
            }
            ConfigError::InvalidWrapFraction(value) => {
                write!(f, "wrap fraction must be within (0, 1]: {value}")
            }
            ConfigError::UnknownTextMode(value) => {
                write!(f, "unknown text mode '{value}' (expected none, emboss or engrave)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
