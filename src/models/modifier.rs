//! Modifiers attached to ranges and durations through the `Mod` field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the optional modifier field in a resolution dictionary.
pub const MOD_FIELD: &str = "Mod";

/// How to read the bounds of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeModifier {
    /// The range goes from `start` to `end`.
    #[default]
    None,
    /// The range goes from some point in the past up to `end`.
    Before,
    /// The range goes from some point in the past up to `end`.
    Until,
    /// The range goes from `start` to some point in the future.
    After,
    /// The range goes from `start` to some point in the future.
    Since,
}

impl RangeModifier {
    /// Returns all modifier variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::None,
            Self::Before,
            Self::Until,
            Self::After,
            Self::Since,
        ]
    }

    /// Returns the modifier name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Before => "before",
            Self::Until => "until",
            Self::After => "after",
            Self::Since => "since",
        }
    }

    /// Returns true when only the end bound was recognized.
    #[must_use]
    pub const fn is_open_start(&self) -> bool {
        matches!(self, Self::Before | Self::Until)
    }

    /// Returns true when only the start bound was recognized.
    #[must_use]
    pub const fn is_open_end(&self) -> bool {
        matches!(self, Self::After | Self::Since)
    }

    /// Parses a modifier case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidModifier`] for anything but the five members.
    pub fn parse(s: &str) -> crate::Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::Error::InvalidModifier {
                value: s.to_string(),
                expected: "RangeModifier",
            })
    }
}

impl fmt::Display for RangeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How to read the length of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationModifier {
    /// Exactly as long as specified.
    #[default]
    None,
    /// As long as specified or longer.
    More,
    /// As long as specified or shorter.
    Less,
}

impl DurationModifier {
    /// Returns all modifier variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::None, Self::More, Self::Less]
    }

    /// Returns the modifier name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::More => "more",
            Self::Less => "less",
        }
    }

    /// Parses a modifier case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidModifier`] for anything but the three members.
    pub fn parse(s: &str) -> crate::Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::Error::InvalidModifier {
                value: s.to_string(),
                expected: "DurationModifier",
            })
    }
}

impl fmt::Display for DurationModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
