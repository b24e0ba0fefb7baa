//! Untyped engine output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A string-keyed resolution dictionary as produced by the engine.
///
/// Typical keys are `timex`, `type`, `value`, `start`, `end` and `Mod`.
pub type FieldMap = BTreeMap<String, String>;

/// Literal the engine puts in `value` for a date it could not ground.
pub const NOT_RESOLVED: &str = "not resolved";

/// The alternative resolutions of a raw match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawResolution {
    /// One dictionary per alternative, in emission order.
    #[serde(default)]
    pub values: Vec<FieldMap>,
}

/// One match reported by the recognition engine.
///
/// Field names follow the engine's JSON result shape
/// (`Text`, `Start`, `Length`, `Type`, `Value.values`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawMatch {
    /// Matched text.
    pub text: String,
    /// Offset of the first matched character.
    pub start: usize,
    /// Number of matched characters.
    pub length: usize,
    /// Type label, e.g. `datetimeV2.daterange`.
    #[serde(rename = "Type")]
    pub type_label: String,
    /// The engine's proposed resolutions.
    #[serde(rename = "Value", default)]
    pub resolution: RawResolution,
}

impl RawMatch {
    /// Creates a raw match.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        start: usize,
        length: usize,
        type_label: impl Into<String>,
        values: Vec<FieldMap>,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            length,
            type_label: type_label.into(),
            resolution: RawResolution { values },
        }
    }

    /// The field dictionaries, one per alternative resolution.
    #[must_use]
    pub fn field_maps(&self) -> &[FieldMap] {
        &self.resolution.values
    }

    /// Inclusive offset of the last matched character.
    ///
    /// Zero-length matches report their start offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        if self.length == 0 {
            self.start
        } else {
            self.start.saturating_add(self.length - 1)
        }
    }
}

/// Builds a [`FieldMap`] from key/value pairs.
#[must_use]
pub fn field_map<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> FieldMap {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
