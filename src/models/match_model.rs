//! Recognized spans paired with their typed resolution.

use super::calendar::Calendar;
use super::resolution::Resolution;
use super::shape::Shape;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One recognized span of text and its resolution.
///
/// Equality compares the matched text case-insensitively, together with the
/// span offsets, the shape and the resolution.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct MatchModel<C: Calendar> {
    text: String,
    start: usize,
    end: usize,
    shape: Shape,
    resolution: Resolution<C>,
}

impl<C: Calendar> MatchModel<C> {
    /// Creates a match model. `end` is the inclusive offset of the last character.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        shape: Shape,
        resolution: Resolution<C>,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            shape,
            resolution,
        }
    }

    /// The matched text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Offset of the first matched character.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Inclusive offset of the last matched character.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Shape reported for the span.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// The typed alternatives for the span.
    #[must_use]
    pub const fn resolution(&self) -> &Resolution<C> {
        &self.resolution
    }

    /// Consumes the model, returning its resolution.
    #[must_use]
    pub fn into_resolution(self) -> Resolution<C> {
        self.resolution
    }

    /// Like `==`, but compares resolutions with [`Resolution::zip_eq`].
    #[must_use]
    pub fn zip_eq(&self, other: &Self) -> bool {
        self.same_span(other) && self.resolution.zip_eq(&other.resolution)
    }

    fn same_span(&self, other: &Self) -> bool {
        self.text.eq_ignore_ascii_case(&other.text)
            && self.start == other.start
            && self.end == other.end
            && self.shape == other.shape
    }
}

impl<C: Calendar> PartialEq for MatchModel<C> {
    fn eq(&self, other: &Self) -> bool {
        self.same_span(other) && self.resolution == other.resolution
    }
}

impl<C: Calendar> Eq for MatchModel<C> {}

impl<C: Calendar> Hash for MatchModel<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.to_ascii_lowercase().hash(state);
        self.start.hash(state);
        self.end.hash(state);
        self.shape.hash(state);
        self.resolution.hash(state);
    }
}

impl<C: Calendar> fmt::Display for MatchModel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "==================";
        writeln!(f, "{RULE}")?;
        writeln!(f, "Text: {}", self.text)?;
        writeln!(f, "Start: {}", self.start)?;
        writeln!(f, "End: {}", self.end)?;
        writeln!(f, "Shape: {}", self.shape)?;
        writeln!(f, "Resolution")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{}", self.resolution)?;
        write!(f, "{RULE}")
    }
}
