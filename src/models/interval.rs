//! Intervals between two points, optionally open on one side.

use super::calendar::Point;
use super::modifier::RangeModifier;
use serde::Serialize;
use std::fmt;

/// A range between two points of the same type.
///
/// Open-ended ranges ("before X", "since Y") keep the recognized bound and put
/// the point type's sentinel on the other side, so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval<T> {
    start: T,
    end: T,
    modifier: RangeModifier,
}

impl<T: Point> Interval<T> {
    /// Creates a closed interval.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvertedRangeBounds`] if `start` sorts after `end`.
    pub fn new(start: T, end: T) -> crate::Result<Self> {
        if start > end {
            return Err(crate::Error::InvertedRangeBounds {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
            });
        }
        Ok(Self {
            start,
            end,
            modifier: RangeModifier::None,
        })
    }

    /// Creates an interval whose bounds are already resolved against `modifier`.
    ///
    /// No ordering check is applied: with an open modifier one side is a sentinel.
    #[must_use]
    pub const fn with_modifier(modifier: RangeModifier, start: T, end: T) -> Self {
        Self {
            start,
            end,
            modifier,
        }
    }

    /// Creates an interval that ends at `end` and is open towards the past.
    #[must_use]
    pub fn open_start(modifier: RangeModifier, end: T) -> Self {
        Self::with_modifier(modifier, T::min_value(), end)
    }

    /// Creates an interval that starts at `start` and is open towards the future.
    #[must_use]
    pub fn open_end(modifier: RangeModifier, start: T) -> Self {
        Self::with_modifier(modifier, start, T::max_value())
    }

    /// Start bound (the type's minimum when the start is open).
    #[must_use]
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// End bound (the type's maximum when the end is open).
    #[must_use]
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Modifier the interval was recognized with.
    #[must_use]
    pub const fn modifier(&self) -> RangeModifier {
        self.modifier
    }

    /// Returns true if `point` lies within the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, point: &T) -> bool {
        self.start <= *point && *point <= self.end
    }

    /// Returns true if the start is a sentinel rather than a recognized value.
    #[must_use]
    pub fn is_open_start(&self) -> bool {
        self.modifier.is_open_start() && self.start == T::min_value()
    }

    /// Returns true if the end is a sentinel rather than a recognized value.
    #[must_use]
    pub fn is_open_end(&self) -> bool {
        self.modifier.is_open_end() && self.end == T::max_value()
    }
}

impl<T> Interval<T> {
    /// Writes `[start, end]`, plus the modifier when set, rendering each bound with `point`.
    pub fn fmt_with(
        &self,
        f: &mut fmt::Formatter<'_>,
        point: impl Fn(&T) -> String,
    ) -> fmt::Result {
        write!(f, "[{}, {}]", point(&self.start), point(&self.end))?;
        if self.modifier != RangeModifier::None {
            write!(f, " ({})", self.modifier)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, |p| format!("{p:?}"))
    }
}
